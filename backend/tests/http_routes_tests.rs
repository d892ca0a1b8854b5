#![cfg(feature = "http-server")]

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::NaiveDate;
use serde_json::Value;
use tower::ServiceExt;

use solar_phase::config::DashboardConfig;
use solar_phase::http::{create_router, AppState};

fn app() -> Router {
    create_router(AppState::default())
}

async fn get(app: Router, uri: &str) -> (StatusCode, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, body.to_vec())
}

async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let (status, body) = get(app, uri).await;
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, json) = get_json(app(), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
}

#[tokio::test]
async fn data_for_override_date() {
    let (status, json) = get_json(app(), "/data?date=2025-06-05").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["date"], "05 June 2025");
    assert_eq!(json["iso_date"], "2025-06-05");
    assert_eq!(json["title"], "Summer · Pre-Low Week");
    assert_eq!(json["segment_kind"], "HardSummer");
    assert_eq!(json["category"], "Hard");
    assert_eq!(json["week_label"], "Pre-Low");
    assert_eq!(json["progress"], 85.7);
    assert_eq!(json["bar"], "summer");
    assert_eq!(json["bg"], "bg-summer-hard");
    assert_eq!(json["days_since_last_solstice"], 166);
    assert_eq!(json["days_to_next_solstice"], 16);
    assert_eq!(json["location"], "Zagreb");
    assert!(json["sunrise"].as_str().unwrap().len() == 5);
}

#[tokio::test]
async fn data_for_transit_date() {
    let (status, json) = get_json(app(), "/data?date=2025-11-20").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["title"], "Winter Transit 2");
    assert!(json["week_label"].is_null());
    assert_eq!(json["bg"], "bg-winter-transit-before");
    assert_eq!(json["segment_start"], "2025-11-15");
    assert_eq!(json["segment_end"], "2025-11-29");
}

#[tokio::test]
async fn data_defaults_to_today_in_zagreb() {
    let state = AppState::default();
    let before = state.today();
    let (status, json) = get_json(create_router(state.clone()), "/data").await;
    let after = state.today();
    assert_eq!(status, StatusCode::OK);

    let served: NaiveDate = serde_json::from_value(json["iso_date"].clone()).unwrap();
    assert!(served == before || served == after);
}

#[tokio::test]
async fn empty_date_parameter_means_today() {
    let (status, _) = get_json(app(), "/data?date=").await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn malformed_date_is_rejected() {
    let (status, json) = get_json(app(), "/data?date=2025-02-30").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_DATE");
    assert!(json["message"].as_str().unwrap().contains("2025-02-30"));
}

#[tokio::test]
async fn out_of_range_date_is_rejected() {
    let (status, json) = get_json(app(), "/data?date=0000-06-21").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_DATE");
}

#[tokio::test]
async fn pinned_date_wins_over_query() {
    let config = DashboardConfig {
        pinned_date: NaiveDate::from_ymd_opt(2025, 5, 21),
        ..DashboardConfig::default()
    };
    let app = create_router(AppState::new(config));
    let (status, json) = get_json(app, "/data?date=2025-12-25").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["iso_date"], "2025-05-21");
    assert_eq!(json["segment_kind"], "Transit2BeforeSummerHard");
}

#[tokio::test]
async fn cycle_listing_tiles_the_year() {
    let (status, json) = get_json(app(), "/v1/cycle/2023").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["winter_year"], 2023);
    assert_eq!(json["total_days"], 366);

    let segments = json["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 10);
    assert_eq!(segments[0]["kind"], "HardWinter");
    assert_eq!(segments[0]["start"], "2023-11-30");
    assert_eq!(segments[4]["variable"], true);
    assert_eq!(segments[4]["length_days"], 15);
    assert_eq!(segments[9]["end"], "2024-11-29");
}

#[tokio::test]
async fn cycle_listing_rejects_unsupported_year() {
    let (status, json) = get_json(app(), "/v1/cycle/9999").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn index_serves_page_with_refresh_interval() {
    let config = DashboardConfig {
        display: solar_phase::config::DisplaySettings { refresh_seconds: 15 },
        ..DashboardConfig::default()
    };
    let (status, body) = get(create_router(AppState::new(config)), "/").await;
    assert_eq!(status, StatusCode::OK);
    let html = String::from_utf8(body).unwrap();
    assert!(html.contains("<title>Solar Phase</title>"));
    assert!(html.contains("const REFRESH_MS = 15000;"));
}

#[tokio::test]
async fn concurrent_requests_share_the_cache() {
    let state = AppState::default();
    let mut handles = Vec::new();
    for day in 1..=20 {
        let app = create_router(state.clone());
        handles.push(tokio::spawn(async move {
            get_json(app, &format!("/data?date=2024-12-{day:02}")).await
        }));
    }
    for handle in handles {
        let (status, json) = handle.await.unwrap();
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json["segment_kind"], "HardWinter");
    }
    assert_eq!(state.cycles.len(), 2);
}
