//! Solar Phase HTTP Server Binary
//!
//! Loads configuration, builds the router and serves the dashboard.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin solar-phase-server
//!
//! # Pin every request to a fixed date
//! SOLAR_PHASE_DATE=2025-05-21 cargo run --bin solar-phase-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `REFRESH_SECONDS`: Page refresh interval (default: 60)
//! - `SOLAR_PHASE_DATE`: Pinned `YYYY-MM-DD` date (default: unset)
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use solar_phase::config::DashboardConfig;
use solar_phase::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .with_thread_ids(true)
        .init();

    info!("Starting Solar Phase server");

    let config = DashboardConfig::load()?;
    if let Some(date) = config.pinned_date {
        info!(%date, "All requests pinned to a fixed date");
    }
    info!(refresh_seconds = config.display.refresh_seconds, "Configuration loaded");

    let addr: SocketAddr = config.bind_address().parse()?;
    let state = AppState::new(config);
    let app = create_router(state);

    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
