//! Application state for the HTTP server.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::config::DashboardConfig;
use crate::services::{CycleCache, GeographicLocation, ZAGREB};

/// Shared application state passed to all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Loaded configuration (refresh interval, pinned date).
    pub config: Arc<DashboardConfig>,
    /// Resolved cycles, shared across requests.
    pub cycles: CycleCache,
    pub location: GeographicLocation,
}

impl AppState {
    pub fn new(config: DashboardConfig) -> Self {
        Self {
            config: Arc::new(config),
            cycles: CycleCache::new(),
            location: ZAGREB,
        }
    }

    /// Today's calendar date at the dashboard location.
    pub fn today(&self) -> NaiveDate {
        Utc::now().with_timezone(&self.location.timezone).date_naive()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(DashboardConfig::default())
    }
}
