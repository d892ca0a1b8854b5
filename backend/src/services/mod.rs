//! Service layer: the phase cycle and the computations merged around it.
//!
//! Everything here is pure computation on dates; the HTTP layer calls into
//! these functions directly.

pub mod cycle_cache;
pub mod dashboard;
pub mod phase_cycle;
pub mod solar;
pub mod solstice_distance;

pub use cycle_cache::CycleCache;
pub use dashboard::{build_snapshot, BackgroundTheme, BarTheme, DashboardSnapshot};
pub use phase_cycle::{build_cycle, phase_at, phase_with, resolve_segment, CycleSource, FreshCycles};
pub use solar::{solar_snapshot, GeographicLocation, SolarSnapshot, ZAGREB};
pub use solstice_distance::{
    days_since_last_solstice, days_to_next_solstice, solstice_distance, SolsticeDistance,
};
