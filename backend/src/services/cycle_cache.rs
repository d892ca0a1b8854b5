//! In-memory memoization of resolved cycles.
//!
//! Cycles are pure functions of their winter year, so entries are never
//! invalidated and concurrent population is harmless: two requests racing on
//! the same year compute identical segment lists and the later insert wins.

use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

use super::phase_cycle::{build_cycle, CycleSource};
use crate::error::CoreResult;
use crate::models::PhaseSegment;

/// Read-mostly cache of cycles keyed by winter year.
#[derive(Clone, Default)]
pub struct CycleCache {
    cycles: Arc<RwLock<HashMap<i32, Arc<[PhaseSegment]>>>>,
}

impl CycleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of cached winter years.
    pub fn len(&self) -> usize {
        self.cycles.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.cycles.read().is_empty()
    }

    pub fn contains(&self, winter_year: i32) -> bool {
        self.cycles.read().contains_key(&winter_year)
    }
}

impl CycleSource for CycleCache {
    fn cycle(&self, winter_year: i32) -> CoreResult<Arc<[PhaseSegment]>> {
        if let Some(cycle) = self.cycles.read().get(&winter_year) {
            return Ok(Arc::clone(cycle));
        }

        // Built outside the lock; a concurrent build of the same year is identical.
        let cycle: Arc<[PhaseSegment]> = Arc::from(build_cycle(winter_year)?);
        self.cycles.write().insert(winter_year, Arc::clone(&cycle));
        Ok(cycle)
    }
}

impl std::fmt::Debug for CycleCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut years: Vec<i32> = self.cycles.read().keys().copied().collect();
        years.sort_unstable();
        f.debug_struct("CycleCache").field("years", &years).finish()
    }
}
