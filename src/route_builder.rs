//! Greedy route construction.
//!
//! Starting from the worker's position, repeatedly take the combined leg
//! that is cheapest to reach, then continue from where it ends.
//!
//! # Complexity
//!
//! O(n²) where n = number of combined legs.

use tracing::{debug, trace};

use crate::haversine::distance_m;
use crate::model::{CombinedLeg, Route, WorkerState};
use crate::traits::{Cursor, NextLegStrategy};

/// One second of waiting costs as much as 5.55 m of travel
/// (10 km is worth roughly 30 minutes).
pub const DEFAULT_TIME_DISTANCE_FACTOR: f64 = 5.55;

/// Cost = `wait_seconds * time_distance_factor + travel_meters`.
///
/// Wait is counted in whole seconds, truncated.
#[derive(Debug, Clone, Copy)]
pub struct WeightedWaitDistance {
    pub time_distance_factor: f64,
}

impl WeightedWaitDistance {
    pub fn new(time_distance_factor: f64) -> Self {
        Self { time_distance_factor }
    }
}

impl Default for WeightedWaitDistance {
    fn default() -> Self {
        Self::new(DEFAULT_TIME_DISTANCE_FACTOR)
    }
}

impl NextLegStrategy for WeightedWaitDistance {
    fn cost(&self, cursor: &Cursor, leg: &CombinedLeg) -> f64 {
        let wait_secs = ((leg.start_time - cursor.time_millis) / 1000) as f64;
        let travel_m = distance_m(cursor.coord(), leg.start_coord);
        wait_secs * self.time_distance_factor + travel_m
    }
}

/// Sequence `combined` into a route for `worker`.
///
/// Ties go to the leg listed first. Each leg is taken at most once, so the
/// loop runs at most `combined.len()` times.
pub fn build<S>(combined: &[CombinedLeg], worker: WorkerState, strategy: &S) -> Route
where
    S: NextLegStrategy + ?Sized,
{
    let mut cursor = Cursor::from(worker);
    let mut taken = vec![false; combined.len()];
    let mut legs = Vec::new();

    while let Some(idx) = pick_next(combined, &taken, &cursor, strategy) {
        let leg = &combined[idx];
        trace!(legs = ?leg.leg_ids().collect::<Vec<_>>(), start = leg.start_time, "next leg");

        taken[idx] = true;
        cursor.advance_to(leg);
        legs.push(leg.clone());
    }

    debug!(pool = combined.len(), picked = legs.len(), "route built");
    Route::new(legs)
}

/// Index of the cheapest eligible leg, if any.
pub fn pick_next<S>(
    combined: &[CombinedLeg],
    taken: &[bool],
    cursor: &Cursor,
    strategy: &S,
) -> Option<usize>
where
    S: NextLegStrategy + ?Sized,
{
    let mut best: Option<(usize, f64)> = None;

    for (idx, leg) in combined.iter().enumerate() {
        if taken[idx] || !strategy.is_candidate(cursor, leg) {
            continue;
        }

        let cost = strategy.cost(cursor, leg);
        if best.is_none_or(|(_, best_cost)| cost < best_cost) {
            best = Some((idx, cost));
        }
    }

    best.map(|(idx, _)| idx)
}
