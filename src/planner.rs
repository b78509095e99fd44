//! Planning pipeline: horizon filter, leg grouping, greedy route.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::PlanError;
use crate::grouper::{self, BestFit, FirstFit};
use crate::horizon::{self, DEFAULT_HORIZON_MS};
use crate::model::{Point, Route, WorkerState};
use crate::route_builder::{self, DEFAULT_TIME_DISTANCE_FACTOR, WeightedWaitDistance};
use crate::traits::{NextLegStrategy, PairingStrategy};

/// How the grouper ranks compatible partners.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PairingMode {
    #[default]
    FirstFit,
    BestFit,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanOptions {
    /// Look-ahead window after "now" (milliseconds).
    pub horizon_ms: i64,
    /// Lowest price (cents, inclusive) for a leg to look for a partner.
    pub price_min: i64,
    /// Highest price (cents, exclusive) for a leg to look for a partner.
    /// Partners themselves must be priced above it.
    pub price_max: i64,
    /// Maximum distance between two grouped legs (meters).
    pub distance_max_group_m: f64,
    /// Maximum idle time between two grouped legs (milliseconds).
    pub time_max_group_ms: i64,
    /// Meters of travel worth one second of waiting.
    pub time_distance_factor: f64,
    pub pairing: PairingMode,
}

impl Default for PlanOptions {
    fn default() -> Self {
        Self {
            horizon_ms: DEFAULT_HORIZON_MS,
            price_min: 100,
            price_max: 2900,
            distance_max_group_m: 10_000.0,
            time_max_group_ms: 10 * 60 * 1000, // 10 minutes
            time_distance_factor: DEFAULT_TIME_DISTANCE_FACTOR,
            pairing: PairingMode::FirstFit,
        }
    }
}

impl PlanOptions {
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        let invalid = |field, reason: &str| {
            Err(PlanError::InvalidOption {
                field,
                reason: reason.to_string(),
            })
        };

        if self.horizon_ms <= 0 {
            return invalid("horizon_ms", "must be positive");
        }
        if self.price_min > self.price_max {
            return invalid("price_min", "must not exceed price_max");
        }
        if !(self.distance_max_group_m >= 0.0) {
            return invalid("distance_max_group_m", "must be a non-negative number");
        }
        if self.time_max_group_ms < 0 {
            return invalid("time_max_group_ms", "must not be negative");
        }
        if !(self.time_distance_factor >= 0.0) {
            return invalid("time_distance_factor", "must be a non-negative number");
        }
        Ok(())
    }
}

/// Plan a route for `worker` with the strategies selected by `options`.
///
/// An empty feed, or one with nothing inside the horizon, yields an empty
/// route.
pub fn plan(
    points: &[Point],
    worker: WorkerState,
    options: &PlanOptions,
) -> Result<Route, PlanError> {
    let next = WeightedWaitDistance::new(options.time_distance_factor);
    match options.pairing {
        PairingMode::FirstFit => plan_with(points, worker, options, &FirstFit, &next),
        PairingMode::BestFit => {
            let pairing = BestFit {
                time_distance_factor: options.time_distance_factor,
            };
            plan_with(points, worker, options, &pairing, &next)
        }
    }
}

/// Plan a route with explicit grouping and sequencing strategies.
pub fn plan_with<P, N>(
    points: &[Point],
    worker: WorkerState,
    options: &PlanOptions,
    pairing: &P,
    next: &N,
) -> Result<Route, PlanError>
where
    P: PairingStrategy + ?Sized,
    N: NextLegStrategy + ?Sized,
{
    options.validate()?;

    if points.is_empty() {
        debug!("empty feed, nothing to plan");
        return Ok(Route::default());
    }

    let legs = horizon::filter(points, worker.now_millis, options.horizon_ms)?;
    if legs.is_empty() {
        debug!("no leg inside the horizon");
        return Ok(Route::default());
    }

    let combined = grouper::group(&legs, options, pairing)?;
    let route = route_builder::build(&combined, worker, next);

    info!(
        legs = legs.len(),
        combined = combined.len(),
        route = route.len(),
        total_price = route.total_price(),
        "route planned"
    );
    Ok(route)
}

/// Plan routes for several independent workers over the same feed.
///
/// Workers are planned in parallel; results are in `workers` order.
pub fn plan_many(
    points: &[Point],
    workers: &[WorkerState],
    options: &PlanOptions,
) -> Vec<Result<Route, PlanError>> {
    workers
        .par_iter()
        .map(|worker| plan(points, *worker, options))
        .collect()
}
