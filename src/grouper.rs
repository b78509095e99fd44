//! Leg grouper: merges back-to-back legs into combined legs.
//!
//! A cheap leg (price inside `[price_min, price_max)`) may be chained with a
//! well-paid leg (price above `price_max`) when one starts close to where,
//! and shortly after, the other ends. Only pairs are formed.

use tracing::{debug, error};

use crate::error::PlanError;
use crate::haversine::distance_m;
use crate::model::{CombinedLeg, Leg};
use crate::planner::PlanOptions;
use crate::route_builder::DEFAULT_TIME_DISTANCE_FACTOR;
use crate::traits::{CandidatePairing, PairingDirection, PairingStrategy};

/// Accepts the first compatible candidate in scan order.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstFit;

impl PairingStrategy for FirstFit {
    fn score(&self, _pairing: &CandidatePairing<'_>) -> f64 {
        0.0
    }
}

/// Prefers the candidate with the least idle time and deadhead distance.
#[derive(Debug, Clone, Copy)]
pub struct BestFit {
    /// Meters of travel worth one second of waiting.
    pub time_distance_factor: f64,
}

impl Default for BestFit {
    fn default() -> Self {
        Self {
            time_distance_factor: DEFAULT_TIME_DISTANCE_FACTOR,
        }
    }
}

impl PairingStrategy for BestFit {
    fn score(&self, pairing: &CandidatePairing<'_>) -> f64 {
        let gap_secs = pairing.gap_ms as f64 / 1000.0;
        gap_secs * self.time_distance_factor + pairing.distance_m
    }
}

/// Group `legs` into combined legs.
///
/// Paired legs come first, in anchor order, followed by the remaining legs
/// as singletons in feed order. Every input leg ends up in exactly one
/// combined leg.
pub fn group<S>(
    legs: &[Leg],
    options: &PlanOptions,
    strategy: &S,
) -> Result<Vec<CombinedLeg>, PlanError>
where
    S: PairingStrategy + ?Sized,
{
    let mut grouped = vec![false; legs.len()];
    let mut combined = Vec::with_capacity(legs.len());

    for (anchor_idx, anchor) in legs.iter().enumerate() {
        if grouped[anchor_idx] || !is_anchor_price(anchor.price(), options) {
            continue;
        }

        let Some((partner_idx, direction)) =
            find_partner(legs, anchor_idx, &grouped, options, strategy)
        else {
            continue;
        };

        let partner = &legs[partner_idx];
        let (first, second) = match direction {
            PairingDirection::Forward => (anchor, partner),
            PairingDirection::Backward => (partner, anchor),
        };

        let pair = match CombinedLeg::paired(first.clone(), second.clone()) {
            Ok(pair) => pair,
            Err(err) => {
                error!(%err, ?direction, "grouping aborted");
                debug_assert!(false, "{err}");
                return Err(err);
            }
        };

        grouped[anchor_idx] = true;
        grouped[partner_idx] = true;
        combined.push(pair);
    }

    let pairs = combined.len();
    combined.extend(
        legs.iter()
            .zip(&grouped)
            .filter(|&(_, &is_grouped)| !is_grouped)
            .map(|(leg, _)| CombinedLeg::single(leg.clone())),
    );

    debug!(legs = legs.len(), pairs, combined = combined.len(), "grouping done");
    Ok(combined)
}

/// Check the distance and time-gap conditions between an anchor and a
/// candidate. Forward (candidate after anchor) is tried first.
pub fn pairing_between<'a>(
    anchor: &'a Leg,
    candidate: &'a Leg,
    options: &PlanOptions,
) -> Option<CandidatePairing<'a>> {
    let forward_distance = distance_m(candidate.start_coord(), anchor.end_coord());
    let forward_gap = candidate.start_time() - anchor.end_time();
    if forward_distance < options.distance_max_group_m && is_short_gap(forward_gap, options) {
        return Some(CandidatePairing {
            anchor,
            candidate,
            direction: PairingDirection::Forward,
            distance_m: forward_distance,
            gap_ms: forward_gap,
        });
    }

    let backward_distance = distance_m(candidate.end_coord(), anchor.start_coord());
    let backward_gap = anchor.start_time() - candidate.end_time();
    if backward_distance < options.distance_max_group_m && is_short_gap(backward_gap, options) {
        return Some(CandidatePairing {
            anchor,
            candidate,
            direction: PairingDirection::Backward,
            distance_m: backward_distance,
            gap_ms: backward_gap,
        });
    }

    None
}

fn find_partner<S>(
    legs: &[Leg],
    anchor_idx: usize,
    grouped: &[bool],
    options: &PlanOptions,
    strategy: &S,
) -> Option<(usize, PairingDirection)>
where
    S: PairingStrategy + ?Sized,
{
    let anchor = &legs[anchor_idx];
    let mut best: Option<(usize, PairingDirection, f64)> = None;

    for (idx, candidate) in legs.iter().enumerate() {
        // Candidates must be priced above the band, not inside it.
        if idx == anchor_idx || grouped[idx] || candidate.price() <= options.price_max {
            continue;
        }

        let Some(pairing) = pairing_between(anchor, candidate, options) else {
            continue;
        };

        let score = strategy.score(&pairing);
        if best.is_none_or(|(_, _, best_score)| score < best_score) {
            best = Some((idx, pairing.direction, score));
        }
    }

    best.map(|(idx, direction, _)| (idx, direction))
}

fn is_anchor_price(price: i64, options: &PlanOptions) -> bool {
    price >= options.price_min && price < options.price_max
}

fn is_short_gap(gap_ms: i64, options: &PlanOptions) -> bool {
    gap_ms > 0 && gap_ms < options.time_max_group_ms
}
