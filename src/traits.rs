//! Seams of the planning pipeline.
//!
//! The feed source, the ranking of grouping partners and the choice of the
//! next leg are all swappable. Default implementations live next to the
//! stage that uses them.

use crate::error::FeedError;
use crate::model::{CombinedLeg, Leg, Point, WorkerState};

/// Supplies the raw request feed as an ordered sequence of points.
///
/// Each start point is expected to be immediately followed by its end point.
pub trait LegRepository {
    fn points(&self) -> Result<Vec<Point>, FeedError>;
}

/// Which side of the anchor a grouping candidate sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairingDirection {
    /// Candidate starts after the anchor ends.
    Forward,
    /// Candidate ends before the anchor starts.
    Backward,
}

/// A candidate that already satisfies the pairing predicate.
#[derive(Debug, Clone, Copy)]
pub struct CandidatePairing<'a> {
    pub anchor: &'a Leg,
    pub candidate: &'a Leg,
    pub direction: PairingDirection,
    /// Distance between the leg that finishes first and the one that follows.
    pub distance_m: f64,
    /// Idle time between the two legs.
    pub gap_ms: i64,
}

/// Ranks compatible grouping partners for an anchor. Lower is better.
///
/// The grouper keeps the first candidate among equal scores.
pub trait PairingStrategy {
    fn score(&self, pairing: &CandidatePairing<'_>) -> f64;
}

/// The route builder's virtual position and clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cursor {
    pub lat: f64,
    pub lng: f64,
    pub time_millis: i64,
}

impl Cursor {
    pub fn coord(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }

    /// Move to the end of a leg the worker has just been given.
    pub fn advance_to(&mut self, leg: &CombinedLeg) {
        (self.lat, self.lng) = leg.end_coord;
        self.time_millis = leg.end_time;
    }
}

impl From<WorkerState> for Cursor {
    fn from(worker: WorkerState) -> Self {
        Self {
            lat: worker.lat,
            lng: worker.lng,
            time_millis: worker.now_millis,
        }
    }
}

/// Decides which combined leg the worker takes next.
pub trait NextLegStrategy {
    /// Whether `leg` can follow the cursor at all.
    fn is_candidate(&self, cursor: &Cursor, leg: &CombinedLeg) -> bool {
        leg.start_time > cursor.time_millis
    }

    /// Cost of taking `leg` next. Lower is better.
    fn cost(&self, cursor: &Cursor, leg: &CombinedLeg) -> f64;
}
