//! Planning data model: points, legs, combined legs and routes.
//!
//! Coordinates are `(lat, lng)` tuples in degrees, timestamps are unix
//! milliseconds and prices are integer minor-currency units (cents).

use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Whether a point opens or closes a leg.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointKind {
    Start,
    End,
}

/// One record of the request feed.
#[derive(Debug, Clone, PartialEq)]
pub struct Point {
    pub leg_id: String,
    pub kind: PointKind,
    pub lat: f64,
    pub lng: f64,
    pub timestamp_millis: i64,
    /// Present on start points only.
    pub price: Option<i64>,
}

impl Point {
    pub fn start(
        leg_id: impl Into<String>,
        lat: f64,
        lng: f64,
        timestamp_millis: i64,
        price: i64,
    ) -> Self {
        Self {
            leg_id: leg_id.into(),
            kind: PointKind::Start,
            lat,
            lng,
            timestamp_millis,
            price: Some(price),
        }
    }

    pub fn end(leg_id: impl Into<String>, lat: f64, lng: f64, timestamp_millis: i64) -> Self {
        Self {
            leg_id: leg_id.into(),
            kind: PointKind::End,
            lat,
            lng,
            timestamp_millis,
            price: None,
        }
    }

    pub fn coord(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

/// A single delivery request: a start point and its matching end point.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    pub start: Point,
    pub end: Point,
}

impl Leg {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    pub fn id(&self) -> &str {
        &self.start.leg_id
    }

    pub fn price(&self) -> i64 {
        self.start.price.unwrap_or_default()
    }

    pub fn start_time(&self) -> i64 {
        self.start.timestamp_millis
    }

    pub fn end_time(&self) -> i64 {
        self.end.timestamp_millis
    }

    pub fn start_coord(&self) -> (f64, f64) {
        self.start.coord()
    }

    pub fn end_coord(&self) -> (f64, f64) {
        self.end.coord()
    }
}

/// One or two legs executed back to back as a single schedulable unit.
///
/// `legs` is in execution order. Built once by the grouper, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct CombinedLeg {
    pub start_time: i64,
    pub end_time: i64,
    pub start_coord: (f64, f64),
    pub end_coord: (f64, f64),
    pub total_price: i64,
    pub legs: Vec<Leg>,
}

impl CombinedLeg {
    /// Wrap a leg that was not paired with anything.
    pub fn single(leg: Leg) -> Self {
        Self {
            start_time: leg.start_time(),
            end_time: leg.end_time(),
            start_coord: leg.start_coord(),
            end_coord: leg.end_coord(),
            total_price: leg.price(),
            legs: vec![leg],
        }
    }

    /// Merge two legs, `first` executed before `second`.
    ///
    /// `first` must end strictly before `second` starts.
    pub fn paired(first: Leg, second: Leg) -> Result<Self, PlanError> {
        if first.end_time() >= second.start_time() {
            return Err(PlanError::InconsistentPairing {
                first: first.id().to_string(),
                second: second.id().to_string(),
            });
        }

        Ok(Self {
            start_time: first.start_time(),
            end_time: second.end_time(),
            start_coord: first.start_coord(),
            end_coord: second.end_coord(),
            total_price: first.price() + second.price(),
            legs: vec![first, second],
        })
    }

    pub fn is_grouped(&self) -> bool {
        self.legs.len() > 1
    }

    pub fn leg_ids(&self) -> impl Iterator<Item = &str> {
        self.legs.iter().map(Leg::id)
    }
}

/// The worker's current position and the planning clock.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WorkerState {
    pub lat: f64,
    pub lng: f64,
    pub now_millis: i64,
}

impl WorkerState {
    pub fn new(lat: f64, lng: f64, now_millis: i64) -> Self {
        Self { lat, lng, now_millis }
    }
}

/// Ordered combined legs assigned to one worker for one planning call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Route {
    pub legs: Vec<CombinedLeg>,
}

impl Route {
    pub fn new(legs: Vec<CombinedLeg>) -> Self {
        Self { legs }
    }

    pub fn is_empty(&self) -> bool {
        self.legs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.legs.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, CombinedLeg> {
        self.legs.iter()
    }

    pub fn total_price(&self) -> i64 {
        self.legs.iter().map(|leg| leg.total_price).sum()
    }

    /// Number of individual delivery requests on the route.
    pub fn course_count(&self) -> usize {
        self.legs.iter().map(|leg| leg.legs.len()).sum()
    }

    pub fn has_grouped_legs(&self) -> bool {
        self.legs.iter().any(CombinedLeg::is_grouped)
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a CombinedLeg;
    type IntoIter = std::slice::Iter<'a, CombinedLeg>;

    fn into_iter(self) -> Self::IntoIter {
        self.legs.iter()
    }
}
