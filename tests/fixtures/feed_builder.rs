//! Builder for request feeds with times relative to a fixed "now".

use jiff::Timestamp;

use trusker_planner::feed::{Feature, FeatureCollection};
use trusker_planner::{Point, PointKind, WorkerState};

use super::paris_locations::{HOTEL_DE_VILLE, Location};

/// 2017-07-15T12:00:01Z
pub const NOW_MS: i64 = 1_500_120_001_000;
pub const MINUTE_MS: i64 = 60 * 1000;
pub const HOUR_MS: i64 = 60 * MINUTE_MS;

pub fn now() -> Timestamp {
    Timestamp::from_millisecond(NOW_MS).unwrap()
}

pub fn worker_at(location: &Location) -> WorkerState {
    WorkerState::new(location.lat, location.lng, NOW_MS)
}

pub fn worker() -> WorkerState {
    worker_at(&HOTEL_DE_VILLE)
}

/// Appends start/end feature pairs in feed order.
#[derive(Debug, Clone, Default)]
pub struct FeedBuilder {
    features: Vec<Feature>,
}

impl FeedBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// A request from `from` to `to`, times in minutes after `NOW_MS`.
    pub fn leg(
        self,
        name: &str,
        price: i64,
        from: (f64, f64),
        start_min: i64,
        to: (f64, f64),
        end_min: i64,
    ) -> Self {
        let start_ms = NOW_MS + start_min * MINUTE_MS;
        let end_ms = NOW_MS + end_min * MINUTE_MS;
        self.leg_ms(name, price, from, start_ms, to, end_ms)
    }

    pub fn leg_ms(
        mut self,
        name: &str,
        price: i64,
        from: (f64, f64),
        start_ms: i64,
        to: (f64, f64),
        end_ms: i64,
    ) -> Self {
        let start = Timestamp::from_millisecond(start_ms).unwrap();
        let end = Timestamp::from_millisecond(end_ms).unwrap();
        self.features
            .push(Feature::new(name, PointKind::Start, from.0, from.1, start, Some(price)));
        self.features
            .push(Feature::new(name, PointKind::End, to.0, to.1, end, None));
        self
    }

    pub fn collection(&self) -> FeatureCollection {
        FeatureCollection::new(self.features.clone())
    }

    pub fn points(&self) -> Vec<Point> {
        self.collection().to_points().expect("fixture feed is valid")
    }
}
