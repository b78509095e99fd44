//! Synthetic request feed generation.
//!
//! Draws uniformly random requests over a bounding box, a time range, a
//! price range and a duration range. Used for demos and load testing.

use jiff::{SignedDuration, Timestamp};
use rand::Rng;

use crate::feed::{Feature, FeatureCollection};
use crate::model::PointKind;

#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub order_count: usize,
    /// Price range in cents, `[min, max)`.
    pub price_range: (i64, i64),
    /// Earliest and latest start time.
    pub date_range: (Timestamp, Timestamp),
    /// North-west corner `(lat, lng)`.
    pub north_west: (f64, f64),
    /// South-east corner `(lat, lng)`.
    pub south_east: (f64, f64),
    /// Request duration range in seconds.
    pub duration_range_secs: (i64, i64),
}

impl GeneratorConfig {
    /// 200 requests across Paris between 08:00 and 20:00 after `day_start`.
    pub fn paris(day_start: Timestamp) -> Self {
        Self {
            order_count: 200,
            price_range: (2000, 4000),
            date_range: (
                day_start + SignedDuration::from_hours(8),
                day_start + SignedDuration::from_hours(20),
            ),
            north_west: (48.904716, 2.269014),
            south_east: (48.80716, 2.43014),
            duration_range_secs: (15 * 60, 60 * 60),
        }
    }
}

/// Generate `config.order_count` requests named `Course 1`, `Course 2`, ...
///
/// Each request is a start feature immediately followed by its end feature.
pub fn generate<R: Rng>(config: &GeneratorConfig, rng: &mut R) -> FeatureCollection {
    let (earliest, latest) = config.date_range;
    let span_secs = latest.as_second() - earliest.as_second();

    let mut features = Vec::with_capacity(config.order_count * 2);
    for i in 0..config.order_count {
        let name = format!("Course {}", i + 1);

        let offset_secs = between_i64(rng, 0, span_secs);
        let (min_secs, max_secs) = config.duration_range_secs;
        let duration_secs = between_i64(rng, min_secs, max_secs);
        let start = earliest + SignedDuration::from_secs(offset_secs);
        let end = start + SignedDuration::from_secs(duration_secs);

        let (start_lat, start_lng) = random_coord(rng, config);
        let (end_lat, end_lng) = random_coord(rng, config);
        let price = between_i64(rng, config.price_range.0, config.price_range.1);

        features.push(Feature::new(
            &name,
            PointKind::Start,
            start_lat,
            start_lng,
            start,
            Some(price),
        ));
        features.push(Feature::new(name, PointKind::End, end_lat, end_lng, end, None));
    }

    FeatureCollection::new(features)
}

fn random_coord<R: Rng>(rng: &mut R, config: &GeneratorConfig) -> (f64, f64) {
    let lat = between_f64(rng, config.south_east.0, config.north_west.0);
    let lng = between_f64(rng, config.north_west.1, config.south_east.1);
    (round6(lat), round6(lng))
}

fn round6(value: f64) -> f64 {
    (value * 1e6).round() / 1e6
}

/// Uniform in `[min, max)`; `min` when the range is empty.
fn between_i64<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
    if max <= min { min } else { rng.random_range(min..max) }
}

fn between_f64<R: Rng>(rng: &mut R, min: f64, max: f64) -> f64 {
    if max <= min { min } else { rng.random_range(min..max) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::horizon;

    fn day() -> Timestamp {
        "2017-07-15T00:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_generates_paired_features() {
        let config = GeneratorConfig {
            order_count: 25,
            ..GeneratorConfig::paris(day())
        };
        let collection = generate(&config, &mut StdRng::seed_from_u64(7));

        assert_eq!(collection.features.len(), 50);
        for pair in collection.features.chunks(2) {
            assert_eq!(pair[0].properties.kind, PointKind::Start);
            assert_eq!(pair[1].properties.kind, PointKind::End);
            assert_eq!(pair[0].properties.name, pair[1].properties.name);
        }

        // Every request passes the horizon filter's pairing check.
        let points = collection.to_points().unwrap();
        let legs = horizon::filter(&points, day().as_millisecond(), 24 * 60 * 60 * 1000).unwrap();
        assert_eq!(legs.len(), 25);
    }

    #[test]
    fn test_respects_ranges() {
        let config = GeneratorConfig::paris(day());
        let collection = generate(&config, &mut StdRng::seed_from_u64(42));
        let (earliest, latest) = config.date_range;

        for pair in collection.features.chunks(2) {
            let (start, end) = (&pair[0], &pair[1]);
            let price = start.properties.price.unwrap();
            assert!((2000..4000).contains(&price));

            assert!(start.properties.date >= earliest && start.properties.date < latest);
            let duration = end.properties.date.as_second() - start.properties.date.as_second();
            assert!((15 * 60..60 * 60).contains(&duration), "duration {duration}");

            for feature in pair {
                assert!(feature.lat() >= 48.80716 && feature.lat() <= 48.904716);
                assert!(feature.lng() >= 2.269014 && feature.lng() <= 2.43014);
            }
        }
    }

    #[test]
    fn test_same_seed_same_feed() {
        let config = GeneratorConfig::paris(day());
        let a = generate(&config, &mut StdRng::seed_from_u64(1));
        let b = generate(&config, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_degenerate_ranges() {
        let config = GeneratorConfig {
            order_count: 3,
            price_range: (1500, 1500),
            duration_range_secs: (600, 600),
            ..GeneratorConfig::paris(day())
        };
        let collection = generate(&config, &mut StdRng::seed_from_u64(3));
        assert!(collection.features.iter().step_by(2).all(|f| f.properties.price == Some(1500)));
    }
}
