//! Great-circle distance between coordinates.
//!
//! Straight-line distance over the earth's surface. Ignores roads, which is
//! good enough for deciding whether two pick-ups are "close".

/// Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine distance between two `(lat, lng)` points in meters.
pub fn distance_m(from: (f64, f64), to: (f64, f64)) -> f64 {
    let (lat1, lng1) = from;
    let (lat2, lng2) = to;

    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lng = (lng2 - lng1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().asin();

    EARTH_RADIUS_M * c
}

/// Latitude offset (degrees) covering `meters` due north.
///
/// Handy for placing points a known distance apart.
pub fn meters_to_lat_degrees(meters: f64) -> f64 {
    (meters / EARTH_RADIUS_M).to_degrees()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_point() {
        let dist = distance_m((48.8534, 2.3488), (48.8534, 2.3488));
        assert!(dist < 0.001, "Same point should have ~0 distance");
    }

    #[test]
    fn test_known_distance() {
        // Paris (48.8566, 2.3522) to Lyon (45.7640, 4.8357)
        // Actual distance ~392 km
        let dist = distance_m((48.8566, 2.3522), (45.7640, 4.8357));
        assert!(
            dist > 380_000.0 && dist < 400_000.0,
            "Paris to Lyon should be ~392km, got {}",
            dist
        );
    }

    #[test]
    fn test_symmetric() {
        let a = (48.85, 2.35);
        let b = (48.90, 2.27);
        assert!((distance_m(a, b) - distance_m(b, a)).abs() < 1e-6);
    }

    #[test]
    fn test_lat_offset_round_trips_distance() {
        let origin = (48.85, 2.35);
        let north = (origin.0 + meters_to_lat_degrees(2_000.0), origin.1);
        let dist = distance_m(origin, north);
        assert!((dist - 2_000.0).abs() < 1.0, "got {}", dist);
    }
}
