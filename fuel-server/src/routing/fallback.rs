//! Straight-line fallback route.
//!
//! Used whenever the directions provider is unavailable. Deterministic and
//! free of side effects, so it can be exercised without network access.

use crate::domain::{Coordinate, RoutePolyline};

/// Roughly one interpolated point every this many miles.
pub const MILES_PER_SEGMENT: f64 = 200.0;

/// Never interpolate fewer segments than this.
pub const MIN_SEGMENTS: usize = 3;

/// Number of segments for a straight line of the given length.
///
/// `max(3, round(distance / 200))`, so long routes get denser sampling.
pub fn segment_count(distance_miles: f64) -> usize {
    let segments = (distance_miles / MILES_PER_SEGMENT).round();
    if segments.is_finite() && segments > MIN_SEGMENTS as f64 {
        segments as usize
    } else {
        MIN_SEGMENTS
    }
}

/// Interpolate a straight-line polyline between two coordinates.
///
/// Latitude and longitude are interpolated independently over equal steps.
/// Returns the polyline and its segment count.
pub fn straight_line(start: Coordinate, end: Coordinate) -> (RoutePolyline, usize) {
    let segments = segment_count(start.miles_to(&end));
    (RoutePolyline::interpolate(start, end, segments), segments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn segment_count_rule() {
        assert_eq!(segment_count(0.0), 3);
        assert_eq!(segment_count(237.0), 3);
        assert_eq!(segment_count(700.0), 4); // round(3.5) = 4
        assert_eq!(segment_count(1000.0), 5);
        assert_eq!(segment_count(1099.0), 5);
        assert_eq!(segment_count(1100.0), 6);
        assert_eq!(segment_count(2790.0), 14);
    }

    #[test]
    fn thousand_mile_route_has_six_points() {
        // Due north along a meridian: 1000 miles ≈ 14.48 degrees of latitude.
        let start = coord(30.0, -100.0);
        let mut end = coord(44.0, -100.0);
        for _ in 0..20 {
            let d = start.miles_to(&end);
            let lat = end.lat() * 1000.0 / d + start.lat() * (1.0 - 1000.0 / d);
            end = coord(lat, -100.0);
        }
        assert!((start.miles_to(&end) - 1000.0).abs() < 1.0);

        let (polyline, segments) = straight_line(start, end);
        assert_eq!(segments, 5);
        assert_eq!(polyline.len(), 6);
    }

    #[test]
    fn endpoints_are_exact() {
        let start = coord(41.8781, -87.6298);
        let end = coord(42.3314, -83.0458);
        let (polyline, _) = straight_line(start, end);
        assert_eq!(polyline.start(), start);
        assert_eq!(polyline.end(), end);
    }

    #[test]
    fn deterministic() {
        let start = coord(40.7128, -74.0060);
        let end = coord(34.0522, -118.2437);
        assert_eq!(straight_line(start, end), straight_line(start, end));
    }

    #[test]
    fn interior_points_are_evenly_spaced_in_degrees() {
        let start = coord(30.0, -90.0);
        let end = coord(33.0, -84.0);
        let (polyline, segments) = straight_line(start, end);
        assert_eq!(segments, 3);
        assert!(polyline.points()[1].approx_eq(&coord(31.0, -88.0), 1e-9));
        assert!(polyline.points()[2].approx_eq(&coord(32.0, -86.0), 1e-9));
    }
}
