//! Route polylines.

use super::Coordinate;
use super::coordinate::geodesic_miles;

/// Error returned when building a polyline from too few points.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("route polyline needs at least 2 points, got {0}")]
pub struct TooFewPoints(pub usize);

/// An ordered sequence of at least two coordinates.
///
/// The first and last points are the route endpoints. Lengths are always
/// derived from the points themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePolyline {
    points: Vec<Coordinate>,
}

impl RoutePolyline {
    /// Create a polyline, requiring at least 2 points.
    pub fn new(points: Vec<Coordinate>) -> Result<Self, TooFewPoints> {
        if points.len() < 2 {
            return Err(TooFewPoints(points.len()));
        }
        Ok(Self { points })
    }

    /// Straight line from `start` to `end` in `segments` equal steps of
    /// latitude and longitude. Always has `segments + 1` points (at least 2)
    /// and ends exactly at `end`.
    pub fn interpolate(start: Coordinate, end: Coordinate, segments: usize) -> Self {
        let segments = segments.max(1);
        let mut points: Vec<Coordinate> = (0..segments)
            .map(|i| start.lerp(&end, i as f64 / segments as f64))
            .collect();
        points.push(end);
        Self { points }
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a polyline has at least 2 points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn start(&self) -> Coordinate {
        self.points[0]
    }

    pub fn end(&self) -> Coordinate {
        self.points[self.points.len() - 1]
    }

    /// Cumulative distance in miles at every vertex.
    ///
    /// The first value is 0 and the last is the total length.
    pub fn cumulative_miles(&self) -> Vec<f64> {
        let mut cumulative = Vec::with_capacity(self.points.len());
        let mut total = 0.0;
        cumulative.push(total);
        for pair in self.points.windows(2) {
            total += geodesic_miles(pair[0], pair[1]);
            cumulative.push(total);
        }
        cumulative
    }

    /// Total length in miles: the sum of consecutive segment lengths.
    pub fn total_miles(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| geodesic_miles(pair[0], pair[1]))
            .sum()
    }

    /// Downsample to roughly `max_points` vertices with a uniform stride.
    ///
    /// The final vertex is always kept so the route's end is represented.
    pub fn sample(&self, max_points: usize) -> Vec<Coordinate> {
        let stride = (self.points.len() / max_points.max(1)).max(1);
        let mut sampled: Vec<Coordinate> = self.points.iter().step_by(stride).copied().collect();
        if (self.points.len() - 1) % stride != 0 {
            sampled.push(self.end());
        }
        sampled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    fn line(n: usize) -> RoutePolyline {
        let points = (0..n).map(|i| coord(30.0 + i as f64 * 0.1, -90.0)).collect();
        RoutePolyline::new(points).unwrap()
    }

    #[test]
    fn rejects_fewer_than_two_points() {
        assert_eq!(RoutePolyline::new(vec![]), Err(TooFewPoints(0)));
        assert_eq!(
            RoutePolyline::new(vec![coord(0.0, 0.0)]),
            Err(TooFewPoints(1))
        );
    }

    #[test]
    fn cumulative_ends_at_total() {
        let polyline = line(5);
        let cumulative = polyline.cumulative_miles();
        assert_eq!(cumulative.len(), 5);
        assert_eq!(cumulative[0], 0.0);
        assert!((cumulative[4] - polyline.total_miles()).abs() < 1e-9);
        assert!(cumulative.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn interpolate_has_segments_plus_one_points() {
        let a = coord(30.0, -90.0);
        let b = coord(31.0, -89.0);
        let polyline = RoutePolyline::interpolate(a, b, 4);
        assert_eq!(polyline.len(), 5);
        assert_eq!(polyline.start(), a);
        assert_eq!(polyline.end(), b);

        assert_eq!(RoutePolyline::interpolate(a, a, 0).len(), 2);
    }

    #[test]
    fn endpoints() {
        let polyline = line(3);
        assert_eq!(polyline.start(), coord(30.0, -90.0));
        assert_eq!(polyline.end(), polyline.points()[2]);
    }

    #[test]
    fn sample_short_line_keeps_everything() {
        let polyline = line(6);
        assert_eq!(polyline.sample(20), polyline.points().to_vec());
    }

    #[test]
    fn sample_long_line_is_bounded_and_keeps_end() {
        let polyline = line(405);
        let sampled = polyline.sample(20);
        assert!(sampled.len() <= 22, "got {}", sampled.len());
        assert_eq!(sampled[0], polyline.start());
        assert_eq!(*sampled.last().unwrap(), polyline.end());
    }
}
