//! Geographic coordinates and geodesic distance.

use std::fmt;

use geo::{Distance, Geodesic, Point};

/// Metres in one statute mile.
const METERS_PER_MILE: f64 = 1609.344;

/// Error returned when a latitude/longitude pair is out of range.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidCoordinate {
    #[error("latitude {0} is outside [-90, 90]")]
    Latitude(f64),

    #[error("longitude {0} is outside [-180, 180]")]
    Longitude(f64),
}

/// A validated (latitude, longitude) pair in decimal degrees.
///
/// Any `Coordinate` value is finite and within range by construction.
///
/// # Examples
///
/// ```
/// use fuel_server::domain::Coordinate;
///
/// let chicago = Coordinate::new(41.8781, -87.6298).unwrap();
/// assert_eq!(chicago.lat(), 41.8781);
///
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// assert!(Coordinate::new(0.0, f64::NAN).is_err());
/// ```
#[derive(Clone, Copy, PartialEq)]
pub struct Coordinate {
    lat: f64,
    lon: f64,
}

impl Coordinate {
    /// Create a coordinate, rejecting non-finite or out-of-range values.
    pub fn new(lat: f64, lon: f64) -> Result<Self, InvalidCoordinate> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(InvalidCoordinate::Latitude(lat));
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(InvalidCoordinate::Longitude(lon));
        }
        Ok(Self { lat, lon })
    }

    /// Latitude in decimal degrees.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in decimal degrees.
    pub fn lon(&self) -> f64 {
        self.lon
    }

    /// The coordinate as a `[lat, lon]` pair, the order used on the wire.
    pub fn to_lat_lon(&self) -> [f64; 2] {
        [self.lat, self.lon]
    }

    /// Geodesic (WGS-84 ellipsoid) distance to another coordinate, in miles.
    pub fn miles_to(&self, other: &Coordinate) -> f64 {
        geodesic_miles(*self, *other)
    }

    /// Whether two coordinates coincide within `tolerance_deg` on both axes.
    pub fn approx_eq(&self, other: &Coordinate, tolerance_deg: f64) -> bool {
        (self.lat - other.lat).abs() <= tolerance_deg
            && (self.lon - other.lon).abs() <= tolerance_deg
    }

    /// Linear interpolation of latitude and longitude independently.
    ///
    /// `ratio` is clamped to `[0, 1]`, so the result always lies between the
    /// two (valid) endpoints and is itself valid.
    pub fn lerp(&self, other: &Coordinate, ratio: f64) -> Coordinate {
        let ratio = ratio.clamp(0.0, 1.0);
        Coordinate {
            lat: self.lat + (other.lat - self.lat) * ratio,
            lon: self.lon + (other.lon - self.lon) * ratio,
        }
    }

    fn to_point(self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

impl fmt::Debug for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Coordinate({}, {})", self.lat, self.lon)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.lat, self.lon)
    }
}

/// Geodesic distance between two coordinates, in miles.
pub fn geodesic_miles(a: Coordinate, b: Coordinate) -> f64 {
    Geodesic.distance(a.to_point(), b.to_point()) / METERS_PER_MILE
}
