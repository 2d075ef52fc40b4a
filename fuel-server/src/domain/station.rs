//! Fuel station types.

use std::fmt;

use super::{Coordinate, Price, StateCode};

/// Stable, unique identifier of a station in the catalog (its rack id).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub u32);

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A fuel station from the catalog.
///
/// Read-only to the planner. Only stations with a coordinate take part in
/// routing; the rest have never been geocoded.
#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: StateCode,
    pub price: Price,
    pub coordinate: Option<Coordinate>,
}

impl Station {
    /// Returns the coordinate if the station has been geocoded.
    pub fn located(&self) -> Option<Coordinate> {
        self.coordinate
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}, {} ({}/gal)",
            self.name, self.city, self.state, self.price
        )
    }
}

/// A station found near a route, with its distance from the route in miles.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyStation {
    pub station: Station,
    pub coordinate: Coordinate,
    pub distance_from_route: f64,
}
