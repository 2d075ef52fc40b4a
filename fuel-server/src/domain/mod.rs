//! Domain types for the fuel route planner.
//!
//! This module contains the core domain model types: validated coordinates,
//! route polylines and catalog stations. All types enforce their invariants
//! at construction time, so code that receives these types can trust their
//! validity.

mod coordinate;
mod polyline;
mod price;
mod state;
mod station;

pub use coordinate::{Coordinate, InvalidCoordinate, geodesic_miles};
pub use polyline::{RoutePolyline, TooFewPoints};
pub use price::{InvalidPrice, Price};
pub use state::{InvalidStateCode, StateCode};
pub use station::{NearbyStation, Station, StationId};
