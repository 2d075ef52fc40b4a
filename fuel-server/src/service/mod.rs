//! Route planning service.
//!
//! Ties the pipeline together: validated locations are geocoded, routed,
//! matched against nearby stations and turned into a priced stop plan.
//! Complete responses are cached per location pair.

mod error;
mod request;
mod response;
mod route_service;

pub use error::{Field, PlanError};
pub use request::{MAX_LOCATION_LEN, MIN_LOCATION_LEN, RouteKey, RouteRequest};
pub use response::{ApiInfo, FuelStopView, RouteResponse, fuel_cost};
pub use route_service::{LiveRouteService, RouteService};
