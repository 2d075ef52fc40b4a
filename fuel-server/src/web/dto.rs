//! Data transfer objects for web requests and responses.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub use crate::service::{ApiInfo, FuelStopView, RouteResponse};

/// Request to plan a route.
///
/// Fields are optional so a missing one can be reported by name rather
/// than as a generic JSON error.
#[derive(Debug, Deserialize)]
pub struct PlanRouteRequest {
    /// Start city, state or full address (e.g. "Chicago, IL")
    #[serde(alias = "startLocation")]
    pub start_location: Option<String>,

    /// End city, state or full address (e.g. "Detroit, MI")
    #[serde(alias = "endLocation")]
    pub end_location: Option<String>,
}

/// Response for the API info endpoint.
#[derive(Debug, Serialize)]
pub struct ApiInfoResponse {
    pub message: &'static str,
    pub version: &'static str,
    pub endpoints: BTreeMap<&'static str, &'static str>,
}

impl ApiInfoResponse {
    pub fn current() -> Self {
        let endpoints = BTreeMap::from([
            ("route", "/api/route (POST)"),
            ("health", "/health (GET)"),
            ("station_stats", "/api/stations/stats (GET)"),
        ]);

        Self {
            message: "Fuel Route Optimization API",
            version: env!("CARGO_PKG_VERSION"),
            endpoints,
        }
    }
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}
