//! Route acquisition with transparent fallback.

use std::fmt;

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::domain::{Coordinate, RoutePolyline};

use super::fallback::straight_line;
use super::provider::{DirectionsProvider, ProviderRoute};

/// Endpoints closer than this (in degrees) are treated as the same point.
const ENDPOINT_TOLERANCE_DEG: f64 = 1e-6;

/// Where a route came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RouteSource {
    /// The external directions provider.
    #[serde(rename = "openrouteservice")]
    RoutingApi,

    /// Local straight-line interpolation.
    #[serde(rename = "fallback")]
    Fallback,
}

impl RouteSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            RouteSource::RoutingApi => "openrouteservice",
            RouteSource::Fallback => "fallback",
        }
    }
}

impl fmt::Display for RouteSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A route between two coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteResult {
    pub polyline: RoutePolyline,

    /// Sum of the polyline's segment lengths, in miles.
    pub total_distance_miles: f64,

    pub source: RouteSource,

    /// Short human-readable summary of the geometry.
    pub description: String,
}

impl RouteResult {
    /// Build a result, deriving the total distance from the polyline.
    pub fn new(polyline: RoutePolyline, source: RouteSource, description: String) -> Self {
        Self {
            total_distance_miles: polyline.total_miles(),
            polyline,
            source,
            description,
        }
    }

    /// The deterministic straight-line route between two coordinates.
    pub fn fallback(start: Coordinate, end: Coordinate) -> Self {
        let (polyline, segments) = straight_line(start, end);
        Self::new(
            polyline,
            RouteSource::Fallback,
            format!("Fallback straight-line route with {segments} segments"),
        )
    }
}

/// Obtains routes from a directions provider, falling back to a straight
/// line on any provider failure.
///
/// Makes exactly one provider call per route, or none when the endpoints
/// coincide.
pub struct Router<D: DirectionsProvider> {
    provider: D,
}

impl<D: DirectionsProvider> Router<D> {
    pub fn new(provider: D) -> Self {
        Self { provider }
    }

    /// Route from `start` to `end`. Never fails.
    pub async fn route(&self, start: Coordinate, end: Coordinate) -> RouteResult {
        if start.approx_eq(&end, ENDPOINT_TOLERANCE_DEG) {
            debug!("start and end coordinates coincide; returning zero-length route");
            return RouteResult::new(
                RoutePolyline::interpolate(start, end, 1),
                RouteSource::Fallback,
                "Zero-length route".to_string(),
            );
        }

        match self.provider.directions(start, end).await {
            Ok(route) => {
                let result = from_provider(route, start, end);
                info!(
                    points = result.polyline.len(),
                    miles = result.total_distance_miles,
                    "route from routing provider"
                );
                result
            }
            Err(e) => {
                warn!(error = %e, "routing provider failed; using straight-line fallback");
                RouteResult::fallback(start, end)
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn provider(&self) -> &D {
        &self.provider
    }
}

/// Turn a provider route into a result whose endpoints are the requested
/// coordinates. Road snapping can move them; the requested points are
/// pinned on when that happens.
fn from_provider(route: ProviderRoute, start: Coordinate, end: Coordinate) -> RouteResult {
    let mut points = route.points;

    if points
        .first()
        .is_none_or(|first| !first.approx_eq(&start, ENDPOINT_TOLERANCE_DEG))
    {
        points.insert(0, start);
    } else {
        points[0] = start;
    }

    let last = points.len() - 1;
    if points[last].approx_eq(&end, ENDPOINT_TOLERANCE_DEG) && last > 0 {
        points[last] = end;
    } else {
        points.push(end);
    }

    let provider_points = points.len();
    // start and end are both present, so there are at least 2 points
    let polyline = match RoutePolyline::new(points) {
        Ok(polyline) => polyline,
        Err(_) => RoutePolyline::interpolate(start, end, 1),
    };

    let result = RouteResult::new(
        polyline,
        RouteSource::RoutingApi,
        format!("Routing provider route with {provider_points} points"),
    );
    debug!(
        reported_miles = route.reported_distance_miles,
        polyline_miles = result.total_distance_miles,
        "provider distance vs polyline length"
    );
    result
}
