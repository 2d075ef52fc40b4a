//! Directions provider abstraction.

use std::future::Future;

use crate::domain::Coordinate;

use super::error::RoutingError;

/// A route as returned by an external directions provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderRoute {
    /// Route geometry as (lat, lon) points.
    pub points: Vec<Coordinate>,

    /// Distance reported by the provider, in miles.
    ///
    /// Informational only: route lengths are recomputed from the points.
    pub reported_distance_miles: f64,
}

/// A service that computes driving directions between two coordinates.
///
/// This abstraction allows the router to be tested without network access.
pub trait DirectionsProvider: Send + Sync {
    /// Fetch a route from `start` to `end` with a single provider call.
    fn directions(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> impl Future<Output = Result<ProviderRoute, RoutingError>> + Send;
}
