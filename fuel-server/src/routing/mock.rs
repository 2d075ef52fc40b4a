//! In-memory directions provider for tests and offline development.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use crate::domain::Coordinate;

use super::error::RoutingError;
use super::provider::{DirectionsProvider, ProviderRoute};

/// Directions provider that returns a canned route, or always fails.
///
/// Counts calls so tests can assert the one-call-per-route contract.
#[derive(Clone)]
pub struct StaticDirections {
    route: Option<ProviderRoute>,
    calls: Arc<AtomicUsize>,
}

impl StaticDirections {
    /// A provider that always returns the given points and distance.
    pub fn returning(points: Vec<Coordinate>, reported_distance_miles: f64) -> Self {
        Self {
            route: Some(ProviderRoute {
                points,
                reported_distance_miles,
            }),
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// A provider that always fails, forcing the fallback route.
    pub fn failing() -> Self {
        Self {
            route: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of directions calls received.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl DirectionsProvider for StaticDirections {
    async fn directions(
        &self,
        _start: Coordinate,
        _end: Coordinate,
    ) -> Result<ProviderRoute, RoutingError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.route.clone().ok_or_else(|| RoutingError::Api {
            status: 503,
            message: "routing provider unavailable".to_string(),
        })
    }
}
