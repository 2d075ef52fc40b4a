//! Geocoding provider abstraction.

use std::future::Future;

use crate::domain::Coordinate;

use super::error::GeocodeError;

/// A service that resolves free-text queries to coordinates.
///
/// This abstraction allows the geocoder to be tested without network access.
pub trait GeocodingProvider: Send + Sync {
    /// Resolve a query to its best match.
    ///
    /// Returns `Ok(None)` when the provider answered but found nothing.
    fn geocode(
        &self,
        query: &str,
    ) -> impl Future<Output = Result<Option<Coordinate>, GeocodeError>> + Send;
}
