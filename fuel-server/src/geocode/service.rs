//! Read-through geocode cache.

use tracing::{debug, warn};

use crate::cache::{CacheConfig, TtlCache};
use crate::domain::Coordinate;

use super::error::LocationNotFound;
use super::provider::GeocodingProvider;

/// Country bias appended to every query.
pub const COUNTRY_BIAS: &str = "USA";

/// Normalize a location for the provider: trim, collapse whitespace and
/// append the country bias unless the text already ends with it.
pub fn normalize_query(location: &str) -> String {
    let collapsed = location.split_whitespace().collect::<Vec<_>>().join(" ");
    let suffix = format!(", {}", COUNTRY_BIAS.to_lowercase());
    if collapsed.to_lowercase().ends_with(&suffix) {
        collapsed
    } else {
        format!("{collapsed}, {COUNTRY_BIAS}")
    }
}

/// Cache key for a normalized query.
fn cache_key(query: &str) -> String {
    query.to_lowercase()
}

/// Geocoder with a read-through cache in front of a provider.
///
/// Successful lookups are cached for a long TTL. Failures are never cached,
/// so transient provider errors are retried on the next request.
pub struct Geocoder<P: GeocodingProvider> {
    provider: P,
    cache: TtlCache<String, Coordinate>,
}

impl<P: GeocodingProvider> Geocoder<P> {
    /// Create a geocoder with its own cache.
    pub fn new(provider: P, cache_config: &CacheConfig) -> Self {
        Self::with_cache(provider, TtlCache::new(cache_config))
    }

    /// Create a geocoder backed by an existing (possibly shared) cache.
    pub fn with_cache(provider: P, cache: TtlCache<String, Coordinate>) -> Self {
        Self { provider, cache }
    }

    /// Resolve a free-text location to coordinates.
    ///
    /// Makes at most one provider call, and only on a cache miss.
    pub async fn resolve(&self, location: &str) -> Result<Coordinate, LocationNotFound> {
        let query = normalize_query(location);
        let key = cache_key(&query);

        if let Some(coord) = self.cache.get(&key).await {
            debug!(%query, "geocode cache hit");
            return Ok(coord);
        }

        let not_found = || LocationNotFound {
            location: location.trim().to_string(),
        };

        match self.provider.geocode(&query).await {
            Ok(Some(coord)) => {
                debug!(%query, %coord, "geocoded location");
                self.cache.insert(key, coord).await;
                Ok(coord)
            }
            Ok(None) => {
                warn!(%query, "geocoding returned no results");
                Err(not_found())
            }
            Err(e) => {
                warn!(%query, error = %e, "geocoding failed");
                Err(not_found())
            }
        }
    }

    #[cfg(test)]
    pub(crate) fn provider(&self) -> &P {
        &self.provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geocode::mock::StaticGeocoder;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    fn geocoder() -> Geocoder<StaticGeocoder> {
        let provider = StaticGeocoder::new().with_location("Chicago, IL", coord(41.8781, -87.6298));
        Geocoder::new(provider, &CacheConfig::geocode())
    }

    #[test]
    fn normalize_appends_bias() {
        assert_eq!(normalize_query("  Chicago,   IL "), "Chicago, IL, USA");
    }

    #[test]
    fn normalize_keeps_existing_bias() {
        assert_eq!(normalize_query("Chicago, IL, usa"), "Chicago, IL, usa");
    }

    #[tokio::test]
    async fn resolves_and_caches() {
        let geocoder = geocoder();

        let first = geocoder.resolve("Chicago, IL").await.unwrap();
        let second = geocoder.resolve("  chicago,  il ").await.unwrap();

        assert_eq!(first, coord(41.8781, -87.6298));
        assert_eq!(first, second);
        assert_eq!(geocoder.provider().call_count(), 1);
    }

    #[tokio::test]
    async fn unknown_location_is_not_found() {
        let geocoder = geocoder();
        let err = geocoder.resolve(" Atlantis ").await.unwrap_err();
        assert_eq!(err.location, "Atlantis");
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let geocoder = geocoder();
        geocoder.provider().set_failing(true);
        assert!(geocoder.resolve("Chicago, IL").await.is_err());

        geocoder.provider().set_failing(false);
        assert!(geocoder.resolve("Chicago, IL").await.is_ok());
        assert_eq!(geocoder.provider().call_count(), 2);
    }

    #[tokio::test]
    async fn empty_results_are_not_cached() {
        let geocoder = geocoder();
        assert!(geocoder.resolve("Atlantis").await.is_err());
        assert!(geocoder.resolve("Atlantis").await.is_err());
        assert_eq!(geocoder.provider().call_count(), 2);
    }
}
