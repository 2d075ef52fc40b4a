//! In-memory geocoding provider for tests and offline development.

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use crate::domain::Coordinate;

use super::error::GeocodeError;
use super::provider::GeocodingProvider;
use super::service::COUNTRY_BIAS;

/// Geocoding provider that serves a fixed table of locations.
///
/// Lookups ignore case and the trailing country bias. Counts calls so tests
/// can assert how many provider round-trips were made.
#[derive(Clone, Default)]
pub struct StaticGeocoder {
    locations: HashMap<String, Coordinate>,
    calls: Arc<AtomicUsize>,
    failing: Arc<AtomicBool>,
}

impl StaticGeocoder {
    /// Create an empty geocoder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a known location.
    pub fn with_location(mut self, name: &str, coord: Coordinate) -> Self {
        self.locations.insert(key(name), coord);
        self
    }

    /// Make every subsequent call fail as if the provider were down.
    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Number of geocode calls received.
    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl GeocodingProvider for StaticGeocoder {
    async fn geocode(&self, query: &str) -> Result<Option<Coordinate>, GeocodeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);

        if self.failing.load(Ordering::SeqCst) {
            return Err(GeocodeError::Api {
                status: 503,
                message: "provider unavailable".to_string(),
            });
        }

        Ok(self.locations.get(&key(query)).copied())
    }
}

fn key(query: &str) -> String {
    let lower = query.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    let suffix = format!(", {}", COUNTRY_BIAS.to_lowercase());
    lower
        .strip_suffix(&suffix)
        .map(str::to_string)
        .unwrap_or(lower)
}
