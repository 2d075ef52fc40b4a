//! In-memory station catalog snapshot.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::RwLock;

use crate::domain::Station;

use super::error::CatalogError;
use super::source::JsonFileSource;

/// An immutable view of the catalog at one point in time.
#[derive(Debug)]
struct Snapshot {
    /// Every station in the catalog.
    all: Arc<Vec<Station>>,
    /// Only stations with a coordinate, the ones routing can use.
    located: Arc<Vec<Station>>,
    loaded_at: DateTime<Utc>,
}

impl Snapshot {
    fn new(stations: Vec<Station>) -> Self {
        let located = stations
            .iter()
            .filter(|s| s.coordinate.is_some())
            .cloned()
            .collect();
        Self {
            all: Arc::new(stations),
            located: Arc::new(located),
            loaded_at: Utc::now(),
        }
    }
}

/// Catalog diagnostics.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogStats {
    pub total_stations: usize,
    pub geocoded_stations: usize,
    pub loaded_at: DateTime<Utc>,
}

/// Thread-safe, read-only station catalog.
///
/// Readers get a cheap `Arc` of the current snapshot; a refresh swaps in a
/// whole new snapshot, so a request never sees a half-loaded catalog.
#[derive(Clone)]
pub struct StationCatalog {
    inner: Arc<RwLock<Snapshot>>,
    source: Option<JsonFileSource>,
}

impl StationCatalog {
    /// Create a catalog by loading from the given source.
    ///
    /// This will fail if the source is unreadable.
    pub async fn fetch(source: JsonFileSource) -> Result<Self, CatalogError> {
        let stations = source.load().await?;

        Ok(Self {
            inner: Arc::new(RwLock::new(Snapshot::new(stations))),
            source: Some(source),
        })
    }

    /// Create a fixed catalog from stations already in memory.
    pub fn from_stations(stations: Vec<Station>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Snapshot::new(stations))),
            source: None,
        }
    }

    /// Stations that have a coordinate.
    pub async fn located_stations(&self) -> Arc<Vec<Station>> {
        let guard = self.inner.read().await;
        guard.located.clone()
    }

    /// Counts and load time of the current snapshot.
    pub async fn stats(&self) -> CatalogStats {
        let guard = self.inner.read().await;
        CatalogStats {
            total_stations: guard.all.len(),
            geocoded_stations: guard.located.len(),
            loaded_at: guard.loaded_at,
        }
    }

    /// Reload the catalog from its source.
    ///
    /// On success, replaces the current snapshot. On failure, the existing
    /// snapshot is preserved and the error is returned.
    pub async fn refresh(&self) -> Result<usize, CatalogError> {
        let source = self.source.as_ref().ok_or(CatalogError::NoSource)?;
        let stations = source.load().await?;
        let snapshot = Snapshot::new(stations);
        let count = snapshot.all.len();

        let mut guard = self.inner.write().await;
        *guard = snapshot;

        Ok(count)
    }
}
