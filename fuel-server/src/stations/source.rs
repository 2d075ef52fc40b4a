//! JSON file source for the station catalog.
//!
//! The catalog is produced by a separate ingestion job (CSV bulk load plus
//! geocoding). This module only reads its output.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::{Coordinate, Price, StateCode, Station, StationId};

use super::error::CatalogError;

/// One station record as stored in the catalog file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StationRecord {
    #[serde(alias = "rack_id")]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub city: String,
    pub state: String,
    #[serde(alias = "retail_price")]
    pub price: f64,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Reason a catalog record was rejected.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error(transparent)]
    State(#[from] crate::domain::InvalidStateCode),

    #[error(transparent)]
    Price(#[from] crate::domain::InvalidPrice),

    #[error(transparent)]
    Coordinate(#[from] crate::domain::InvalidCoordinate),

    #[error("latitude and longitude must both be set or both be unset")]
    HalfCoordinate,
}

impl StationRecord {
    /// Validate the record into a domain station.
    pub fn into_station(self) -> Result<Station, RecordError> {
        let state = StateCode::parse_normalized(&self.state)?;
        let price = Price::from_dollars(self.price)?;
        let coordinate = match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some(Coordinate::new(lat, lon)?),
            (None, None) => None,
            _ => return Err(RecordError::HalfCoordinate),
        };

        Ok(Station {
            id: StationId(self.id),
            name: self.name.trim().to_string(),
            address: self.address.trim().to_string(),
            city: self.city.trim().to_string(),
            state,
            price,
            coordinate,
        })
    }
}

/// Reads the station catalog from a JSON file holding an array of records.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the catalog file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load and validate all stations from the file.
    pub async fn load(&self) -> Result<Vec<Station>, CatalogError> {
        let contents =
            tokio::fs::read_to_string(&self.path)
                .await
                .map_err(|source| CatalogError::Io {
                    path: self.path.display().to_string(),
                    source,
                })?;

        let records: Vec<StationRecord> =
            serde_json::from_str(&contents).map_err(|e| CatalogError::Json {
                message: e.to_string(),
            })?;

        Ok(build_stations(records))
    }
}

/// Validate records into stations, skipping invalid and duplicate ones.
pub fn build_stations(records: Vec<StationRecord>) -> Vec<Station> {
    let mut seen = HashSet::new();

    records
        .into_iter()
        .filter_map(|record| {
            let id = record.id;
            if !seen.insert(id) {
                warn!(id, "duplicate station id in catalog; keeping the first");
                return None;
            }
            match record.into_station() {
                Ok(station) => Some(station),
                Err(e) => {
                    warn!(id, error = %e, "skipping invalid station record");
                    None
                }
            }
        })
        .collect()
}
