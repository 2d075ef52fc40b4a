//! Process configuration from environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::geocode::GeocoderConfig;
use crate::routing::DirectionsConfig;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";
pub const DEFAULT_STATIONS_PATH: &str = "data/stations.json";
pub const DEFAULT_CATALOG_REFRESH_SECS: u64 = 3600;

/// Errors from reading configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has invalid value {value:?}: {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server listens on (`FUEL_BIND_ADDR`)
    pub bind_addr: SocketAddr,

    /// Station catalog file (`FUEL_STATIONS_PATH`)
    pub stations_path: PathBuf,

    /// How often the catalog is reloaded (`FUEL_CATALOG_REFRESH_SECS`)
    pub catalog_refresh: Duration,

    /// Directions client settings (`ORS_API_KEY`, `ORS_BASE_URL`)
    pub directions: DirectionsConfig,

    /// Geocoder settings (`NOMINATIM_BASE_URL`, `NOMINATIM_USER_AGENT`)
    pub geocoder: GeocoderConfig,
}

impl AppConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through `lookup`, which returns a variable's
    /// value if set. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());

        let bind_raw = get("FUEL_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                var: "FUEL_BIND_ADDR",
                value: bind_raw.clone(),
                reason: e.to_string(),
            })?;

        let stations_path = PathBuf::from(
            get("FUEL_STATIONS_PATH").unwrap_or_else(|| DEFAULT_STATIONS_PATH.to_string()),
        );

        let refresh_secs = match get("FUEL_CATALOG_REFRESH_SECS") {
            None => DEFAULT_CATALOG_REFRESH_SECS,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                Ok(_) => {
                    return Err(ConfigError::Invalid {
                        var: "FUEL_CATALOG_REFRESH_SECS",
                        value: raw,
                        reason: "must be positive".to_string(),
                    });
                }
                Err(e) => {
                    return Err(ConfigError::Invalid {
                        var: "FUEL_CATALOG_REFRESH_SECS",
                        value: raw,
                        reason: e.to_string(),
                    });
                }
            },
        };

        let mut directions = DirectionsConfig::new(get("ORS_API_KEY"));
        if let Some(url) = get("ORS_BASE_URL") {
            directions = directions.with_base_url(url);
        }

        let mut geocoder = match get("NOMINATIM_USER_AGENT") {
            Some(agent) => GeocoderConfig::new(agent),
            None => GeocoderConfig::default(),
        };
        if let Some(url) = get("NOMINATIM_BASE_URL") {
            geocoder = geocoder.with_base_url(url);
        }

        Ok(Self {
            bind_addr,
            stations_path,
            catalog_refresh: Duration::from_secs(refresh_secs),
            directions,
            geocoder,
        })
    }
}
