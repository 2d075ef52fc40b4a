//! OpenRouteService directions HTTP client.

use serde::Deserialize;
use serde_json::json;
use tracing::debug;

use crate::domain::Coordinate;

use super::error::RoutingError;
use super::provider::{DirectionsProvider, ProviderRoute};

/// Default base URL for the OpenRouteService API.
pub const DEFAULT_BASE_URL: &str = "https://api.openrouteservice.org";

const MILES_PER_METER: f64 = 0.000621371;

// --- GeoJSON response shapes ---
#[derive(Debug, Deserialize)]
struct FeatureCollection {
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    geometry: Geometry,
    properties: Properties,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    /// `[lon, lat]` or `[lon, lat, elevation]`
    coordinates: Vec<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
struct Properties {
    summary: Summary,
}

#[derive(Debug, Deserialize)]
struct Summary {
    #[serde(default)]
    distance: f64,
}

/// Configuration for the directions client.
#[derive(Debug, Clone)]
pub struct DirectionsConfig {
    /// API key; without one the client never calls out
    pub api_key: Option<String>,
    /// Base URL for the API
    pub base_url: String,
    /// Routing profile (e.g. "driving-car", "driving-hgv")
    pub profile: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
}

impl DirectionsConfig {
    /// Create a config with an optional API key and default settings.
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|k| !k.trim().is_empty()),
            base_url: DEFAULT_BASE_URL.to_string(),
            profile: "driving-car".to_string(),
            timeout_secs: 15,
        }
    }

    /// Set a custom base URL (for testing).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the routing profile.
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = profile.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

/// OpenRouteService directions client.
#[derive(Debug, Clone)]
pub struct OrsClient {
    http: reqwest::Client,
    api_key: Option<String>,
    base_url: String,
    profile: String,
}

impl OrsClient {
    /// Create a new client with the given configuration.
    pub fn new(config: DirectionsConfig) -> Result<Self, RoutingError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            api_key: config.api_key,
            base_url: config.base_url,
            profile: config.profile,
        })
    }

    /// Whether an API key is configured.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }

    async fn fetch(&self, start: Coordinate, end: Coordinate) -> Result<ProviderRoute, RoutingError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or_else(|| RoutingError::NotConfigured("no routing API key".to_string()))?;

        let url = format!("{}/v2/directions/{}/geojson", self.base_url, self.profile);
        let body = json!({
            "coordinates": [[start.lon(), start.lat()], [end.lon(), end.lat()]],
            "instructions": false,
        });

        let response = self
            .http
            .post(&url)
            .header("Authorization", api_key)
            .header("Accept", "application/json, application/geo+json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();

        if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
            return Err(RoutingError::Unauthorized);
        }

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(RoutingError::RateLimited);
        }

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(RoutingError::Api {
                status: status.as_u16(),
                message: body.chars().take(500).collect(),
            });
        }

        let body = response.text().await?;
        let route = parse_route(&body)?;
        debug!(
            points = route.points.len(),
            reported_miles = route.reported_distance_miles,
            "routing provider response"
        );
        Ok(route)
    }
}

impl DirectionsProvider for OrsClient {
    async fn directions(
        &self,
        start: Coordinate,
        end: Coordinate,
    ) -> Result<ProviderRoute, RoutingError> {
        self.fetch(start, end).await
    }
}

/// Parse a GeoJSON directions response, reordering `[lon, lat]` to (lat, lon).
fn parse_route(body: &str) -> Result<ProviderRoute, RoutingError> {
    let collection: FeatureCollection =
        serde_json::from_str(body).map_err(|e| RoutingError::Malformed(e.to_string()))?;

    let feature = collection
        .features
        .into_iter()
        .next()
        .ok_or_else(|| RoutingError::Malformed("no route features".to_string()))?;

    let points = feature
        .geometry
        .coordinates
        .iter()
        .map(|pair| match pair.as_slice() {
            [lon, lat, ..] => Coordinate::new(*lat, *lon)
                .map_err(|e| RoutingError::Malformed(e.to_string())),
            _ => Err(RoutingError::Malformed(format!(
                "coordinate has {} components",
                pair.len()
            ))),
        })
        .collect::<Result<Vec<_>, _>>()?;

    if points.len() < 2 {
        return Err(RoutingError::Malformed(format!(
            "route has {} points",
            points.len()
        )));
    }

    Ok(ProviderRoute {
        points,
        reported_distance_miles: feature.properties.summary.distance * MILES_PER_METER,
    })
}
