//! Nominatim geocoding HTTP client.

use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use tracing::debug;

use crate::domain::Coordinate;

use super::error::GeocodeError;
use super::provider::GeocodingProvider;

/// Default base URL for the public Nominatim instance.
pub const DEFAULT_BASE_URL: &str = "https://nominatim.openstreetmap.org";

/// Default user agent. Nominatim rejects requests without one.
pub const DEFAULT_USER_AGENT: &str = "fuel_route_optimizer_v1";

/// A single search hit. Nominatim encodes coordinates as decimal strings.
#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

/// Configuration for the geocoding client.
#[derive(Debug, Clone)]
pub struct GeocoderConfig {
    /// Base URL for the API
    pub base_url: String,
    /// User-Agent header sent with every request
    pub user_agent: String,
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// ISO country codes to bias results towards
    pub country_codes: String,
}

impl GeocoderConfig {
    /// Create a config with the given user agent and default settings.
    pub fn new(user_agent: impl Into<String>) -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: user_agent.into(),
            timeout_secs: 10,
            country_codes: "us".to_string(),
        }
    }

    /// Set a custom base URL (for testing or a self-hosted instance).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }
}

impl Default for GeocoderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_USER_AGENT)
    }
}

/// Nominatim search API client.
#[derive(Debug, Clone)]
pub struct NominatimClient {
    http: reqwest::Client,
    base_url: String,
    country_codes: String,
}

impl NominatimClient {
    /// Create a new client with the given configuration.
    pub fn new(config: GeocoderConfig) -> Result<Self, GeocodeError> {
        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|_| GeocodeError::InvalidUserAgent(config.user_agent.clone()))?;
        headers.insert(USER_AGENT, user_agent);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: config.base_url,
            country_codes: config.country_codes,
        })
    }

    async fn search(&self, query: &str) -> Result<Option<Coordinate>, GeocodeError> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("limit", "1"),
                ("countrycodes", self.country_codes.as_str()),
            ])
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GeocodeError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let hit = parse_first_hit(&body)?;
        debug!(query, found = hit.is_some(), "geocoding response");
        Ok(hit)
    }
}

impl GeocodingProvider for NominatimClient {
    async fn geocode(&self, query: &str) -> Result<Option<Coordinate>, GeocodeError> {
        self.search(query).await
    }
}

/// Parse a Nominatim search response body into its first coordinate.
fn parse_first_hit(body: &str) -> Result<Option<Coordinate>, GeocodeError> {
    let hits: Vec<SearchHit> = serde_json::from_str(body).map_err(|e| GeocodeError::Json {
        message: e.to_string(),
    })?;

    let Some(hit) = hits.first() else {
        return Ok(None);
    };

    let lat = parse_degrees(&hit.lat)?;
    let lon = parse_degrees(&hit.lon)?;
    Ok(Some(Coordinate::new(lat, lon)?))
}

fn parse_degrees(s: &str) -> Result<f64, GeocodeError> {
    s.trim().parse().map_err(|_| GeocodeError::Json {
        message: format!("invalid coordinate value: {s:?}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_builder() {
        let config = GeocoderConfig::new("test-agent")
            .with_base_url("http://localhost:8080")
            .with_timeout(3);

        assert_eq!(config.user_agent, "test-agent");
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout_secs, 3);
        assert_eq!(config.country_codes, "us");
    }

    #[test]
    fn config_defaults() {
        let config = GeocoderConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.user_agent, DEFAULT_USER_AGENT);
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn client_creation() {
        assert!(NominatimClient::new(GeocoderConfig::default()).is_ok());
    }

    #[test]
    fn invalid_user_agent_is_rejected() {
        let config = GeocoderConfig::new("bad\nagent");
        assert!(matches!(
            NominatimClient::new(config),
            Err(GeocodeError::InvalidUserAgent(agent)) if agent == "bad\nagent"
        ));
    }

    #[test]
    fn parse_hit() {
        let body = r#"[{"place_id":1,"lat":"41.8755616","lon":"-87.6244212","display_name":"Chicago"}]"#;
        let coord = parse_first_hit(body).unwrap().unwrap();
        assert_eq!(coord.lat(), 41.8755616);
        assert_eq!(coord.lon(), -87.6244212);
    }

    #[test]
    fn parse_empty_result_set() {
        assert_eq!(parse_first_hit("[]").unwrap(), None);
    }

    #[test]
    fn parse_malformed_body() {
        assert!(matches!(
            parse_first_hit("{\"error\":\"oops\"}"),
            Err(GeocodeError::Json { .. })
        ));
        assert!(matches!(
            parse_first_hit(r#"[{"lat":"north","lon":"1.0"}]"#),
            Err(GeocodeError::Json { .. })
        ));
    }

    #[test]
    fn parse_out_of_range_coordinate() {
        assert!(matches!(
            parse_first_hit(r#"[{"lat":"123.0","lon":"1.0"}]"#),
            Err(GeocodeError::InvalidCoordinate(_))
        ));
    }

    // Live requests against Nominatim are not exercised here; they need
    // network access and are rate limited to one request per second.
}
