//! Geocoding error types.

/// Errors from a geocoding provider.
#[derive(Debug, thiserror::Error)]
pub enum GeocodeError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse the provider response
    #[error("JSON parse error: {message}")]
    Json { message: String },

    /// Provider returned a coordinate outside the valid range
    #[error("provider returned an invalid coordinate: {0}")]
    InvalidCoordinate(#[from] crate::domain::InvalidCoordinate),

    /// The configured User-Agent cannot be sent as a header
    #[error("invalid user agent: {0:?}")]
    InvalidUserAgent(String),
}

/// A location that could not be resolved to coordinates.
///
/// Covers both empty result sets and provider failures; the cause is logged
/// where it happens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("could not find coordinates for \"{location}\"")]
pub struct LocationNotFound {
    pub location: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = GeocodeError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "API error 503: Service Unavailable");

        let err = GeocodeError::Json {
            message: "expected value".into(),
        };
        assert_eq!(err.to_string(), "JSON parse error: expected value");

        let err = GeocodeError::InvalidUserAgent("bad\nagent".into());
        assert_eq!(err.to_string(), r#"invalid user agent: "bad\nagent""#);

        let err = LocationNotFound {
            location: "Atlantis, XX".into(),
        };
        assert_eq!(
            err.to_string(),
            "could not find coordinates for \"Atlantis, XX\""
        );
    }
}
