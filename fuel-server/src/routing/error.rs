//! Routing provider error types.

/// Errors from the directions provider.
///
/// None of these reach the caller: the router logs them and falls back to a
/// straight-line route.
#[derive(Debug, thiserror::Error)]
pub enum RoutingError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned an error status code
    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    /// Rate limited by the provider
    #[error("rate limited by routing provider")]
    RateLimited,

    /// Invalid API key or unauthorized
    #[error("unauthorized (invalid API key)")]
    Unauthorized,

    /// Response did not contain a usable route
    #[error("malformed route payload: {0}")]
    Malformed(String),

    /// No API key configured
    #[error("not configured: {0}")]
    NotConfigured(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = RoutingError::Api {
            status: 500,
            message: "Internal Server Error".into(),
        };
        assert_eq!(err.to_string(), "API error 500: Internal Server Error");

        let err = RoutingError::Malformed("no features".into());
        assert_eq!(err.to_string(), "malformed route payload: no features");

        let err = RoutingError::NotConfigured("ORS_API_KEY is not set".into());
        assert_eq!(err.to_string(), "not configured: ORS_API_KEY is not set");
    }
}
