//! Station catalog error types.

/// Errors that can occur when loading the station catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Reading the catalog file failed
    #[error("failed to read station catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse catalog JSON
    #[error("JSON parse error in station catalog: {message}")]
    Json { message: String },

    /// Catalog has no source to refresh from
    #[error("station catalog has no source to refresh from")]
    NoSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = CatalogError::Json {
            message: "expected `,`".into(),
        };
        assert_eq!(
            err.to_string(),
            "JSON parse error in station catalog: expected `,`"
        );

        let err = CatalogError::Io {
            path: "data/stations.json".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "not found"),
        };
        assert!(err.to_string().starts_with("failed to read station catalog data/stations.json"));
    }
}
