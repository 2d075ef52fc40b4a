//! Error types for route planning requests.

/// A request field that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    StartLocation,
    EndLocation,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::StartLocation => "start_location",
            Field::EndLocation => "end_location",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors that fail a planning request.
///
/// Routing failures never appear here: the router falls back instead.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PlanError {
    /// The request was malformed. Raised before any external call.
    #[error("{field}: {message}")]
    Validation { field: Field, message: String },

    #[error(
        "Could not find coordinates for start location: \"{0}\". Please check spelling and ensure it's a valid US location."
    )]
    StartNotFound(String),

    #[error(
        "Could not find coordinates for end location: \"{0}\". Please check spelling and ensure it's a valid US location."
    )]
    EndNotFound(String),
}

impl PlanError {
    pub(crate) fn validation(field: Field, message: impl Into<String>) -> Self {
        PlanError::Validation {
            field,
            message: message.into(),
        }
    }
}
