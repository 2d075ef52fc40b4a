//! Planning request validation.

use super::error::{Field, PlanError};

/// Shortest accepted location text, after trimming.
pub const MIN_LOCATION_LEN: usize = 3;

/// Longest accepted location text, after trimming.
pub const MAX_LOCATION_LEN: usize = 200;

/// A validated pair of trimmed, distinct locations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteRequest {
    start: String,
    end: String,
}

impl RouteRequest {
    /// Validate raw input. Each location must be 3 to 200 characters once
    /// trimmed, and the two must differ ignoring case.
    pub fn new(start: &str, end: &str) -> Result<Self, PlanError> {
        let start = validate_location(Field::StartLocation, "Start location", start)?;
        let end = validate_location(Field::EndLocation, "End location", end)?;

        if start.to_lowercase() == end.to_lowercase() {
            return Err(PlanError::validation(
                Field::EndLocation,
                "Start and end locations must be different",
            ));
        }

        Ok(Self { start, end })
    }

    pub fn start(&self) -> &str {
        &self.start
    }

    pub fn end(&self) -> &str {
        &self.end
    }

    /// Response cache key for this request.
    pub fn key(&self) -> RouteKey {
        RouteKey {
            start: normalize(&self.start),
            end: normalize(&self.end),
        }
    }
}

fn validate_location(field: Field, label: &str, raw: &str) -> Result<String, PlanError> {
    let value = raw.trim();
    let len = value.chars().count();

    if len == 0 {
        return Err(PlanError::validation(field, format!("{label} cannot be empty")));
    }
    if len < MIN_LOCATION_LEN {
        return Err(PlanError::validation(
            field,
            format!("{label} must be at least {MIN_LOCATION_LEN} characters long"),
        ));
    }
    if len > MAX_LOCATION_LEN {
        return Err(PlanError::validation(
            field,
            format!("{label} must be at most {MAX_LOCATION_LEN} characters long"),
        ));
    }

    Ok(value.to_string())
}

/// Key of the response cache: both locations lowercased with whitespace
/// collapsed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RouteKey {
    start: String,
    end: String,
}

fn normalize(location: &str) -> String {
    location
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}
