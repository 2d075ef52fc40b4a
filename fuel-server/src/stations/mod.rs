//! Fuel station catalog and route proximity search.
//!
//! The catalog is a read-only snapshot of stations loaded from a JSON file
//! produced by the ingestion job, refreshed periodically. The index finds
//! the stations within a catchment radius of a route.

mod catalog;
mod error;
mod index;
mod source;

pub use catalog::{CatalogStats, StationCatalog};
pub use error::CatalogError;
pub use index::{EARLY_EXIT_MILES, ROUTE_SAMPLE_POINTS, nearby};
pub use source::{JsonFileSource, RecordError, StationRecord, build_stations};

pub(crate) use index::round2;
