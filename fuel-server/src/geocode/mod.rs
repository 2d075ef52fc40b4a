//! Location geocoding.
//!
//! Resolves free-text locations ("Chicago, IL") to coordinates through an
//! external provider, biased towards the USA, with a read-through cache.
//! Provider failures and empty result sets both surface as
//! `LocationNotFound`; whether that is fatal is the caller's decision.

mod client;
mod error;
pub mod mock;
mod provider;
mod service;

pub use client::{GeocoderConfig, NominatimClient};
pub use error::{GeocodeError, LocationNotFound};
pub use provider::GeocodingProvider;
pub use service::{COUNTRY_BIAS, Geocoder, normalize_query};
