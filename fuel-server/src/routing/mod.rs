//! Driving route acquisition.
//!
//! One call to an external directions provider per route. Any provider
//! failure (error status, timeout, malformed payload, missing API key)
//! degrades silently to a deterministic straight-line interpolation, so
//! routing never fails a request.

mod client;
mod error;
pub mod fallback;
pub mod mock;
mod provider;
mod router;

pub use client::{DirectionsConfig, OrsClient};
pub use error::RoutingError;
pub use provider::{DirectionsProvider, ProviderRoute};
pub use router::{RouteResult, RouteSource, Router};
