//! Web layer for the fuel route planner.
//!
//! Provides HTTP endpoints for planning routes and inspecting the station
//! catalog.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::{AppError, create_router};
pub use state::AppState;
