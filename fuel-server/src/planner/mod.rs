//! Fuel stop planner.
//!
//! This module answers: "given this route and the stations near it, where
//! should the vehicle refuel?"
//!
//! The algorithm is a greedy stride walk. It does not search for a globally
//! cheapest plan; it picks a cheap, close station each time the tank runs
//! low, which keeps plans short and predictable.

mod config;
mod score;
mod stops;

pub use config::PlannerConfig;
pub use stops::{FuelStop, InfeasibleReason, PlanOutcome, StopPlan, plan_stops};
