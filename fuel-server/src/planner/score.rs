//! Candidate scoring for stop selection.
//!
//! Lower scores are better. Price dominates; distance from the route is a
//! penalty normalized by the catchment radius.

use std::cmp::Ordering;

use crate::domain::StationId;

use super::PlannerConfig;

/// A station eligible for the current stop, with its score.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Candidate {
    /// Index into the nearby station list.
    pub index: usize,
    pub id: StationId,
    pub score: f64,
    /// Minimum distance to any window vertex (miles).
    pub distance: f64,
    /// Cumulative route distance of the nearest window vertex (miles).
    pub along_route: f64,
}

/// Score a station: `price_weight * price + distance_weight * (distance / catchment)`.
pub(crate) fn score(config: &PlannerConfig, price_dollars: f64, distance_miles: f64) -> f64 {
    config.price_weight * price_dollars
        + config.distance_weight * (distance_miles / config.max_station_distance_miles)
}

/// Order candidates best-first: lowest score, then lowest station id.
pub(crate) fn compare(a: &Candidate, b: &Candidate) -> Ordering {
    a.score.total_cmp(&b.score).then_with(|| a.id.cmp(&b.id))
}

/// Pick the best candidate, if any.
pub(crate) fn best(candidates: impl IntoIterator<Item = Candidate>) -> Option<Candidate> {
    candidates.into_iter().min_by(compare)
}
