//! Greedy fuel stop selection along a route.
//!
//! The route is walked in fixed strides of covered distance. At each stride
//! the planner asks whether a stop is due (the reserve is reached, or the
//! rest of the trip is longer than the remaining range). When it is, the
//! best-scoring station within reach of a window of route vertices becomes
//! the next stop, and the range counter restarts at that station.

use std::collections::HashSet;
use std::fmt;

use tracing::{debug, info, warn};

use crate::domain::{Coordinate, NearbyStation, RoutePolyline, Station, StationId};
use crate::stations::round2;

use super::PlannerConfig;
use super::score::{self, Candidate};

/// Smallest stride the walk will take, so a misconfigured stride cannot
/// stall it.
const MIN_STRIDE_MILES: f64 = 1.0;

/// Slack allowed when comparing a gap against the range.
const GAP_TOLERANCE_MILES: f64 = 1e-6;

/// A station selected as a refueling stop.
#[derive(Debug, Clone, PartialEq)]
pub struct FuelStop {
    pub station: Station,
    pub coordinate: Coordinate,
    /// Distance from the nearest vertex of the search window (miles, 2dp).
    pub distance_from_route: f64,
    /// Cumulative route distance of the vertex nearest the station (miles).
    pub along_route_miles: f64,
}

/// Why no stop plan exists for a route that needs refueling.
#[derive(Debug, Clone, PartialEq)]
pub enum InfeasibleReason {
    /// No catalog station lies within the catchment radius of the route.
    NoStationsNearRoute {
        total_distance_miles: f64,
        max_range_miles: f64,
    },

    /// Stations exist near the route, but none fell within reach when a
    /// stop was due.
    NoStationInRange {
        total_distance_miles: f64,
        max_range_miles: f64,
    },

    /// Stops were found, but one stretch of the trip is longer than the
    /// range.
    RangeGap {
        from_miles: f64,
        to_miles: f64,
        max_range_miles: f64,
    },
}

impl fmt::Display for InfeasibleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoStationsNearRoute {
                total_distance_miles,
                max_range_miles,
            } => write!(
                f,
                "route of {total_distance_miles:.1} miles exceeds the vehicle range of \
                 {max_range_miles:.0} miles and no fuel stations were found near the route"
            ),
            Self::NoStationInRange {
                total_distance_miles,
                max_range_miles,
            } => write!(
                f,
                "route of {total_distance_miles:.1} miles exceeds the vehicle range of \
                 {max_range_miles:.0} miles and no fuel station is within reach"
            ),
            Self::RangeGap {
                from_miles,
                to_miles,
                max_range_miles,
            } => write!(
                f,
                "no fuel station covers the stretch from mile {from_miles:.1} to mile \
                 {to_miles:.1}, which exceeds the vehicle range of {max_range_miles:.0} miles"
            ),
        }
    }
}

/// Outcome of stop planning.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanOutcome {
    /// The trip can be driven with these stops, in route order. May be empty.
    Feasible(Vec<FuelStop>),

    /// The trip needs fuel but the stations cannot carry it to the end.
    Infeasible(InfeasibleReason),
}

/// Stops for a route plus its total length.
#[derive(Debug, Clone, PartialEq)]
pub struct StopPlan {
    pub total_distance_miles: f64,
    pub outcome: PlanOutcome,
}

impl StopPlan {
    pub fn is_feasible(&self) -> bool {
        matches!(self.outcome, PlanOutcome::Feasible(_))
    }

    /// The selected stops; empty when infeasible.
    pub fn stops(&self) -> &[FuelStop] {
        match &self.outcome {
            PlanOutcome::Feasible(stops) => stops,
            PlanOutcome::Infeasible(_) => &[],
        }
    }
}

/// Choose refueling stops for a route.
///
/// `nearby` should hold the stations already filtered to the route's
/// catchment. The returned stops never repeat a station and are monotonic
/// in `along_route_miles`. A feasible plan never leaves more than the
/// vehicle range between the start, consecutive stops and the destination.
pub fn plan_stops(
    polyline: &RoutePolyline,
    nearby: &[NearbyStation],
    config: &PlannerConfig,
) -> StopPlan {
    let cumulative = polyline.cumulative_miles();
    let total = cumulative.last().copied().unwrap_or(0.0);
    let stride = config.stride_miles.max(MIN_STRIDE_MILES);

    if total <= config.max_range_miles {
        debug!(total_distance_miles = total, "Route is within range");
        return StopPlan {
            total_distance_miles: total,
            outcome: PlanOutcome::Feasible(Vec::new()),
        };
    }

    let mut stops: Vec<FuelStop> = Vec::new();
    let mut used: HashSet<StationId> = HashSet::new();
    let mut covered = 0.0;
    // Along-route position of the last refuel; the trip starts full.
    let mut fuel_at = 0.0;

    while covered < total {
        let remaining_range = config.max_range_miles - (covered - fuel_at);
        let remaining_trip = total - covered;
        let must_refuel = remaining_trip > remaining_range;
        let due = remaining_range <= config.reserve_miles() || must_refuel;

        if due {
            let reach = (fuel_at + config.max_range_miles).min(total);
            let window_start = (covered - config.look_back_miles).max(0.0);

            let select = |start: f64| {
                let window = window_vertices(polyline.points(), &cumulative, start, reach);
                score::best(
                    nearby
                        .iter()
                        .enumerate()
                        .filter(|(_, n)| !used.contains(&n.station.id))
                        .filter_map(|(index, n)| candidate(config, index, n, &window))
                        .filter(|c| (fuel_at..=reach).contains(&c.along_route)),
                )
            };

            // Stations between the last stop and the look-back edge stay
            // eligible when the trip cannot be finished without them.
            let picked = match select(window_start) {
                Some(best) => Some(best),
                None if must_refuel && window_start > fuel_at => select(fuel_at),
                None => None,
            };

            match picked {
                Some(best) => {
                    let chosen = &nearby[best.index];
                    debug!(
                        station = %chosen.station.id,
                        covered,
                        along_route = best.along_route,
                        score = best.score,
                        "Selected fuel stop"
                    );
                    used.insert(chosen.station.id);
                    stops.push(FuelStop {
                        station: chosen.station.clone(),
                        coordinate: chosen.coordinate,
                        distance_from_route: round2(best.distance),
                        along_route_miles: best.along_route,
                    });
                    fuel_at = best.along_route;
                    // The walk resumes from the stop.
                    covered = best.along_route;
                }
                None => debug!(covered, window_start, reach, "No station in window"),
            }
        }

        covered += stride;
    }

    let reason = if stops.is_empty() {
        Some(if nearby.is_empty() {
            InfeasibleReason::NoStationsNearRoute {
                total_distance_miles: total,
                max_range_miles: config.max_range_miles,
            }
        } else {
            InfeasibleReason::NoStationInRange {
                total_distance_miles: total,
                max_range_miles: config.max_range_miles,
            }
        })
    } else {
        first_gap(&stops, total, config.max_range_miles).map(|(from_miles, to_miles)| {
            InfeasibleReason::RangeGap {
                from_miles,
                to_miles,
                max_range_miles: config.max_range_miles,
            }
        })
    };

    if let Some(reason) = reason {
        warn!(%reason, "Route is infeasible");
        return StopPlan {
            total_distance_miles: total,
            outcome: PlanOutcome::Infeasible(reason),
        };
    }

    info!(
        total_distance_miles = total,
        stops = stops.len(),
        "Planned fuel stops"
    );

    StopPlan {
        total_distance_miles: total,
        outcome: PlanOutcome::Feasible(stops),
    }
}

/// The first stretch, from the start through each stop to the destination,
/// that is longer than the range.
fn first_gap(stops: &[FuelStop], total: f64, max_range_miles: f64) -> Option<(f64, f64)> {
    let positions: Vec<f64> = std::iter::once(0.0)
        .chain(stops.iter().map(|s| s.along_route_miles))
        .chain(std::iter::once(total))
        .collect();

    positions
        .windows(2)
        .map(|pair| (pair[0], pair[1]))
        .find(|(from, to)| to - from > max_range_miles + GAP_TOLERANCE_MILES)
}

/// A route vertex with its cumulative distance.
#[derive(Debug, Clone, Copy)]
struct WindowVertex {
    point: Coordinate,
    along_route: f64,
}

/// Vertices whose cumulative distance lies in `[start, end]`, or every
/// vertex if none do.
fn window_vertices(
    points: &[Coordinate],
    cumulative: &[f64],
    start: f64,
    end: f64,
) -> Vec<WindowVertex> {
    let all = points
        .iter()
        .zip(cumulative)
        .map(|(&point, &along_route)| WindowVertex { point, along_route });

    let inside: Vec<WindowVertex> = all
        .clone()
        .filter(|v| (start..=end).contains(&v.along_route))
        .collect();

    if inside.is_empty() {
        all.collect()
    } else {
        inside
    }
}

/// Score a station against the window, if it is within the catchment.
fn candidate(
    config: &PlannerConfig,
    index: usize,
    nearby: &NearbyStation,
    window: &[WindowVertex],
) -> Option<Candidate> {
    let (distance, along_route) = window
        .iter()
        .map(|v| (nearby.coordinate.miles_to(&v.point), v.along_route))
        .min_by(|a, b| a.0.total_cmp(&b.0))?;

    if distance > config.max_station_distance_miles {
        return None;
    }

    Some(Candidate {
        index,
        id: nearby.station.id,
        score: score::score(config, nearby.station.price.dollars(), distance),
        distance,
        along_route,
    })
}
