//! Planning response payload.

use serde::Serialize;

use crate::planner::{FuelStop, PlanOutcome, PlannerConfig, StopPlan};
use crate::routing::{RouteResult, RouteSource};
use crate::stations::round2;

/// A fuel stop as shown to the caller.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FuelStopView {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    /// Price per gallon in USD.
    pub price: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub distance_from_route: f64,
    pub along_route_miles: f64,
}

impl From<&FuelStop> for FuelStopView {
    fn from(stop: &FuelStop) -> Self {
        Self {
            name: stop.station.name.clone(),
            address: stop.station.address.clone(),
            city: stop.station.city.clone(),
            state: stop.station.state.to_string(),
            price: stop.station.price.dollars(),
            latitude: stop.coordinate.lat(),
            longitude: stop.coordinate.lon(),
            distance_from_route: stop.distance_from_route,
            along_route_miles: round2(stop.along_route_miles),
        }
    }
}

/// How the response was produced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiInfo {
    pub route_source: RouteSource,
    pub stations_considered: usize,
    pub vehicle_range_miles: f64,
    pub fuel_efficiency_mpg: f64,
}

/// The full answer to a planning request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteResponse {
    pub total_distance_miles: f64,
    pub total_fuel_cost: f64,
    pub total_fuel_needed_gallons: f64,
    /// False when the trip needs fuel but no stop could be found.
    pub feasible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
    pub fuel_stops: Vec<FuelStopView>,
    pub route_polyline: String,
    /// `[lat, lon]` pairs, capped at the configured count.
    pub route_coordinates: Vec<[f64; 2]>,
    pub api_info: ApiInfo,
}

impl RouteResponse {
    /// Assemble a response from the route, its stop plan and the number of
    /// stations found near the route.
    pub fn build(
        route: &RouteResult,
        plan: &StopPlan,
        stations_considered: usize,
        config: &PlannerConfig,
    ) -> Self {
        let gallons = config.gallons_for(plan.total_distance_miles);
        let stops = plan.stops();

        let warning = match &plan.outcome {
            PlanOutcome::Feasible(_) => None,
            PlanOutcome::Infeasible(reason) => Some(reason.to_string()),
        };

        Self {
            total_distance_miles: round2(plan.total_distance_miles),
            total_fuel_cost: round2(fuel_cost(stops, gallons)),
            total_fuel_needed_gallons: round2(gallons),
            feasible: plan.is_feasible(),
            warning,
            fuel_stops: stops.iter().map(FuelStopView::from).collect(),
            route_polyline: route.description.clone(),
            route_coordinates: route
                .polyline
                .points()
                .iter()
                .take(config.max_response_coordinates)
                .map(|c| c.to_lat_lon())
                .collect(),
            api_info: ApiInfo {
                route_source: route.source,
                stations_considered,
                vehicle_range_miles: config.max_range_miles,
                fuel_efficiency_mpg: config.miles_per_gallon,
            },
        }
    }
}

/// Cost of buying `gallons` split evenly across the stops. Zero without stops.
pub fn fuel_cost(stops: &[FuelStop], gallons: f64) -> f64 {
    if stops.is_empty() {
        return 0.0;
    }
    let per_stop = gallons / stops.len() as f64;
    stops
        .iter()
        .map(|stop| stop.station.price.dollars() * per_stop)
        .sum()
}
