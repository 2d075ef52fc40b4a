//! End-to-end route planning.

use std::sync::Arc;

use tracing::{debug, info};

use crate::cache::{CacheConfig, TtlCache};
use crate::geocode::{Geocoder, GeocodingProvider, NominatimClient};
use crate::planner::{PlannerConfig, plan_stops};
use crate::routing::{DirectionsProvider, OrsClient, Router};
use crate::stations::{StationCatalog, nearby};

use super::error::PlanError;
use super::request::{RouteKey, RouteRequest};
use super::response::RouteResponse;

/// The service as deployed, talking to Nominatim and OpenRouteService.
pub type LiveRouteService = RouteService<NominatimClient, OrsClient>;

/// Plans fuel stops between two free-text locations.
///
/// Composes geocoding, routing, the station proximity search and the stop
/// planner, with a response cache in front keyed by the location pair.
pub struct RouteService<G: GeocodingProvider, D: DirectionsProvider> {
    geocoder: Geocoder<G>,
    router: Router<D>,
    catalog: StationCatalog,
    responses: TtlCache<RouteKey, Arc<RouteResponse>>,
    config: PlannerConfig,
}

impl<G: GeocodingProvider, D: DirectionsProvider> RouteService<G, D> {
    /// Create a service with a fresh response cache.
    pub fn new(
        geocoder: Geocoder<G>,
        router: Router<D>,
        catalog: StationCatalog,
        config: PlannerConfig,
        response_cache: &CacheConfig,
    ) -> Self {
        Self {
            geocoder,
            router,
            catalog,
            responses: TtlCache::new(response_cache),
            config,
        }
    }

    /// Plan a trip between two locations.
    ///
    /// Input is validated before any external call. Cached responses are
    /// returned as-is. Only geocoding failures fail the request; routing
    /// problems fall back to a straight line and a trip with no usable
    /// stations comes back flagged as infeasible.
    pub async fn plan(&self, start: &str, end: &str) -> Result<Arc<RouteResponse>, PlanError> {
        let request = RouteRequest::new(start, end)?;
        let key = request.key();

        if let Some(cached) = self.responses.get(&key).await {
            debug!(start = request.start(), end = request.end(), "route cache hit");
            return Ok(cached);
        }

        let (start_coord, end_coord) = futures::join!(
            self.geocoder.resolve(request.start()),
            self.geocoder.resolve(request.end())
        );
        let start_coord = start_coord.map_err(|e| PlanError::StartNotFound(e.location))?;
        let end_coord = end_coord.map_err(|e| PlanError::EndNotFound(e.location))?;

        let route = self.router.route(start_coord, end_coord).await;

        let stations = self.catalog.located_stations().await;
        let candidates = nearby(
            &route.polyline,
            &stations,
            self.config.max_station_distance_miles,
        );
        let plan = plan_stops(&route.polyline, &candidates, &self.config);

        let response = Arc::new(RouteResponse::build(
            &route,
            &plan,
            candidates.len(),
            &self.config,
        ));

        info!(
            start = request.start(),
            end = request.end(),
            source = %route.source,
            miles = response.total_distance_miles,
            stops = response.fuel_stops.len(),
            feasible = response.feasible,
            "planned route"
        );

        self.responses.insert(key, response.clone()).await;
        Ok(response)
    }

    pub fn catalog(&self) -> &StationCatalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Coordinate, Price, StateCode, Station, StationId};
    use crate::geocode::mock::StaticGeocoder;
    use crate::routing::RouteResult;
    use crate::routing::RouteSource;
    use crate::routing::mock::StaticDirections;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    fn chicago() -> Coordinate {
        coord(41.8781, -87.6298)
    }

    fn detroit() -> Coordinate {
        coord(42.3314, -83.0458)
    }

    fn denver() -> Coordinate {
        coord(39.7392, -104.9903)
    }

    fn station(id: u32, coordinate: Coordinate, price: f64) -> Station {
        Station {
            id: StationId(id),
            name: format!("Station {id}"),
            address: String::new(),
            city: "Somewhere".to_string(),
            state: StateCode::parse("IA").unwrap(),
            price: Price::from_dollars(price).unwrap(),
            coordinate: Some(coordinate),
        }
    }

    fn geocoder() -> StaticGeocoder {
        StaticGeocoder::new()
            .with_location("Chicago, IL", chicago())
            .with_location("Detroit, MI", detroit())
            .with_location("Denver, CO", denver())
    }

    fn service(
        geocoder: StaticGeocoder,
        directions: StaticDirections,
        stations: Vec<Station>,
    ) -> RouteService<StaticGeocoder, StaticDirections> {
        RouteService::new(
            Geocoder::new(geocoder, &CacheConfig::geocode()),
            Router::new(directions),
            StationCatalog::from_stations(stations),
            PlannerConfig::default(),
            &CacheConfig::response(),
        )
    }

    #[tokio::test]
    async fn chicago_to_detroit_needs_no_stops() {
        // About 12 miles from the third vertex of the fallback line.
        let stations = vec![station(1, coord(42.2, -84.6), 3.1)];
        let svc = service(geocoder(), StaticDirections::failing(), stations);

        let response = svc.plan("Chicago, IL", "Detroit, MI").await.unwrap();

        // Straight-line (geodesic) distance; the driving distance is longer.
        assert!(
            (230.0..245.0).contains(&response.total_distance_miles),
            "got {}",
            response.total_distance_miles
        );
        assert!(response.feasible);
        assert!(response.fuel_stops.is_empty());
        assert_eq!(response.total_fuel_cost, 0.0);
        assert!(
            (response.total_fuel_needed_gallons - response.total_distance_miles / 10.0).abs()
                < 0.01
        );
        assert_eq!(response.api_info.route_source, RouteSource::Fallback);
        assert_eq!(response.api_info.stations_considered, 1);
        // Three segments for a short fallback route.
        assert_eq!(response.route_coordinates.len(), 4);
    }

    #[tokio::test]
    async fn cached_response_makes_no_external_calls() {
        let geo = geocoder();
        let directions = StaticDirections::failing();
        let svc = service(geo.clone(), directions.clone(), vec![]);

        let first = svc.plan("Chicago, IL", "Detroit, MI").await.unwrap();
        assert_eq!(geo.call_count(), 2);
        assert_eq!(directions.call_count(), 1);

        let second = svc.plan("  chicago,   il", "DETROIT, MI").await.unwrap();
        assert_eq!(first, second);
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(geo.call_count(), 2);
        assert_eq!(directions.call_count(), 1);
    }

    #[tokio::test]
    async fn validation_happens_before_any_call() {
        let geo = geocoder();
        let directions = StaticDirections::failing();
        let svc = service(geo.clone(), directions.clone(), vec![]);

        let err = svc.plan("Chicago, IL", "chicago, il").await.unwrap_err();
        assert!(matches!(err, PlanError::Validation { .. }));

        let err = svc.plan("", "Detroit, MI").await.unwrap_err();
        assert!(matches!(err, PlanError::Validation { .. }));

        assert_eq!(geo.call_count(), 0);
        assert_eq!(directions.call_count(), 0);
    }

    #[tokio::test]
    async fn unknown_locations_name_the_side() {
        let svc = service(geocoder(), StaticDirections::failing(), vec![]);

        let err = svc.plan("Atlantis", "Detroit, MI").await.unwrap_err();
        assert_eq!(err, PlanError::StartNotFound("Atlantis".to_string()));

        let err = svc.plan("Chicago, IL", "El Dorado").await.unwrap_err();
        assert_eq!(err, PlanError::EndNotFound("El Dorado".to_string()));

        // Both unknown: the start is reported.
        let err = svc.plan("Atlantis", "El Dorado").await.unwrap_err();
        assert_eq!(err, PlanError::StartNotFound("Atlantis".to_string()));
    }

    #[tokio::test]
    async fn failures_are_not_cached() {
        let geo = geocoder();
        let svc = service(geo.clone(), StaticDirections::failing(), vec![]);

        geo.set_failing(true);
        assert!(svc.plan("Chicago, IL", "Detroit, MI").await.is_err());

        geo.set_failing(false);
        assert!(svc.plan("Chicago, IL", "Detroit, MI").await.is_ok());
    }

    #[tokio::test]
    async fn long_trip_without_stations_is_infeasible() {
        let svc = service(geocoder(), StaticDirections::failing(), vec![]);

        let response = svc.plan("Chicago, IL", "Denver, CO").await.unwrap();

        assert!(response.total_distance_miles > 500.0);
        assert!(!response.feasible);
        assert!(response.warning.is_some());
        assert!(response.fuel_stops.is_empty());
        assert_eq!(response.total_fuel_cost, 0.0);
    }

    #[tokio::test]
    async fn long_trip_with_stations_gets_priced_stops() {
        // Put stations on the interior vertices of the fallback route.
        let route = RouteResult::fallback(chicago(), denver());
        let points = route.polyline.points();
        let stations: Vec<Station> = points[1..points.len() - 1]
            .iter()
            .enumerate()
            .map(|(i, &p)| station(i as u32 + 1, p, 3.0 + i as f64 * 0.1))
            .collect();

        let svc = service(geocoder(), StaticDirections::failing(), stations);
        let response = svc.plan("Chicago, IL", "Denver, CO").await.unwrap();

        assert!(response.feasible);
        assert!(!response.fuel_stops.is_empty());

        let per_stop = response.total_distance_miles / 10.0 / response.fuel_stops.len() as f64;
        let expected: f64 = response.fuel_stops.iter().map(|s| s.price * per_stop).sum();
        assert!((response.total_fuel_cost - expected).abs() < 0.05);

        let along: Vec<f64> = response.fuel_stops.iter().map(|s| s.along_route_miles).collect();
        assert!(along.windows(2).all(|w| w[0] <= w[1]));
    }

    #[tokio::test]
    async fn provider_route_is_used_when_available() {
        let midpoint = coord(42.2, -85.5);
        let directions = StaticDirections::returning(vec![chicago(), midpoint, detroit()], 281.0);
        let svc = service(geocoder(), directions, vec![]);

        let response = svc.plan("Chicago, IL", "Detroit, MI").await.unwrap();

        assert_eq!(response.api_info.route_source, RouteSource::RoutingApi);
        assert_eq!(response.route_coordinates.len(), 3);
        assert_eq!(response.route_coordinates[1], [42.2, -85.5]);
    }
}
