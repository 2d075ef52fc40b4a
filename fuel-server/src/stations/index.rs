//! Route proximity search over the station catalog.

use tracing::debug;

use crate::domain::{NearbyStation, RoutePolyline, Station};

/// Maximum number of polyline points a station is compared against.
pub const ROUTE_SAMPLE_POINTS: usize = 20;

/// Once a station is this close to a sampled point, stop scanning further
/// points for it.
pub const EARLY_EXIT_MILES: f64 = 5.0;

/// Find stations within `threshold_miles` of the route.
///
/// The polyline is downsampled to about [`ROUTE_SAMPLE_POINTS`] points and a
/// station's distance is its minimum distance to any sampled point, rounded
/// to two decimals. Stations without a coordinate are ignored. The result
/// follows catalog order.
pub fn nearby(
    polyline: &RoutePolyline,
    stations: &[Station],
    threshold_miles: f64,
) -> Vec<NearbyStation> {
    let sampled = polyline.sample(ROUTE_SAMPLE_POINTS);
    // Only a bound inside the threshold is safe to exit on.
    let early_exit = (EARLY_EXIT_MILES <= threshold_miles).then_some(EARLY_EXIT_MILES);

    let found: Vec<NearbyStation> = stations
        .iter()
        .filter_map(|station| {
            let coordinate = station.located()?;

            let mut best = f64::INFINITY;
            for point in &sampled {
                best = best.min(coordinate.miles_to(point));
                if early_exit.is_some_and(|bound| best < bound) {
                    break;
                }
            }

            (best <= threshold_miles).then(|| NearbyStation {
                station: station.clone(),
                coordinate,
                distance_from_route: round2(best),
            })
        })
        .collect();

    debug!(
        sampled = sampled.len(),
        candidates = stations.len(),
        found = found.len(),
        threshold_miles,
        "Filtered stations near route"
    );

    found
}

pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
