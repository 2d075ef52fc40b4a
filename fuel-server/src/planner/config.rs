//! Configuration for fuel stop planning.

/// Vehicle and search parameters for stop planning.
#[derive(Debug, Clone)]
pub struct PlannerConfig {
    /// Vehicle range on a full tank (miles).
    pub max_range_miles: f64,

    /// Fuel efficiency (miles per gallon).
    pub miles_per_gallon: f64,

    /// Stations farther than this from the route are never considered (miles).
    pub max_station_distance_miles: f64,

    /// Distance walked between stop decisions (miles).
    pub stride_miles: f64,

    /// A stop is due once remaining range falls to this fraction of the
    /// full range.
    pub reserve_fraction: f64,

    /// How far behind the current position the search window starts (miles).
    pub look_back_miles: f64,

    /// Weight of the price per gallon in a candidate's score.
    pub price_weight: f64,

    /// Weight of the normalized route distance in a candidate's score.
    pub distance_weight: f64,

    /// Number of route coordinates returned in a response.
    pub max_response_coordinates: usize,
}

impl PlannerConfig {
    /// Fuel needed for a distance, in gallons.
    pub fn gallons_for(&self, miles: f64) -> f64 {
        miles / self.miles_per_gallon
    }

    /// Remaining range at which a stop becomes due (miles).
    pub fn reserve_miles(&self) -> f64 {
        self.max_range_miles * self.reserve_fraction
    }
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            max_range_miles: 500.0,
            miles_per_gallon: 10.0,
            max_station_distance_miles: 30.0,
            stride_miles: 100.0,
            reserve_fraction: 0.2,
            look_back_miles: 50.0,
            price_weight: 0.6,
            distance_weight: 0.4,
            max_response_coordinates: 50,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = PlannerConfig::default();

        assert_eq!(config.max_range_miles, 500.0);
        assert_eq!(config.miles_per_gallon, 10.0);
        assert_eq!(config.max_station_distance_miles, 30.0);
        assert_eq!(config.stride_miles, 100.0);
        assert_eq!(config.look_back_miles, 50.0);
        assert_eq!(config.max_response_coordinates, 50);
    }

    #[test]
    fn derived_values() {
        let config = PlannerConfig::default();

        assert_eq!(config.reserve_miles(), 100.0);
        assert_eq!(config.gallons_for(237.0), 23.7);
    }
}
