use std::collections::HashMap;

use crate::data_types::common::{RouteRole, TripContext, VehicleClass};
use crate::data_types::comparison::FeatureVector;
use crate::data_types::osrm::RawRoute;

/// No elevation source is integrated; the feature is pinned to zero until one is.
pub const ELEVATION_GAIN_PLACEHOLDER_M: f64 = 0.0;

/// No live traffic signal is consulted either.
pub const TRAFFIC_INDEX: f64 = 1.0;

/// Geometry density per derived turn: one turn per this many path points.
const POINTS_PER_TURN: usize = 10;

/// One speed hump assumed per this many turns.
const TURNS_PER_HUMP: u32 = 4;

/// Immutable per-vehicle assumptions handed to the extractor. Must match the
/// prediction service's training-time vehicle table.
pub struct FeatureDefaults {
    weights_kg: HashMap<VehicleClass, f64>,
    fallback_weight_kg: f64,
    traffic_index: f64,
}

impl Default for FeatureDefaults {
    fn default() -> Self {
        Self {
            weights_kg: HashMap::from([
                (VehicleClass::Car, 1200.0),
                (VehicleClass::Van, 2500.0),
                (VehicleClass::Bike, 200.0),
                (VehicleClass::Ev, 1800.0),
            ]),
            fallback_weight_kg: 1000.0,
            traffic_index: TRAFFIC_INDEX,
        }
    }
}

impl FeatureDefaults {
    pub fn weight_for(&self, vehicle: VehicleClass) -> f64 {
        self.weights_kg
            .get(&vehicle)
            .copied()
            .unwrap_or(self.fallback_weight_kg)
    }
}

/// Derive the prediction-service feature vector from one raw route. Pure and
/// total: any route with non-negative distance/duration yields a vector.
pub fn extract(
    route: &RawRoute,
    role: RouteRole,
    context: &TripContext,
    defaults: &FeatureDefaults,
) -> FeatureVector {
    let distance_km = route.distance / 1000.0;

    // Clamp the duration to one second, then guard the hour denominator itself.
    let hours = route.duration.max(1.0) / 3600.0;
    let hours = if hours > 0.0 { hours } else { 1.0 };
    let avg_speed_kph = distance_km / hours;

    let turns = (route.geometry.point_count() / POINTS_PER_TURN).max(1) as u32;
    let humps = turns / TURNS_PER_HUMP;

    // A caller-supplied weight of zero counts as absent.
    let weight_kg = context
        .weight_kg
        .filter(|weight| *weight > 0.0)
        .unwrap_or_else(|| defaults.weight_for(context.vehicle));

    FeatureVector {
        distance_km,
        elevation_gain_m: ELEVATION_GAIN_PLACEHOLDER_M,
        avg_speed_kph,
        turns,
        humps,
        weight_kg,
        traffic_index: defaults.traffic_index,
        route_role: role,
        vehicle: context.vehicle,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::common::OptimizeFor;
    use crate::data_types::osrm::RouteGeometry;

    fn route_with_points(distance: f64, duration: f64, points: usize) -> RawRoute {
        RawRoute {
            distance,
            duration,
            geometry: RouteGeometry::line_string(vec![[0.0, 0.0]; points]),
        }
    }

    fn car_context() -> TripContext {
        TripContext {
            vehicle: VehicleClass::Car,
            weight_kg: None,
            optimize_for: OptimizeFor::Co2,
        }
    }

    #[test]
    fn zero_distance_yields_zero_km() {
        let features = extract(
            &route_with_points(0.0, 600.0, 5),
            RouteRole::Fast,
            &car_context(),
            &FeatureDefaults::default(),
        );

        assert_eq!(features.distance_km, 0.0);
    }

    #[test]
    fn turns_are_clamped_to_at_least_one() {
        for points in [0, 1, 9] {
            let features = extract(
                &route_with_points(1000.0, 60.0, points),
                RouteRole::Fast,
                &car_context(),
                &FeatureDefaults::default(),
            );

            assert_eq!(features.turns, 1, "points = {}", points);
            assert_eq!(features.humps, 0);
        }
    }

    #[test]
    fn forty_points_give_four_turns_and_one_hump() {
        let features = extract(
            &route_with_points(1000.0, 60.0, 40),
            RouteRole::Eco,
            &car_context(),
            &FeatureDefaults::default(),
        );

        assert_eq!(features.turns, 4);
        assert_eq!(features.humps, 1);
    }

    #[test]
    fn zero_duration_is_clamped_to_one_second() {
        let features = extract(
            &route_with_points(1000.0, 0.0, 5),
            RouteRole::Fast,
            &car_context(),
            &FeatureDefaults::default(),
        );

        // 1 km over a clamped single second.
        assert!(features.avg_speed_kph.is_finite());
        assert_eq!(features.avg_speed_kph, 3600.0);
    }

    #[test]
    fn average_speed_uses_hours() {
        let features = extract(
            &route_with_points(3000.0, 3600.0, 5),
            RouteRole::Fast,
            &car_context(),
            &FeatureDefaults::default(),
        );

        assert_eq!(features.avg_speed_kph, 3.0);
    }

    #[test]
    fn weight_defaults_follow_the_vehicle_class() {
        let defaults = FeatureDefaults::default();
        let cases = [
            (VehicleClass::Car, 1200.0),
            (VehicleClass::Van, 2500.0),
            (VehicleClass::Bike, 200.0),
            (VehicleClass::Ev, 1800.0),
        ];

        for (vehicle, expected) in cases {
            let context = TripContext {
                vehicle,
                weight_kg: None,
                optimize_for: OptimizeFor::Co2,
            };
            let features = extract(
                &route_with_points(1000.0, 60.0, 5),
                RouteRole::Fast,
                &context,
                &defaults,
            );

            assert_eq!(features.weight_kg, expected, "vehicle = {:?}", vehicle);
        }
    }

    #[test]
    fn caller_weight_wins_unless_zero() {
        let defaults = FeatureDefaults::default();

        let mut context = car_context();
        context.weight_kg = Some(1750.0);
        let features = extract(
            &route_with_points(1000.0, 60.0, 5),
            RouteRole::Fast,
            &context,
            &defaults,
        );
        assert_eq!(features.weight_kg, 1750.0);

        context.weight_kg = Some(0.0);
        let features = extract(
            &route_with_points(1000.0, 60.0, 5),
            RouteRole::Fast,
            &context,
            &defaults,
        );
        assert_eq!(features.weight_kg, 1200.0);
    }

    #[test]
    fn placeholders_and_passthrough_fields() {
        let features = extract(
            &route_with_points(2500.0, 300.0, 25),
            RouteRole::Eco,
            &car_context(),
            &FeatureDefaults::default(),
        );

        assert_eq!(features.elevation_gain_m, 0.0);
        assert_eq!(features.traffic_index, 1.0);
        assert_eq!(features.route_role, RouteRole::Eco);
        assert_eq!(features.vehicle, VehicleClass::Car);
    }
}
