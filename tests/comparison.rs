//! Offline walk through the whole decision pipeline: resolve two candidates,
//! derive their feature vectors, and compare provider-supplied estimates.

use eco_route::data_types::common::{
    CompareRequest, Coordinate, OptimizeFor, RouteRole, VehicleClass,
};
use eco_route::data_types::comparison::{ConsumptionEstimate, EnergyUse};
use eco_route::data_types::osrm::{RawRoute, RouteGeometry};
use eco_route::errors::CompareError;
use eco_route::processors::features::FeatureDefaults;
use eco_route::processors::{alternates, comparator, features};
use eco_route::routing::RouteSource;

struct NoAlternatives;

impl RouteSource for NoAlternatives {
    async fn route_via(
        &self,
        _source: &Coordinate,
        _via: &Coordinate,
        _destination: &Coordinate,
    ) -> Result<Option<RawRoute>, CompareError> {
        Ok(None)
    }
}

fn geometry(points: usize) -> RouteGeometry {
    RouteGeometry::line_string(vec![[-73.98, 40.76]; points])
}

fn request_body(json: &str) -> CompareRequest {
    serde_json::from_str(json).unwrap()
}

#[tokio::test]
async fn two_provider_routes_flow_through_to_a_decision() {
    let source = Coordinate {
        lat: 40.758,
        lng: -73.9855,
    };
    let destination = Coordinate {
        lat: 40.785,
        lng: -73.968,
    };

    let provider_routes = vec![
        RawRoute {
            distance: 3000.0,
            duration: 4200.0,
            geometry: geometry(25),
        },
        RawRoute {
            distance: 3400.0,
            duration: 3900.0,
            geometry: geometry(45),
        },
    ];

    let resolved = alternates::resolve(&NoAlternatives, &source, &destination, provider_routes)
        .await
        .unwrap();

    let request = request_body(
        r#"{
            "source": {"lat": 40.758, "lng": -73.9855},
            "destination": {"lat": 40.785, "lng": -73.968}
        }"#,
    );
    let context = request.context();
    assert_eq!(context.vehicle, VehicleClass::Car);
    assert_eq!(context.optimize_for, OptimizeFor::Co2);

    let defaults = FeatureDefaults::default();
    let fast_features = features::extract(&resolved.fast, RouteRole::Fast, &context, &defaults);
    let eco_features = features::extract(&resolved.eco, RouteRole::Eco, &context, &defaults);

    assert_eq!(fast_features.route_role, RouteRole::Fast);
    assert_eq!(eco_features.route_role, RouteRole::Eco);
    assert_eq!(fast_features.turns, 2);
    assert_eq!(eco_features.turns, 4);
    assert_eq!(eco_features.humps, 1);

    let fast_estimate = ConsumptionEstimate {
        co2_kg: 0.7,
        energy_use: EnergyUse::Fuel { fuel_l: 0.3 },
    };
    let eco_estimate = ConsumptionEstimate {
        co2_kg: 0.5,
        energy_use: EnergyUse::Fuel { fuel_l: 0.25 },
    };

    let outcome = comparator::compare(
        &resolved.fast,
        &resolved.eco,
        &fast_estimate,
        &eco_estimate,
        &context,
    );

    assert_eq!(outcome.co2_saved_percent, 29);
    assert_eq!(outcome.preferred, outcome.eco_optimized);

    let json = serde_json::to_value(&outcome).unwrap();
    assert_eq!(json["co2SavedPercent"], 29);
    assert_eq!(json["vehicle"], "car");
    assert_eq!(json["time_optimized"]["fuel_l"], 0.3);
    assert_eq!(json["time_optimized"]["duration_min"], 70.0);
    assert_eq!(json["eco_optimized"]["distance_km"], 3.4);
    assert_eq!(
        json["preferred"]["geometry"]["type"],
        serde_json::json!("LineString")
    );
}

#[test]
fn request_defaults_follow_the_api_contract() {
    let request = request_body(
        r#"{
            "source": {"lat": 1.0, "lng": 2.0},
            "destination": {"lat": 3.0, "lng": 4.0},
            "vehicle": "ev",
            "weight_kg": 1900,
            "optimizeFor": "time"
        }"#,
    );

    let context = request.context();
    assert_eq!(context.vehicle, VehicleClass::Ev);
    assert_eq!(context.weight_kg, Some(1900.0));
    assert_eq!(context.optimize_for, OptimizeFor::Time);

    // Missing endpoints must still parse so the server can answer 400 itself.
    let request = request_body(r#"{"source": {"lat": 1.0, "lng": 2.0}}"#);
    assert!(request.destination.is_none());
}
