use serde_derive::{Deserialize, Serialize};

use crate::data_types::common::{RouteRole, VehicleClass};
use crate::data_types::osrm::RouteGeometry;

/// The fixed attribute set sent to the prediction service. Field names follow
/// the service's wire contract; the role tag travels as `route_type`.
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct FeatureVector {
    pub distance_km: f64,
    pub elevation_gain_m: f64,
    pub avg_speed_kph: f64,
    pub turns: u32,
    pub humps: u32,
    pub weight_kg: f64,
    pub traffic_index: f64,

    #[serde(rename = "route_type")]
    pub route_role: RouteRole,

    pub vehicle: VehicleClass,
}

/// Fuel or electric energy, keyed by vehicle class. Combustion vehicles report
/// liters, EVs report kWh; the two never appear together in a result.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
#[serde(untagged)]
pub enum EnergyUse {
    Fuel { fuel_l: f64 },
    Electric { energy_kwh: f64 },
}

/// What the prediction service said about one route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsumptionEstimate {
    pub co2_kg: f64,
    pub energy_use: EnergyUse,
}

/// One formatted route of the final payload, rounded to fixed precision.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RouteResult {
    pub distance_km: f64,
    pub duration_min: f64,
    pub co2_kg: f64,

    #[serde(flatten)]
    pub energy_use: EnergyUse,

    pub geometry: RouteGeometry,
}

/// The sole externally visible artifact of the pipeline; rebuilt per request.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ComparisonOutcome {
    pub time_optimized: RouteResult,
    pub eco_optimized: RouteResult,

    /// Alias of one of the two results, selected by the optimization goal.
    pub preferred: RouteResult,

    #[serde(rename = "co2SavedPercent")]
    pub co2_saved_percent: u32,

    pub vehicle: VehicleClass,
}
