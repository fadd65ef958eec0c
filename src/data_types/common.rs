use geo_types::Coord;
use serde_derive::{Deserialize, Serialize};

/// A WGS84 point as the frontend and the routing provider exchange it.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn as_coord(&self) -> Coord {
        Coord {
            x: self.lng,
            y: self.lat,
        }
    }

    pub fn from_coord(coord: Coord) -> Self {
        Self {
            lat: coord.y,
            lng: coord.x,
        }
    }

    /// OSRM path segment: longitude first.
    pub fn to_osrm(&self) -> String {
        format!("{},{}", self.lng, self.lat)
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum VehicleClass {
    #[default]
    Car,
    Van,
    Bike,
    Ev,
}

impl VehicleClass {
    pub fn is_electric(&self) -> bool {
        *self == VehicleClass::Ev
    }
}

/// Tag distinguishing the shortest-time candidate from the eco alternative.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RouteRole {
    Fast,
    Eco,
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OptimizeFor {
    Time,
    #[default]
    Co2,
}

/// Per-request trip parameters carried through feature extraction and comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripContext {
    pub vehicle: VehicleClass,
    pub weight_kg: Option<f64>,
    pub optimize_for: OptimizeFor,
}

/// Inbound body of POST /api/route. Endpoints are optional so a missing one maps
/// to the 400 "source and destination required" answer instead of a parse error.
#[derive(Debug, Deserialize, Clone)]
pub struct CompareRequest {
    pub source: Option<Coordinate>,
    pub destination: Option<Coordinate>,
    #[serde(default)]
    pub vehicle: VehicleClass,
    pub weight_kg: Option<f64>,
    #[serde(rename = "optimizeFor", default)]
    pub optimize_for: OptimizeFor,
}

impl CompareRequest {
    pub fn context(&self) -> TripContext {
        TripContext {
            vehicle: self.vehicle,
            weight_kg: self.weight_kg,
            optimize_for: self.optimize_for,
        }
    }
}
