use serde_derive::{Deserialize, Serialize};

/// GeoJSON LineString as OSRM returns it with geometries=geojson.
/// Kept in wire form ([lng, lat] pairs) since it is passed through to the caller.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RouteGeometry {
    #[serde(rename = "type")]
    pub kind: String,

    pub coordinates: Vec<[f64; 2]>,
}

impl RouteGeometry {
    pub fn line_string(coordinates: Vec<[f64; 2]>) -> Self {
        Self {
            kind: "LineString".to_string(),
            coordinates,
        }
    }

    pub fn point_count(&self) -> usize {
        self.coordinates.len()
    }
}

/// One route candidate from the provider: aggregate metrics plus the path.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct RawRoute {
    /// Meters.
    pub distance: f64,

    /// Seconds.
    pub duration: f64,

    pub geometry: RouteGeometry,
}

/// Response envelope of the route endpoint. `routes` defaults to empty so a
/// NoRoute answer (non-Ok code, missing field) reads as zero candidates.
#[derive(Debug, Deserialize)]
pub struct OsrmResponse {
    #[serde(default)]
    pub code: Option<String>,

    #[serde(default)]
    pub routes: Vec<RawRoute>,
}
