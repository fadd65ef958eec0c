use serde_derive::Deserialize;

use crate::data_types::common::VehicleClass;
use crate::data_types::comparison::{ConsumptionEstimate, EnergyUse, FeatureVector};
use crate::errors::CompareError;
use crate::logvbln;

/// Raw prediction-service body. Which fields are required depends on the
/// vehicle class, so both are optional here and checked in `into_estimate`.
#[derive(Debug, Deserialize)]
struct EstimateBody {
    co2_kg: f64,
    fuel_l: Option<f64>,
    energy_kwh: Option<f64>,
}

/// Gateway to the external consumption-prediction service.
pub struct EstimatorApi {
    url: String,
    client: reqwest::Client,
}

impl EstimatorApi {
    const CC: &str = "EstimatorApi";

    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }

    pub async fn estimate(
        &self,
        features: &FeatureVector,
    ) -> Result<ConsumptionEstimate, CompareError> {
        logvbln!(
            "Requesting estimate for {:?} route, {:.3} km",
            features.route_role,
            features.distance_km
        );

        let response = self
            .client
            .post(&self.url)
            .json(features)
            .send()
            .await
            .map_err(|err| CompareError::UpstreamUnreachable(format!("ML service: {}", err)))?;

        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompareError::EstimatorFailure(body));
        }

        let body: EstimateBody = response
            .json()
            .await
            .map_err(|err| CompareError::EstimatorFailure(format!("unparsable body: {}", err)))?;

        into_estimate(body, features.vehicle)
    }
}

/// The variant is selected by vehicle class, never by sniffing which field the
/// service happened to include.
fn into_estimate(
    body: EstimateBody,
    vehicle: VehicleClass,
) -> Result<ConsumptionEstimate, CompareError> {
    let energy_use = if vehicle.is_electric() {
        let energy_kwh = body.energy_kwh.ok_or_else(|| {
            CompareError::EstimatorFailure("missing energy_kwh for ev estimate".to_string())
        })?;
        EnergyUse::Electric { energy_kwh }
    } else {
        let fuel_l = body.fuel_l.ok_or_else(|| {
            CompareError::EstimatorFailure("missing fuel_l in estimate".to_string())
        })?;
        EnergyUse::Fuel { fuel_l }
    };

    Ok(ConsumptionEstimate {
        co2_kg: body.co2_kg,
        energy_use,
    })
}
