use futures_util::try_join;

use data_types::common::{CompareRequest, RouteRole, TripContext};
use data_types::comparison::{ComparisonOutcome, ConsumptionEstimate};
use data_types::osrm::RawRoute;
use errors::CompareError;
use estimator::api::EstimatorApi;
use processors::features::FeatureDefaults;
use processors::{alternates, comparator, features};
use routing::api::RoutingApi;
use util::config::ServiceConfig;

pub mod data_types;
pub mod errors;
pub mod estimator;
pub mod processors;
pub mod routing;
pub mod util;

/// One comparison service instance: the two outbound clients plus the immutable
/// feature defaults. Everything else is request-scoped.
pub struct App {
    routing: RoutingApi,
    estimator: EstimatorApi,
    feature_defaults: FeatureDefaults,
}

impl App {
    const CC: &str = "App";

    pub fn new() -> Self {
        Self::with_config(ServiceConfig::load())
    }

    pub fn with_config(config: ServiceConfig) -> Self {
        Self {
            routing: RoutingApi::new(config.routing_base_url),
            estimator: EstimatorApi::new(config.estimator_url),
            feature_defaults: FeatureDefaults::default(),
        }
    }

    /// Full pipeline for one request: resolve two candidates, extract features,
    /// fan out both estimator calls, compare. Failures are logged here before
    /// they travel back to the server.
    pub async fn compare_routes(
        &self,
        request: CompareRequest,
    ) -> Result<ComparisonOutcome, CompareError> {
        let result = self.run_pipeline(request).await;

        if let Err(err) = &result {
            crate::logln!("Comparison failed: {}", err);
        }

        result
    }

    async fn run_pipeline(
        &self,
        request: CompareRequest,
    ) -> Result<ComparisonOutcome, CompareError> {
        let (source, destination) = match (request.source, request.destination) {
            (Some(source), Some(destination)) => (source, destination),
            _ => {
                return Err(CompareError::InvalidRequest(
                    "source and destination required".to_string(),
                ))
            }
        };
        let context = request.context();

        crate::logln!(
            "Comparing routes ({},{}) -> ({},{}) for {:?}",
            source.lat,
            source.lng,
            destination.lat,
            destination.lng,
            context.vehicle
        );

        let routes = self.routing.routes_between(&source, &destination).await?;
        let resolved = alternates::resolve(&self.routing, &source, &destination, routes).await?;

        let (fast_estimate, eco_estimate) = try_join!(
            self.estimate(&resolved.fast, RouteRole::Fast, &context),
            self.estimate(&resolved.eco, RouteRole::Eco, &context),
        )?;

        Ok(comparator::compare(
            &resolved.fast,
            &resolved.eco,
            &fast_estimate,
            &eco_estimate,
            &context,
        ))
    }

    async fn estimate(
        &self,
        route: &RawRoute,
        role: RouteRole,
        context: &TripContext,
    ) -> Result<ConsumptionEstimate, CompareError> {
        let feature_vector = features::extract(route, role, context, &self.feature_defaults);

        self.estimator.estimate(&feature_vector).await
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
