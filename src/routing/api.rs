use crate::data_types::common::Coordinate;
use crate::data_types::osrm::{OsrmResponse, RawRoute};
use crate::errors::CompareError;
use crate::routing::RouteSource;
use crate::{logln, logvbln};

/// Client for the OSRM-shaped routing provider.
pub struct RoutingApi {
    base_url: String,
    client: reqwest::Client,
}

impl RoutingApi {
    const CC: &str = "RoutingApi";

    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }

    /// Primary query: best route plus whatever alternatives the provider offers.
    /// A non-2xx or NoRoute answer reads as zero candidates; only transport
    /// failures surface as errors.
    pub async fn routes_between(
        &self,
        source: &Coordinate,
        destination: &Coordinate,
    ) -> Result<Vec<RawRoute>, CompareError> {
        let url = format!(
            "{}/{};{}?alternatives=true&geometries=geojson&overview=full&annotations=distance,duration",
            self.base_url,
            source.to_osrm(),
            destination.to_osrm()
        );

        let routes = self.fetch_routes(&url).await?;
        logvbln!("Provider returned {} route(s)", routes.len());

        Ok(routes)
    }

    async fn fetch_routes(&self, url: &str) -> Result<Vec<RawRoute>, CompareError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|err| CompareError::UpstreamUnreachable(format!("routing provider: {}", err)))?;

        let body = response
            .text()
            .await
            .map_err(|err| CompareError::UpstreamUnreachable(format!("routing provider: {}", err)))?;

        // NoRoute and error answers carry no usable routes field; treat an
        // unparsable body the same way.
        let parsed: OsrmResponse = match serde_json::from_str(&body) {
            Ok(parsed) => parsed,
            Err(_) => {
                logln!("Unparsable routing answer: {}", body);
                return Ok(Vec::new());
            }
        };

        Ok(parsed.routes)
    }
}

impl RouteSource for RoutingApi {
    async fn route_via(
        &self,
        source: &Coordinate,
        via: &Coordinate,
        destination: &Coordinate,
    ) -> Result<Option<RawRoute>, CompareError> {
        let url = format!(
            "{}/{};{};{}?geometries=geojson&overview=full",
            self.base_url,
            source.to_osrm(),
            via.to_osrm(),
            destination.to_osrm()
        );

        let routes = self.fetch_routes(&url).await?;

        Ok(routes.into_iter().next())
    }
}
