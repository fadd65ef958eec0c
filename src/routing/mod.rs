use crate::data_types::common::Coordinate;
use crate::data_types::osrm::RawRoute;
use crate::errors::CompareError;

pub mod api;

/// Seam over the routing provider's single-route via-point query, used by the
/// alternate-route resolver when the primary answer offered no alternative.
#[allow(async_fn_in_trait)]
pub trait RouteSource {
    /// One route through source -> via -> destination, or None when the
    /// provider has nothing for that path.
    async fn route_via(
        &self,
        source: &Coordinate,
        via: &Coordinate,
        destination: &Coordinate,
    ) -> Result<Option<RawRoute>, CompareError>;
}
