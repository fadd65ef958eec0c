use crate::data_types::common::Coordinate;
use crate::data_types::osrm::RawRoute;
use crate::errors::CompareError;
use crate::routing::RouteSource;
use crate::util::geo::GeoUtils;

/// Latitude nudge applied to the endpoints' midpoint when forcing the provider
/// to produce a geometrically distinct second route.
pub const DETOUR_LAT_OFFSET: f64 = 0.01;

/// The two candidates every comparison runs on. `eco` may alias `fast` when no
/// distinct alternative could be obtained.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRoutes {
    pub fast: RawRoute,
    pub eco: RawRoute,
}

/// Turns the provider's primary answer into exactly two routes.
///
/// The eco candidate comes from an ordered chain of strategies, each either
/// producing a route or deferring to the next:
///   1. the provider's own alternative (second route of the primary answer),
///   2. a synthesized detour through a midpoint-offset via-point,
///   3. the fast route itself.
/// Zero primary routes is a hard failure before any strategy runs.
pub async fn resolve<R: RouteSource>(
    routing: &R,
    source: &Coordinate,
    destination: &Coordinate,
    routes: Vec<RawRoute>,
) -> Result<ResolvedRoutes, CompareError> {
    let mut routes = routes.into_iter();

    let fast = routes.next().ok_or(CompareError::NoRouteAvailable)?;

    if let Some(eco) = routes.next() {
        return Ok(ResolvedRoutes { fast, eco });
    }

    if let Some(eco) = forced_detour(routing, source, destination).await {
        return Ok(ResolvedRoutes { fast, eco });
    }

    let eco = fast.clone();
    Ok(ResolvedRoutes { fast, eco })
}

/// Via-point of the synthesized detour: midpoint latitude plus a fixed offset,
/// midpoint longitude unmodified.
pub fn detour_via(source: &Coordinate, destination: &Coordinate) -> Coordinate {
    let mut via = GeoUtils::midpoint(source.as_coord(), destination.as_coord());
    via.y += DETOUR_LAT_OFFSET;

    Coordinate::from_coord(via)
}

/// Secondary query through the offset via-point. Failure here is recovered by
/// the next strategy, never surfaced.
async fn forced_detour<R: RouteSource>(
    routing: &R,
    source: &Coordinate,
    destination: &Coordinate,
) -> Option<RawRoute> {
    let via = detour_via(source, destination);

    routing
        .route_via(source, &via, destination)
        .await
        .ok()
        .flatten()
}
