use thiserror::Error;

/// Everything that can abort a comparison request. All variants are fatal to the
/// enclosing request; the only recovered failure (the secondary detour query)
/// never reaches this type.
#[derive(Debug, Error)]
pub enum CompareError {
    /// Rejected before any downstream call is made.
    #[error("{0}")]
    InvalidRequest(String),

    /// The routing provider had zero routes for the primary query.
    #[error("No routes available between source and destination")]
    NoRouteAvailable,

    /// The prediction service answered non-2xx; carries its body text.
    #[error("ML service error: {0}")]
    EstimatorFailure(String),

    /// Network-level failure reaching an external service.
    #[error("Upstream unreachable: {0}")]
    UpstreamUnreachable(String),
}

impl CompareError {
    /// HTTP status the server answers with for this failure.
    pub fn http_status(&self) -> u16 {
        match self {
            CompareError::InvalidRequest(_) => 400,
            CompareError::NoRouteAvailable
            | CompareError::EstimatorFailure(_)
            | CompareError::UpstreamUnreachable(_) => 500,
        }
    }
}
