use thiserror::Error;

use gr_core::CoreError;
use gr_predict::PredictError;

#[derive(Debug, Error)]
pub enum PlannerError {
    /// A required data source is missing or empty.  Distinct from a miss:
    /// the request was fine, the service is not.
    #[error("service not ready: {0}")]
    NotReady(&'static str),

    #[error(transparent)]
    Invalid(#[from] CoreError),

    #[error("prediction failed: {0}")]
    Predict(#[from] PredictError),
}

pub type PlannerResult<T> = Result<T, PlannerError>;
