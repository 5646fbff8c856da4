//! Prediction error type.

use thiserror::Error;

use gr_core::CoreError;

/// Errors produced by `gr-predict`.
#[derive(Debug, Error)]
pub enum PredictError {
    /// The street is not part of the classifier's vocabulary.  Callers are
    /// expected to filter before predicting.
    #[error("street {0:?} is not in the classifier vocabulary")]
    UnknownStreet(String),

    #[error("street code {0} is outside the classifier vocabulary")]
    UnknownStreetCode(u32),

    #[error("invalid level-of-service label {0:?}")]
    InvalidLabel(String),

    #[error("model returned {got} labels for a batch of {expected}")]
    BatchLength { expected: usize, got: usize },

    /// Failure reported by a model implementation.
    #[error("model error: {0}")]
    Model(String),

    #[error("artifact parse error: {0}")]
    Parse(String),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PredictResult<T> = Result<T, PredictError>;
