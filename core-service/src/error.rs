//! Error handling

use thiserror::Error;

use crate::logic::model::OracleError;

pub type PredictResult<T> = Result<T, PredictError>;

#[derive(Debug, Error)]
pub enum PredictError {
    /// Malformed or non-numeric field in the message
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Model artifact could not be loaded
    #[error("oracle unavailable: {0}")]
    OracleUnavailable(String),

    /// Loaded model failed on a request
    #[error("inference failed: {0}")]
    Inference(String),
}

impl From<OracleError> for PredictError {
    fn from(err: OracleError) -> Self {
        match err {
            OracleError::Unavailable(msg) => PredictError::OracleUnavailable(msg),
            OracleError::Inference(msg) => PredictError::Inference(msg),
        }
    }
}
