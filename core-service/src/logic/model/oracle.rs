//! Oracle - Prediction interface of a trained classifier
//!
//! The core never knows how a model works; it hands over a feature vector
//! and gets a class label back. Implementations must be safe to share
//! between concurrent callers.

use thiserror::Error;

use crate::logic::features::FeatureVector;

/// Binary class label as produced by the classifier (0 = dishonest)
pub type ClassLabel = i64;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum OracleError {
    /// Artifact missing, unreadable or rejected
    #[error("{0}")]
    Unavailable(String),

    /// Model was loaded but failed on this input
    #[error("{0}")]
    Inference(String),
}

/// Trait for prediction backends (ONNX, stubs, ...)
pub trait Oracle: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<ClassLabel, OracleError>;

    /// Short name for logs
    fn name(&self) -> &str {
        "oracle"
    }
}

/// Oracle that always answers the same label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstantOracle(pub ClassLabel);

impl Oracle for ConstantOracle {
    fn predict(&self, _features: &FeatureVector) -> Result<ClassLabel, OracleError> {
        Ok(self.0)
    }

    fn name(&self) -> &str {
        "constant"
    }
}
