//! Veracity Core - Message Veracity Prediction
//!
//! ```text
//! MessageRecord ──extract──▶ FeatureVector ──Oracle::predict──▶ label ──▶ Verdict
//! ```
//!
//! Front-ends (the `veracity` CLI, the HTTP server) build a
//! [`MessageRecord`] and call [`predict`] or a [`Predictor`].

pub mod constants;
pub mod error;
pub mod logic;

pub use error::{PredictError, PredictResult};
pub use logic::features::{extract, FeatureVector};
pub use logic::message::{MessageRecord, RawMessage, SuspicionLevel};
pub use logic::model::{ClassLabel, ConstantOracle, OnnxOracle, Oracle, OracleError};
pub use logic::verdict::{predict, Predictor, Verdict};
