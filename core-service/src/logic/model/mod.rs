//! Model Module - Classifier Inference
//!
//! The oracle trait keeps the model swappable: ONNX in production,
//! constant stubs in tests.

pub mod inference;
pub mod oracle;

// Re-export common types
pub use inference::OnnxOracle;
pub use oracle::{ClassLabel, ConstantOracle, Oracle, OracleError};
