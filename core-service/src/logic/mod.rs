//! Logic Module - Prediction Pipeline
//!
//! - `message` - Input record, defaults and level normalization
//! - `features/` - Feature extraction (metadata + readability)
//! - `model/` - Oracle trait and ONNX inference
//! - `verdict` - Label to verdict mapping

pub mod message;
pub mod features;
pub mod model;
pub mod verdict;
