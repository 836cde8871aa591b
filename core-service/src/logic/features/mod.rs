//! Features Module - Feature Extraction Engine
//!
//! Turns a message record into the nine-column vector the model was
//! trained on: trust/suspicion metadata plus readability scores.

pub mod layout;
pub mod readability;
pub mod vector;


// Re-export common types
pub use layout::{LayoutInfo, FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION};
pub use readability::ReadabilityScores;
pub use vector::{extract, FeatureVector};
