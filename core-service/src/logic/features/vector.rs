//! Feature Vector - Core data structure for ML input
//!
//! Named fields for readability, serialized under the training column
//! names. `to_values()` flattens in `FEATURE_LAYOUT` order for the model.

use serde::{Deserialize, Serialize};

use super::layout::{layout_hash, FEATURE_COUNT, FEATURE_LAYOUT, FEATURE_VERSION};
use super::readability::ReadabilityScores;
use crate::constants::MAX_ADJUSTED_SUSPICION;
use crate::logic::message::MessageRecord;

// ============================================================================
// FEATURE VECTOR
// ============================================================================

/// Derived, immutable model input. One per message.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    #[serde(rename = "Trust Score")]
    pub trust_score: f64,

    #[serde(rename = "Suspicion Score")]
    pub suspicion_score: f64,

    #[serde(rename = "Adjusted Suspicion Score")]
    pub adjusted_suspicion_score: f64,

    #[serde(rename = "Suspicion Encoded")]
    pub suspicion_encoded: u8,

    pub flesch_reading_ease: f64,
    pub gunning_fog: f64,
    pub smog_index: f64,
    pub automated_readability_index: f64,
    pub dale_chall_score: f64,
}

impl FeatureVector {
    /// Values in layout order, as the model consumes them
    pub fn to_values(&self) -> [f32; FEATURE_COUNT] {
        [
            self.trust_score as f32,
            self.suspicion_score as f32,
            self.adjusted_suspicion_score as f32,
            self.suspicion_encoded as f32,
            self.flesch_reading_ease as f32,
            self.gunning_fog as f32,
            self.smog_index as f32,
            self.automated_readability_index as f32,
            self.dale_chall_score as f32,
        ]
    }

    /// Get feature by index
    pub fn get(&self, index: usize) -> Option<f64> {
        let value = match index {
            0 => self.trust_score,
            1 => self.suspicion_score,
            2 => self.adjusted_suspicion_score,
            3 => self.suspicion_encoded as f64,
            4 => self.flesch_reading_ease,
            5 => self.gunning_fog,
            6 => self.smog_index,
            7 => self.automated_readability_index,
            8 => self.dale_chall_score,
            _ => return None,
        };
        Some(value)
    }

    /// Convert to JSON-serializable format for logging
    pub fn to_log_entry(&self) -> serde_json::Value {
        let named: serde_json::Map<String, serde_json::Value> = FEATURE_LAYOUT
            .iter()
            .enumerate()
            .filter_map(|(i, name)| self.get(i).map(|v| (name.to_string(), serde_json::json!(v))))
            .collect();

        serde_json::json!({
            "feature_version": FEATURE_VERSION,
            "layout_hash": layout_hash(),
            "named_values": named,
        })
    }
}

// ============================================================================
// EXTRACTION
// ============================================================================

/// Suspicion plus level boost, capped at 1.0 (never raised toward 0)
pub fn adjusted_suspicion(record: &MessageRecord) -> f64 {
    let adjusted = record.suspicion_score + record.suspicion_level.boost();
    if adjusted > MAX_ADJUSTED_SUSPICION {
        MAX_ADJUSTED_SUSPICION
    } else {
        adjusted
    }
}

/// Derive the feature vector of a message. Pure and deterministic.
pub fn extract(record: &MessageRecord) -> FeatureVector {
    let readability = ReadabilityScores::compute(&record.text);

    FeatureVector {
        trust_score: record.trust_score,
        suspicion_score: record.suspicion_score,
        adjusted_suspicion_score: adjusted_suspicion(record),
        suspicion_encoded: record.suspicion_level.encoded(),
        flesch_reading_ease: readability.flesch_reading_ease,
        gunning_fog: readability.gunning_fog,
        smog_index: readability.smog_index,
        automated_readability_index: readability.automated_readability_index,
        dale_chall_score: readability.dale_chall_score,
    }
}

impl From<&MessageRecord> for FeatureVector {
    fn from(record: &MessageRecord) -> Self {
        extract(record)
    }
}

// ============================================================================
// TESTS
// ============================================================================
