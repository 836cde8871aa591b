//! Verdict - Maps the oracle's label to a human-readable answer

use std::sync::Arc;
use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::error::PredictResult;
use crate::logic::features::extract;
use crate::logic::message::MessageRecord;
use crate::logic::model::{ClassLabel, Oracle};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "likely honest")]
    LikelyHonest,
    #[serde(rename = "likely dishonest")]
    LikelyDishonest,
}

impl Verdict {
    /// Non-zero label is honest
    pub fn from_label(label: ClassLabel) -> Self {
        if label != 0 {
            Verdict::LikelyHonest
        } else {
            Verdict::LikelyDishonest
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::LikelyHonest => "likely honest",
            Verdict::LikelyDishonest => "likely dishonest",
        }
    }
}

impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Extract features, ask the oracle, map the label
pub fn predict(record: &MessageRecord, oracle: &dyn Oracle) -> PredictResult<Verdict> {
    let features = extract(record);

    let start_time = Instant::now();
    let label = oracle.predict(&features)?;
    let inference_time = start_time.elapsed().as_micros() as u64;

    let verdict = Verdict::from_label(label);
    log::debug!(
        "{} oracle: label={} verdict={} ({}us) features={}",
        oracle.name(),
        label,
        verdict,
        inference_time,
        features.to_log_entry(),
    );

    Ok(verdict)
}

/// Cheap-to-clone handle around a shared oracle
#[derive(Clone)]
pub struct Predictor {
    oracle: Arc<dyn Oracle>,
}

impl Predictor {
    pub fn new(oracle: impl Oracle + 'static) -> Self {
        Self { oracle: Arc::new(oracle) }
    }

    pub fn from_shared(oracle: Arc<dyn Oracle>) -> Self {
        Self { oracle }
    }

    pub fn predict(&self, record: &MessageRecord) -> PredictResult<Verdict> {
        predict(record, self.oracle.as_ref())
    }

    pub fn oracle_name(&self) -> &str {
        self.oracle.name()
    }
}

impl std::fmt::Debug for Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predictor")
            .field("oracle", &self.oracle.name())
            .finish()
    }
}
