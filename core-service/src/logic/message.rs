//! Message Record - Validated prediction input
//!
//! Adapters decode into [`RawMessage`] (lenient: numbers or numeric strings,
//! every field optional), then convert into [`MessageRecord`] which carries
//! defaults and a normalized suspicion level.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_SUSPICION_SCORE, DEFAULT_TRUST_SCORE};
use crate::error::{PredictError, PredictResult};

// ============================================================================
// SUSPICION LEVEL
// ============================================================================

/// Categorical suspicion level, ordered by severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SuspicionLevel {
    #[default]
    None,
    Low,
    Medium,
    High,
}

impl SuspicionLevel {
    pub const ALL: [SuspicionLevel; 4] = [Self::None, Self::Low, Self::Medium, Self::High];

    /// Case-insensitive lookup. Anything unrecognized is `None`.
    pub fn parse(value: &str) -> Self {
        match value.to_lowercase().as_str() {
            "low" => Self::Low,
            "medium" => Self::Medium,
            "high" => Self::High,
            _ => Self::None,
        }
    }

    /// Ordinal encoding fed to the model
    pub fn encoded(self) -> u8 {
        match self {
            Self::None => 0,
            Self::Low => 1,
            Self::Medium => 2,
            Self::High => 3,
        }
    }

    /// Additive suspicion boost
    pub fn boost(self) -> f64 {
        match self {
            Self::None => 0.0,
            Self::Low => 0.05,
            Self::Medium => 0.10,
            Self::High => 0.20,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for SuspicionLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// RAW INPUT
// ============================================================================

/// Numeric field as it arrives on the wire.
/// Booleans count as 1.0 / 0.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericInput {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl NumericInput {
    fn to_f64(&self, field: &str) -> PredictResult<f64> {
        match self {
            NumericInput::Number(n) => Ok(*n),
            NumericInput::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            NumericInput::Text(s) => s.trim().parse::<f64>().map_err(|_| {
                PredictError::InvalidInput(format!("{field} must be a number, got {s:?}"))
            }),
        }
    }
}

/// Message as decoded from JSON. Field names match the training columns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMessage {
    #[serde(rename = "Text", default)]
    pub text: Option<String>,

    #[serde(rename = "Trust Score", default)]
    pub trust_score: Option<NumericInput>,

    #[serde(rename = "Suspicion Score", default)]
    pub suspicion_score: Option<NumericInput>,

    #[serde(rename = "Suspicion Level", default)]
    pub suspicion_level: Option<String>,
}

// ============================================================================
// VALIDATED RECORD
// ============================================================================

/// Flat, immutable input snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageRecord {
    pub text: String,
    pub trust_score: f64,
    pub suspicion_score: f64,
    pub suspicion_level: SuspicionLevel,
}

impl Default for MessageRecord {
    fn default() -> Self {
        Self {
            text: String::new(),
            trust_score: DEFAULT_TRUST_SCORE,
            suspicion_score: DEFAULT_SUSPICION_SCORE,
            suspicion_level: SuspicionLevel::None,
        }
    }
}

impl MessageRecord {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_trust(mut self, trust_score: f64) -> Self {
        self.trust_score = trust_score;
        self
    }

    pub fn with_suspicion(mut self, suspicion_score: f64) -> Self {
        self.suspicion_score = suspicion_score;
        self
    }

    pub fn with_level(mut self, level: &str) -> Self {
        self.suspicion_level = SuspicionLevel::parse(level);
        self
    }
}

impl TryFrom<RawMessage> for MessageRecord {
    type Error = PredictError;

    fn try_from(raw: RawMessage) -> PredictResult<Self> {
        let trust_score = match raw.trust_score {
            Some(v) => v.to_f64("Trust Score")?,
            None => DEFAULT_TRUST_SCORE,
        };
        let suspicion_score = match raw.suspicion_score {
            Some(v) => v.to_f64("Suspicion Score")?,
            None => DEFAULT_SUSPICION_SCORE,
        };
        let suspicion_level = raw
            .suspicion_level
            .as_deref()
            .map(SuspicionLevel::parse)
            .unwrap_or_default();

        Ok(Self {
            text: raw.text.unwrap_or_default(),
            trust_score,
            suspicion_score,
            suspicion_level,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
