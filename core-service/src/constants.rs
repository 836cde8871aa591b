//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! To change the default model artifact, only edit this file.

/// Default model artifact path
///
/// Relative to the working directory of the process.
pub const DEFAULT_MODEL_PATH: &str = "baseline_model.onnx";

/// Env var holding the model artifact path
pub const MODEL_PATH_ENV: &str = "VERACITY_MODEL_PATH";

/// Env var holding the expected SHA-256 of the model artifact
pub const MODEL_SHA256_ENV: &str = "VERACITY_MODEL_SHA256";

/// Default trust score when the message carries none
pub const DEFAULT_TRUST_SCORE: f64 = 0.8;

/// Default suspicion score when the message carries none
pub const DEFAULT_SUSPICION_SCORE: f64 = 0.2;

/// Upper bound of the adjusted suspicion score
pub const MAX_ADJUSTED_SUSPICION: f64 = 1.0;

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get model path from environment or use default
pub fn get_model_path() -> String {
    std::env::var(MODEL_PATH_ENV)
        .unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
}

/// Get expected model checksum from environment, if any
pub fn get_model_sha256() -> Option<String> {
    std::env::var(MODEL_SHA256_ENV)
        .ok()
        .filter(|s| !s.trim().is_empty())
}
