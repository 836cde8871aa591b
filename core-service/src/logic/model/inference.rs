//! Inference Engine - ONNX Runtime Integration
//!
//! Loads the trained classifier from an ONNX file and runs it on one
//! feature vector at a time. The graph takes a `[1, FEATURE_COUNT]` f32
//! tensor in layout order; its first output is the class label.

use std::fs::File;
use std::path::Path;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::oracle::{ClassLabel, Oracle, OracleError};
use crate::logic::features::{FeatureVector, LayoutInfo, FEATURE_COUNT};

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Model metadata, captured at load time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_path: String,
    pub sha256: String,
    pub input_names: Vec<String>,
    pub output_name: String,
    pub layout: LayoutInfo,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

/// Loaded ONNX classifier
pub struct OnnxOracle {
    // `Session::run` needs `&mut`
    session: Mutex<Session>,
    metadata: ModelMetadata,
}

impl std::fmt::Debug for OnnxOracle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OnnxOracle")
            .field("metadata", &self.metadata)
            .finish_non_exhaustive()
    }
}

// ============================================================================
// LOADING
// ============================================================================

impl OnnxOracle {
    /// Load ONNX model from file, optionally pinning its SHA-256
    pub fn load(model_path: impl AsRef<Path>, expected_sha256: Option<&str>) -> Result<Self, OracleError> {
        let path = model_path.as_ref();
        let display = path.display().to_string();
        log::info!("Loading ONNX model from: {}", display);

        if !path.exists() {
            return Err(OracleError::Unavailable(format!("Model not found: {}", display)));
        }

        let sha256 = compute_file_hash(path)
            .map_err(|e| OracleError::Unavailable(format!("Failed to read model {}: {}", display, e)))?;

        if let Some(expected) = expected_sha256 {
            verify_checksum(&sha256, expected)?;
        }

        let session = Session::builder()
            .map_err(|e| OracleError::Unavailable(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| OracleError::Unavailable(format!("Failed to set optimization: {}", e)))?
            .commit_from_file(path)
            .map_err(|e| OracleError::Unavailable(format!("Failed to load model: {}", e)))?;

        let output_name = session.outputs.first()
            .map(|o| o.name.clone())
            .ok_or_else(|| OracleError::Unavailable("No output defined".to_string()))?;
        let input_names: Vec<String> = session.inputs.iter().map(|i| i.name.clone()).collect();
        if input_names.is_empty() {
            return Err(OracleError::Unavailable("No input defined".to_string()));
        }

        let metadata = ModelMetadata {
            model_path: display,
            sha256,
            input_names,
            output_name,
            layout: LayoutInfo::current(),
            loaded_at: chrono::Utc::now(),
        };

        log::info!(
            "ONNX model loaded (sha256 {}, inputs {:?}, label output '{}', layout v{} {:08x})",
            metadata.sha256,
            metadata.input_names,
            metadata.output_name,
            metadata.layout.version,
            metadata.layout.hash,
        );

        Ok(Self {
            session: Mutex::new(session),
            metadata,
        })
    }
}

// ============================================================================
// PREDICTION
// ============================================================================

impl Oracle for OnnxOracle {
    fn predict(&self, features: &FeatureVector) -> Result<ClassLabel, OracleError> {
        let input_array = Array2::<f32>::from_shape_vec(
            (1, FEATURE_COUNT),
            features.to_values().to_vec(),
        ).map_err(|e| OracleError::Inference(format!("Array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| OracleError::Inference(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();

        let outputs = session.run(ort::inputs![input_tensor])
            .map_err(|e| OracleError::Inference(format!("Inference failed: {}", e)))?;

        let output = outputs.get(&self.metadata.output_name)
            .ok_or_else(|| OracleError::Inference("No output".to_string()))?;

        // sklearn-onnx classifiers emit int64 labels; some converters emit floats
        if let Ok((_, data)) = output.try_extract_tensor::<i64>() {
            return data.first()
                .copied()
                .ok_or_else(|| OracleError::Inference("Empty label tensor".to_string()));
        }

        let (_, data) = output.try_extract_tensor::<f32>()
            .map_err(|e| OracleError::Inference(format!("Extract error: {}", e)))?;

        data.first()
            .map(|v| v.round() as ClassLabel)
            .ok_or_else(|| OracleError::Inference("Empty label tensor".to_string()))
    }

    fn name(&self) -> &str {
        "onnx"
    }
}

// ============================================================================
// UTILITIES
// ============================================================================

/// Compute SHA256 hash of file
fn compute_file_hash(path: &Path) -> Result<String, std::io::Error> {
    let mut file = File::open(path)?;
    let mut hasher = Sha256::new();
    std::io::copy(&mut file, &mut hasher)?;
    Ok(hex::encode(hasher.finalize()))
}

fn verify_checksum(actual: &str, expected: &str) -> Result<(), OracleError> {
    if actual.eq_ignore_ascii_case(expected.trim()) {
        return Ok(());
    }
    Err(OracleError::Unavailable(format!(
        "Model checksum mismatch: expected {}, got {}",
        expected.trim(),
        actual
    )))
}

// ============================================================================
// TESTS
// ============================================================================
