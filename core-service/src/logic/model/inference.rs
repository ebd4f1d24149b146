//! Inference Engine - Failure Classifier Boundary
//!
//! The scoring core only ever sees `FailureClassifier`: a pure function from
//! the 7-field engineered input to one `[P(no-failure), P(failure)]` pair per
//! label. `OnnxClassifier` is the production implementation backed by ONNX
//! Runtime; any substitute must keep the label order of `FAILURE_LABELS`.

use std::path::Path;

use ndarray::Array2;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use ort::session::{Session, builder::GraphOptimizationLevel};
use ort::value::Value;

use super::labels::LABEL_COUNT;
use crate::logic::features::layout::{layout_hash, FEATURE_COUNT};

// ============================================================================
// ERROR HANDLING
// ============================================================================

#[derive(Debug)]
pub struct InferenceError(pub String);

impl std::fmt::Display for InferenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "InferenceError: {}", self.0)
    }
}

impl std::error::Error for InferenceError {}

// ============================================================================
// CLASSIFIER TRAIT
// ============================================================================

/// Opaque "probability per label" capability.
///
/// Implementations must be side-effect free from the caller's point of view
/// and safe to call from concurrent requests.
pub trait FailureClassifier: Send + Sync {
    /// Returns `LABEL_COUNT` pairs of `[P(no-failure), P(failure)]`,
    /// indexed by label position.
    fn predict_proba(&self, input: &[f32; FEATURE_COUNT]) -> Result<Vec<[f32; 2]>, InferenceError>;

    /// Short identifier for logs
    fn name(&self) -> &str {
        "classifier"
    }
}

// ============================================================================
// DATA STRUCTURES
// ============================================================================

/// Model metadata, captured once at load time
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub model_path: String,
    /// SHA-256 of the artifact bytes (hex)
    pub checksum: String,
    pub input_fields: usize,
    pub layout_hash: u32,
    pub loaded_at: chrono::DateTime<chrono::Utc>,
}

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

/// ONNX Runtime backed classifier.
///
/// Expects one `f32` input of shape `[1, FEATURE_COUNT]`; the last model
/// output must hold `LABEL_COUNT * 2` probabilities.
pub struct OnnxClassifier {
    // run() needs &mut Session
    session: Mutex<Session>,
    metadata: ModelMetadata,
}

impl OnnxClassifier {
    /// Load ONNX model from file
    pub fn load(model_path: &Path) -> Result<Self, InferenceError> {
        log::info!("Loading ONNX model from: {}", model_path.display());

        if !model_path.exists() {
            return Err(InferenceError(format!("Model not found: {}", model_path.display())));
        }

        let model_bytes = std::fs::read(model_path)
            .map_err(|e| InferenceError(format!("Failed to read model: {}", e)))?;

        let session = Session::builder()
            .map_err(|e| InferenceError(format!("Failed to create session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError(format!("Failed to set optimization: {}", e)))?
            .commit_from_memory(&model_bytes)
            .map_err(|e| InferenceError(format!("Failed to load model: {}", e)))?;

        if session.outputs.is_empty() {
            return Err(InferenceError("No output defined".to_string()));
        }

        let metadata = ModelMetadata {
            model_path: model_path.display().to_string(),
            checksum: hex::encode(Sha256::digest(&model_bytes)),
            input_fields: FEATURE_COUNT,
            layout_hash: layout_hash(),
            loaded_at: chrono::Utc::now(),
        };

        log::info!(
            "ONNX model loaded successfully (sha256: {}, layout: {:08x})",
            metadata.checksum,
            metadata.layout_hash
        );

        Ok(Self {
            session: Mutex::new(session),
            metadata,
        })
    }

    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }
}

impl FailureClassifier for OnnxClassifier {
    fn predict_proba(&self, input: &[f32; FEATURE_COUNT]) -> Result<Vec<[f32; 2]>, InferenceError> {
        let input_array = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), input.to_vec())
            .map_err(|e| InferenceError(format!("Array error: {}", e)))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| InferenceError(format!("Tensor error: {}", e)))?;

        let mut session = self.session.lock();

        let output_name = session.outputs.last()
            .map(|o| o.name.clone())
            .ok_or_else(|| InferenceError("No output defined".to_string()))?;

        let outputs = session.run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError(format!("Inference failed: {}", e)))?;

        let output = outputs.get(&output_name)
            .ok_or_else(|| InferenceError("No output".to_string()))?;

        let (_, data) = output.try_extract_tensor::<f32>()
            .map_err(|e| InferenceError(format!("Extract error: {}", e)))?;

        if data.len() != LABEL_COUNT * 2 {
            return Err(InferenceError(format!(
                "Expected {} probabilities, model returned {}",
                LABEL_COUNT * 2,
                data.len()
            )));
        }

        Ok(data.chunks_exact(2).map(|pair| [pair[0], pair[1]]).collect())
    }

    fn name(&self) -> &str {
        "onnx"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_model() {
        let result = OnnxClassifier::load(Path::new("/nonexistent/model.onnx"));
        let err = result.err().unwrap();
        assert!(err.to_string().contains("Model not found"));
    }

    #[test]
    fn test_load_garbage_model() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("model.onnx");
        std::fs::write(&path, b"not an onnx graph").unwrap();

        assert!(OnnxClassifier::load(&path).is_err());
    }
}
