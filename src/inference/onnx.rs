//! ONNX Runtime backend.

use std::path::Path;

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use parking_lot::Mutex;

use super::{InferenceError, Predictor};

/// A model artifact deserialized into an ONNX Runtime session.
///
/// The session is loaded once at startup and never replaced. `Session::run`
/// needs exclusive access, so it lives behind a mutex; concurrent requests
/// serialize at the session.
#[derive(Debug)]
pub struct OnnxPredictor {
    session: Mutex<Session>,
}

impl OnnxPredictor {
    /// Load an ONNX model from a file.
    pub fn load(model_path: &str) -> Result<Self, InferenceError> {
        if !Path::new(model_path).exists() {
            return Err(InferenceError::ModelNotFound(model_path.to_string()));
        }

        let session = Session::builder()
            .map_err(|e| InferenceError::LoadFailed(format!("session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError::LoadFailed(format!("optimization level: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| InferenceError::LoadFailed(e.to_string()))?;

        Ok(Self {
            session: Mutex::new(session),
        })
    }
}

impl Predictor for OnnxPredictor {
    fn predict(&self, features: &[f32]) -> Result<f32, InferenceError> {
        // Single sample, shaped (1, n_features)
        let input_array = Array2::<f32>::from_shape_vec((1, features.len()), features.to_vec())
            .map_err(|e| InferenceError::RunFailed(format!("array error: {}", e)))?;

        let mut session = self.session.lock();

        let output_name = session
            .outputs
            .first()
            .map(|o| o.name.clone())
            .ok_or_else(|| InferenceError::RunFailed("model defines no output".to_string()))?;

        let input_tensor = Value::from_array(input_array)
            .map_err(|e| InferenceError::RunFailed(format!("tensor error: {}", e)))?;

        let outputs = session
            .run(ort::inputs![input_tensor])
            .map_err(|e| InferenceError::RunFailed(e.to_string()))?;

        let output = outputs
            .get(&output_name)
            .ok_or_else(|| InferenceError::RunFailed("no output produced".to_string()))?;

        let output_tensor = output
            .try_extract_tensor::<f32>()
            .map_err(|e| InferenceError::RunFailed(format!("extract error: {}", e)))?;

        output_tensor
            .1
            .first()
            .copied()
            .ok_or_else(|| InferenceError::RunFailed("empty model output".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_reports_missing_artifact() {
        let err = OnnxPredictor::load("/nonexistent/model.onnx").unwrap_err();
        assert!(matches!(err, InferenceError::ModelNotFound(_)));
        assert!(err.to_string().contains("/nonexistent/model.onnx"));
    }
}
