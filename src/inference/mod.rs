//! Model loading and inference.
//!
//! The handler layer only sees the [`Predictor`] trait, so tests can
//! substitute a deterministic stub for the real ONNX session.

mod onnx;

pub use onnx::OnnxPredictor;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("model artifact not found: {0}")]
    ModelNotFound(String),

    #[error("failed to load model: {0}")]
    LoadFailed(String),

    #[error("inference failed: {0}")]
    RunFailed(String),
}

/// A loaded model that can score one sample at a time.
pub trait Predictor: Send + Sync {
    /// Run the model on a single feature vector and return its scalar output.
    fn predict(&self, features: &[f32]) -> Result<f32, InferenceError>;
}
