//! Configuration module

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Filesystem path of the serialized model artifact
    pub model_path: String,

    /// Server port
    pub port: u16,

    /// Expected feature-vector length, if known. The artifact carries no
    /// usable metadata for this, so it is a contract supplied by whoever
    /// exported the model. When set, mismatched requests are rejected
    /// before reaching the model.
    pub model_input_dim: Option<usize>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            model_path: env::var("MODEL_PATH").unwrap_or_else(|_| "model.onnx".to_string()),

            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5001),

            model_input_dim: env::var("MODEL_INPUT_DIM")
                .ok()
                .and_then(|d| d.parse().ok()),
        }
    }
}
