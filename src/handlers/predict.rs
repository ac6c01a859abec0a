//! Prediction handler

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{AppError, AppResult, AppState};

/// One sample's feature vector
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    pub features: Vec<f32>,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: f32,
}

/// Run the loaded model on a single feature vector
pub async fn predict(
    State(state): State<AppState>,
    Json(req): Json<PredictRequest>,
) -> AppResult<Json<PredictResponse>> {
    if req.features.is_empty() {
        return Err(AppError::InvalidInput(
            "features must not be empty".to_string(),
        ));
    }

    if !req.features.iter().all(|f| f.is_finite()) {
        return Err(AppError::InvalidInput(
            "features must be finite numbers".to_string(),
        ));
    }

    // Dimensionality is an external contract; only enforceable when configured
    if let Some(expected) = state.config.model_input_dim {
        if req.features.len() != expected {
            return Err(AppError::DimensionMismatch {
                expected,
                got: req.features.len(),
            });
        }
    }

    let prediction = state.predictor.predict(&req.features)?;

    tracing::debug!("Served prediction: {}", prediction);

    Ok(Json(PredictResponse { prediction }))
}
