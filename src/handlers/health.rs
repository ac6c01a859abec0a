//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    model_path: String,
    model_input_dim: Option<usize>,
    timestamp: i64,
}

pub async fn check(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        model_path: state.config.model_path.clone(),
        model_input_dim: state.config.model_input_dim,
        timestamp: chrono::Utc::now().timestamp(),
    })
}
