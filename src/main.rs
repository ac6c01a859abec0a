//! Inference Server
//!
//! Loads a serialized ONNX model at startup and serves predictions over HTTP.
//!
//! # Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────┐
//! │               INFERENCE SERVER                 │
//! ├────────────────────────────────────────────────┤
//! │  ┌───────────┐        ┌─────────────────────┐  │
//! │  │  API      │        │  Predictor          │  │
//! │  │  (Axum)   │──────▶ │  (ONNX Runtime)     │  │
//! │  └───────────┘        └──────────┬──────────┘  │
//! │                                  ▼             │
//! │                          ┌─────────────┐       │
//! │                          │ model.onnx  │       │
//! │                          └─────────────┘       │
//! └────────────────────────────────────────────────┘
//! ```

mod config;
mod error;
mod handlers;
mod inference;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub use error::{AppError, AppResult};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "inference_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = config::Config::from_env();

    tracing::info!("Inference server starting...");
    tracing::info!("Model artifact: {}", config.model_path);

    // Load the model. Fatal if the artifact is missing or corrupt; the
    // service must not accept requests without it.
    let predictor = inference::OnnxPredictor::load(&config.model_path)?;
    tracing::info!("Model loaded");

    // Build application state
    let state = AppState {
        predictor: Arc::new(predictor),
        config: config.clone(),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("🚀 Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub predictor: Arc<dyn inference::Predictor>,
    pub config: config::Config,
}

/// Create the main router with all routes
fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health::check))
        .route("/api/predict", post(handlers::predict::predict))
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
