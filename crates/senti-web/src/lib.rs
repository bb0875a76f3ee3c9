//! Senti Web Servers
//!
//! Two axum applications: the classifier service (JSON API over a shared
//! scorer) and the form-driven client page that calls it over HTTP.

pub mod error;
pub mod routes;
pub mod state;
pub mod ui;

use axum::{
    routing::{get, post},
    Router,
};
use senti_core::Scorer;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Name reported by `GET /`.
pub const SERVICE_NAME: &str = "VADER Sentiment API";

/// Create the classifier service router.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(routes::status::root))
        .route("/health", get(routes::status::health))
        .route("/analyze", post(routes::analyze::analyze))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Run the classifier service until the process is stopped.
///
/// The scorer must be fully initialized before this is called.
pub async fn run_server(scorer: Arc<dyn Scorer>, host: &str, port: u16) -> anyhow::Result<()> {
    let state = AppState::new(scorer);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!("Classifier service listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
