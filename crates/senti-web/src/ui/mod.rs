//! Form-driven client page.
//!
//! Runs as its own process and talks to the classifier service only over
//! HTTP. The current input text is the only UI state; it travels with the
//! form submission and the `?example=` link, so the server keeps nothing
//! between requests.

pub mod client;
pub mod handlers;

use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub use client::{BackendClient, DEFAULT_BACKEND_URL, REQUEST_TIMEOUT};

/// Canned inputs offered below the form.
pub const EXAMPLES: &[&str] = &[
    "I absolutely love this product. It exceeded my expectations!",
    "This is the worst experience I've ever had.",
    "It’s okay, not good, not bad.",
];

/// Example text for a 1-based example number.
pub fn example(number: usize) -> Option<&'static str> {
    number.checked_sub(1).and_then(|idx| EXAMPLES.get(idx).copied())
}

/// State shared across client page handlers.
#[derive(Clone)]
pub struct UiState {
    pub backend: BackendClient,
}

impl UiState {
    pub fn new(backend: BackendClient) -> Self {
        Self { backend }
    }
}

/// Create the client page router.
pub fn create_ui_router(state: UiState) -> Router {
    Router::new()
        .route("/", get(handlers::index).post(handlers::submit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Run the client page until the process is stopped.
pub async fn run_ui(backend_url: &str, host: &str, port: u16) -> anyhow::Result<()> {
    let backend = BackendClient::new(backend_url);

    // The service may come up later; an unreachable backend only shows up as
    // an inline error when a sentence is submitted.
    if backend.health_check().await? {
        info!(backend = backend.base_url(), "Sentiment service is reachable");
    } else {
        warn!(backend = backend.base_url(), "Sentiment service is not reachable yet");
    }

    let app = create_ui_router(UiState::new(backend));

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!("Client page listening on http://{}:{}", host, port);

    axum::serve(listener, app).await?;
    Ok(())
}
