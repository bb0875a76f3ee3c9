//! Liveness endpoints. Neither touches the scorer.

use axum::Json;
use serde::Serialize;

use crate::SERVICE_NAME;

#[derive(Serialize)]
pub struct RootStatus {
    pub status: &'static str,
    pub message: &'static str,
}

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}

/// GET / - Service identification.
pub async fn root() -> Json<RootStatus> {
    Json(RootStatus {
        status: "ok",
        message: SERVICE_NAME,
    })
}

/// GET /health - Infrastructure liveness probe.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus { status: "healthy" })
}
