//! Liveness and readiness handlers.

use axum::Json;
use chrono::Utc;

use crate::api::dto::health::{HealthResponse, PingResponse, ReadyResponse};

/// `GET /util/ping` → `{"message": "pong", "timeUtc": ...}`
pub async fn ping_handler() -> Json<PingResponse> {
    Json(PingResponse {
        message: "pong",
        time_utc: Utc::now(),
    })
}

/// `GET /util/health` → `{"status": "Healthy", "timeUtc": ...}`
///
/// The service has no dependencies to probe, so it is healthy whenever it answers.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "Healthy",
        time_utc: Utc::now(),
    })
}

/// `GET /util/ready` → `{"status": "Ready"}`
pub async fn ready_handler() -> Json<ReadyResponse> {
    Json(ReadyResponse { status: "Ready" })
}

/// Orchestrator probe.
///
/// # Endpoint
///
/// `GET /healthz` → `200 Healthy` as plain text. Not subject to HTTPS redirection.
pub async fn healthz_handler() -> &'static str {
    "Healthy"
}
