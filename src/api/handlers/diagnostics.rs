//! Handlers for runtime introspection and fault injection.

use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
};
use chrono::Utc;
use serde_json::{Value, json};

use crate::api::dto::diagnostics::{
    DelayResponse, EchoResponse, ErrorInjectionResponse, VersionResponse, WhoAmIResponse,
};
use crate::application::services::diagnostics_service::clamp_status_code;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::case_insensitive::CaseInsensitiveMap;
use crate::utils::headers::to_flat_map;

/// `GET /util/version`
pub async fn version_handler(State(state): State<AppState>) -> Json<VersionResponse> {
    Json(state.diagnostics.version().into())
}

/// `GET /util/env`
///
/// Returns every process environment variable. Keys are unique regardless of case.
pub async fn env_handler(State(state): State<AppState>) -> Json<CaseInsensitiveMap> {
    Json(state.diagnostics.environment())
}

/// `GET /util/whoami`
///
/// # Errors
///
/// Returns 500 Internal Server Error if the host name cannot be resolved.
pub async fn whoami_handler(
    State(state): State<AppState>,
) -> Result<Json<WhoAmIResponse>, AppError> {
    let identity = state.diagnostics.whoami().await?;
    Ok(Json(identity.into()))
}

/// Echoes any JSON body.
///
/// # Endpoint
///
/// `POST /util/echo`
///
/// # Errors
///
/// Malformed JSON or a missing `Content-Type: application/json` is rejected
/// by the extractor with a 4xx status.
pub async fn echo_handler(Json(body): Json<Value>) -> Json<EchoResponse> {
    Json(EchoResponse {
        received_at_utc: Utc::now(),
        body,
    })
}

/// Waits before responding.
///
/// # Endpoint
///
/// `GET /util/delay/{ms}`
///
/// # Cancellation
///
/// The wait ends early when the server shuts down (503) or the request times
/// out (408). A client that disconnects drops the request and gets nothing.
///
/// # Errors
///
/// - 400 Bad Request if `ms` is negative or not an integer
/// - 503 Service Unavailable if cancelled by shutdown
pub async fn delay_handler(
    State(state): State<AppState>,
    Path(ms): Path<i64>,
) -> Result<Json<DelayResponse>, AppError> {
    let token = state.shutdown.child_token();
    let outcome = state.diagnostics.delay(ms, &token).await?;
    Ok(Json(outcome.into()))
}

/// Responds with the requested status code, clamped to `100..=599`.
///
/// Codes below 200 are built as given, but hyper does not send an
/// informational status as a final response: over a real connection a
/// `1xx` result reaches the client as an empty `500`.
///
/// # Endpoint
///
/// `GET /util/error/{code}`
///
/// # Response
///
/// ```json
/// { "error": "Generated error 503" }
/// ```
pub async fn error_handler(
    Path(code): Path<i64>,
) -> Result<(StatusCode, Json<ErrorInjectionResponse>), AppError> {
    let clamped = clamp_status_code(code);
    let status = StatusCode::from_u16(clamped).map_err(|e| {
        AppError::internal("Invalid status code", json!({ "code": clamped, "reason": e.to_string() }))
    })?;

    Ok((
        status,
        Json(ErrorInjectionResponse {
            error: format!("Generated error {clamped}"),
        }),
    ))
}

/// `GET /util/headers`
///
/// Repeated headers are joined into one comma-separated value.
pub async fn headers_handler(headers: HeaderMap) -> Json<BTreeMap<String, String>> {
    Json(to_flat_map(&headers))
}
