//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /healthz` - Orchestrator probe (plain text)
//! - `/mock/*`      - Fake-data generation
//! - `/util/*`      - Diagnostics and fault injection
//!
//! # Middleware
//!
//! - **HTTPS redirect** - `/mock` and `/util` only, when configured
//! - **Request timeout** - 408 after `REQUEST_TIMEOUT_SECS`
//! - **Tracing** - Structured request/response logging
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::handlers::healthz_handler;
use crate::api::middleware::{https_redirect, tracing};
use crate::config::Config;
use crate::state::AppState;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::timeout::TimeoutLayer;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `config` - decides HTTPS redirection and the request timeout
pub fn app_router(state: AppState, config: &Config) -> NormalizePath<Router> {
    let mut api_router = Router::new()
        .nest("/mock", api::routes::mock_routes())
        .nest("/util", api::routes::util_routes());

    if let Some(port) = config.https_port.filter(|_| config.is_https_redirect_active()) {
        api_router = api_router.layer(middleware::from_fn_with_state(port, https_redirect::layer));
    }

    let router = Router::new()
        .route("/healthz", get(healthz_handler))
        .merge(api_router)
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
