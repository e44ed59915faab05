//! Handlers for memory load testing.

use axum::{
    Json,
    extract::{Path, State},
};

use serde_json::json;

use crate::api::dto::allocations::{AllocateResponse, ClearAllocationsResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Allocates and retains scratch memory.
///
/// # Endpoint
///
/// `POST /util/allocate/{mb}`, `mb` clamped to `1..=1024`.
///
/// Memory stays allocated until `POST /util/clearallocations`.
///
/// # Errors
///
/// Returns 400 Bad Request if `mb` is not an integer.
pub async fn allocate_handler(
    State(state): State<AppState>,
    Path(mb): Path<i64>,
) -> Result<Json<AllocateResponse>, AppError> {
    let registry = state.allocations.clone();

    // Zeroing and touching up to a gigabyte would stall the runtime thread.
    let summary = tokio::task::spawn_blocking(move || registry.allocate(mb))
        .await
        .map_err(|e| {
            AppError::internal("Allocation task failed", json!({ "reason": e.to_string() }))
        })?;

    Ok(Json(summary.into()))
}

/// Frees all scratch memory.
///
/// # Endpoint
///
/// `POST /util/clearallocations` → `{"cleared": true, "freedMb": 50}`
pub async fn clear_allocations_handler(
    State(state): State<AppState>,
) -> Json<ClearAllocationsResponse> {
    let freed_mb = state.allocations.clear();

    Json(ClearAllocationsResponse {
        cleared: true,
        freed_mb,
    })
}
