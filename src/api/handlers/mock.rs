//! Handlers for fake-data generation.

use axum::{
    Json,
    extract::{Query, State},
};

use crate::api::dto::mock::{BatchQuery, SeedQuery};
use crate::domain::entities::{Company, Product, User};
use crate::state::AppState;

/// Generates a batch of users.
///
/// # Endpoint
///
/// `GET /mock/users?count=10&seed=42`
///
/// # Query Parameters
///
/// - `count` (optional): Number of users, clamped to `1..=1000` (default: 10)
/// - `seed` (optional): Makes the batch reproducible
///
/// # Errors
///
/// Returns 400 Bad Request if `count` or `seed` is not an integer.
pub async fn users_handler(
    State(state): State<AppState>,
    Query(query): Query<BatchQuery>,
) -> Json<Vec<User>> {
    Json(state.mock_data.get_users(query.count(), query.seed))
}

/// Generates a batch of products.
///
/// # Endpoint
///
/// `GET /mock/products?count=10&seed=42`
///
/// Same parameters as [`users_handler`].
pub async fn products_handler(
    State(state): State<AppState>,
    Query(query): Query<BatchQuery>,
) -> Json<Vec<Product>> {
    Json(state.mock_data.get_products(query.count(), query.seed))
}

/// Generates a single company.
///
/// # Endpoint
///
/// `GET /mock/company?seed=42`
pub async fn company_handler(
    State(state): State<AppState>,
    Query(query): Query<SeedQuery>,
) -> Json<Company> {
    Json(state.mock_data.get_company(query.seed))
}
