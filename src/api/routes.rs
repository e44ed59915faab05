//! API route configuration.

use crate::api::handlers::{
    allocate_handler, clear_allocations_handler, company_handler, delay_handler, echo_handler,
    env_handler, error_handler, files_handler, headers_handler, health_handler, ping_handler,
    products_handler, ready_handler, users_handler, version_handler, whoami_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Fake-data routes, nested under `/mock`.
///
/// # Endpoints
///
/// - `GET /users?count=&seed=`    - Batch of users
/// - `GET /products?count=&seed=` - Batch of products
/// - `GET /company?seed=`         - Single company
pub fn mock_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users_handler))
        .route("/products", get(products_handler))
        .route("/company", get(company_handler))
}

/// Utility routes, nested under `/util`.
///
/// # Endpoints
///
/// - `GET  /ping`, `/health`, `/ready` - Liveness and readiness
/// - `GET  /version`                   - Build version
/// - `GET  /env`                       - Process environment
/// - `GET  /whoami`                    - Host name, addresses, process id
/// - `POST /echo`                      - Echo JSON body
/// - `GET  /delay/{ms}`                - Cancellable wait
/// - `GET  /error/{code}`              - Respond with a chosen status
/// - `GET  /headers`                   - Request headers
/// - `GET  /files?path=`               - Browse the data root
/// - `POST /allocate/{mb}`             - Retain scratch memory
/// - `POST /clearallocations`          - Free scratch memory
pub fn util_routes() -> Router<AppState> {
    Router::new()
        .route("/ping", get(ping_handler))
        .route("/health", get(health_handler))
        .route("/ready", get(ready_handler))
        .route("/version", get(version_handler))
        .route("/env", get(env_handler))
        .route("/whoami", get(whoami_handler))
        .route("/echo", post(echo_handler))
        .route("/delay/{ms}", get(delay_handler))
        .route("/error/{code}", get(error_handler))
        .route("/headers", get(headers_handler))
        .route("/files", get(files_handler))
        .route("/allocate/{mb}", post(allocate_handler))
        .route("/clearallocations", post(clear_allocations_handler))
}
