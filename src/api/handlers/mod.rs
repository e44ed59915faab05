//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod allocations;
pub mod diagnostics;
pub mod files;
pub mod health;
pub mod mock;

pub use allocations::{allocate_handler, clear_allocations_handler};
pub use diagnostics::{
    delay_handler, echo_handler, env_handler, error_handler, headers_handler, version_handler,
    whoami_handler,
};
pub use files::files_handler;
pub use health::{health_handler, healthz_handler, ping_handler, ready_handler};
pub use mock::{company_handler, products_handler, users_handler};
