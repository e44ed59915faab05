//! # Test Backend
//!
//! An HTTP test-support backend built with Axum: reproducible fake data plus a
//! set of diagnostic and fault-injection endpoints for exercising clients,
//! proxies and orchestrators.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Generated entities and the host resolver trait
//! - **Faker** ([`faker`]) - Seeded random source and English field generators
//! - **Application Layer** ([`application`]) - Mock data, file browsing, diagnostics
//! - **Infrastructure Layer** ([`infrastructure`]) - Memory registry, OS host lookup
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - `/mock/users`, `/mock/products`, `/mock/company` with `count` and `seed`
//! - Liveness, readiness, version, environment and host introspection
//! - Echo, cancellable delay, status code injection, header reflection
//! - File browsing confined to a data root
//! - Scratch memory allocation for load tests
//!
//! ## Quick Start
//!
//! ```bash
//! export DATA_ROOT="./data"
//! export DISABLE_HTTPS_REDIRECT=1
//!
//! cargo run
//! curl "http://localhost:8080/mock/users?count=2&seed=42"
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod faker;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{DiagnosticsService, FileBrowser, MockDataService};
    pub use crate::domain::entities::{Company, FileLookup, Product, User};
    pub use crate::error::AppError;
    pub use crate::faker::RandomSource;
    pub use crate::state::AppState;
}
