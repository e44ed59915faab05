//! Application layer services.
//!
//! Services hold the request-independent logic behind the HTTP handlers and
//! can be used directly as a library API.
//!
//! # Available Services
//!
//! - [`services::mock_data_service::MockDataService`] - Seeded fake users, products and companies
//! - [`services::file_browser::FileBrowser`] - Root-confined directory listing and file reading
//! - [`services::diagnostics_service::DiagnosticsService`] - Version, environment, host identity, delays

pub mod services;
