//! HTTP middleware for request processing.
//!
//! Provides HTTPS redirection and request tracing.

pub mod https_redirect;
pub mod tracing;
