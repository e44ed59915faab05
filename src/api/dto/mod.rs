//! Data Transfer Objects for API requests and responses.
//!
//! Responses serialize in camelCase; query parameters are parsed with
//! `serde_with` and checked with `validator` where they carry limits.

pub mod allocations;
pub mod diagnostics;
pub mod files;
pub mod health;
pub mod mock;
