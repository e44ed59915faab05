//! Utility functions shared by services and handlers.
//!
//! - [`path_guard`] - Lexical path normalization and root confinement
//! - [`headers`] - Folding request headers into a flat map
//! - [`case_insensitive`] - String map with case-insensitive lookups

pub mod case_insensitive;
pub mod headers;
pub mod path_guard;
