//! Domain layer: generated records, file-browsing results and system seams.
//!
//! # Architecture
//!
//! - [`entities`] - Records produced per request (users, products, companies, file listings)
//! - [`host`] - Trait for resolving the local host identity used by `whoami`
//!
//! Entities are created, serialized and discarded within a single request.
//! Nothing here is persisted.

pub mod entities;
pub mod host;
