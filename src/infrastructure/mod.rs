//! Infrastructure layer: process-local resources and OS integrations.
//!
//! - [`memory`] - Scratch memory registry backing the load-testing endpoints
//! - [`system`] - Host name and DNS resolution

pub mod memory;
pub mod system;
