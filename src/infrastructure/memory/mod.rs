//! In-memory resources owned by the running process.

pub mod allocation_registry;

pub use allocation_registry::{AllocationRegistry, AllocationSummary};
