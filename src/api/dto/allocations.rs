//! DTOs for scratch memory allocation.

use serde::Serialize;

use crate::infrastructure::memory::AllocationSummary;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocateResponse {
    pub allocated_mb: usize,
    pub chunks: usize,
    pub total_mb: usize,
}

impl From<AllocationSummary> for AllocateResponse {
    fn from(summary: AllocationSummary) -> Self {
        Self {
            allocated_mb: summary.allocated_mb,
            chunks: summary.chunks,
            total_mb: summary.total_mb,
        }
    }
}

/// `cleared` is always `true`; `freedMb` is the size held before clearing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearAllocationsResponse {
    pub cleared: bool,
    pub freed_mb: usize,
}
