//! Registry of scratch buffers allocated for memory load testing.

use std::sync::{Mutex, MutexGuard, PoisonError};

/// One mebibyte.
pub const MB: usize = 1024 * 1024;

/// Smallest allocation in megabytes.
pub const MIN_ALLOCATION_MB: i64 = 1;

/// Largest single allocation in megabytes.
pub const MAX_ALLOCATION_MB: i64 = 1024;

/// Stride used to touch freshly allocated memory so the OS commits every page.
const PAGE_SIZE: usize = 4096;

/// State of the registry right after an allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AllocationSummary {
    pub allocated_mb: usize,
    pub chunks: usize,
    pub total_mb: usize,
}

/// Ordered list of scratch buffers kept alive until explicitly cleared.
///
/// The registry is owned by the application state and shared between
/// requests; appends and clears are serialized by an internal mutex.
/// The total registered size is always the sum of the buffer lengths.
#[derive(Debug, Default)]
pub struct AllocationRegistry {
    chunks: Mutex<Vec<Box<[u8]>>>,
}

impl AllocationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocates `mb` megabytes (clamped to `1..=1024`), touches every page and
    /// keeps the buffer alive.
    pub fn allocate(&self, mb: i64) -> AllocationSummary {
        let allocated_mb = mb.clamp(MIN_ALLOCATION_MB, MAX_ALLOCATION_MB) as usize;

        let mut buffer = vec![0u8; allocated_mb * MB].into_boxed_slice();
        for byte in buffer.iter_mut().step_by(PAGE_SIZE) {
            *byte = 1;
        }

        let (chunks, total_mb) = {
            let mut guard = self.lock();
            guard.push(buffer);
            (guard.len(), total_bytes(&guard) / MB)
        };

        record_gauges(chunks, total_mb);
        tracing::info!(allocated_mb, chunks, total_mb, "Allocated scratch memory");

        AllocationSummary {
            allocated_mb,
            chunks,
            total_mb,
        }
    }

    /// Drops every registered buffer and returns how many megabytes were freed.
    ///
    /// The size is computed under the same lock that empties the list.
    pub fn clear(&self) -> usize {
        let freed: Vec<Box<[u8]>> = std::mem::take(&mut *self.lock());
        let freed_mb = total_bytes(&freed) / MB;
        drop(freed);

        record_gauges(0, 0);
        tracing::info!(freed_mb, "Cleared scratch memory");

        freed_mb
    }

    pub fn chunk_count(&self) -> usize {
        self.lock().len()
    }

    pub fn total_mb(&self) -> usize {
        total_bytes(&self.lock()) / MB
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Box<[u8]>>> {
        // Buffers stay valid even if a holder panicked mid-push.
        self.chunks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn total_bytes(chunks: &[Box<[u8]>]) -> usize {
    chunks.iter().map(|c| c.len()).sum()
}

fn record_gauges(chunks: usize, total_mb: usize) {
    metrics::gauge!("allocations_chunks").set(chunks as f64);
    metrics::gauge!("allocations_total_mb").set(total_mb as f64);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_clamps_lower_bound() {
        let registry = AllocationRegistry::new();

        assert_eq!(registry.allocate(0).allocated_mb, 1);
        assert_eq!(registry.allocate(-5).allocated_mb, 1);
        assert_eq!(registry.allocate(i64::MIN).allocated_mb, 1);
        assert_eq!(registry.total_mb(), 3);
    }

    #[test]
    fn test_allocate_accumulates() {
        let registry = AllocationRegistry::new();

        let first = registry.allocate(2);
        assert_eq!(
            first,
            AllocationSummary {
                allocated_mb: 2,
                chunks: 1,
                total_mb: 2
            }
        );

        let second = registry.allocate(3);
        assert_eq!(second.chunks, 2);
        assert_eq!(second.total_mb, 5);
    }

    #[test]
    fn test_clear_reports_freed_then_zero() {
        let registry = AllocationRegistry::new();
        registry.allocate(1);
        registry.allocate(2);

        assert_eq!(registry.clear(), 3);
        assert_eq!(registry.chunk_count(), 0);
        assert_eq!(registry.clear(), 0);
    }

    #[test]
    fn test_touched_pages() {
        let registry = AllocationRegistry::new();
        registry.allocate(1);

        let guard = registry.lock();
        let buffer = &guard[0];
        assert_eq!(buffer.len(), MB);
        assert_eq!(buffer[0], 1);
        assert_eq!(buffer[PAGE_SIZE], 1);
        assert_eq!(buffer[1], 0);
    }

    #[test]
    fn test_registries_are_independent() {
        let a = AllocationRegistry::new();
        let b = AllocationRegistry::new();
        a.allocate(1);

        assert_eq!(a.chunk_count(), 1);
        assert_eq!(b.chunk_count(), 0);
    }
}
