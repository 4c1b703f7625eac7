//! Contiguous allocation
//!
//! A file occupies one consecutive run of blocks. Allocation is
//! earliest-fit: the scan claims the first run long enough, not the
//! tightest one.

use crate::allocator::AllocationStrategy;
use crate::error::{BlocksimError, Result};
use crate::store::BlockStore;

/// Earliest-fit contiguous allocator
#[derive(Debug, Clone, Copy, Default)]
pub struct ContiguousAllocator;

impl ContiguousAllocator {
    /// Find the start of the first free run of at least `size` blocks
    fn find_run(store: &BlockStore, size: usize) -> Option<usize> {
        let mut run_start = 0;
        let mut run_len = 0;

        for block in store.iter() {
            if block.is_free() {
                if run_len == 0 {
                    run_start = block.index();
                }
                run_len += 1;
                if run_len == size {
                    return Some(run_start);
                }
            } else {
                run_len = 0;
            }
        }
        None
    }
}

impl AllocationStrategy for ContiguousAllocator {
    fn allocate(&self, store: &mut BlockStore, owner: &str, size: usize) -> Result<Vec<usize>> {
        // Contiguity for the full request is confirmed before any block is
        // claimed, so a failed call never mutates the store.
        let start = Self::find_run(store, size).ok_or(BlocksimError::InsufficientSpace {
            requested: size,
            free: store.free_blocks(),
        })?;

        let claimed: Vec<usize> = (start..start + size).collect();
        for &index in &claimed {
            store.claim(index, owner);
        }
        Ok(claimed)
    }

    fn describe(&self) -> &'static str {
        "contiguous"
    }
}
