//! Linked allocation
//!
//! A file's blocks may live anywhere on the disk; the result order is the
//! chain order. Free blocks are counted up front, so a request that cannot
//! be satisfied in full never claims anything.

use crate::allocator::AllocationStrategy;
use crate::error::{BlocksimError, Result};
use crate::store::BlockStore;

/// Lowest-index-first linked allocator
#[derive(Debug, Clone, Copy, Default)]
pub struct LinkedAllocator;

impl AllocationStrategy for LinkedAllocator {
    fn allocate(&self, store: &mut BlockStore, owner: &str, size: usize) -> Result<Vec<usize>> {
        if store.free_blocks() < size {
            return Err(BlocksimError::InsufficientSpace {
                requested: size,
                free: store.free_blocks(),
            });
        }

        let chain: Vec<usize> = store
            .iter()
            .filter(|block| block.is_free())
            .map(|block| block.index())
            .take(size)
            .collect();
        for &index in &chain {
            store.claim(index, owner);
        }
        Ok(chain)
    }

    fn describe(&self) -> &'static str {
        "linked"
    }
}
