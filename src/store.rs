//! Simulated block device
//!
//! A `BlockStore` is a fixed-length run of blocks, each either free or
//! claimed by exactly one file. All allocation state lives here; the
//! strategies in [`crate::allocator`] only mutate it through `claim` and
//! `release`.

use serde::{Deserialize, Serialize};

/// A single addressable unit of the simulated disk
///
/// A block is occupied exactly when it has an owner, so the free/occupied
/// flag of the classic formulation is derived rather than stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    index: usize,
    owner: Option<String>,
}

impl Block {
    fn free(index: usize) -> Self {
        Block { index, owner: None }
    }

    /// Position of this block on the disk
    pub fn index(&self) -> usize {
        self.index
    }

    /// Name of the file occupying this block, if any
    ///
    /// This is a display-only back-reference; ownership of the block list
    /// belongs to the catalog entry, never to the block.
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    pub fn is_free(&self) -> bool {
        self.owner.is_none()
    }
}

/// Fixed-size ordered sequence of blocks representing the simulated disk
///
/// The block count is set once at construction and never changes. Indices
/// are positions: block `i` is always the `i`-th element. Out-of-range
/// indices are a caller bug, not a recoverable condition, so `claim` and
/// `release` panic on them; strategies must only pass indices they derived
/// from iterating the store itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlockStore {
    blocks: Vec<Block>,

    /// Number of free blocks, kept in sync by claim/release
    free_blocks: usize,
}

impl BlockStore {
    /// Create a store of `total_blocks` free blocks indexed `0..total_blocks`
    pub fn new(total_blocks: usize) -> Self {
        BlockStore {
            blocks: (0..total_blocks).map(Block::free).collect(),
            free_blocks: total_blocks,
        }
    }

    /// Total number of blocks on the disk
    pub fn total_blocks(&self) -> usize {
        self.blocks.len()
    }

    /// Number of free blocks available
    pub fn free_blocks(&self) -> usize {
        self.free_blocks
    }

    pub fn get(&self, index: usize) -> &Block {
        &self.blocks[index]
    }

    /// Check whether `index` names a block on this disk
    pub fn contains(&self, index: usize) -> bool {
        index < self.blocks.len()
    }

    /// Mark a free block as occupied by `owner`
    ///
    /// Panics if `index` is out of range or the block is already claimed;
    /// both indicate a strategy bug.
    pub fn claim(&mut self, index: usize, owner: &str) {
        let block = &mut self.blocks[index];
        assert!(
            block.owner.is_none(),
            "block {} already claimed by {:?}",
            index,
            block.owner
        );
        block.owner = Some(owner.to_string());
        self.free_blocks -= 1;
    }

    /// Mark an occupied block as free and clear its owner
    ///
    /// Panics if `index` is out of range. Releasing an already-free block
    /// is logged as a double-free and otherwise ignored.
    pub fn release(&mut self, index: usize) {
        let block = &mut self.blocks[index];
        if block.owner.is_none() {
            tracing::warn!("double-free detected for block {}", index);
            return;
        }
        block.owner = None;
        self.free_blocks += 1;
    }

    /// Iterate over all blocks in index order
    pub fn iter(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }
}
