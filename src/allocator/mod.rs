//! Block allocation strategies
//!
//! Two classic textbook strategies are modeled:
//! - [`contiguous`] - a file occupies one consecutive run of blocks
//! - [`linked`] - a file's blocks may live anywhere, chained in claim order

pub mod contiguous;
pub mod linked;

pub use contiguous::ContiguousAllocator;
pub use linked::LinkedAllocator;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{BlocksimError, Result};
use crate::store::BlockStore;

/// Allocation strategy trait
///
/// Strategies are stateless; all disk state lives in the [`BlockStore`]
/// passed per call, and a strategy must not retain the borrow across calls.
pub trait AllocationStrategy {
    /// Claim `size` blocks on behalf of `owner`
    ///
    /// Returns the claimed indices in the order that defines the file's
    /// layout: an ascending consecutive run for contiguous allocation, the
    /// chain order for linked allocation. On `InsufficientSpace` the store
    /// is left unmodified.
    fn allocate(&self, store: &mut BlockStore, owner: &str, size: usize) -> Result<Vec<usize>>;

    /// Release previously claimed blocks
    fn deallocate(&self, store: &mut BlockStore, blocks: &[usize]) -> Result<()> {
        release_blocks(store, blocks)
    }

    /// Strategy name used in table headers
    fn describe(&self) -> &'static str;
}

/// The closed set of strategies a catalog can be built with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StrategyKind {
    Contiguous,
    Linked,
}

impl StrategyKind {
    /// Instantiate the strategy this kind names
    pub fn strategy(self) -> Box<dyn AllocationStrategy> {
        match self {
            StrategyKind::Contiguous => Box::new(ContiguousAllocator),
            StrategyKind::Linked => Box::new(LinkedAllocator),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Contiguous => write!(f, "contiguous"),
            StrategyKind::Linked => write!(f, "linked"),
        }
    }
}

impl FromStr for StrategyKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "contiguous" => Ok(StrategyKind::Contiguous),
            "linked" => Ok(StrategyKind::Linked),
            other => Err(format!("unknown allocation strategy: {other}")),
        }
    }
}

/// Shared release path for both strategies
///
/// Validates every index before touching the store so that a bad record
/// never leaves a partial deallocation behind.
fn release_blocks(store: &mut BlockStore, blocks: &[usize]) -> Result<()> {
    for &index in blocks {
        if !store.contains(index) {
            return Err(BlocksimError::InvalidBlockIndex(index));
        }
    }
    for &index in blocks {
        store.release(index);
    }
    Ok(())
}
