//! File catalog and orchestration
//!
//! The [`Catalog`] owns the block store and the file table and wires them to
//! the allocation strategy chosen at construction. It is the only type an
//! embedding shell needs to drive: create, delete, and the two read-only
//! views over disk and table state.

pub mod record;

pub use record::FileRecord;

use std::collections::BTreeMap;
use std::fmt::Write;

use tracing::debug;

use crate::allocator::{AllocationStrategy, StrategyKind};
use crate::error::{BlocksimError, Result};
use crate::store::{Block, BlockStore};

/// Simulated disk with a name-keyed file table
///
/// The strategy is selected once and not swappable at runtime. The file
/// table is a `BTreeMap`, so every listing iterates in ascending name order
/// and output is reproducible.
pub struct Catalog {
    store: BlockStore,
    files: BTreeMap<String, FileRecord>,
    kind: StrategyKind,
    strategy: Box<dyn AllocationStrategy>,
}

impl Catalog {
    /// Create a catalog over a fresh disk of `total_blocks` blocks
    pub fn new(total_blocks: usize, kind: StrategyKind) -> Self {
        Catalog {
            store: BlockStore::new(total_blocks),
            files: BTreeMap::new(),
            kind,
            strategy: kind.strategy(),
        }
    }

    /// Allocate `size` blocks and record the file under `name`
    ///
    /// Fails with `DuplicateName` if the name is taken and with
    /// `InsufficientSpace` if the strategy cannot satisfy the request;
    /// neither failure mutates the disk or the table.
    pub fn create_file(&mut self, name: &str, size: usize) -> Result<()> {
        if name.is_empty() {
            return Err(BlocksimError::InvalidFileName);
        }
        if size == 0 {
            return Err(BlocksimError::InvalidFileSize(size));
        }
        if self.files.contains_key(name) {
            return Err(BlocksimError::DuplicateName(name.to_string()));
        }

        let blocks = self.strategy.allocate(&mut self.store, name, size)?;
        debug!("created file {name}: {size} blocks at {blocks:?}");
        self.files
            .insert(name.to_string(), FileRecord::new(name, blocks));
        Ok(())
    }

    /// Free every block owned by `name` and drop its record
    pub fn delete_file(&mut self, name: &str) -> Result<()> {
        let record = self
            .files
            .remove(name)
            .ok_or_else(|| BlocksimError::NotFound(name.to_string()))?;
        self.strategy.deallocate(&mut self.store, &record.blocks)?;
        debug!("deleted file {name}: freed {} blocks", record.blocks.len());
        Ok(())
    }

    /// Look up a file's record by name
    pub fn file(&self, name: &str) -> Option<&FileRecord> {
        self.files.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn total_blocks(&self) -> usize {
        self.store.total_blocks()
    }

    pub fn free_blocks(&self) -> usize {
        self.store.free_blocks()
    }

    /// Strategy this catalog was built with
    pub fn strategy_kind(&self) -> StrategyKind {
        self.kind
    }

    /// Every block in index order, with its owner if occupied
    ///
    /// Pure read; this is the disk-layout view an embedding shell renders.
    pub fn disk_layout(&self) -> impl Iterator<Item = &Block> {
        self.store.iter()
    }

    /// Every file in ascending name order with its block sequence
    ///
    /// Pure read; block order within a record is strategy-defined.
    pub fn allocation_table(&self) -> impl Iterator<Item = &FileRecord> {
        self.files.values()
    }

    /// Render the disk as one `[ ]`/`[name]` cell per block
    pub fn render_disk_layout(&self) -> String {
        let mut out = String::from("Disk Status:\n");
        for block in self.store.iter() {
            match block.owner() {
                Some(owner) => write!(out, "[{owner}] ").unwrap(),
                None => out.push_str("[ ] "),
            }
        }
        out.push('\n');
        out
    }

    /// Render the allocation table, one file per row in name order
    ///
    /// Linked chains are drawn with arrows and a NULL terminator; contiguous
    /// runs as a plain index list.
    pub fn render_allocation_table(&self) -> String {
        let mut out = match self.kind {
            StrategyKind::Contiguous => String::from("Contiguous Allocation Table:\n"),
            StrategyKind::Linked => String::from("Linked Allocation Table:\n"),
        };
        for record in self.files.values() {
            write!(out, "File: {} -> Blocks: ", record.name).unwrap();
            match self.kind {
                StrategyKind::Contiguous => {
                    for index in &record.blocks {
                        write!(out, "{index} ").unwrap();
                    }
                    out.push('\n');
                }
                StrategyKind::Linked => {
                    for index in &record.blocks {
                        write!(out, "{index} -> ").unwrap();
                    }
                    out.push_str("NULL\n");
                }
            }
        }
        out
    }
}
