//! File records stored in the catalog

use serde::{Deserialize, Serialize};

/// Catalog entry for an allocated file
///
/// `blocks` is the authoritative list of the indices the file owns, in
/// strategy-defined order: an ascending consecutive run under contiguous
/// allocation, the chain order under linked allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRecord {
    /// File name, unique within a catalog
    pub name: String,

    /// Block indices owned by this file
    pub blocks: Vec<usize>,
}

impl FileRecord {
    pub fn new(name: impl Into<String>, blocks: Vec<usize>) -> Self {
        FileRecord {
            name: name.into(),
            blocks,
        }
    }

    /// File size in blocks
    pub fn size(&self) -> usize {
        self.blocks.len()
    }
}
