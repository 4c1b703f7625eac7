//! Block Allocation Simulator
//!
//! An in-memory model of how a filesystem maps files onto a fixed-size
//! block device, built for teaching the two classic allocation strategies.
//!
//! ## Features
//!
//! - **Fixed-size disk**: block count chosen once at construction
//! - **Contiguous allocation**: earliest-fit consecutive runs
//! - **Linked allocation**: scattered blocks chained in claim order
//! - **Typed errors** for duplicate names, missing files, and full disks
//! - **Deterministic views**: disk layout by index, file table by name
//!
//! The crate is the core of a simulator; the interactive shell that reads
//! menu choices is expected to live in the embedding application. Nothing
//! here touches a real device or persists across runs.
//!
//! ## Modules
//!
//! - [`error`] - Error types for catalog operations
//! - [`store`] - The simulated disk ([`store::BlockStore`])
//! - [`allocator`] - Allocation strategies behind one trait
//! - [`catalog`] - The orchestrating [`catalog::Catalog`]
//!
//! ## Example Usage
//!
//! ```rust
//! use blocksim::{BlocksimError, Catalog, StrategyKind};
//!
//! let mut catalog = Catalog::new(5, StrategyKind::Contiguous);
//!
//! catalog.create_file("a", 3).unwrap();
//! catalog.create_file("b", 2).unwrap();
//! assert_eq!(catalog.file("a").unwrap().blocks, vec![0, 1, 2]);
//!
//! // The disk is full now
//! assert!(matches!(
//!     catalog.create_file("c", 1),
//!     Err(BlocksimError::InsufficientSpace { .. })
//! ));
//!
//! // Deleting frees every owned block atomically
//! catalog.delete_file("a").unwrap();
//! assert_eq!(catalog.free_blocks(), 3);
//!
//! println!("{}", catalog.render_disk_layout());
//! println!("{}", catalog.render_allocation_table());
//! ```
//!
//! ## Concurrency
//!
//! Everything is single-threaded and synchronous; each operation is a
//! bounded scan over at most the disk's block count. A multi-client wrapper
//! must serialize whole catalog operations, since allocate and record-insert
//! have to stay atomic with respect to concurrent create/delete calls.

pub mod allocator;
pub mod catalog;
pub mod error;
pub mod store;

// Re-export commonly used types
pub use allocator::{AllocationStrategy, ContiguousAllocator, LinkedAllocator, StrategyKind};
pub use catalog::{Catalog, FileRecord};
pub use error::{BlocksimError, Result};
pub use store::{Block, BlockStore};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
