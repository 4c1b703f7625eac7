use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BlocksimError {
    #[error("file already exists: {0}")]
    DuplicateName(String),

    #[error("file not found: {0}")]
    NotFound(String),

    #[error("insufficient space: requested {requested} blocks, {free} free")]
    InsufficientSpace { requested: usize, free: usize },

    #[error("invalid block index: {0}")]
    InvalidBlockIndex(usize),

    #[error("invalid file name: name must not be empty")]
    InvalidFileName,

    #[error("invalid file size: {0} (must be at least 1 block)")]
    InvalidFileSize(usize),
}

pub type Result<T> = std::result::Result<T, BlocksimError>;
