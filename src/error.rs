// src/error.rs
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrderError {
    #[error("Size mismatch: expected {expected} bytes, found {found}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("Granularity mismatch: {len} bytes is not a multiple of granule size {granule}")]
    Granularity { len: usize, granule: usize },

    #[error("Granule size must be non-zero")]
    ZeroGranule,
}

pub type Result<T> = std::result::Result<T, OrderError>;
