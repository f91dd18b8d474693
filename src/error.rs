//! Error type for indexed heap operations
//!
//! Every failure is detected before the heap is touched, so an `Err` always
//! means the heap is exactly as it was before the call.

use thiserror::Error;

/// Error type for heap operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap has no elements to read or remove
    #[error("heap is empty")]
    Empty,
    /// The requested value is not stored in the heap
    #[error("value is not present in the heap")]
    NotFound,
    /// A positional argument does not name a live slot
    #[error("index {index} is out of bounds for heap of length {len}")]
    InvalidArgument {
        /// The index that was passed in
        index: usize,
        /// The heap length at the time of the call
        len: usize,
    },
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, HeapError>;
