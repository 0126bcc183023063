//! Error types for buffer and render operations.

use thiserror::Error;

/// Error type for buffer construction, mutation, and rendering.
///
/// All failures are synchronous and reported at the offending call. A failed
/// operation never leaves the buffer partially mutated.
#[derive(Error, Debug)]
pub enum Error {
    /// A structurally invalid parameter was supplied (zero dimension,
    /// ragged rows, non-divisible flat length, multi-character string, ...).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A coordinate, linear index, or blit rectangle addressed cells outside
    /// the current buffer bounds.
    #[error("out of range: {0}")]
    OutOfRange(String),

    /// An I/O failure surfaced by the output sink. Opaque to the core;
    /// propagated to the caller without retry.
    #[error("sink I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using the crate's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
