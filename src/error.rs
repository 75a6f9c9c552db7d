//! Error handling for digest parsing and conversion

use thiserror::Error;

/// Errors produced when constructing a [`Digest`](crate::Digest) from
/// external bytes or text.
///
/// Engine operations themselves (update, finalize) are infallible; the only
/// recoverable surface of this crate is turning untrusted input back into a
/// typed digest value.
#[derive(Debug, Error, PartialEq)]
pub enum HashError {
    /// The input had the wrong number of bytes for the bound algorithm.
    #[error("invalid digest length: expected {expected} bytes, got {actual}")]
    InvalidLength {
        /// Digest length of the bound algorithm, in bytes.
        expected: usize,
        /// Length of the rejected input, in bytes.
        actual: usize,
    },

    /// The input was not valid hexadecimal.
    #[error("invalid hex digest: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

/// Result type for digest parsing operations
pub type Result<T> = std::result::Result<T, HashError>;
