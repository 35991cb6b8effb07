//! Error types for radix_blocks.

use std::io;
use thiserror::Error;

/// Result type alias for radix_blocks operations
pub type Result<T> = std::result::Result<T, RadixError>;

#[derive(Debug, Error)]
pub enum RadixError {
    /// Radix outside `2..=36`
    #[error("Radix {0} out of range, expected 2..=36")]
    RadixOutOfRange(u32),

    /// A block table needs at least one digit per block
    #[error("Block width must be at least 1")]
    ZeroBlockWidth,

    /// `radix^width` does not fit the table index
    #[error("Block table for radix {radix} and width {width} is too large")]
    TableTooLarge {
        radix: u32,
        width: u32,
    },

    /// Non-integer token in a whitespace-delimited input
    #[error("Invalid integer {token:?} at token {index}")]
    InvalidInteger {
        /// Zero-based token position
        index: usize,
        token: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
