//! Error types for the bitset codec

use thiserror::Error;

/// Errors that can occur while encoding or decoding a `BitSet`
#[derive(Debug, Error)]
pub enum BitSetError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Bit length {len} exceeds addressable memory")]
    TooLarge { len: u64 },

    #[error("Corrupt bitset payload: {0}")]
    Corrupt(String),
}
