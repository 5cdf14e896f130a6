//! Error types for the Bloom filter crate

use shared_bitset::BitSetError;
use thiserror::Error;

/// Errors that can occur when building, encoding or decoding a filter
#[derive(Debug, Error)]
pub enum FilterError {
    #[error("Invalid filter parameters: {0}")]
    InvalidParameters(String),

    #[error("Invalid false positive rate: {fpr} (must be strictly between 0 and 1)")]
    InvalidFpr { fpr: f64 },

    #[error("Expected item count must be greater than zero")]
    InvalidExpectedItems,

    #[error("Varint overflows 64 bits")]
    VarintOverflow,

    #[error("Capacity mismatch: header declares {header} bits, payload holds {payload}")]
    CapacityMismatch { header: usize, payload: usize },

    #[error("{count} unexpected bytes after the encoded filter")]
    TrailingBytes { count: usize },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Bitset error: {0}")]
    BitSet(#[from] BitSetError),
}
