//! # Shared Bitset Crate
//!
//! Fixed-capacity bit array backing the membership filters.
//!
//! ## Capability Surface
//!
//! - `BitSet::new(len)`: all-clear array of `len` bits
//! - `set` / `test` / `clear_all`: indexed mutation and lookup
//! - `encode` / `decode`: self-describing binary form
//!
//! ## Wire Format
//!
//! ```text
//! u64 bit length (big-endian) || ceil(len / 8) bytes, least-significant bit first
//! ```
//!
//! Padding bits past `len` in the final byte are always zero; `decode`
//! rejects payloads where they are not.

pub mod bitset;
pub mod error;

pub use bitset::BitSet;
pub use error::BitSetError;
