//! # Bloom Filter
//!
//! Probabilistic set membership with no false negatives and a tunable false
//! positive rate. Intended as a building block for storage and indexing
//! layers that want to skip lookups for keys known to be absent.
//!
//! ## Layout
//!
//! - **Domain Layer** (`domain/`): pure logic, no I/O
//!   - `estimate_parameters`: (n, p) to (m, k)
//!   - `Fnv64` / `compute_hash_positions`: one digest, k positions
//!   - `BloomFilter`: add / test / clear_all
//!   - `measure_false_positives`: destructive empirical FPR
//!   - `FilterConfig`: validated sizing
//!
//! - **Codec** (`codec/`): `varint(m) || varint(k) || bitset`
//!
//! The bit array itself comes from `shared-bitset`.
//!
//! ## Invariants
//!
//! - No false negatives: if added, `test()` MUST return true until `clear_all()`
//! - All bit positions lie in `[0, m)`
//!
//! ## Usage Example
//!
//! ```
//! use bloom_filter::{codec, BloomFilter};
//!
//! let mut filter = BloomFilter::new_with_estimates(1_000, 0.01);
//! filter.add(b"Love");
//! assert!(filter.test(b"Love"));
//!
//! let mut wire = Vec::new();
//! codec::encode(&mut wire, &filter).unwrap();
//! let mut restored = codec::decode(&mut wire.as_slice()).unwrap();
//! assert!(restored.test(b"Love"));
//! ```
//!
//! ## Thread Safety
//!
//! Hashing reuses per-filter scratch state, so `add` and `test` need
//! `&mut self`. Wrap a shared filter in a mutex.

pub mod codec;
pub mod domain;
pub mod error;

// Re-exports for convenience
pub use codec::{decode, encode};
pub use domain::{
    estimate_parameters, BloomFilter, BloomFilterParams, FalsePositiveSample, FilterConfig,
    FilterConfigBuilder,
};
pub use error::FilterError;
pub use shared_bitset::BitSet;
