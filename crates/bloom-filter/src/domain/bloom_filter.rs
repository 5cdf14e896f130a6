//! Core Bloom filter implementation
//!
//! INVARIANTS:
//! - Bits are only ever set by `add`; nothing but `clear_all` resets them
//! - Every derived position lies in `[0, m)`
//! - No false negatives: after `add(x)`, `test(x)` returns true until the
//!   next `clear_all`

use serde::{Deserialize, Serialize};
use shared_bitset::BitSet;
use tracing::{debug, trace};

use super::config::FilterConfig;
use super::hash_functions::{compute_hash_positions, Fnv64};
use super::parameters::{calculate_fpr, estimate_parameters};
use crate::error::FilterError;

/// Bloom filter for probabilistic membership testing
///
/// A Bloom filter is a space-efficient probabilistic data structure that
/// can test whether an element is a member of a set. False positives are
/// possible, but false negatives are not.
///
/// `add` and `test` both take `&mut self` because the filter owns a reusable
/// hashing scratch state. Share a filter across threads behind a lock.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(try_from = "FilterParts")]
pub struct BloomFilter {
    /// Size in bits (m)
    m: usize,
    /// Number of hash functions (k)
    k: usize,
    /// Bit array storing the filter state
    bits: BitSet,
    /// Digest scratch state, reset before every use
    #[serde(skip)]
    hasher: Fnv64,
}

/// Unvalidated serde representation, checked on the way in
#[derive(Deserialize)]
struct FilterParts {
    m: usize,
    k: usize,
    bits: BitSet,
}

impl TryFrom<FilterParts> for BloomFilter {
    type Error = FilterError;

    fn try_from(parts: FilterParts) -> Result<Self, Self::Error> {
        BloomFilter::from_parts(parts.m, parts.k, parts.bits)
    }
}

impl BloomFilter {
    /// Create a new Bloom filter with `m` bits and `k` hash functions
    ///
    /// # Panics
    /// Panics if `m` or `k` is zero. See [`BloomFilter::try_new`].
    pub fn new(m: usize, k: usize) -> Self {
        assert!(m > 0, "Bloom filter needs at least one bit");
        assert!(k > 0, "Bloom filter needs at least one hash function");
        Self {
            m,
            k,
            bits: BitSet::new(m),
            hasher: Fnv64::new(),
        }
    }

    /// Create a new Bloom filter, rejecting zero `m` or `k`
    pub fn try_new(m: usize, k: usize) -> Result<Self, FilterError> {
        check_dimensions(m, k)?;
        Ok(Self::new(m, k))
    }

    /// Create a Bloom filter sized for about `n` items at false positive
    /// rate `fp`
    ///
    /// Inputs are not validated; see [`BloomFilter::from_config`].
    ///
    /// # Panics
    /// Panics if the estimate yields zero bits or zero hash functions, as
    /// small `n` with a loose `fp` does (`(1, 0.9)` truncates to `m = 0`).
    /// See [`BloomFilter::try_new_with_estimates`].
    pub fn new_with_estimates(n: usize, fp: f64) -> Self {
        let (m, k) = estimate_parameters(n, fp);
        debug!(expected_items = n, target_fpr = fp, m, k, "Sized Bloom filter from estimates");
        Self::new(m, k)
    }

    /// Like [`BloomFilter::new_with_estimates`], but returns
    /// `FilterError::InvalidParameters` when the estimate is degenerate
    pub fn try_new_with_estimates(n: usize, fp: f64) -> Result<Self, FilterError> {
        let (m, k) = estimate_parameters(n, fp);
        debug!(expected_items = n, target_fpr = fp, m, k, "Sized Bloom filter from estimates");
        Self::try_new(m, k)
    }

    /// Create a Bloom filter from a validated configuration
    pub fn from_config(config: &FilterConfig) -> Result<Self, FilterError> {
        config.validate()?;
        let params = config.parameters();
        debug!(
            expected_items = config.expected_items,
            target_fpr = config.target_fpr,
            m = params.size_bits,
            k = params.hash_count,
            "Sized Bloom filter from config"
        );
        Self::try_new(params.size_bits, params.hash_count)
    }

    /// Assemble a filter around an existing bit array
    pub(crate) fn from_parts(m: usize, k: usize, bits: BitSet) -> Result<Self, FilterError> {
        check_dimensions(m, k)?;
        if bits.len() != m {
            return Err(FilterError::CapacityMismatch {
                header: m,
                payload: bits.len(),
            });
        }
        Ok(Self {
            m,
            k,
            bits,
            hasher: Fnv64::new(),
        })
    }

    /// Get the capacity (m)
    pub fn cap(&self) -> usize {
        self.m
    }

    /// Get the number of hash functions (k)
    pub fn k(&self) -> usize {
        self.k
    }

    /// Borrow the underlying bit array
    pub fn bits(&self) -> &BitSet {
        &self.bits
    }

    /// The k bit positions probed for `data`, in hash-function order
    pub fn locations(&mut self, data: &[u8]) -> Vec<usize> {
        compute_hash_positions(&mut self.hasher, data, self.k, self.m)
    }

    /// Add data to the filter. Returns the filter to allow chaining.
    ///
    /// After insertion, `test(data)` is guaranteed to return true.
    pub fn add(&mut self, data: &[u8]) -> &mut Self {
        for loc in self.locations(data) {
            self.bits.set(loc);
        }
        self
    }

    /// Test if data might be in the filter
    ///
    /// Returns:
    /// - `true` if the data might be in the set (could be false positive)
    /// - `false` if the data is definitely NOT in the set
    pub fn test(&mut self, data: &[u8]) -> bool {
        let locations = self.locations(data);
        locations.into_iter().all(|loc| self.bits.test(loc))
    }

    /// Clear the filter, removing all keys. Returns the filter to allow
    /// chaining.
    pub fn clear_all(&mut self) -> &mut Self {
        trace!(m = self.m, "Clearing Bloom filter");
        self.bits.clear_all();
        self
    }

    /// Get the number of bits set in the filter
    pub fn bits_set(&self) -> usize {
        self.bits.count_ones()
    }

    /// Theoretical false positive rate after `n` insertions
    ///
    /// Formula: FPR = (1 - e^(-kn/m))^k
    pub fn theoretical_fpr(&self, n: usize) -> f64 {
        calculate_fpr(self.m, n, self.k)
    }
}

impl PartialEq for BloomFilter {
    fn eq(&self, other: &Self) -> bool {
        self.m == other.m && self.k == other.k && self.bits == other.bits
    }
}

impl Eq for BloomFilter {}

pub(crate) fn check_dimensions(m: usize, k: usize) -> Result<(), FilterError> {
    if m == 0 {
        return Err(FilterError::InvalidParameters(
            "size in bits (m) cannot be 0".to_string(),
        ));
    }
    if k == 0 {
        return Err(FilterError::InvalidParameters(
            "hash count (k) cannot be 0".to_string(),
        ));
    }
    Ok(())
}
