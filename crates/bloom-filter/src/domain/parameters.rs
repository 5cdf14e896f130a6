//! Bloom filter parameter estimation
//!
//! Formulas:
//! - m = floor(-n*ln(p) / (ln(2)^2))  -- bits, truncated
//! - k = ceil(ln(2) * m / n)          -- hash functions, ceiled
//!
//! The truncate/ceil pair must stay as-is: persisted filters and capacity
//! plans were sized with exactly these roundings.

use std::f64::consts::LN_2;

/// Bloom filter parameters
#[derive(Clone, Debug, PartialEq)]
pub struct BloomFilterParams {
    /// Number of bits in the filter (m)
    pub size_bits: usize,
    /// Number of hash functions (k)
    pub hash_count: usize,
    /// Theoretical false positive rate once the expected items are inserted
    pub expected_fpr: f64,
}

/// Estimate `(m, k)` for `n` expected items at false positive rate `p`
///
/// No validation is performed: `n == 0` or `p` outside `(0, 1)` yield
/// whatever the saturating float-to-int casts produce. Use
/// [`FilterConfig`](super::FilterConfig) for checked construction.
pub fn estimate_parameters(n: usize, p: f64) -> (usize, usize) {
    let n = n as f64;
    let m = (-n * p.ln() / (LN_2 * LN_2)) as usize;
    let k = (LN_2 * m as f64 / n).ceil() as usize;
    (m, k)
}

/// Estimate parameters and attach the theoretical false positive rate
pub fn calculate_optimal_parameters(num_elements: usize, target_fpr: f64) -> BloomFilterParams {
    let (size_bits, hash_count) = estimate_parameters(num_elements, target_fpr);
    BloomFilterParams {
        size_bits,
        hash_count,
        expected_fpr: calculate_fpr(size_bits, num_elements, hash_count),
    }
}

/// Calculate the false positive rate for given parameters
///
/// Formula: FPR = (1 - e^(-kn/m))^k
pub fn calculate_fpr(m: usize, n: usize, k: usize) -> f64 {
    if m == 0 {
        return 1.0;
    }
    let exponent = -(k as f64) * (n as f64) / (m as f64);
    (1.0 - exponent.exp()).powi(k as i32)
}
