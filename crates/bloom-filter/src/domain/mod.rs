//! Domain Layer - Pure filter logic
//!
//! This layer contains:
//! - Parameter estimation
//! - Hash derivation (FNV-1 digest, double hashing)
//! - Core Bloom filter
//! - Empirical false positive measurement
//! - Sizing configuration
//!
//! RULES:
//! - No I/O operations (the wire format lives in `codec`)
//! - No async code

pub mod bloom_filter;
pub mod config;
pub mod fp_estimator;
pub mod hash_functions;
pub mod parameters;

pub use bloom_filter::BloomFilter;
pub use config::{FilterConfig, FilterConfigBuilder};
pub use fp_estimator::{FalsePositiveSample, FP_PROBE_COUNT, LEGACY_RATE_DIVISOR};
pub use hash_functions::{base_hashes, compute_hash_positions, Fnv64};
pub use parameters::{
    calculate_fpr, calculate_optimal_parameters, estimate_parameters, BloomFilterParams,
};
