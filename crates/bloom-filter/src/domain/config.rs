//! Bloom filter sizing configuration and validation
//!
//! # Example
//!
//! ```
//! use bloom_filter::{BloomFilter, FilterConfigBuilder};
//!
//! let config = FilterConfigBuilder::new()
//!     .expected_items(5_000)
//!     .target_fpr(0.001)
//!     .build()
//!     .expect("Valid config");
//!
//! let filter = BloomFilter::from_config(&config).expect("Valid filter");
//! assert_eq!(filter.k(), 10);
//! ```

use std::env;

use serde::{Deserialize, Serialize};

use super::parameters::{calculate_optimal_parameters, BloomFilterParams};
use crate::error::FilterError;

/// Environment variable holding the expected item count
pub const ENV_EXPECTED_ITEMS: &str = "BLOOM_EXPECTED_ITEMS";
/// Environment variable holding the target false positive rate
pub const ENV_TARGET_FPR: &str = "BLOOM_TARGET_FPR";

/// Sizing configuration for a Bloom filter
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Expected number of items (n), must be non-zero
    pub expected_items: usize,
    /// Target false positive rate (p), strictly between 0 and 1
    pub target_fpr: f64,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            expected_items: 10_000,
            target_fpr: 0.01,
        }
    }
}

impl FilterConfig {
    /// Create a new configuration with validation
    pub fn new(expected_items: usize, target_fpr: f64) -> Result<Self, FilterError> {
        let config = Self {
            expected_items,
            target_fpr,
        };
        config.validate()?;
        Ok(config)
    }

    /// Create configuration from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `BLOOM_EXPECTED_ITEMS`: Expected item count (default: 10000)
    /// - `BLOOM_TARGET_FPR`: Target false positive rate (default: 0.01)
    ///
    /// Missing or unparsable values fall back to the defaults. The result is
    /// not validated.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`FilterConfig::from_env`] with an arbitrary variable source
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            expected_items: lookup(ENV_EXPECTED_ITEMS)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.expected_items),
            target_fpr: lookup(ENV_TARGET_FPR)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.target_fpr),
        }
    }

    /// Reject inputs the parameter estimator cannot size
    pub fn validate(&self) -> Result<(), FilterError> {
        if self.expected_items == 0 {
            return Err(FilterError::InvalidExpectedItems);
        }

        // Written this way round so NaN is rejected too
        if !(self.target_fpr > 0.0 && self.target_fpr < 1.0) {
            return Err(FilterError::InvalidFpr {
                fpr: self.target_fpr,
            });
        }

        Ok(())
    }

    /// Estimated filter parameters for this configuration
    pub fn parameters(&self) -> BloomFilterParams {
        calculate_optimal_parameters(self.expected_items, self.target_fpr)
    }

    /// Builder-style method to set expected items
    pub fn with_expected_items(mut self, n: usize) -> Self {
        self.expected_items = n;
        self
    }

    /// Builder-style method to set target FPR
    pub fn with_target_fpr(mut self, fpr: f64) -> Self {
        self.target_fpr = fpr;
        self
    }
}

/// Builder for FilterConfig with validation
#[derive(Default)]
pub struct FilterConfigBuilder {
    expected_items: Option<usize>,
    target_fpr: Option<f64>,
}

impl FilterConfigBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set expected number of items
    pub fn expected_items(mut self, n: usize) -> Self {
        self.expected_items = Some(n);
        self
    }

    /// Set target false positive rate
    pub fn target_fpr(mut self, fpr: f64) -> Self {
        self.target_fpr = Some(fpr);
        self
    }

    /// Build the FilterConfig, validating all parameters
    pub fn build(self) -> Result<FilterConfig, FilterError> {
        let config = self.build_unchecked();
        config.validate()?;
        Ok(config)
    }

    /// Build without validation
    pub fn build_unchecked(self) -> FilterConfig {
        let defaults = FilterConfig::default();

        FilterConfig {
            expected_items: self.expected_items.unwrap_or(defaults.expected_items),
            target_fpr: self.target_fpr.unwrap_or(defaults.target_fpr),
        }
    }
}
