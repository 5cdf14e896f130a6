//! Empirical false positive measurement
//!
//! Populates a filter with `n` synthetic keys, probes keys that were never
//! inserted and counts how many test positive.
//!
//! **Destructive**: the filter is cleared before and after the measurement.
//! Any membership data it held is lost.

use tracing::debug;

use super::bloom_filter::BloomFilter;

/// Number of never-inserted keys probed per measurement
pub const FP_PROBE_COUNT: u32 = 10_000;

/// Divisor applied by [`BloomFilter::estimate_false_positive_rate`]
///
/// Historical measurements divide the hit count by 100 rather than by
/// [`FP_PROBE_COUNT`]. Kept so reported rates stay comparable.
pub const LEGACY_RATE_DIVISOR: f64 = 100.0;

/// Raw counts from one false positive measurement
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FalsePositiveSample {
    /// Keys inserted before probing
    pub inserted: u32,
    /// Keys probed
    pub probes: u32,
    /// Probes that tested positive
    pub hits: u32,
}

impl FalsePositiveSample {
    /// Fraction of probes that tested positive
    pub fn rate(&self) -> f64 {
        if self.probes == 0 {
            return 0.0;
        }
        self.hits as f64 / self.probes as f64
    }

    /// Hit count over [`LEGACY_RATE_DIVISOR`]
    pub fn legacy_rate(&self) -> f64 {
        self.hits as f64 / LEGACY_RATE_DIVISOR
    }
}

impl BloomFilter {
    /// Insert the big-endian keys `0..n`, probe `n+1..=n+10000` and count
    /// positives. Clears the filter before and after.
    pub fn measure_false_positives(&mut self, n: u32) -> FalsePositiveSample {
        self.clear_all();

        for i in 0..n {
            self.add(&i.to_be_bytes());
        }

        let mut hits = 0;
        for i in 0..FP_PROBE_COUNT {
            let probe = i.wrapping_add(n).wrapping_add(1);
            if self.test(&probe.to_be_bytes()) {
                hits += 1;
            }
        }

        self.clear_all();

        let sample = FalsePositiveSample {
            inserted: n,
            probes: FP_PROBE_COUNT,
            hits,
        };
        debug!(
            n,
            hits,
            probes = FP_PROBE_COUNT,
            rate = sample.rate(),
            m = self.cap(),
            k = self.k(),
            "Measured false positives"
        );
        sample
    }

    /// Estimate the false positive rate while storing `n` entries
    ///
    /// Returns `hits / 100` over 10,000 probes (see [`LEGACY_RATE_DIVISOR`]).
    /// Use [`BloomFilter::measure_false_positives`] for the raw counts.
    ///
    /// **Destructive**: clears the filter.
    pub fn estimate_false_positive_rate(&mut self, n: u32) -> f64 {
        self.measure_false_positives(n).legacy_rate()
    }
}
