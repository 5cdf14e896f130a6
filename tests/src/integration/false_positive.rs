//! # False Positive Bounds
//!
//! Loads filters of known geometry with 10,000 big-endian integer keys and
//! checks the rate reported by the destructive estimator.
//!
//! Reported rates use the historical `hits / 100` scale, so a bound of
//! 0.0001 means not a single one of the 10,000 probes may match.

#[cfg(test)]
mod tests {
    use bloom_filter::{estimate_parameters, BloomFilter, FilterConfig};
    use tracing::info;

    use crate::support::{init_tracing, u32_key};

    const N: u32 = 10_000;

    fn assert_direct(load: usize, k: usize) {
        init_tracing();
        let mut filter = BloomFilter::new(N as usize * load, k);

        let fp_rate = filter.estimate_false_positive_rate(N);
        info!(load, k, fp_rate, "Direct scenario");

        assert!(
            fp_rate <= 0.0001,
            "False positive rate too high: load={}, k={}, {}",
            load,
            k,
            fp_rate
        );
    }

    fn assert_estimated(fp: f64) {
        init_tracing();
        let (m, k) = estimate_parameters(N as usize, fp);
        let mut filter = BloomFilter::new_with_estimates(N as usize, fp);

        let fp_rate = filter.estimate_false_positive_rate(N);
        info!(m, k, fp_rate, "Estimated scenario");

        assert!(
            fp_rate <= fp,
            "False positive rate too high: n: {}, fp: {}, m: {}, k: {} result: {}",
            N,
            fp,
            m,
            k,
            fp_rate
        );
    }

    // =========================================================================
    // DIRECT GEOMETRY
    // =========================================================================

    #[test]
    fn test_direct_load_20_k_5() {
        assert_direct(20, 5);
    }

    #[test]
    fn test_direct_load_15_k_10() {
        assert_direct(15, 10);
    }

    // =========================================================================
    // ESTIMATED GEOMETRY
    // =========================================================================

    #[test]
    fn test_estimated_n10000_fpr_00001() {
        assert_estimated(0.0001);
    }

    #[test]
    fn test_estimated_n10000_fpr_0001() {
        assert_estimated(0.001);
    }

    #[test]
    fn test_configured_filter_rate_near_target() {
        init_tracing();
        let config = FilterConfig::default();
        let mut filter = BloomFilter::from_config(&config).expect("Default config is valid");

        let sample = filter.measure_false_positives(config.expected_items as u32);

        assert!(
            sample.rate() <= config.target_fpr * 1.5,
            "Measured rate {} far above target {}",
            sample.rate(),
            config.target_fpr
        );
        assert_eq!(
            sample.legacy_rate(),
            sample.hits as f64 / 100.0,
            "Legacy scale divides by 100"
        );
    }

    // =========================================================================
    // DESTRUCTIVENESS
    // =========================================================================

    #[test]
    fn test_estimation_discards_real_membership() {
        let mut filter = BloomFilter::new_with_estimates(1_000, 0.01);
        for i in 0..100 {
            filter.add(format!("user:{i}").as_bytes());
        }
        assert!(filter.test(b"user:7"));

        filter.estimate_false_positive_rate(500);

        assert_eq!(filter.bits_set(), 0, "Estimator must leave the filter empty");
        assert!(!filter.test(b"user:7"), "Real data is gone after estimation");
    }

    #[test]
    fn test_estimator_keys_do_not_leak_into_filter() {
        let mut filter = BloomFilter::new(200_000, 5);
        filter.estimate_false_positive_rate(N);

        for i in [0, 1, N / 2, N - 1] {
            assert!(
                !filter.test(&u32_key(i)),
                "Synthetic key {} must not survive the measurement",
                i
            );
        }
    }
}
