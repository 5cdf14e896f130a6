//! # Bloom Filter Test Suite
//!
//! Cross-crate scenarios for `bloom-filter` and `shared-bitset`.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── support/          # Tracing bootstrap, key helpers
//! └── integration/
//!     ├── false_positive.rs   # Empirical FPR bounds
//!     └── persistence.rs      # Wire format round trips
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p bloom-tests
//!
//! # By category
//! cargo test -p bloom-tests integration::false_positive
//! cargo test -p bloom-tests integration::persistence
//!
//! # With filter logs
//! RUST_LOG=bloom_filter=debug cargo test -p bloom-tests -- --nocapture
//! ```

pub mod integration;
