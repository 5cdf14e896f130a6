//! # Integration Tests
//!
//! Scenarios that drive the filter end to end: sizing, loading, probing,
//! persisting and restoring.

pub mod false_positive;
pub mod persistence;
