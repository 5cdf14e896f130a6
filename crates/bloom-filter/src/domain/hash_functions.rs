//! Hash functions for Bloom filter
//!
//! One 64-bit FNV-1 digest per key is split into two 32-bit values `a` and
//! `b`, and the k positions are derived as `a + b*i (mod m)`
//! (Kirsch-Mitzenmacher double hashing).

use std::hash::Hasher;

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Streaming 64-bit FNV-1 hasher
///
/// Filters keep one of these as scratch state and call [`Fnv64::reset`]
/// before every digest, so the result depends only on the current key.
#[derive(Clone, Debug)]
pub struct Fnv64 {
    state: u64,
}

impl Fnv64 {
    pub fn new() -> Self {
        Self {
            state: FNV_OFFSET_BASIS,
        }
    }

    /// Return to the offset basis, discarding any absorbed input
    pub fn reset(&mut self) {
        self.state = FNV_OFFSET_BASIS;
    }
}

impl Default for Fnv64 {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for Fnv64 {
    fn write(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.state = self.state.wrapping_mul(FNV_PRIME);
            self.state ^= byte as u64;
        }
    }

    fn finish(&self) -> u64 {
        self.state
    }
}

/// Compute the two base hash values for `data`
///
/// The digest is read as 8 big-endian bytes: the last four become `a`, the
/// first four become `b`. Persisted filters depend on this assignment.
pub fn base_hashes(hasher: &mut Fnv64, data: &[u8]) -> (u32, u32) {
    hasher.reset();
    hasher.write(data);
    let digest = hasher.finish().to_be_bytes();

    let [b0, b1, b2, b3, a0, a1, a2, a3] = digest;
    let a = u32::from_be_bytes([a0, a1, a2, a3]);
    let b = u32::from_be_bytes([b0, b1, b2, b3]);
    (a, b)
}

/// Compute k bit positions in `[0, m)` for `data`
///
/// `m` must be non-zero.
pub fn compute_hash_positions(hasher: &mut Fnv64, data: &[u8], k: usize, m: usize) -> Vec<usize> {
    let (a, b) = base_hashes(hasher, data);
    let (a, b, m) = (a as u64, b as u64, m as u64);

    (0..k as u64)
        .map(|i| (a.wrapping_add(b.wrapping_mul(i)) % m) as usize)
        .collect()
}
