//! Binary wire format for Bloom filters
//!
//! ```text
//! varint(m) || varint(k) || bitset payload
//! ```
//!
//! The bitset payload is written and read by `shared_bitset::BitSet` and is
//! opaque here. Varints are unsigned LEB128 (see [`varint`]).

pub mod varint;

use std::io::{Read, Write};

use shared_bitset::BitSet;
use tracing::{debug, warn};

use crate::domain::bloom_filter::check_dimensions;
use crate::domain::BloomFilter;
use crate::error::FilterError;
use varint::{read_uvarint, write_uvarint, MAX_VARINT_LEN};

/// Write `filter` to `writer`: the two header varints, then the bitset
pub fn encode<W: Write>(writer: &mut W, filter: &BloomFilter) -> Result<(), FilterError> {
    write_uvarint(writer, filter.cap() as u64)?;
    write_uvarint(writer, filter.k() as u64)?;
    filter.bits().encode(writer)?;

    debug!(m = filter.cap(), k = filter.k(), bits_set = filter.bits_set(), "Encoded Bloom filter");
    Ok(())
}

/// Read a filter previously written by [`encode`]
///
/// Header varints are consumed one byte at a time, so `reader` needs no
/// buffering or seeking. Any read failure is returned, as is a header with a
/// zero `m` or `k` or a payload whose length disagrees with `m`.
pub fn decode<R: Read>(reader: &mut R) -> Result<BloomFilter, FilterError> {
    decode_inner(reader).inspect_err(|e| warn!(error = %e, "Failed to decode Bloom filter"))
}

fn decode_inner<R: Read>(reader: &mut R) -> Result<BloomFilter, FilterError> {
    let m = read_dimension(reader, "m")?;
    let k = read_dimension(reader, "k")?;
    check_dimensions(m, k)?;

    let bits = BitSet::decode(reader)?;
    let filter = BloomFilter::from_parts(m, k, bits)?;

    debug!(m, k, bits_set = filter.bits_set(), "Decoded Bloom filter");
    Ok(filter)
}

fn read_dimension<R: Read>(reader: &mut R, name: &str) -> Result<usize, FilterError> {
    let value = read_uvarint(reader)?;
    usize::try_from(value).map_err(|_| {
        FilterError::InvalidParameters(format!("{name} = {value} exceeds addressable memory"))
    })
}

impl BloomFilter {
    /// Serialize the filter to bytes in the wire format
    pub fn to_bytes(&self) -> Result<Vec<u8>, FilterError> {
        let mut out = Vec::with_capacity(2 * MAX_VARINT_LEN + 8 + self.cap().div_ceil(8));
        encode(&mut out, self)?;
        Ok(out)
    }

    /// Deserialize a filter from bytes, rejecting anything after the payload
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, FilterError> {
        let mut reader = bytes;
        let filter = decode(&mut reader)?;
        if !reader.is_empty() {
            return Err(FilterError::TrailingBytes {
                count: reader.len(),
            });
        }
        Ok(filter)
    }
}
