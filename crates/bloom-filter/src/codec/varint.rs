//! Unsigned LEB128 varints
//!
//! Seven data bits per byte, least-significant group first; the high bit is
//! set on every byte except the last.

use std::io::{Read, Write};

use crate::error::FilterError;

/// Longest encoding of a u64
pub const MAX_VARINT_LEN: usize = 10;

/// Append the varint encoding of `n` to `out`
pub fn uvarint_encode(mut n: u64, out: &mut Vec<u8>) {
    while n >= 0x80 {
        out.push((n as u8) | 0x80);
        n >>= 7;
    }
    out.push(n as u8);
}

/// Write the varint encoding of `n`
pub fn write_uvarint<W: Write>(writer: &mut W, n: u64) -> Result<(), FilterError> {
    let mut buf = Vec::with_capacity(MAX_VARINT_LEN);
    uvarint_encode(n, &mut buf);
    writer.write_all(&buf)?;
    Ok(())
}

/// Read one varint, pulling a single byte at a time from `reader`
///
/// Never reads past the final byte of the varint, so the stream is left
/// positioned at whatever follows.
pub fn read_uvarint<R: Read>(reader: &mut R) -> Result<u64, FilterError> {
    let mut value = 0u64;
    let mut byte = [0u8; 1];

    for index in 0..MAX_VARINT_LEN {
        reader.read_exact(&mut byte)?;
        let b = byte[0];
        let shift = 7 * index as u32;

        // The tenth byte may only contribute the top bit of a u64
        if index == MAX_VARINT_LEN - 1 && b > 1 {
            return Err(FilterError::VarintOverflow);
        }

        value |= ((b & 0x7f) as u64) << shift;
        if b < 0x80 {
            return Ok(value);
        }
    }

    Err(FilterError::VarintOverflow)
}
