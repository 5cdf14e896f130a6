//! Fixed-capacity bit array
//!
//! Indices are checked: `set` and `test` panic when the index is outside
//! `[0, len)`, the same contract as slice indexing.

use std::io::{Read, Write};

use bitvec::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::BitSetError;

/// Width of the length prefix in the encoded form
const LEN_PREFIX_BYTES: usize = 8;

/// Fixed-length array of single-bit flags
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BitSet {
    #[serde(with = "bitvec_serde")]
    bits: BitVec<u8, Lsb0>,
}

/// Serde support for BitVec
mod bitvec_serde {
    use bitvec::prelude::*;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S>(bits: &BitVec<u8, Lsb0>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let bytes: Vec<u8> = bits.as_raw_slice()[..bits.len().div_ceil(8)].to_vec();
        (bytes, bits.len()).serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<BitVec<u8, Lsb0>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let (bytes, len): (Vec<u8>, usize) = Deserialize::deserialize(deserializer)?;
        if bytes.len() != len.div_ceil(8) {
            return Err(serde::de::Error::custom(format!(
                "bitset payload holds {} bytes, {} bits declared",
                bytes.len(),
                len
            )));
        }
        super::check_padding(&bytes, len).map_err(<D::Error as serde::de::Error>::custom)?;
        let mut bits = BitVec::<u8, Lsb0>::from_vec(bytes);
        bits.truncate(len);
        Ok(bits)
    }
}

impl BitSet {
    /// Create an all-clear bit array of `len` bits
    pub fn new(len: usize) -> Self {
        Self {
            bits: bitvec![u8, Lsb0; 0; len],
        }
    }

    /// Number of bits in the array
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Set the bit at `index`
    pub fn set(&mut self, index: usize) {
        self.bits.set(index, true);
    }

    /// Whether the bit at `index` is set
    pub fn test(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Reset every bit to zero
    pub fn clear_all(&mut self) {
        self.bits.fill(false);
    }

    /// Number of set bits
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones()
    }

    /// Packed storage, least-significant bit first within each byte
    pub fn as_raw_slice(&self) -> &[u8] {
        &self.bits.as_raw_slice()[..self.bits.len().div_ceil(8)]
    }

    /// Write the length prefix followed by the packed bytes
    pub fn encode<W: Write>(&self, writer: &mut W) -> Result<(), BitSetError> {
        writer.write_all(&(self.bits.len() as u64).to_be_bytes())?;
        writer.write_all(self.as_raw_slice())?;
        Ok(())
    }

    /// Read a bit array previously written by [`BitSet::encode`]
    ///
    /// The payload is read through `Read::take`, so a corrupt length prefix
    /// cannot trigger a large up-front allocation.
    pub fn decode<R: Read>(reader: &mut R) -> Result<Self, BitSetError> {
        let mut prefix = [0u8; LEN_PREFIX_BYTES];
        reader.read_exact(&mut prefix)?;
        let declared = u64::from_be_bytes(prefix);
        let len = usize::try_from(declared).map_err(|_| BitSetError::TooLarge { len: declared })?;

        let byte_len = len.div_ceil(8);
        let mut bytes = Vec::new();
        reader.by_ref().take(byte_len as u64).read_to_end(&mut bytes)?;
        if bytes.len() != byte_len {
            return Err(BitSetError::Io(std::io::Error::new(
                std::io::ErrorKind::UnexpectedEof,
                format!("bitset payload truncated: {} of {} bytes", bytes.len(), byte_len),
            )));
        }

        check_padding(&bytes, len).map_err(BitSetError::Corrupt)?;

        let mut bits = BitVec::<u8, Lsb0>::from_vec(bytes);
        bits.truncate(len);
        Ok(Self { bits })
    }
}

/// Bits past `len` in the final byte must be clear, so every accepted
/// payload re-encodes to the same bytes
fn check_padding(bytes: &[u8], len: usize) -> Result<(), String> {
    let tail_bits = len % 8;
    match bytes.last() {
        Some(&last) if tail_bits != 0 && last >> tail_bits != 0 => {
            Err(format!("padding bits set in final byte {last:#04x}"))
        }
        _ => Ok(()),
    }
}
