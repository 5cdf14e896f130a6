//! # Persistence Round Trips
//!
//! Filters written with `bloom_filter::encode` and read back with
//! `bloom_filter::decode`, in memory and through files.

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::{BufWriter, Cursor, Write};

    use bloom_filter::{decode, encode, BloomFilter, FilterError};
    use proptest::prelude::*;
    use shared_bitset::BitSet;

    use crate::support::{init_tracing, u32_key};

    const KEYS: [&[u8]; 6] = [b"ala", b"ma", b"kota", b"a", b"kot", b"nie"];

    fn populated() -> BloomFilter {
        let mut filter = BloomFilter::new_with_estimates(20_000, 0.01);
        for key in KEYS {
            filter.add(key);
        }
        filter
    }

    #[test]
    fn test_dump_restore() {
        init_tracing();
        let original = populated();

        let mut stream = Cursor::new(Vec::new());
        encode(&mut stream, &original).expect("Encode should succeed");
        stream.set_position(0);
        let mut restored = decode(&mut stream).expect("Decode should succeed");

        for key in KEYS {
            assert!(restored.test(key), "Did not restore {:?} properly", key);
        }
        assert_eq!(restored.cap(), original.cap());
        assert_eq!(restored.k(), original.k());
        assert_eq!(restored, original);
    }

    #[test]
    fn test_reencoding_is_byte_identical() {
        let original = populated();
        let bytes = original.to_bytes().expect("Encode should succeed");

        let restored = BloomFilter::from_bytes(&bytes).expect("Decode should succeed");

        assert_eq!(restored.to_bytes().expect("Encode should succeed"), bytes);
    }

    #[test]
    fn test_file_roundtrip() {
        init_tracing();
        let dir = tempfile::tempdir().expect("Temp dir");
        let path = dir.path().join("users.bloom");
        let original = populated();

        {
            let mut writer = BufWriter::new(File::create(&path).expect("Create file"));
            encode(&mut writer, &original).expect("Encode should succeed");
            writer.flush().expect("Flush");
        }

        // Unbuffered file handle: the header is read byte by byte
        let mut file = File::open(&path).expect("Open file");
        let mut restored = decode(&mut file).expect("Decode should succeed");

        assert_eq!(restored, original);
        for key in KEYS {
            assert!(restored.test(key));
        }
    }

    #[test]
    fn test_several_filters_in_one_stream() {
        let mut first = BloomFilter::new(1_000, 3);
        first.add(b"segment-1");
        let mut second = BloomFilter::new(64, 2);
        second.add(b"segment-2");

        let mut stream = Vec::new();
        encode(&mut stream, &first).expect("Encode should succeed");
        encode(&mut stream, &second).expect("Encode should succeed");

        let mut reader = stream.as_slice();
        let mut restored_first = decode(&mut reader).expect("First decode");
        let mut restored_second = decode(&mut reader).expect("Second decode");

        assert!(reader.is_empty(), "Both payloads fully consumed");
        assert!(restored_first.test(b"segment-1"));
        assert!(restored_second.test(b"segment-2"));
        assert_eq!(restored_second.cap(), 64);
    }

    #[test]
    fn test_truncated_file_is_an_error() {
        let dir = tempfile::tempdir().expect("Temp dir");
        let path = dir.path().join("short.bloom");
        let bytes = populated().to_bytes().expect("Encode should succeed");
        std::fs::write(&path, &bytes[..bytes.len() / 2]).expect("Write file");

        let result = decode(&mut File::open(&path).expect("Open file"));

        assert!(result.is_err(), "Half a payload must not decode");
    }

    #[test]
    fn test_payload_is_the_bitset_encoding() {
        let filter = populated();
        let bytes = filter.to_bytes().expect("Encode should succeed");

        // varint(191_701) is three bytes, varint(7) one
        assert_eq!(&bytes[..4], &[0xd5, 0xd9, 0x0b, 0x07]);
        let mut payload = &bytes[4..];
        let bits = BitSet::decode(&mut payload).expect("Payload should decode as a bitset");

        assert!(payload.is_empty(), "The bitset is the last thing on the wire");
        assert_eq!(&bits, filter.bits());
        assert_eq!(bits.count_ones(), filter.bits_set());
    }

    #[test]
    fn test_empty_stream_is_an_error_not_a_degenerate_filter() {
        let result = decode(&mut Cursor::new(Vec::<u8>::new()));
        assert!(matches!(result, Err(FilterError::Io(_))));
    }

    proptest! {
        #[test]
        fn prop_roundtrip_keeps_every_key(
            keys in proptest::collection::vec(proptest::collection::vec(any::<u8>(), 0..24), 1..64),
            extra in 0u32..1_000,
        ) {
            let mut filter = BloomFilter::new_with_estimates(1_000, 0.01);
            for key in &keys {
                filter.add(key);
            }
            filter.add(&u32_key(extra));

            let bytes = filter.to_bytes().unwrap();
            let mut restored = BloomFilter::from_bytes(&bytes).unwrap();

            for key in &keys {
                prop_assert!(restored.test(key));
            }
            prop_assert!(restored.test(&u32_key(extra)));
        }
    }
}
