//! Integration tests for the full compression pipeline.
//!
//! These exercise the public surface end to end: bytes -> container ->
//! bytes, corrupt-input handling, and the degenerate inputs that the
//! component tests cover only in isolation.

use huffpack_core::bitio::{BitReader, BitWriter};
use huffpack_core::code::CodeTable;
use huffpack_core::codec::{decode_stream, encode_stream, read_tree, write_tree};
use huffpack_core::container::HEADER_SIZE;
use huffpack_core::tree::{build_tree, count_frequencies};
use huffpack_core::{compress_bytes, decompress_bytes, Error};

fn assert_round_trip(data: &[u8]) {
    let packed = compress_bytes(data).expect("compression failed");
    let restored = decompress_bytes(&packed).expect("decompression failed");
    assert_eq!(restored, data, "round trip altered {} bytes", data.len());
}

#[test]
fn test_round_trip_corpus() {
    assert_round_trip(b"");
    assert_round_trip(b"x");
    assert_round_trip(b"aaab");
    assert_round_trip(&[b'r'; 1000]);
    assert_round_trip(b"the quick brown fox jumps over the lazy dog");
    assert_round_trip(&(0..=255u8).collect::<Vec<_>>());
}

#[test]
fn test_round_trip_binary_blob() {
    // Deterministic pseudo-random bytes, all 256 values likely present.
    let mut state = 0x2545_F491_4F6C_DD1Du64;
    let data: Vec<u8> = (0..64 * 1024)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 56) as u8
        })
        .collect();
    assert_round_trip(&data);
}

#[test]
fn test_compression_ratio_on_skewed_data() {
    let data = b"ab".repeat(32 * 1024);
    let packed = compress_bytes(&data).unwrap();
    // Two one-bit codes: payload is an eighth of the input.
    assert!(packed.len() < data.len() / 4);
    assert_round_trip(&data);
}

#[test]
fn test_tree_and_payload_share_one_cursor() {
    // Manually drive the pipeline and confirm the payload begins at the
    // exact bit where the serialized tree ends, with no alignment gap.
    let data = b"abracadabra";
    let tree = build_tree(&count_frequencies(data)).unwrap();
    let table = CodeTable::from_tree(&tree).unwrap();

    let mut writer = BitWriter::new();
    write_tree(&tree, &mut writer);
    let tree_bits = writer.bit_len();
    encode_stream(data, &table, &mut writer).unwrap();
    let stream = writer.finish();

    let mut reader = BitReader::new(&stream);
    let rebuilt = read_tree(&mut reader).unwrap();
    assert_eq!(reader.position(), tree_bits);

    let decoded = decode_stream(&mut reader, &rebuilt, data.len()).unwrap();
    assert_eq!(decoded, data);
}

#[test]
fn test_empty_container_is_minimal() {
    let packed = compress_bytes(b"").unwrap();
    assert_eq!(packed.len(), HEADER_SIZE);
}

#[test]
fn test_garbage_input_rejected() {
    assert!(decompress_bytes(b"").is_err());
    assert!(decompress_bytes(b"not a container at all").is_err());
}

#[test]
fn test_bit_flips_are_detected() {
    let data = b"every flipped bit must surface as an error, never as silent garbage";
    let packed = compress_bytes(data).unwrap();

    for position in [0, 5, HEADER_SIZE, packed.len() - 1] {
        let mut corrupted = packed.clone();
        corrupted[position] ^= 0x40;
        assert!(
            decompress_bytes(&corrupted).is_err(),
            "flip at byte {position} went undetected"
        );
    }
}

#[test]
fn test_truncation_anywhere_is_an_error() {
    let data = b"truncate me at every byte boundary";
    let packed = compress_bytes(data).unwrap();

    for len in 0..packed.len() {
        assert!(
            decompress_bytes(&packed[..len]).is_err(),
            "truncation to {len} bytes went undetected"
        );
    }
}

#[test]
fn test_hostile_symbol_count_is_an_error() {
    // A container with valid magic and CRC but an absurd symbol count
    // is fully parseable; decoding must reject it cleanly instead of
    // panicking or attempting a giant allocation.
    let data = b"aaab";
    let tree = build_tree(&count_frequencies(data)).unwrap();
    let table = CodeTable::from_tree(&tree).unwrap();

    let mut writer = BitWriter::new();
    write_tree(&tree, &mut writer);
    encode_stream(data, &table, &mut writer).unwrap();
    let stream = writer.finish();

    for count in [u64::MAX, 1 << 40] {
        let packed = huffpack_core::container::write_container(count, &stream);
        match decompress_bytes(&packed) {
            Err(Error::Codec(_)) => {}
            other => panic!("count {count}: expected a codec error, got {other:?}"),
        }
    }
}

#[test]
fn test_truncation_after_tree_reports_corrupt_stream() {
    // Rebuild a container whose stream holds the tree but no payload
    // bits. Three distinct symbols leave only 3 padding bits in the
    // tree's final byte, which cannot satisfy a count of 5 symbols.
    let data = b"aabbc";
    let tree = build_tree(&count_frequencies(data)).unwrap();

    let mut writer = BitWriter::new();
    write_tree(&tree, &mut writer);
    let tree_only = writer.finish();

    let packed = huffpack_core::container::write_container(data.len() as u64, &tree_only);
    match decompress_bytes(&packed) {
        Err(Error::Codec(_)) => {}
        other => panic!("expected a codec error, got {other:?}"),
    }
}
