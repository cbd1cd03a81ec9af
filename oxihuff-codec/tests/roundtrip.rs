//! Round-trip tests through the streaming encoder and decoder.

use oxihuff_codec::{
    CodeTable, CodecConfig, HuffmanDecoder, HuffmanEncoder, HuffmanTree, WeightDistribution,
    build_code_table, build_tree, compress, decompress,
};
use std::io::Cursor;

fn classic() -> WeightDistribution {
    WeightDistribution::from_pairs([
        (b'a', 5.0),
        (b'b', 9.0),
        (b'c', 12.0),
        (b'd', 13.0),
        (b'e', 16.0),
        (b'f', 45.0),
    ])
    .unwrap()
}

fn all_bytes() -> WeightDistribution {
    // Skewed but complete distribution over every byte value
    WeightDistribution::from_pairs((0..=255u8).map(|b| (b, 1.0 + (b % 17) as f64 * 3.5))).unwrap()
}

/// Deterministic pseudo-random bytes (linear congruential generator).
fn pseudo_random(size: usize, seed: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut state = seed;
    for _ in 0..size {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((state >> 32) as u8);
    }
    data
}

fn roundtrip_with(data: &[u8], tree: &HuffmanTree, table: &CodeTable, buffer_size: usize) {
    let config = CodecConfig::new(buffer_size);

    let mut packed = Cursor::new(Vec::new());
    let enc = HuffmanEncoder::new(table, config)
        .encode(data, &mut packed)
        .expect("encode failed");
    let packed = packed.into_inner();
    assert_eq!(enc.output_bytes, packed.len() as u64);
    assert_eq!(enc.input_bytes, data.len() as u64);

    let mut unpacked = Vec::new();
    let dec = HuffmanDecoder::new(tree, config)
        .decode(&packed[..], &mut unpacked)
        .expect("decode failed");
    assert_eq!(dec.output_bytes, data.len() as u64);
    assert_eq!(unpacked, data, "roundtrip mismatch at buffer size {buffer_size}");
}

#[test]
fn test_classic_aab() {
    let tree = build_tree(&classic()).unwrap();
    let table = build_code_table(&tree).unwrap();
    let packed = compress(b"aab", &table).unwrap();
    assert_eq!(decompress(&packed, &tree).unwrap(), b"aab");
}

#[test]
fn test_classic_various_buffer_sizes() {
    let tree = build_tree(&classic()).unwrap();
    let table = build_code_table(&tree).unwrap();
    let data: Vec<u8> = pseudo_random(5000, 7)
        .into_iter()
        .map(|b| b"abcdef"[(b % 6) as usize])
        .collect();

    for size in [1, 2, 3, 7, 64, 1023, 1024, 1025, 8192] {
        roundtrip_with(&data, &tree, &table, size);
    }
}

#[test]
fn test_all_byte_values() {
    let tree = build_tree(&all_bytes()).unwrap();
    let table = build_code_table(&tree).unwrap();
    let data: Vec<u8> = (0..=255u8).cycle().take(256 * 9).collect();
    roundtrip_with(&data, &tree, &table, 1024);
    roundtrip_with(&data, &tree, &table, 5);
}

#[test]
fn test_random_binary() {
    let tree = build_tree(&all_bytes()).unwrap();
    let table = build_code_table(&tree).unwrap();
    for (size, seed) in [(1, 1), (13, 2), (1024, 3), (4097, 4), (20_000, 5)] {
        roundtrip_with(&pseudo_random(size, seed), &tree, &table, 1024);
    }
}

#[test]
fn test_sample_trained_text() {
    let text = b"It was the best of times, it was the worst of times, it was the age of \
                 wisdom, it was the age of foolishness, it was the epoch of belief.";
    let data = text.repeat(40);
    let tree = build_tree(&WeightDistribution::from_sample(&data)).unwrap();
    let table = build_code_table(&tree).unwrap();

    let packed = compress(&data, &table).unwrap();
    // Text with a trained table compresses well below 8 bits per byte
    assert!(packed.len() < data.len() * 3 / 4);

    let expected_bits = table.encoded_bits(&data).unwrap();
    assert_eq!(packed.len() as u64 - 1, expected_bits.div_ceil(8));
    assert_eq!(decompress(&packed, &tree).unwrap(), data);
}

#[test]
fn test_header_matches_payload_bits() {
    let tree = build_tree(&classic()).unwrap();
    let table = build_code_table(&tree).unwrap();

    for n in 0..40usize {
        let data: Vec<u8> = b"fabcde".iter().copied().cycle().take(n).collect();
        let packed = compress(&data, &table).unwrap();
        let bits = table.encoded_bits(&data).unwrap();
        assert_eq!(packed[0] as u64, bits % 8);
        assert_eq!(decompress(&packed, &tree).unwrap(), data);
    }
}

#[test]
fn test_tree_reuse_across_sessions() {
    let tree = build_tree(&classic()).unwrap();
    let table = build_code_table(&tree).unwrap();

    let first = compress(b"fedcba", &table).unwrap();
    let second = compress(b"abcdef", &table).unwrap();
    assert_eq!(decompress(&second, &tree).unwrap(), b"abcdef");
    assert_eq!(decompress(&first, &tree).unwrap(), b"fedcba");
}

#[test]
fn test_rebuilt_table_is_identical() {
    let first = build_code_table(&build_tree(&classic()).unwrap()).unwrap();
    let second = build_code_table(&build_tree(&classic()).unwrap()).unwrap();
    assert_eq!(first, second);
}
