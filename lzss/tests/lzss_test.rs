//! LZSS integration tests.

use lzss::{
    ErrorKind, LOOKAHEAD_SIZE, LzssEncoder, LzssError, LzssToken, MIN_MATCH, WINDOW_SIZE,
    decode, encode, parse_tokens,
};

/// Deterministic pseudo-random bytes.
fn noise(size: usize, mut seed: u64) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    for _ in 0..size {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
        data.push((seed >> 32) as u8);
    }
    data
}

fn assert_roundtrip(original: &[u8]) -> Vec<u8> {
    let compressed = encode(original);
    let decompressed = decode(&compressed).expect("decompression failed");
    assert_eq!(decompressed, original);
    compressed
}

#[test]
fn test_lzss_roundtrip_ascending() {
    let original: Vec<u8> = (1..=10).collect();
    assert_roundtrip(&original);
}

#[test]
fn test_lzss_empty_input() {
    assert!(encode(&[]).is_empty());
    assert_eq!(decode(&[]).expect("decompression failed"), Vec::<u8>::new());
}

#[test]
fn test_lzss_repetitive_input_uses_matches() {
    let original = [1u8; 10];
    let compressed = assert_roundtrip(&original);

    let tokens = parse_tokens(&compressed).expect("parse failed");
    assert!(tokens.iter().any(|t| matches!(t, LzssToken::Match { .. })));
}

#[test]
fn test_lzss_non_repetitive_input_is_all_literals() {
    let original: Vec<u8> = (1..=18).collect();
    let compressed = assert_roundtrip(&original);

    assert_eq!(compressed.len(), original.len() * 2);
    let tokens = parse_tokens(&compressed).expect("parse failed");
    assert!(tokens.iter().all(|t| matches!(t, LzssToken::Literal(_))));
}

#[test]
fn test_lzss_overlapping_self_reference() {
    let original = [7u8; 8];
    let compressed = assert_roundtrip(&original);

    assert_eq!(compressed, [0, 7, 1, 0, 1, 7]);
}

#[test]
fn test_lzss_all_byte_values() {
    let original: Vec<u8> = (0..=255).collect();
    assert_roundtrip(&original);
}

#[test]
fn test_lzss_pattern_across_window_boundary() {
    // 37-byte period does not divide 4096, so matches straddle the wrap point.
    let pattern = b"The quick brown fox jumps over a dog.";
    let original: Vec<u8> = pattern
        .iter()
        .copied()
        .cycle()
        .take(3 * WINDOW_SIZE + 123)
        .collect();

    let compressed = assert_roundtrip(&original);
    assert!(compressed.len() < original.len() / 2);
}

#[test]
fn test_lzss_match_reaching_full_window() {
    // A block of noise repeated exactly one window later: the only match is
    // at the maximum distance.
    let block = noise(WINDOW_SIZE, 0x1234_5678);
    let mut original = block.clone();
    original.extend_from_slice(&block[..100]);

    let compressed = assert_roundtrip(&original);

    let tokens = parse_tokens(&compressed).expect("parse failed");
    assert!(tokens.contains(&LzssToken::Match {
        distance: WINDOW_SIZE as u16,
        length: LOOKAHEAD_SIZE as u8,
    }));
}

#[test]
fn test_lzss_large_mixed_data() {
    let mut original = noise(6000, 42);
    original.extend(b"abcdefgh".repeat(500));
    original.extend(noise(3000, 7));
    let repeat = original[100..2100].to_vec();
    original.extend_from_slice(&repeat);

    assert_roundtrip(&original);
}

#[test]
fn test_lzss_token_bounds() {
    let mut original = b"This is a test of compression! ".repeat(40);
    original.extend(noise(5000, 99));
    original.extend(vec![0u8; 700]);

    let tokens = LzssEncoder::new().tokenize(&original);

    let mut processed = 0usize;
    for token in &tokens {
        if let LzssToken::Match { distance, length } = *token {
            let (distance, length) = (usize::from(distance), usize::from(length));
            assert!((MIN_MATCH..=LOOKAHEAD_SIZE).contains(&length));
            assert!(distance >= 1);
            assert!(distance <= processed.min(WINDOW_SIZE));
        }
        processed += token.decoded_len();
    }
    assert_eq!(processed, original.len());
}

#[test]
fn test_lzss_truncated_after_match_tag() {
    let err = decode(&[1]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Format);
    assert_eq!(err, LzssError::truncated(0, 3, 0));
}

#[test]
fn test_lzss_truncated_tail_of_valid_stream() {
    let mut compressed = encode(b"abcabcabcabc");
    compressed.pop();

    let err = decode(&compressed).unwrap_err();
    assert!(err.is_format_error());
}

#[test]
fn test_lzss_invalid_tag() {
    let err = decode(&[0, b'a', 2, 0]).unwrap_err();
    assert_eq!(err, LzssError::invalid_tag(2, 2));
}

#[test]
fn test_lzss_reference_before_start() {
    let err = decode(&[0, b'a', 0, b'b', 1, 0x10, 0x00, 3]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Range);
    assert_eq!(err, LzssError::invalid_distance(4096, 2));
}
