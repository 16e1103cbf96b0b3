//! Codec integration tests.
//!
//! Exercises the public library surface end to end: round-trip behavior,
//! encoded-form guarantees, and the error taxonomy.

use rand::Rng;
use runlen::{CodecError, compress, decompress, runs};

/// Build a random digit-free string over the given alphabet.
fn random_input(alphabet: &[char], len: usize) -> String {
    let mut rng = rand::thread_rng();
    (0..len)
        .map(|_| alphabet[rng.gen_range(0..alphabet.len())])
        .collect()
}

#[test]
fn test_round_trip_small_alphabet() {
    let alphabet = ['A', 'C', 'G', 'T'];
    for _ in 0..50 {
        let input = random_input(&alphabet, 200);
        let encoded = compress(&input).expect("Encoding failed");
        let decoded = decompress(&encoded).expect("Decoding failed");
        assert_eq!(decoded, input);
    }
}

#[test]
fn test_round_trip_mixed_alphabet() {
    // Letters, punctuation, whitespace, and non-ASCII symbols are all fair
    // game; only ASCII digits are excluded from the input alphabet.
    let alphabet = ['x', 'Y', '.', '-', ' ', 'α', '界', '٣'];
    let mut rng = rand::thread_rng();
    for _ in 0..50 {
        let len = rng.gen_range(1..300);
        let input = random_input(&alphabet, len);
        let encoded = compress(&input).expect("Encoding failed");
        let decoded = decompress(&encoded).expect("Decoding failed");
        assert_eq!(decoded, input);
    }
}

#[test]
fn test_token_count_matches_run_count() {
    let inputs = ["AAAABBBCCDAA", "A", "ABABAB", "zzzzzzzz", "αα ββ"];
    for input in inputs {
        let encoded = compress(input).unwrap();
        // Each token contributes exactly one non-digit character (its symbol),
        // so counting those counts the tokens.
        let tokens = encoded.chars().filter(|c| !c.is_ascii_digit()).count();
        assert_eq!(tokens, runs(input).count(), "input: {input:?}");
    }
}

#[test]
fn test_counts_have_no_leading_zeros() {
    let input = random_input(&['A', 'B'], 2000);
    let encoded = compress(&input).unwrap();
    let mut prev_was_symbol = false;
    for c in encoded.chars() {
        if prev_was_symbol {
            // First digit of every count.
            assert_ne!(c, '0', "leading zero in {encoded}");
        }
        prev_was_symbol = !c.is_ascii_digit();
    }
}

#[test]
fn test_compression_is_not_idempotent() {
    // Compressed output contains count digits, so the encoder refuses to run
    // on it a second time; in particular the result of double compression is
    // never equal to single compression. This is expected behavior, not a
    // defect in the codec.
    let encoded = compress("AAAABBBCCDAA").unwrap();
    let recompressed = compress(&encoded);
    assert!(matches!(
        recompressed,
        Err(CodecError::UnsupportedAlphabet { .. })
    ));
    assert_ne!(recompressed.ok(), Some(encoded));
}

#[test]
fn test_reference_scenarios() {
    assert_eq!(compress("AAAABBBCCDAA").unwrap(), "A4B3C2D1A2");
    assert_eq!(decompress("A4B3C2D1A2").unwrap(), "AAAABBBCCDAA");

    assert_eq!(compress("A").unwrap(), "A1");
    assert_eq!(decompress("A1").unwrap(), "A");

    assert_eq!(decompress("A10B2").unwrap(), "AAAAAAAAAABB");
}

#[test]
fn test_malformed_decode_is_rejected() {
    assert_eq!(
        decompress("A"),
        Err(CodecError::MalformedInput { position: 1 })
    );
}

#[test]
fn test_error_display_reports_position() {
    let err = decompress("A4B").unwrap_err();
    assert!(err.to_string().contains("position 3"), "{err}");

    let err = compress("AB123").unwrap_err();
    assert!(err.to_string().contains("position 2"), "{err}");
}

#[test]
fn test_empty_input_is_an_explicit_error() {
    assert_eq!(compress(""), Err(CodecError::EmptyInput));
    // The decoder's grammar admits zero tokens, so the inverse holds trivially.
    assert_eq!(decompress("").unwrap(), "");
}
