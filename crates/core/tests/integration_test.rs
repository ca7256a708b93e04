//! Integration tests for the full huffcode session flow.
//!
//! These tests verify end-to-end behavior: corpus -> frequency table ->
//! tree + code table -> encode -> decode, with verification that output
//! matches input, plus the structural properties the code must uphold
//! (prefix-freedom, code length monotonicity, report arithmetic).

use huffcode_core::{
    codebook::{self, CodeTable},
    decode::decode,
    encode::encode,
    freq::FrequencyTable,
    report::report,
    tree::HuffmanTree,
};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn build_session(corpus: &[u8]) -> (HuffmanTree, CodeTable) {
    let freqs = FrequencyTable::from_bytes(corpus);
    codebook::build(&freqs).expect("session build failed")
}

/// Generate a random ASCII corpus with a skewed symbol distribution.
fn random_corpus(rng: &mut ChaCha8Rng, len: usize) -> Vec<u8> {
    // Restrict to a random alphabet slice so repeated symbols are common.
    let alphabet_span: u8 = rng.gen_range(2..=96);
    let base: u8 = rng.gen_range(0..(128 - alphabet_span));

    (0..len)
        .map(|_| {
            // Square the draw to bias toward the low end of the span.
            let r: f64 = rng.gen();
            base + (r * r * alphabet_span as f64) as u8
        })
        .collect()
}

/// Concrete scenario 1: corpus "abb" -> codes {a:"0", b:"1"}.
#[test]
fn test_scenario_two_symbols() {
    let (tree, table) = build_session(b"abb");

    assert_eq!(table.code(b'a'), Some("0"));
    assert_eq!(table.code(b'b'), Some("1"));

    let bits = encode(&table, b"abb").unwrap();
    assert_eq!(bits, "011");
    assert_eq!(decode(&tree, &bits).unwrap(), b"abb");
}

/// Concrete scenario 2: {a:1, b:1, c:2} -> codes {a:"00", b:"01", c:"1"}.
#[test]
fn test_scenario_three_symbols() {
    let (tree, table) = build_session(b"abcc");

    assert_eq!(table.code(b'a'), Some("00"));
    assert_eq!(table.code(b'b'), Some("01"));
    assert_eq!(table.code(b'c'), Some("1"));

    let bits = encode(&table, b"abcabc").unwrap();
    assert_eq!(bits.len(), 10);
    assert_eq!(decode(&tree, &bits).unwrap(), b"abcabc");
}

/// Concrete scenario 3: a single-symbol corpus uses the one-bit code "0".
#[test]
fn test_scenario_single_symbol() {
    let (tree, table) = build_session(b"aaaa");

    assert_eq!(table.code(b'a'), Some("0"));

    let bits = encode(&table, b"aaaa").unwrap();
    assert_eq!(bits, "0000");
    assert_eq!(decode(&tree, &bits).unwrap(), b"aaaa");
}

/// Boundary: empty encode input and empty decode input are both no-ops.
#[test]
fn test_empty_boundaries() {
    let freqs = FrequencyTable::from_bytes(b"");
    assert!(freqs.is_empty());
    assert!(codebook::build(&freqs).is_err());

    let (tree, table) = build_session(b"abb");
    assert_eq!(encode(&table, b"").unwrap(), "");
    assert_eq!(decode(&tree, "").unwrap(), Vec::<u8>::new());
}

/// Round trip over a realistic mixed corpus.
#[test]
fn test_round_trip_text() {
    let corpus = b"it was the best of times, it was the worst of times";
    let (tree, table) = build_session(corpus);

    let bits = encode(&table, corpus).unwrap();
    assert_eq!(decode(&tree, &bits).unwrap(), corpus);
}

/// Round trip for sequences drawn from the corpus alphabet but differing
/// from the corpus itself.
#[test]
fn test_round_trip_resampled_input() {
    let corpus = b"abracadabra";
    let (tree, table) = build_session(corpus);

    let mut rng = ChaCha8Rng::seed_from_u64(7);
    for _ in 0..50 {
        let len = rng.gen_range(0..200);
        let input: Vec<u8> = (0..len)
            .map(|_| corpus[rng.gen_range(0..corpus.len())])
            .collect();

        let bits = encode(&table, &input).unwrap();
        assert_eq!(decode(&tree, &bits).unwrap(), input);
    }
}

/// Round trip across many random corpora.
#[test]
fn test_round_trip_random_corpora() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    for _ in 0..100 {
        let len = rng.gen_range(1..2000);
        let corpus = random_corpus(&mut rng, len);

        let (tree, table) = build_session(&corpus);
        let bits = encode(&table, &corpus).unwrap();
        assert_eq!(decode(&tree, &bits).unwrap(), corpus);
    }
}

/// Prefix-freedom: no code is a proper prefix of another, across random
/// frequency distributions.
#[test]
fn test_prefix_free_random_corpora() {
    let mut rng = ChaCha8Rng::seed_from_u64(12345);

    for _ in 0..100 {
        let len = rng.gen_range(2..1000);
        let corpus = random_corpus(&mut rng, len);

        let (_, table) = build_session(&corpus);
        let codes: Vec<(u8, &str)> = table.iter().collect();

        for (sym_a, code_a) in &codes {
            for (sym_b, code_b) in &codes {
                if sym_a != sym_b {
                    assert!(
                        !code_b.starts_with(code_a),
                        "code of {:?} is a prefix of code of {:?}",
                        *sym_a as char,
                        *sym_b as char
                    );
                }
            }
        }
    }
}

/// A strictly less frequent symbol never gets a strictly shorter code.
#[test]
fn test_code_length_monotonicity() {
    let mut rng = ChaCha8Rng::seed_from_u64(999);

    for _ in 0..100 {
        let len = rng.gen_range(2..3000);
        let corpus = random_corpus(&mut rng, len);

        let freqs = FrequencyTable::from_bytes(&corpus);
        let (_, table) = codebook::build(&freqs).unwrap();

        let entries: Vec<(u64, usize)> = table
            .iter()
            .map(|(symbol, code)| (freqs.count(symbol), code.len()))
            .collect();

        for &(count_a, len_a) in &entries {
            for &(count_b, len_b) in &entries {
                if count_a < count_b {
                    assert!(
                        len_a >= len_b,
                        "freq {} got code length {}, but freq {} got {}",
                        count_a,
                        len_a,
                        count_b,
                        len_b
                    );
                }
            }
        }
    }
}

/// Report arithmetic: encoded bits equal the concatenated output length,
/// original bits equal 8 per symbol, and the ratio follows the formula.
#[test]
fn test_report_arithmetic() {
    let mut rng = ChaCha8Rng::seed_from_u64(31337);

    for _ in 0..20 {
        let len = rng.gen_range(1..1500);
        let corpus = random_corpus(&mut rng, len);

        let (_, table) = build_session(&corpus);
        let bits = encode(&table, &corpus).unwrap();
        let rep = report(&table, &corpus).unwrap();

        assert_eq!(rep.encoded_bits, bits.len() as u64);
        assert_eq!(rep.original_bits, 8 * corpus.len() as u64);

        let expected =
            (rep.original_bits as f64 - rep.encoded_bits as f64) / rep.original_bits as f64 * 100.0;
        assert!((rep.reduction_percent() - expected).abs() < 1e-9);
    }
}

/// Encoding input from a different corpus aborts instead of skipping.
#[test]
fn test_unmapped_symbol_rejected_end_to_end() {
    let (_, table) = build_session(b"aabbcc");

    assert!(encode(&table, b"abd").is_err());
    assert!(report(&table, b"abd").is_err());
}

/// Strict decode validation: foreign characters and truncated codes fail.
#[test]
fn test_malformed_encoded_input_rejected() {
    let (tree, table) = build_session(b"abcc");

    assert!(decode(&tree, "0021").is_err());
    assert!(decode(&tree, "01 01").is_err());

    // Strand the cursor mid-code: "00" decodes 'a', then "0" is incomplete.
    let bits = encode(&table, b"a").unwrap();
    assert_eq!(bits, "00");
    assert!(decode(&tree, "000").is_err());
}
