//! Sample corpus generation for runs without an input file.
//!
//! Generated text stays inside the 0-127 alphabet the engine counts, with a
//! mix of compressibility so the report shows interesting numbers:
//! - Runs of a single letter (highly compressible)
//! - Text-like sections over a small alphabet (moderately compressible)
//! - Repeating patterns

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Generate a sample ASCII corpus of `size_bytes` bytes.
///
/// Deterministic for a given seed, so encode and decode runs can rebuild
/// the identical session tree.
pub fn generate_sample_text(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);

    let mut remaining = size_bytes;

    while remaining > 0 {
        let section_size = remaining.min(512);

        let section_type: u8 = rng.gen_range(0..10);

        match section_type {
            // 30% runs of one letter
            0..=2 => {
                let letter = b'a' + rng.gen_range(0..26);
                data.extend(std::iter::repeat(letter).take(section_size));
            }

            // 50% text-like sections
            3..=7 => {
                let alphabet = b"etaoin shrdlu.,!\n";
                for _ in 0..section_size {
                    let idx = rng.gen_range(0..alphabet.len());
                    data.push(alphabet[idx]);
                }
            }

            // 20% repeating patterns
            _ => {
                let pattern = generate_pattern(&mut rng);
                for pos in 0..section_size {
                    data.push(pattern[pos % pattern.len()]);
                }
            }
        }

        remaining = remaining.saturating_sub(section_size);
    }

    data.truncate(size_bytes);
    data
}

/// Generate a small repeating pattern of printable ASCII.
fn generate_pattern(rng: &mut ChaCha8Rng) -> Vec<u8> {
    let pattern_len = rng.gen_range(4..=24);
    (0..pattern_len).map(|_| rng.gen_range(0x20..0x7F)).collect()
}
