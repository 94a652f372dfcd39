//! Deterministic sample data generation.
//!
//! Huffman compression behaves very differently on skewed versus flat
//! frequency profiles, so the generated sample mixes sections of each:
//! long runs, small-alphabet text, repeating motifs, and uniform noise.
//! The same seed always produces the same bytes, which makes ratio
//! comparisons between runs meaningful.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::io::Write;
use std::path::Path;

const SECTION_BYTES: usize = 4096;
const TEXT_ALPHABET: &[u8] = b"etaoin shrdlu cmfwyp.\n";

/// Generate `size_bytes` of sample data with mixed compressibility.
pub fn generate_sample_data(seed: u64, size_bytes: usize) -> Vec<u8> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut data = Vec::with_capacity(size_bytes);

    while data.len() < size_bytes {
        let remaining = size_bytes - data.len();
        let section = remaining.min(SECTION_BYTES);

        match rng.gen_range(0..8u8) {
            // Runs of one byte: near-maximal compression, exercises the
            // short-code end of the table.
            0 | 1 => {
                let value: u8 = rng.gen();
                data.extend(std::iter::repeat(value).take(section));
            }

            // Small-alphabet text with a skewed letter distribution.
            2..=4 => {
                for _ in 0..section {
                    let idx = rng.gen_range(0..TEXT_ALPHABET.len());
                    data.push(TEXT_ALPHABET[idx]);
                }
            }

            // A short motif repeated across the section.
            5 | 6 => {
                let motif_len = rng.gen_range(3..=24);
                let motif: Vec<u8> = (0..motif_len).map(|_| rng.gen()).collect();
                for i in 0..section {
                    data.push(motif[i % motif.len()]);
                }
            }

            // Uniform noise: close to incompressible.
            _ => {
                for _ in 0..section {
                    data.push(rng.gen());
                }
            }
        }
    }

    data.truncate(size_bytes);
    data
}

/// Generate sample data and write it to `path`.
pub fn write_sample_file(path: &Path, seed: u64, size_bytes: usize) -> std::io::Result<()> {
    let data = generate_sample_data(seed, size_bytes);
    let mut file = std::fs::File::create(path)?;
    file.write_all(&data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_size() {
        for size in [0, 1, 100, SECTION_BYTES, SECTION_BYTES + 1, 100_000] {
            assert_eq!(generate_sample_data(3, size).len(), size);
        }
    }

    #[test]
    fn test_seed_determinism() {
        assert_eq!(generate_sample_data(42, 20_000), generate_sample_data(42, 20_000));
        assert_ne!(generate_sample_data(1, 20_000), generate_sample_data(2, 20_000));
    }

    #[test]
    fn test_sample_round_trips() {
        let data = generate_sample_data(7, 50_000);
        let packed = huffpack_core::compress_bytes(&data).unwrap();
        assert_eq!(huffpack_core::decompress_bytes(&packed).unwrap(), data);
    }
}
