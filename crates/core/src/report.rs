//! Compression reporting.
//!
//! Pure computation over a code table and an input sequence: how many bits
//! the input occupies at a fixed 8-bit-per-symbol baseline versus how many
//! bits its Huffman encoding occupies. No state is kept.

use crate::codebook::CodeTable;
use crate::error::{EncodeError, Result};

/// Baseline bits per symbol for the "original size" figure.
pub const BASELINE_BITS_PER_SYMBOL: u64 = 8;

/// Original vs. encoded bit counts for one input sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionReport {
    /// `8 x symbol count` at the fixed baseline
    pub original_bits: u64,
    /// Sum of per-symbol code lengths across every occurrence
    pub encoded_bits: u64,
}

impl CompressionReport {
    /// Percentage reduction: `(original - encoded) / original x 100`.
    ///
    /// Returns 0.0 for empty input. Negative for inputs whose encoding is
    /// larger than the baseline (possible for pathological frequency
    /// distributions).
    pub fn reduction_percent(&self) -> f64 {
        if self.original_bits == 0 {
            0.0
        } else {
            (self.original_bits as f64 - self.encoded_bits as f64) / self.original_bits as f64
                * 100.0
        }
    }
}

/// Compute the compression report for `input` under `table`.
///
/// # Errors
/// Returns `EncodeError::UnmappedSymbol` for the first symbol with no code,
/// the same failure the encoder itself would report.
pub fn report(table: &CodeTable, input: &[u8]) -> Result<CompressionReport> {
    let mut encoded_bits = 0u64;

    for (position, &symbol) in input.iter().enumerate() {
        match table.code(symbol) {
            Some(code) => encoded_bits += code.len() as u64,
            None => return Err(EncodeError::UnmappedSymbol { symbol, position }.into()),
        }
    }

    Ok(CompressionReport {
        original_bits: BASELINE_BITS_PER_SYMBOL * input.len() as u64,
        encoded_bits,
    })
}
