//! Symbol-sequence encoding against a session code table.

use crate::codebook::CodeTable;
use crate::error::{EncodeError, Result};

/// Encode `input` by concatenating each symbol's code, in input order.
///
/// The output length is the sum of the per-symbol code lengths. Encoding is
/// a pure function of the table and the input; an empty input yields an
/// empty bit-string.
///
/// # Errors
/// Returns `EncodeError::UnmappedSymbol` for the first symbol with no entry
/// in the table (input drawn from a different corpus, or a byte outside the
/// 0-127 alphabet). The encode is aborted; no partial output is returned.
pub fn encode(table: &CodeTable, input: &[u8]) -> Result<String> {
    let mut bits = String::new();

    for (position, &symbol) in input.iter().enumerate() {
        match table.code(symbol) {
            Some(code) => bits.push_str(code),
            None => return Err(EncodeError::UnmappedSymbol { symbol, position }.into()),
        }
    }

    Ok(bits)
}
