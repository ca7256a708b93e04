//! Error types for the huffcode engine.
//!
//! All operations return structured errors rather than panicking.
//! Each failure carries enough context (symbol, bit position) for the
//! caller to report exactly where an input went wrong.

use thiserror::Error;

/// Top-level error type for all operations in the system.
///
/// Each variant corresponds to a specific failure domain:
/// - Tree: codebook construction from a frequency table
/// - Encode: mapping symbols to codes
/// - Decode: walking the tree against an encoded bit-string
/// - I/O and configuration: surfaced by the console front-end
#[derive(Debug, Error)]
pub enum Error {
    /// Tree construction failed (e.g., nothing to build from)
    #[error("tree error: {0}")]
    Tree(#[from] TreeError),

    /// Encoding failed (e.g., symbol with no code)
    #[error("encode error: {0}")]
    Encode(#[from] EncodeError),

    /// Decoding failed (e.g., malformed encoded input)
    #[error("decode error: {0}")]
    Decode(#[from] DecodeError),

    /// File I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

/// Tree construction errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError {
    /// No symbols with non-zero frequency (cannot build a tree)
    #[error("empty frequency table: cannot build tree")]
    EmptyFrequencyTable,
}

/// Encoding errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// A symbol in the input has no entry in the code table.
    ///
    /// Either the input differs from the corpus the table was built from,
    /// or the symbol is outside the 0-127 alphabet. Aborts the encode with
    /// no partial output.
    #[error("symbol {symbol:#04x} at position {position} has no code")]
    UnmappedSymbol { symbol: u8, position: usize },
}

/// Decoding errors.
///
/// The encoded wire format is a string of '0'/'1' characters. Anything
/// that cannot be resolved against the session tree is rejected rather
/// than silently tolerated.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// A character other than '0' or '1' in the encoded input
    #[error("invalid character {found:?} at bit position {position}: encoded input must be '0' or '1'")]
    InvalidCharacter { found: char, position: usize },

    /// A bit that selects no code (only possible against a single-leaf tree)
    #[error("no code matches the bit at position {position}")]
    UnknownCode { position: usize },

    /// Input exhausted in the middle of a code
    #[error("encoded input ends mid-code: incomplete code starting at bit {position}")]
    TruncatedCode { position: usize },
}

/// Type alias for Result with our Error type
pub type Result<T> = std::result::Result<T, Error>;
