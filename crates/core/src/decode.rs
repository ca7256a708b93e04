//! Decoding: a state machine over the session tree.
//!
//! The decoder starts at the root and consumes the encoded bit-string left
//! to right: '0' descends left, '1' descends right. Reaching a leaf emits
//! its symbol and resets the cursor to the root. Prefix-freedom of the code
//! makes this walk unambiguous.
//!
//! # Input validation
//!
//! Encoded input is validated strictly: characters other than '0'/'1' are
//! rejected, and a bit-string that ends with the cursor away from the root
//! (a truncated trailing code) is an error rather than being silently
//! discarded.

use log::trace;

use crate::error::{DecodeError, Result};
use crate::tree::{HuffmanTree, Node};

/// Decode an encoded bit-string back into its symbol sequence.
///
/// Decoding an empty string yields an empty sequence. Against a
/// single-leaf tree each '0' emits the sole symbol, mirroring the "0"
/// code assigned by [`crate::codebook::CodeTable::from_tree`].
///
/// # Errors
/// - `DecodeError::InvalidCharacter` for any character other than '0'/'1'
/// - `DecodeError::UnknownCode` for a '1' against a single-leaf tree
/// - `DecodeError::TruncatedCode` if input ends in the middle of a code
pub fn decode(tree: &HuffmanTree, bits: &str) -> Result<Vec<u8>> {
    let root = tree.root();

    // Degenerate single-symbol tree: the root is a leaf and every code
    // is the one-bit "0".
    if let Node::Leaf { symbol, .. } = root {
        return decode_single_leaf(*symbol, bits);
    }

    let mut output = Vec::new();
    let mut cursor = root;
    // Bits consumed since the cursor last left the root.
    let mut depth = 0usize;

    for (position, ch) in bits.chars().enumerate() {
        let next = match cursor {
            Node::Internal { left, right, .. } => match ch {
                '0' => left.as_ref(),
                '1' => right.as_ref(),
                found => {
                    return Err(DecodeError::InvalidCharacter { found, position }.into());
                }
            },
            // The cursor only rests on internal nodes: a leaf resets to the
            // root below, and a leaf root never enters this loop.
            Node::Leaf { .. } => cursor,
        };
        depth += 1;

        match next {
            Node::Leaf { symbol, .. } => {
                output.push(*symbol);
                cursor = root;
                depth = 0;
            }
            internal => cursor = internal,
        }
    }

    if depth != 0 {
        return Err(DecodeError::TruncatedCode {
            position: bits.len() - depth,
        }
        .into());
    }

    trace!("decoded {} bits into {} symbols", bits.len(), output.len());
    Ok(output)
}

/// Decode against a tree whose root is the only leaf.
fn decode_single_leaf(symbol: u8, bits: &str) -> Result<Vec<u8>> {
    let mut output = Vec::with_capacity(bits.len());

    for (position, ch) in bits.chars().enumerate() {
        match ch {
            '0' => output.push(symbol),
            '1' => return Err(DecodeError::UnknownCode { position }.into()),
            found => {
                return Err(DecodeError::InvalidCharacter { found, position }.into());
            }
        }
    }

    Ok(output)
}
