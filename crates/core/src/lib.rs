//! huffcode-core: Huffman prefix-coding engine
//!
//! This library provides the core components for a console compression tool:
//! - Counts symbol frequencies over the 0-127 byte alphabet
//! - Builds a Huffman tree by greedy two-smallest merging
//! - Derives a prefix-free code table from the tree
//! - Encodes symbol sequences to '0'/'1' bit-strings and decodes them back
//! - Reports original vs. encoded bit counts
//!
//! # Architecture
//!
//! The system is designed around clear module boundaries:
//! - `freq`: symbol frequency counting
//! - `tree`: greedy Huffman tree construction
//! - `codebook`: code table derivation (and session setup via `codebook::build`)
//! - `encode`: symbol sequence -> bit-string
//! - `decode`: bit-string -> symbol sequence
//! - `report`: compression-ratio arithmetic
//!
//! The tree and code table are built once per session from one corpus and
//! reused, read-only, by every encode/decode call in that session. File I/O
//! and console rendering belong to the application crate, not the core.
//!
//! # Design Principles
//!
//! - **No panics**: all errors are structured and recoverable
//! - **Deterministic**: tie-breaks in tree construction are fully specified
//! - **Pure**: every operation is a function of immutable inputs

pub mod codebook;
pub mod decode;
pub mod encode;
pub mod error;
pub mod freq;
pub mod report;
pub mod tree;

// Re-export commonly used types
pub use error::{Error, Result};
