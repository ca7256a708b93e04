//! Code table derivation from a finished tree.
//!
//! A depth-first walk assigns each leaf's symbol the bit-string spelled by
//! its root-to-leaf path: '0' for a left descent, '1' for a right descent.
//! Codes are plain `String`s of '0'/'1' characters, matching the wire format
//! the console collaborator displays and accepts.
//!
//! # Degenerate corpus
//!
//! A corpus with exactly one distinct symbol produces a tree whose root is a
//! leaf, and the path to it is empty. An empty code would make the encoded
//! output of a non-empty input indistinguishable from no input at all, so
//! the sole symbol is assigned the one-bit code "0" by convention.

use log::debug;

use crate::error::Result;
use crate::freq::{FrequencyTable, ALPHABET_SIZE};
use crate::tree::{HuffmanTree, Node};

/// Mapping from symbol to its code bit-string.
///
/// Derived once per tree and read-only afterwards; rebuilt from scratch for
/// each new corpus. Every stored code is non-empty, and no code is a proper
/// prefix of another.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    /// Indexed by symbol; `None` for symbols absent from the corpus
    codes: Vec<Option<String>>,
}

impl CodeTable {
    /// Derive the code table from a tree.
    ///
    /// Walks depth-first, appending '0' when descending left and '1' when
    /// descending right, and records the accumulated bit-string at each
    /// leaf. A single-leaf tree assigns the code "0" (see module docs).
    pub fn from_tree(tree: &HuffmanTree) -> Self {
        let mut codes = vec![None; ALPHABET_SIZE];

        match tree.root() {
            Node::Leaf { symbol, .. } => {
                codes[*symbol as usize] = Some("0".to_string());
            }
            root => assign(root, String::new(), &mut codes),
        }

        let table = Self { codes };
        debug!("assigned {} codes, longest {} bits", table.len(), table.max_code_len());
        table
    }

    /// The code for `symbol`, if it appeared in the corpus.
    pub fn code(&self, symbol: u8) -> Option<&str> {
        self.codes
            .get(symbol as usize)
            .and_then(|code| code.as_deref())
    }

    /// Iterate over `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &str)> + '_ {
        self.codes
            .iter()
            .enumerate()
            .filter_map(|(symbol, code)| code.as_deref().map(|c| (symbol as u8, c)))
    }

    /// Number of symbols with a code.
    pub fn len(&self) -> usize {
        self.codes.iter().filter(|code| code.is_some()).count()
    }

    /// True if no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.iter().all(|code| code.is_none())
    }

    fn max_code_len(&self) -> usize {
        self.iter().map(|(_, code)| code.len()).max().unwrap_or(0)
    }
}

/// Recursive DFS over internal nodes. The tagged node type makes a missing
/// subtree unrepresentable, so the walk has no malformed-tree path.
fn assign(node: &Node, prefix: String, codes: &mut [Option<String>]) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes[*symbol as usize] = Some(prefix);
        }
        Node::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push('0');
            assign(left, left_prefix, codes);

            let mut right_prefix = prefix;
            right_prefix.push('1');
            assign(right, right_prefix, codes);
        }
    }
}

/// Build the session tree and code table from one frequency table.
///
/// The tree is retained for decoding and the table for encoding; both are
/// derived once and reused for every encode/decode call in the session.
///
/// # Errors
/// Returns `TreeError::EmptyFrequencyTable` if the table has no entries.
pub fn build(freqs: &FrequencyTable) -> Result<(HuffmanTree, CodeTable)> {
    let tree = HuffmanTree::from_frequencies(freqs)?;
    let table = CodeTable::from_tree(&tree);
    Ok((tree, table))
}
