//! Tree construction: the full pipeline from text to a finished tree.
//!
//! # Algorithm
//!
//! 1. Deduplicate the text into its alphabet (first-occurrence order).
//! 2. Count each alphabet symbol, one leaf per symbol.
//! 3. Insert every leaf into a [`SortedForest`].
//! 4. While more than one tree remains, take the two lowest-count trees,
//!    merge them (first taken on the left) and insert the result back.
//!
//! The finished tree is immutable and owns every node; dropping it releases
//! the whole structure.

use log::{debug, trace};

use crate::code_table::CodeTable;
use crate::codec::{HuffmanDecoder, HuffmanEncoder};
use crate::config::Config;
use crate::error::{Error, Result};
use crate::forest::SortedForest;
use crate::frequency::FrequencyTable;
use crate::node::{Code, HuffmanNode};

/// Collapse a sorted forest into a single tree.
///
/// A single-entry forest is returned unchanged.
///
/// # Errors
/// Returns `Error::EmptyForest` if the forest has no trees.
pub fn reduce(mut forest: SortedForest) -> Result<HuffmanNode> {
    loop {
        let left = forest.pop_front().ok_or(Error::EmptyForest)?;
        let Some(right) = forest.pop_front() else {
            return Ok(left);
        };
        let merged = HuffmanNode::merge(left, right);
        trace!("merged into count {} ({} trees left)", merged.count(), forest.len() + 1);
        forest.insert(merged);
    }
}

/// A finished Huffman tree. Empty when built from empty input.
///
/// Remembers the code-length bound it was built under; code tables and
/// encoders derived from it apply the same bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Option<HuffmanNode>,
    max_code_len: usize,
}

impl Default for HuffmanTree {
    fn default() -> Self {
        Self {
            root: None,
            max_code_len: Config::default().max_code_len,
        }
    }
}

impl HuffmanTree {
    /// Build a tree from `text` with the default limits.
    ///
    /// # Errors
    /// Returns `Error::InputTooLong` if `text` exceeds the default maximum length.
    pub fn build(text: &str) -> Result<Self> {
        Self::build_with(text, &Config::default())
    }

    /// Build a tree from `text`.
    ///
    /// # Errors
    /// - `Error::InputTooLong` if `text` exceeds `config.max_input_len`.
    /// - `Error::CodeTooLong` if the finished tree is deeper than `config.max_code_len`.
    pub fn build_with(text: &str, config: &Config) -> Result<Self> {
        let table = FrequencyTable::from_text(text, config)?;
        let forest = SortedForest::from_frequencies(&table);
        if forest.is_empty() {
            debug!("empty input, empty tree");
            return Ok(Self {
                root: None,
                max_code_len: config.max_code_len,
            });
        }
        let root = reduce(forest)?;
        let depth = root.depth();
        if depth > config.max_code_len {
            return Err(Error::CodeTooLong {
                length: depth,
                max: config.max_code_len,
            });
        }
        debug!(
            "built tree: {} symbols, root count {}, depth {}",
            table.len(),
            root.count(),
            depth
        );
        Ok(Self {
            root: Some(root),
            max_code_len: config.max_code_len,
        })
    }

    /// The root node, if any.
    pub fn root(&self) -> Option<&HuffmanNode> {
        self.root.as_ref()
    }

    /// Take ownership of the root node.
    pub fn into_root(self) -> Option<HuffmanNode> {
        self.root
    }

    /// Longest code path this tree's code tables accept.
    pub fn max_code_len(&self) -> usize {
        self.max_code_len
    }

    /// Whether the tree has no nodes.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Number of leaves (distinct symbols).
    pub fn symbol_count(&self) -> usize {
        self.root.as_ref().map_or(0, |r| r.leaves().len())
    }

    /// Root count: the length of the text the tree was built from.
    pub fn total_count(&self) -> usize {
        self.root.as_ref().map_or(0, HuffmanNode::count)
    }

    /// Code for every leaf, bounded by [`HuffmanTree::max_code_len`].
    ///
    /// # Errors
    /// Returns `Error::CodeTooLong` if a path exceeds the bound.
    pub fn code_table(&self) -> Result<CodeTable> {
        CodeTable::with_max_len(self, self.max_code_len)
    }

    /// Encode `text`; see [`crate::codec::encode`].
    ///
    /// # Errors
    /// Returns `Error::SymbolNotInTree` for a symbol with no leaf.
    pub fn encode(&self, text: &str) -> Result<Code> {
        HuffmanEncoder::new(self)?.encode(text)
    }

    /// Decode `code`; see [`crate::codec::decode`].
    ///
    /// # Errors
    /// Returns an error if `code` does not describe a whole number of symbols.
    pub fn decode(&self, code: &Code) -> Result<String> {
        HuffmanDecoder::new(self).decode(code)
    }
}

impl From<HuffmanNode> for HuffmanTree {
    fn from(root: HuffmanNode) -> Self {
        Self {
            root: Some(root),
            ..Self::default()
        }
    }
}

/// Build a tree from `text` with the default limits.
///
/// # Errors
/// Returns `Error::InputTooLong` if `text` exceeds the default maximum length.
pub fn build_tree(text: &str) -> Result<HuffmanTree> {
    HuffmanTree::build(text)
}
