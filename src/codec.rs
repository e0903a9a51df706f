//! Encoding text to direction sequences and back.
//!
//! Codes are symbolic: a [`Code`] is a list of left/right steps, not packed
//! bits. Both directions are pure functions of an already-built tree.
//!
//! # Decoding Without Separators
//!
//! Every symbol sits at a leaf, so no symbol's path continues past another
//! symbol's. The decoder therefore needs no markers between codes: it follows
//! directions from the root and, the moment it lands on a leaf, emits that
//! symbol and starts over at the root.

use crate::builder::HuffmanTree;
use crate::code_table::CodeTable;
use crate::error::{Error, Result};
use crate::node::{Code, Direction, HuffmanNode};

/// Huffman encoder.
#[derive(Debug, Clone)]
pub struct HuffmanEncoder {
    table: CodeTable,
}

impl HuffmanEncoder {
    /// Create an encoder for the leaves of `tree`.
    ///
    /// # Errors
    /// Returns `Error::CodeTooLong` if a path exceeds the tree's code-length bound.
    pub fn new(tree: &HuffmanTree) -> Result<Self> {
        Ok(Self {
            table: CodeTable::new(tree)?,
        })
    }

    /// Create an encoder from an existing code table.
    pub fn from_table(table: CodeTable) -> Self {
        Self { table }
    }

    /// Concatenate the code of every symbol of `text`, in order.
    ///
    /// # Errors
    /// Returns `Error::SymbolNotInTree` for the first symbol with no leaf.
    pub fn encode(&self, text: &str) -> Result<Code> {
        let mut out = Code::new();
        for (position, symbol) in text.chars().enumerate() {
            let code = self
                .table
                .get(symbol)
                .ok_or(Error::SymbolNotInTree { symbol, position })?;
            out.extend_from(code);
        }
        Ok(out)
    }

    /// The table this encoder looks codes up in.
    pub fn table(&self) -> &CodeTable {
        &self.table
    }
}

/// Huffman decoder.
#[derive(Debug, Clone, Copy)]
pub struct HuffmanDecoder<'a> {
    root: Option<&'a HuffmanNode>,
}

impl<'a> HuffmanDecoder<'a> {
    /// Create a decoder walking `tree`.
    pub fn new(tree: &'a HuffmanTree) -> Self {
        Self { root: tree.root() }
    }

    /// Walk the tree once per symbol, restarting at the root after each leaf.
    ///
    /// # Errors
    /// - `Error::EmptyTree` if the tree is empty and `code` is not.
    /// - `Error::InvalidDirection` if a step has no child to follow.
    /// - `Error::IncompleteCode` if `code` stops part way down a path.
    pub fn decode(&self, code: &Code) -> Result<String> {
        let root = match self.root {
            Some(root) => root,
            None if code.is_empty() => return Ok(String::new()),
            None => return Err(Error::EmptyTree),
        };

        if let HuffmanNode::Leaf { symbol, .. } = root {
            return decode_lone_leaf(*symbol, code);
        }

        let mut out = String::new();
        let mut curr = root;
        let mut start = 0;
        for (position, &direction) in code.iter().enumerate() {
            curr = curr
                .child(direction)
                .ok_or(Error::InvalidDirection { direction, position })?;

            if let HuffmanNode::Leaf { symbol, .. } = curr {
                out.push(*symbol);
                curr = root;
                start = position + 1;
            }
        }

        if start < code.len() {
            return Err(Error::IncompleteCode { position: start });
        }
        Ok(out)
    }
}

/// The root is the only leaf: each fixed `L` stands for one occurrence and
/// no step into a child is taken.
fn decode_lone_leaf(symbol: char, code: &Code) -> Result<String> {
    code.iter()
        .enumerate()
        .map(|(position, &direction)| match direction {
            Direction::Left => Ok(symbol),
            Direction::Right => Err(Error::InvalidDirection { direction, position }),
        })
        .collect()
}

/// Encode `text` against `tree`.
///
/// # Errors
/// Returns `Error::SymbolNotInTree` for a symbol with no leaf.
pub fn encode(tree: &HuffmanTree, text: &str) -> Result<Code> {
    tree.encode(text)
}

/// Decode `code` against `tree`.
///
/// # Errors
/// Returns an error if `code` does not describe a whole number of symbols.
pub fn decode(tree: &HuffmanTree, code: &Code) -> Result<String> {
    tree.decode(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::build_tree;
    use proptest::prelude::*;

    #[test]
    fn test_huffman_roundtrip() {
        let data = "abracadabra";
        let tree = build_tree(data).unwrap();

        let code = encode(&tree, data).unwrap();
        let decoded = decode(&tree, &code).unwrap();

        assert_eq!(data, decoded);
    }

    #[test]
    fn test_encode_concatenates_in_order() {
        let tree = build_tree("aabbbcccc").unwrap();
        assert_eq!(encode(&tree, "abc").unwrap().to_string(), "RLRRL");
        assert_eq!(encode(&tree, "cba").unwrap().to_string(), "LRRRL");
    }

    #[test]
    fn test_encoder_from_existing_table() {
        let tree = build_tree("aabbbcccc").unwrap();
        let encoder = HuffmanEncoder::from_table(tree.code_table().unwrap());
        assert_eq!(encoder.table().len(), 3);
        assert_eq!(encoder.table().get('c').map(|c| c.len()), Some(1));
        assert_eq!(encoder.encode("ca").unwrap().to_string(), "LRL");
    }

    #[test]
    fn test_encode_unknown_symbol() {
        let tree = build_tree("aabbbcccc").unwrap();
        assert_eq!(
            encode(&tree, "abz").unwrap_err(),
            Error::SymbolNotInTree { symbol: 'z', position: 2 }
        );
    }

    #[test]
    fn test_decode_incomplete_code() {
        let tree = build_tree("aabbbcccc").unwrap();
        let code: Code = "LRRR".parse().unwrap();
        assert_eq!(
            decode(&tree, &code).unwrap_err(),
            Error::IncompleteCode { position: 3 }
        );
    }

    #[test]
    fn test_single_symbol() {
        let tree = build_tree("aaaa").unwrap();
        let code = encode(&tree, "aaaa").unwrap();
        assert_eq!(code.to_string(), "LLLL");
        assert_eq!(decode(&tree, &code).unwrap(), "aaaa");

        let bad: Code = "LR".parse().unwrap();
        assert_eq!(
            decode(&tree, &bad).unwrap_err(),
            Error::InvalidDirection { direction: Direction::Right, position: 1 }
        );
    }

    #[test]
    fn test_empty_tree() {
        let tree = build_tree("").unwrap();
        assert!(encode(&tree, "").unwrap().is_empty());
        assert_eq!(decode(&tree, &Code::new()).unwrap(), "");
        assert_eq!(
            encode(&tree, "a").unwrap_err(),
            Error::SymbolNotInTree { symbol: 'a', position: 0 }
        );
        let code: Code = "L".parse().unwrap();
        assert_eq!(decode(&tree, &code).unwrap_err(), Error::EmptyTree);
    }

    #[test]
    fn test_unicode_symbols() {
        let text = "ñandú ñandú λλλ";
        let tree = build_tree(text).unwrap();
        let code = tree.encode(text).unwrap();
        assert_eq!(tree.decode(&code).unwrap(), text);
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        #[test]
        fn prop_roundtrip_subsequence(
            source in "[a-h]{1,60}",
            picks in prop::collection::vec(any::<prop::sample::Index>(), 0..40),
        ) {
            let tree = build_tree(&source).unwrap();
            let chars: Vec<char> = source.chars().collect();
            let text: String = picks.iter().map(|i| chars[i.index(chars.len())]).collect();

            let code = encode(&tree, &text).unwrap();
            prop_assert_eq!(decode(&tree, &code).unwrap(), text);
        }
    }
}
