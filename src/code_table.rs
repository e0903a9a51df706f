//! Symbol-to-code mapping derived from a finished tree.
//!
//! Codes come from a depth-first walk, left before right, that pushes a
//! direction onto one shared path on the way down and pops it on the way back
//! up. A lone-leaf tree has no edges; its single symbol gets the fixed code
//! `L` so every occurrence still costs one direction.

use std::collections::HashMap;

use crate::builder::HuffmanTree;
use crate::error::{Error, Result};
use crate::node::{Code, Direction, HuffmanNode, Symbol};

/// Code for each leaf, in depth-first order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    entries: Vec<(Symbol, Code)>,
    index: HashMap<Symbol, usize>,
}

impl CodeTable {
    /// Build the table with the tree's own code-length bound.
    ///
    /// # Errors
    /// Returns `Error::CodeTooLong` if any path exceeds the bound.
    pub fn new(tree: &HuffmanTree) -> Result<Self> {
        Self::with_max_len(tree, tree.max_code_len())
    }

    /// Build the table, rejecting paths longer than `max_len`.
    ///
    /// # Errors
    /// Returns `Error::CodeTooLong` if any path exceeds `max_len`.
    pub fn with_max_len(tree: &HuffmanTree, max_len: usize) -> Result<Self> {
        let mut entries = Vec::new();
        match tree.root() {
            None => {}
            Some(HuffmanNode::Leaf { symbol, .. }) => {
                entries.push((*symbol, Code::from(vec![Direction::Left])));
            }
            Some(root) => {
                let mut path = Code::new();
                walk(root, &mut path, max_len, &mut entries)?;
            }
        }
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, (symbol, _))| (*symbol, i))
            .collect();
        Ok(Self { entries, index })
    }

    /// The code for `symbol`, if it has a leaf.
    pub fn get(&self, symbol: Symbol) -> Option<&Code> {
        self.index.get(&symbol).map(|&i| &self.entries[i].1)
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(symbol, code)` pairs in depth-first order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &Code)> + '_ {
        self.entries.iter().map(|(s, c)| (*s, c))
    }
}

fn walk(
    node: &HuffmanNode,
    path: &mut Code,
    max_len: usize,
    entries: &mut Vec<(Symbol, Code)>,
) -> Result<()> {
    match node {
        HuffmanNode::Leaf { symbol, .. } => entries.push((*symbol, path.clone())),
        HuffmanNode::Internal { left, right, .. } => {
            if path.len() >= max_len {
                return Err(Error::CodeTooLong {
                    length: path.len() + 1,
                    max: max_len,
                });
            }
            path.push(Direction::Left);
            walk(left, path, max_len, entries)?;
            path.pop();

            path.push(Direction::Right);
            walk(right, path, max_len, entries)?;
            path.pop();
        }
    }
    Ok(())
}
