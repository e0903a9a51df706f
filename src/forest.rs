//! Count-ordered collection of trees awaiting merge.
//!
//! Entries are kept ascending by count. A new node goes in front of every
//! entry whose count is not strictly less than its own, so it lands *before*
//! existing ties. That rule fixes the final tree shape, and with it every
//! code the tree produces.
//!
//! Insertion is a binary search plus a shift: fine for character alphabets,
//! not meant for large ones.

use std::collections::VecDeque;

use log::debug;

use crate::frequency::FrequencyTable;
use crate::node::HuffmanNode;

/// Trees sorted ascending by count.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedForest {
    entries: VecDeque<HuffmanNode>,
}

impl SortedForest {
    /// Create an empty forest.
    pub fn new() -> Self {
        Self::default()
    }

    /// One leaf per table entry, inserted in table order.
    pub fn from_frequencies(table: &FrequencyTable) -> Self {
        let mut forest = Self::new();
        for (symbol, count) in table.iter() {
            forest.insert(HuffmanNode::leaf(symbol, count));
        }
        debug!("populated forest with {} leaves", forest.len());
        forest
    }

    /// Insert `node`, keeping the forest sorted. Returns the index it landed at.
    pub fn insert(&mut self, node: HuffmanNode) -> usize {
        let count = node.count();
        let index = self.entries.partition_point(|e| e.count() < count);
        self.entries.insert(index, node);
        index
    }

    /// Remove the lowest-count tree.
    pub fn pop_front(&mut self) -> Option<HuffmanNode> {
        self.entries.pop_front()
    }

    /// The lowest-count tree.
    pub fn front(&self) -> Option<&HuffmanNode> {
        self.entries.front()
    }

    /// Number of trees.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the forest has no trees.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Trees in ascending count order.
    pub fn iter(&self) -> impl Iterator<Item = &HuffmanNode> + '_ {
        self.entries.iter()
    }

    /// Counts in forest order.
    pub fn counts(&self) -> Vec<usize> {
        self.entries.iter().map(HuffmanNode::count).collect()
    }
}
