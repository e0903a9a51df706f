//! Tree nodes and code paths.
//!
//! A node is either a leaf carrying one symbol and its count, or an internal
//! node owning exactly two children. There is no "missing child" state: leaf
//! versus internal is a match on the variant.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A single character of the input alphabet.
pub type Symbol = char;

/// One step from a node to one of its children.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Step to the left child.
    Left,
    /// Step to the right child.
    Right,
}

impl Direction {
    /// Textual form: `'L'` or `'R'`.
    pub fn as_char(self) -> char {
        match self {
            Direction::Left => 'L',
            Direction::Right => 'R',
        }
    }
}

impl TryFrom<char> for Direction {
    type Error = char;

    fn try_from(c: char) -> std::result::Result<Self, char> {
        match c {
            'L' => Ok(Direction::Left),
            'R' => Ok(Direction::Right),
            other => Err(other),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => f.write_str("left"),
            Direction::Right => f.write_str("right"),
        }
    }
}

/// A sequence of directions.
///
/// Used both for a single leaf's path and for the concatenated output of
/// encoding a whole text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Code {
    directions: Vec<Direction>,
}

impl Code {
    /// Create an empty code.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of directions.
    pub fn len(&self) -> usize {
        self.directions.len()
    }

    /// Whether the code has no directions.
    pub fn is_empty(&self) -> bool {
        self.directions.is_empty()
    }

    /// Append one direction.
    pub fn push(&mut self, direction: Direction) {
        self.directions.push(direction);
    }

    /// Remove and return the last direction.
    pub fn pop(&mut self) -> Option<Direction> {
        self.directions.pop()
    }

    /// Append all directions of another code.
    pub fn extend_from(&mut self, other: &Code) {
        self.directions.extend_from_slice(&other.directions);
    }

    /// Whether `self` is a prefix of `other`.
    pub fn is_prefix_of(&self, other: &Code) -> bool {
        other.directions.starts_with(&self.directions)
    }

    /// Directions as a slice.
    pub fn as_slice(&self) -> &[Direction] {
        &self.directions
    }

    /// Iterate over the directions.
    pub fn iter(&self) -> std::slice::Iter<'_, Direction> {
        self.directions.iter()
    }
}

impl From<Vec<Direction>> for Code {
    fn from(directions: Vec<Direction>) -> Self {
        Self { directions }
    }
}

impl FromIterator<Direction> for Code {
    fn from_iter<I: IntoIterator<Item = Direction>>(iter: I) -> Self {
        Self {
            directions: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Code {
    type Item = &'a Direction;
    type IntoIter = std::slice::Iter<'a, Direction>;

    fn into_iter(self) -> Self::IntoIter {
        self.directions.iter()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for d in &self.directions {
            write!(f, "{}", d.as_char())?;
        }
        Ok(())
    }
}

impl FromStr for Code {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        s.chars()
            .enumerate()
            .map(|(position, ch)| {
                Direction::try_from(ch).map_err(|ch| Error::InvalidCodeChar { ch, position })
            })
            .collect()
    }
}

/// Huffman tree node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode {
    /// A single symbol and how often it occurs.
    Leaf {
        /// The symbol.
        symbol: Symbol,
        /// Occurrence count.
        count: usize,
    },
    /// The merge of two subtrees.
    Internal {
        /// Sum of both children's counts.
        count: usize,
        /// First (lower-count) subtree.
        left: Box<HuffmanNode>,
        /// Second subtree.
        right: Box<HuffmanNode>,
    },
}

impl HuffmanNode {
    /// Create a leaf.
    pub fn leaf(symbol: Symbol, count: usize) -> Self {
        HuffmanNode::Leaf { symbol, count }
    }

    /// Merge two subtrees under a new internal node, taking ownership of both.
    pub fn merge(left: HuffmanNode, right: HuffmanNode) -> Self {
        HuffmanNode::Internal {
            count: left.count() + right.count(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Count of this node (aggregate for internal nodes).
    pub fn count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { count, .. } => *count,
            HuffmanNode::Internal { count, .. } => *count,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// The leaf's symbol, or `None` for internal nodes.
    pub fn symbol(&self) -> Option<Symbol> {
        match self {
            HuffmanNode::Leaf { symbol, .. } => Some(*symbol),
            HuffmanNode::Internal { .. } => None,
        }
    }

    /// The child in the given direction, or `None` for leaves.
    pub fn child(&self, direction: Direction) -> Option<&HuffmanNode> {
        match (self, direction) {
            (HuffmanNode::Internal { left, .. }, Direction::Left) => Some(left.as_ref()),
            (HuffmanNode::Internal { right, .. }, Direction::Right) => Some(right.as_ref()),
            (HuffmanNode::Leaf { .. }, _) => None,
        }
    }

    /// Leaves in depth-first, left-before-right order.
    pub fn leaves(&self) -> Vec<(Symbol, usize)> {
        let mut out = Vec::new();
        self.collect_leaves(&mut out);
        out
    }

    fn collect_leaves(&self, out: &mut Vec<(Symbol, usize)>) {
        match self {
            HuffmanNode::Leaf { symbol, count } => out.push((*symbol, *count)),
            HuffmanNode::Internal { left, right, .. } => {
                left.collect_leaves(out);
                right.collect_leaves(out);
            }
        }
    }

    /// Number of edges on the longest root-to-leaf path.
    pub fn depth(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 0,
            HuffmanNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    /// Sum of the counts of every internal node in this subtree.
    ///
    /// Equals the weighted path length: the number of directions needed to
    /// encode every counted occurrence.
    pub fn internal_count_sum(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 0,
            HuffmanNode::Internal { count, left, right } => {
                count + left.internal_count_sum() + right.internal_count_sum()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_sums_counts() {
        let node = HuffmanNode::merge(HuffmanNode::leaf('a', 2), HuffmanNode::leaf('b', 3));
        assert_eq!(node.count(), 5);
        assert!(!node.is_leaf());
        assert_eq!(node.child(Direction::Left).and_then(HuffmanNode::symbol), Some('a'));
        assert_eq!(node.child(Direction::Right).and_then(HuffmanNode::symbol), Some('b'));
    }

    #[test]
    fn test_leaf_has_no_children() {
        let leaf = HuffmanNode::leaf('x', 1);
        assert!(leaf.child(Direction::Left).is_none());
        assert!(leaf.child(Direction::Right).is_none());
        assert_eq!(leaf.depth(), 0);
    }

    #[test]
    fn test_code_text_roundtrip() {
        let code: Code = "LRRL".parse().unwrap();
        assert_eq!(code.len(), 4);
        assert_eq!(code.as_slice()[1], Direction::Right);
        assert_eq!(code.to_string(), "LRRL");
        assert_eq!("".parse::<Code>().unwrap(), Code::new());
    }

    #[test]
    fn test_code_parse_rejects_other_chars() {
        let err = "LRx".parse::<Code>().unwrap_err();
        assert_eq!(err, Error::InvalidCodeChar { ch: 'x', position: 2 });
    }

    #[test]
    fn test_prefix() {
        let a: Code = "LR".parse().unwrap();
        let b: Code = "LRL".parse().unwrap();
        assert!(a.is_prefix_of(&b));
        assert!(!b.is_prefix_of(&a));
    }

    #[test]
    fn test_internal_count_sum() {
        let tree = HuffmanNode::merge(
            HuffmanNode::leaf('c', 4),
            HuffmanNode::merge(HuffmanNode::leaf('a', 2), HuffmanNode::leaf('b', 3)),
        );
        // c:1*4 + a:2*2 + b:2*3 = 14 = 9 + 5
        assert_eq!(tree.internal_count_sum(), 14);
        assert_eq!(tree.leaves(), vec![('c', 4), ('a', 2), ('b', 3)]);
    }
}
