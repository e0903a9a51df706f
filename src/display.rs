//! Human-readable dumps of trees, forests and code tables.

use std::fmt;

use crate::builder::HuffmanTree;
use crate::code_table::CodeTable;
use crate::forest::SortedForest;
use crate::node::HuffmanNode;

fn write_node(f: &mut fmt::Formatter<'_>, node: &HuffmanNode, level: usize) -> fmt::Result {
    for _ in 0..=level {
        f.write_str("  ")?;
    }
    match node {
        HuffmanNode::Leaf { symbol, count } => {
            writeln!(f, "Leaf: '{}' with count {}", symbol, count)
        }
        HuffmanNode::Internal { count, left, right } => {
            writeln!(f, "Node: accumulated count {}", count)?;
            write_node(f, left, level + 1)?;
            write_node(f, right, level + 1)
        }
    }
}

impl fmt::Display for HuffmanNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Huffman tree:")?;
        write_node(f, self, 0)
    }
}

impl fmt::Display for HuffmanTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.root() {
            Some(root) => write!(f, "{}", root),
            None => writeln!(f, "Huffman tree:"),
        }
    }
}

impl fmt::Display for SortedForest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Huffman tree list:")?;
        for tree in self.iter() {
            write!(f, "{}", tree)?;
        }
        Ok(())
    }
}

impl fmt::Display for CodeTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Huffman tree codes:")?;
        for (symbol, code) in self.iter() {
            writeln!(f, "'{}' has code \"{}\"", symbol, code)?;
        }
        Ok(())
    }
}
