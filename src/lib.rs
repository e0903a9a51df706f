//! # Huffman Trees
//!
//! *Prefix codes built from character frequencies.*
//!
//! ## Intuition First
//!
//! Morse code gives `E` a single dot and `Q` four symbols: common letters get
//! short codes. Huffman coding does the same thing optimally for a given text.
//! Count how often each character occurs, then repeatedly glue the two rarest
//! groups together under a new node. Rare characters end up deep in the tree
//! with long paths, frequent ones near the root with short paths.
//!
//! Reading a path from the root (`L` for left, `R` for right) to a leaf gives
//! that leaf's code. Because every symbol sits at a leaf, no code is a prefix
//! of another, and a stream of codes decodes without separators.
//!
//! ## Algorithm
//!
//! ```text
//! "aabbbcccc"  ->  alphabet "abc"  ->  a:2 b:3 c:4
//!
//! forest [a2, b3, c4]
//! merge a2 + b3 = 5      -> [c4, (ab)5]
//! merge c4 + (ab)5 = 9   -> [(c(ab))9]
//!
//!        9
//!       / \
//!     c4   5         c = "L"
//!         / \        a = "RL"
//!       a2   b3      b = "RR"
//! ```
//!
//! The forest is kept ascending by count; a newly inserted tree goes *before*
//! existing trees of equal count. That tie rule makes the tree shape, and so
//! every code, reproducible.
//!
//! ## Complexity Analysis
//!
//! - **Build**: $O(n^2)$ for an alphabet of $n$ symbols (linear-time ordered
//!   insertion), plus $O(n \cdot m)$ counting over an input of length $m$.
//! - **Encode / decode**: $O(\text{code length})$.
//!
//! ## Edge Cases
//!
//! - Empty input builds an empty tree; only empty text and empty codes work
//!   against it.
//! - A single distinct symbol builds a lone leaf. It gets the fixed code `L`,
//!   so `"aaaa"` encodes to `"LLLL"`.
//!
//! ## Example
//!
//! ```
//! use huffman_tree::{build_tree, decode, encode};
//!
//! let tree = build_tree("aabbbcccc")?;
//! let code = encode(&tree, "cab")?;
//! assert_eq!(code.to_string(), "LRLRR");
//! assert_eq!(decode(&tree, &code)?, "cab");
//! # Ok::<(), huffman_tree::Error>(())
//! ```
//!
//! ## References
//!
//! - Huffman, D. A. (1952). "A Method for the Construction of Minimum-Redundancy Codes."

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod builder;
pub mod code_table;
pub mod codec;
pub mod config;
pub mod display;
pub mod error;
pub mod forest;
pub mod frequency;
pub mod node;

pub use builder::{build_tree, reduce, HuffmanTree};
pub use code_table::CodeTable;
pub use codec::{decode, encode, HuffmanDecoder, HuffmanEncoder};
pub use config::Config;
pub use error::{Error, Result};
pub use forest::SortedForest;
pub use frequency::{nub, FrequencyTable};
pub use node::{Code, Direction, HuffmanNode, Symbol};
