//! Error types for Huffman tree construction and coding.

use thiserror::Error;

use crate::node::Direction;

/// Error variants for Huffman operations.
///
/// Construction errors abort the whole build; coding errors point at the
/// offending symbol or code position.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input is longer than the configured maximum.
    #[error("input length {len} exceeds maximum {max}")]
    InputTooLong {
        /// Length of the rejected input, in characters.
        len: usize,
        /// Configured maximum.
        max: usize,
    },

    /// The alphabet passed to frequency tabulation repeats a symbol.
    #[error("duplicate symbol {symbol:?} in alphabet at position {position}")]
    DuplicateSymbol {
        /// The repeated symbol.
        symbol: char,
        /// Character index of the repeat within the alphabet.
        position: usize,
    },

    /// An alphabet symbol never occurs in the input.
    #[error("symbol {symbol:?} has zero frequency")]
    ZeroFrequency {
        /// The absent symbol.
        symbol: char,
    },

    /// Reduction was asked to collapse a forest with no trees.
    #[error("cannot reduce an empty forest")]
    EmptyForest,

    /// A root-to-leaf path is longer than the code bound.
    #[error("code length {length} exceeds maximum {max}")]
    CodeTooLong {
        /// Length the path reached.
        length: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Encoding met a symbol that has no leaf in the tree.
    #[error("symbol {symbol:?} at position {position} is not in the tree")]
    SymbolNotInTree {
        /// The unknown symbol.
        symbol: char,
        /// Character index within the text being encoded.
        position: usize,
    },

    /// Decoding a non-empty code against a tree with no nodes.
    #[error("cannot decode against an empty tree")]
    EmptyTree,

    /// A direction has no matching child at the current node.
    #[error("no {direction} child at code position {position}")]
    InvalidDirection {
        /// The direction that could not be followed.
        direction: Direction,
        /// Index of the direction within the code.
        position: usize,
    },

    /// The code ended part way down a path.
    #[error("code ends mid-symbol (symbol started at position {position})")]
    IncompleteCode {
        /// Index where the unfinished symbol's path began.
        position: usize,
    },

    /// A textual code contained something other than `L` or `R`.
    #[error("invalid code character {ch:?} at position {position}")]
    InvalidCodeChar {
        /// The offending character.
        ch: char,
        /// Character index within the textual code.
        position: usize,
    },
}

impl Error {
    /// Whether the error is a caller contract violation on the inputs,
    /// as opposed to a limit imposed by configuration.
    pub fn is_invalid_input(&self) -> bool {
        !matches!(self, Error::InputTooLong { .. } | Error::CodeTooLong { .. })
    }
}

/// A specialized Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, Error>;
