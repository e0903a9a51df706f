//! Alphabet extraction and frequency tabulation.

use log::debug;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::node::Symbol;

/// Whether `s` contains `c`.
pub fn contains(s: &str, c: Symbol) -> bool {
    s.chars().any(|x| x == c)
}

/// Number of occurrences of `c` in `s`.
pub fn frequency(s: &str, c: Symbol) -> usize {
    s.chars().filter(|&x| x == c).count()
}

/// The distinct symbols of `s` in first-occurrence order, using the default limits.
///
/// # Errors
/// Returns `Error::InputTooLong` if `s` exceeds the default maximum input length.
pub fn nub(s: &str) -> Result<String> {
    nub_with(s, &Config::default())
}

/// The distinct symbols of `s` in first-occurrence order.
///
/// Each symbol is kept the first time it is seen and every repeat is skipped.
///
/// # Errors
/// Returns `Error::InputTooLong` if `s` has more than `config.max_input_len` characters.
pub fn nub_with(s: &str, config: &Config) -> Result<String> {
    check_len(s, config)?;
    let mut result = String::new();
    for c in s.chars() {
        if !contains(&result, c) {
            result.push(c);
        }
    }
    Ok(result)
}

pub(crate) fn check_len(s: &str, config: &Config) -> Result<()> {
    let len = s.chars().count();
    if len > config.max_input_len {
        return Err(Error::InputTooLong {
            len,
            max: config.max_input_len,
        });
    }
    Ok(())
}

/// Occurrence counts for each symbol of an alphabet, in alphabet order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FrequencyTable {
    entries: Vec<(Symbol, usize)>,
}

impl FrequencyTable {
    /// Count, for each symbol of `alphabet`, how often it occurs in `text`.
    ///
    /// # Errors
    /// - `Error::DuplicateSymbol` if `alphabet` repeats a symbol.
    /// - `Error::ZeroFrequency` if an alphabet symbol never occurs in `text`.
    pub fn tabulate(text: &str, alphabet: &str) -> Result<Self> {
        let mut entries: Vec<(Symbol, usize)> = Vec::new();
        for (position, symbol) in alphabet.chars().enumerate() {
            if entries.iter().any(|&(s, _)| s == symbol) {
                return Err(Error::DuplicateSymbol { symbol, position });
            }
            let count = frequency(text, symbol);
            if count == 0 {
                return Err(Error::ZeroFrequency { symbol });
            }
            entries.push((symbol, count));
        }
        Ok(Self { entries })
    }

    /// Deduplicate `text` and tabulate it against its own alphabet.
    ///
    /// # Errors
    /// Returns `Error::InputTooLong` if `text` exceeds `config.max_input_len`.
    pub fn from_text(text: &str, config: &Config) -> Result<Self> {
        let alphabet = nub_with(text, config)?;
        debug!(
            "alphabet of {} symbols from {} characters",
            alphabet.chars().count(),
            text.chars().count()
        );
        Self::tabulate(text, &alphabet)
    }

    /// Count for `symbol`, if present.
    pub fn get(&self, symbol: Symbol) -> Option<usize> {
        self.entries
            .iter()
            .find(|&&(s, _)| s == symbol)
            .map(|&(_, count)| count)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table has no symbols.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// `(symbol, count)` pairs in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, usize)> + '_ {
        self.entries.iter().copied()
    }

    /// Sum of all counts.
    pub fn total(&self) -> usize {
        self.entries.iter().map(|&(_, count)| count).sum()
    }
}
