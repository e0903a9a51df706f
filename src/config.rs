//! Size limits applied during construction and traversal.

/// Upper bound on string lengths, counting the terminator slot.
pub const MAX_STRING_LENGTH: usize = 1024;

/// Longest input accepted by default, in characters.
pub const DEFAULT_MAX_INPUT_LEN: usize = MAX_STRING_LENGTH - 1;

/// Longest code path accepted by default.
///
/// A tree over `n` symbols has paths of at most `n - 1` edges, so this is
/// never hit for inputs within [`DEFAULT_MAX_INPUT_LEN`].
pub const DEFAULT_MAX_CODE_LEN: usize = MAX_STRING_LENGTH - 1;

/// Limits for building and walking Huffman trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    /// Maximum input length in characters.
    pub max_input_len: usize,
    /// Maximum root-to-leaf path length.
    pub max_code_len: usize,
}

impl Config {
    /// Create a config with the default limits.
    pub fn new() -> Self {
        Self {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            max_code_len: DEFAULT_MAX_CODE_LEN,
        }
    }

    /// Set the maximum input length.
    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    /// Set the maximum code length.
    pub fn with_max_code_len(mut self, max_code_len: usize) -> Self {
        self.max_code_len = max_code_len;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_limits() {
        let config = Config::default();
        assert_eq!(config.max_input_len, 1023);
        assert_eq!(config.max_code_len, 1023);
    }

    #[test]
    fn test_builder_setters() {
        let config = Config::new().with_max_input_len(8).with_max_code_len(3);
        assert_eq!(config, Config { max_input_len: 8, max_code_len: 3 });
    }
}
