//! Core error types

use thiserror::Error;

/// Errors raised by the syllabification and cue pipeline
#[derive(Debug, Error)]
pub enum CoreError {
    /// A token is neither a declared consonant, a declared vowel, nor the
    /// boundary marker. Fatal for the word it occurs in.
    #[error("invalid phoneme '{symbol}' at position {position}")]
    InvalidPhoneme {
        /// The offending token as it appeared in the input
        symbol: String,
        /// Zero-based index of the token in the canonical token list
        position: usize,
    },

    /// The phonemizer has no transcription for an orthographic word
    #[error("no transcription for word '{0}'")]
    UnknownWord(String),

    /// A word index outside the word sequence was requested
    #[error("word index {index} out of range for sequence of {len} words")]
    ContextOutOfRange {
        /// Requested index
        index: usize,
        /// Length of the word sequence
        len: usize,
    },

    /// Language profile loading or validation error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Unsupported language requested
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// I/O error while reading a profile or lexicon
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Whether this error concerns a single word only, so a batch may skip
    /// the word and carry on.
    pub fn is_word_level(&self) -> bool {
        matches!(
            self,
            CoreError::InvalidPhoneme { .. } | CoreError::UnknownWord(_)
        )
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
