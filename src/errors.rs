//! Error types

use thiserror::Error;

/// Result alias for extraction operations.
pub type Result<T, E = ExtractError> = std::result::Result<T, E>;

/// Failures surfaced by an extraction call.
///
/// Extraction itself is a pure transformation; the only thing that can go
/// wrong at runtime is a tagger that breaks its contract.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// The tagger returned a different number of labels than it was given
    /// tokens.
    #[error("tagger returned {actual} labels for {expected} tokens")]
    TaggerLengthMismatch {
        /// Number of tokens handed to the tagger
        expected: usize,
        /// Number of labels it returned
        actual: usize,
    },
}

/// Failures while loading or validating an [`ExtractorConfig`](crate::config::ExtractorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid extractor config JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The garbage-guard threshold must lie in `(0, 1]`.
    #[error("garbage threshold must be in (0, 1], got {threshold}")]
    InvalidThreshold { threshold: f64 },

    #[error("max_phrase_words must be at least 1")]
    InvalidMaxPhraseWords,

    /// A lexicon contains an empty string, which would match everywhere.
    #[error("lexicon `{field}` contains an empty entry")]
    EmptyEntry { field: &'static str },
}
