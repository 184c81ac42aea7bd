//! English stopword lexicon
//!
//! Backed by the `stop-words` crate. The built-in tagger consults it to tell
//! a capitalized sentence opener ("The", "He") from a name ("Trump").

use std::sync::OnceLock;

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

static ENGLISH: OnceLock<StopwordFilter> = OnceLock::new();

/// A case-insensitive stopword set
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::english()
    }
}

impl StopwordFilter {
    /// Load the English list
    pub fn english() -> Self {
        Self {
            stopwords: get(LANGUAGE::English)
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
        }
    }

    /// Process-wide English list, built on first use and read-only after
    pub fn shared() -> &'static StopwordFilter {
        ENGLISH.get_or_init(Self::english)
    }

    /// Create a stopword filter from a custom list
    pub fn from_list(words: &[&str]) -> Self {
        Self {
            stopwords: words.iter().map(|w| w.to_lowercase()).collect(),
        }
    }

    /// Check if a word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }
}
