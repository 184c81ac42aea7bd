//! Extractor configuration
//!
//! Every lexicon and threshold the extraction stages consult lives in
//! [`ExtractorConfig`]. The defaults are tuned for headline-style English
//! news text; a JSON document can override any subset of fields.
//!
//! # JSON shape
//!
//! ```json
//! {
//!   "max_phrase_words": 6,
//!   "garbage_threshold": 0.8333,
//!   "joiners": ["of"],
//!   "problem_words": { "U.s": "United States" }
//! }
//! ```
//!
//! Omitted fields keep their defaults.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Longest phrase (in words) still considered a plausible named entity.
pub const DEFAULT_MAX_PHRASE_WORDS: usize = 6;

/// Fraction of capitalized words at or above which a text is rejected.
pub const DEFAULT_GARBAGE_THRESHOLD: f64 = 5.0 / 6.0;

const SEPARATORS: &[char] = &['\r', '\n', '-'];

const INTERRUPTORS: &[char] = &['\u{201C}', '\u{201D}', '"', '(', ')'];

const ELLIPSES: &[&str] = &["...", "..", "\u{2026}"];

const PUNCTUATION: &[char] = &[
    '.', ',', '?', '!', ':', '\u{2014}', '\u{2013}', '|', '\u{2026}',
];

const SINGLE_QUOTES: &[char] = &['\u{2018}', '\u{2019}', '\''];

const DISTINGUISHERS: &[&str] = &["Junior", "Senior", "Jr.", "Sr.", "St."];

const JOINERS: &[&str] = &["of"];

const FALSE_POSITIVES: &[&str] = &[
    "~", "oh", "*content*", "Factbox", "Explainer", "you're", "Co", "Inc", "Are", "Ldt", "Mr",
    "Ms", "Mrs", "A", "An", "It", "Here", "How", "Many", "EXCLUSIVE", "v", "-", "Rep", "Sen",
    "P.M", "A.M", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday",
    "January", "February", "March", "April", "May", "June", "July", "August", "September",
    "October", "November", "December",
];

const PROBLEM_WORDS: &[(&str, &str)] = &[
    ("U.s", "United States"),
    ("U.n", "United Nations"),
    ("D.c", "Washington, D.C."),
];

const PROBLEM_PHRASES: &[(&str, &str)] = &[
    ("House of", "House of Representatives"),
    ("United", "United States"),
];

// Lowercase, without trailing periods
const TITLES: &[&str] = &[
    "rep",
    "sen",
    "representative",
    "senator",
    "president",
    "chair",
    "chairman",
    "head",
    "mr",
    "mrs",
    "ms",
    "dr",
    "prof",
    "prime",
    "minister",
    "governor",
    "gov",
    "secretary",
    "chancellor",
    "mayor",
    "speaker",
    "vice",
];

/// Configuration for proper-noun extraction and reconciliation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Chunks longer than this are discarded
    pub max_phrase_words: usize,
    /// Capitalized-word fraction at which the garbage guard rejects a text
    pub garbage_threshold: f64,
    /// Characters replaced by a space before splitting into words
    pub separators: Vec<char>,
    /// Quotes and parentheses stripped from either edge of a word
    pub interruptors: Vec<char>,
    /// Multi-character ellipses, checked longest first
    pub ellipses: Vec<String>,
    /// Sentence punctuation stripped from the end of a word
    pub punctuation: Vec<char>,
    /// Single quotes, stripped separately because of possessives
    pub single_quotes: Vec<char>,
    /// Name suffixes that bypass edge stripping
    pub distinguishers: FxHashSet<String>,
    /// Words that may glue two proper-noun runs together
    pub joiners: FxHashSet<String>,
    /// Words a tagger commonly mislabels as proper nouns; they never start a chunk
    pub false_positives: FxHashSet<String>,
    /// Per-word substitutions for systematically mis-formatted tokens
    pub problem_words: FxHashMap<String, String>,
    /// Whole-phrase corrections applied in the final pass
    pub problem_phrases: FxHashMap<String, String>,
    /// Honorifics and job titles, lowercase without trailing periods
    pub titles: FxHashSet<String>,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_phrase_words: DEFAULT_MAX_PHRASE_WORDS,
            garbage_threshold: DEFAULT_GARBAGE_THRESHOLD,
            separators: SEPARATORS.to_vec(),
            interruptors: INTERRUPTORS.to_vec(),
            ellipses: to_strings(ELLIPSES),
            punctuation: PUNCTUATION.to_vec(),
            single_quotes: SINGLE_QUOTES.to_vec(),
            distinguishers: to_set(DISTINGUISHERS),
            joiners: to_set(JOINERS),
            false_positives: to_set(FALSE_POSITIVES),
            problem_words: to_map(PROBLEM_WORDS),
            problem_phrases: to_map(PROBLEM_PHRASES),
            titles: to_set(TITLES),
        }
    }
}

impl ExtractorConfig {
    /// Create a config with the default lexicons
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON document and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Set the maximum number of words in a phrase
    pub fn with_max_phrase_words(mut self, max_phrase_words: usize) -> Self {
        self.max_phrase_words = max_phrase_words;
        self
    }

    /// Set the garbage-guard threshold
    pub fn with_garbage_threshold(mut self, threshold: f64) -> Self {
        self.garbage_threshold = threshold;
        self
    }

    /// Add joiner words
    pub fn with_joiners(mut self, joiners: &[&str]) -> Self {
        self.joiners.extend(joiners.iter().map(|j| j.to_string()));
        self
    }

    /// Add words that must never start a chunk
    pub fn with_false_positives(mut self, words: &[&str]) -> Self {
        self.false_positives
            .extend(words.iter().map(|w| w.to_string()));
        self
    }

    /// Check the config for values that would make extraction meaningless
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.garbage_threshold > 0.0 && self.garbage_threshold <= 1.0) {
            return Err(ConfigError::InvalidThreshold {
                threshold: self.garbage_threshold,
            });
        }
        if self.max_phrase_words == 0 {
            return Err(ConfigError::InvalidMaxPhraseWords);
        }

        let string_lexicons: [(&'static str, Vec<&String>); 6] = [
            ("ellipses", self.ellipses.iter().collect()),
            ("distinguishers", self.distinguishers.iter().collect()),
            ("joiners", self.joiners.iter().collect()),
            ("false_positives", self.false_positives.iter().collect()),
            ("problem_words", self.problem_words.keys().collect()),
            ("problem_phrases", self.problem_phrases.keys().collect()),
        ];
        for (field, entries) in string_lexicons {
            if entries.iter().any(|e| e.is_empty()) {
                return Err(ConfigError::EmptyEntry { field });
            }
        }
        if self.titles.iter().any(|t| t.is_empty()) {
            return Err(ConfigError::EmptyEntry { field: "titles" });
        }

        Ok(())
    }

    /// Check if `word` is a joiner
    pub fn is_joiner(&self, word: &str) -> bool {
        self.joiners.contains(word)
    }

    /// Check if `word` is an honorific or title, ignoring case and a
    /// trailing period ("Mr." and "mr" both match)
    pub fn is_title(&self, word: &str) -> bool {
        let trimmed = word.trim_end_matches('.');
        !trimmed.is_empty() && self.titles.contains(&trimmed.to_lowercase())
    }

    /// Check if a word consists only of punctuation
    pub fn is_punctuation(&self, word: &str) -> bool {
        !word.is_empty()
            && word
                .chars()
                .all(|c| c.is_ascii_punctuation() || self.punctuation.contains(&c))
    }
}

fn to_strings(words: &[&str]) -> Vec<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn to_set(words: &[&str]) -> FxHashSet<String> {
    words.iter().map(|w| w.to_string()).collect()
}

fn to_map(pairs: &[(&str, &str)]) -> FxHashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
