//! # rapid-propernoun
//!
//! Proper-noun phrase extraction for headline-style English news text.
//!
//! Turns a sentence or two into a deduplicated list of named-entity phrases
//! ("Donald Trump", "Ministry of Defence") using only a part-of-speech
//! tagger and a hand-built chunking layer, then reconciles the phrases found
//! in different fields of the same article.
//!
//! ## Quick Start
//!
//! ```rust
//! use rapid_propernoun::ProperNounExtractor;
//!
//! let extractor = ProperNounExtractor::new();
//! let phrases = extractor
//!     .extract("He met with the Ministry of Defence yesterday.")
//!     .unwrap();
//! assert_eq!(phrases, vec!["Ministry of Defence"]);
//!
//! assert_eq!(extractor.better_proper_noun("trump", "donald trump"), "donald trump");
//! ```
//!
//! ## Stages
//!
//! - [`nlp::tokenizer`]: word splitting and punctuation-aware edge stripping
//! - [`nlp::guard`]: rejects mostly-capitalized text (bylines, banners)
//! - [`nlp::tagger`]: the [`PosTagger`] seam and the built-in [`LexiconTagger`]
//! - [`phrase::chunker`]: proper-noun runs, glued by joiners ("of")
//! - [`phrase::dedup`]: abbreviation vs. full form within one text
//! - [`phrase::normalize`]: known mis-extractions and dangling joiners
//! - [`phrase::reconcile`]: one name per entity across two fields

/// Emit a `tracing` debug event when the `tracing` feature is enabled.
#[cfg(feature = "tracing")]
macro_rules! debug_event {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_event {
    ($($arg:tt)*) => {
        ()
    };
}

pub mod article;
pub mod config;
pub mod errors;
pub mod nlp;
pub mod phrase;
pub mod pipeline;
pub mod types;

use std::sync::{Arc, OnceLock};

pub use article::NewsArticle;
pub use config::ExtractorConfig;
pub use errors::{ConfigError, ExtractError, Result};
pub use nlp::tagger::{LexiconTagger, PosTagger};
pub use phrase::dedup::ProperNounSet;
pub use pipeline::extractor::ProperNounExtractor;
pub use types::{PosTag, TaggedToken, Token};

static DEFAULT_EXTRACTOR: OnceLock<Arc<ProperNounExtractor>> = OnceLock::new();

/// Process-wide extractor with the default config and built-in tagger
pub(crate) fn default_extractor() -> &'static Arc<ProperNounExtractor> {
    DEFAULT_EXTRACTOR.get_or_init(|| Arc::new(ProperNounExtractor::new()))
}

/// Extract proper-noun phrases with the default config and built-in tagger
pub fn extract_proper_nouns(text: &str) -> Result<Vec<String>> {
    default_extractor().extract(text)
}

/// Pick the better of two names for the same entity, using the default title list
pub fn select_better_proper_noun<'a>(first: &'a str, second: &'a str) -> &'a str {
    default_extractor().better_proper_noun(first, second)
}

/// Merge phrase lists from two fields of one record, using the default config
pub fn reconcile_proper_nouns(first: &[String], second: &[String]) -> Vec<String> {
    default_extractor().reconcile(first, second)
}
