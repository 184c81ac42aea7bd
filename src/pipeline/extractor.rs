//! Extraction pipeline: runs the stages in order for one text.
//!
//! ```text
//! raw text -> tokenize -> garbage guard -> tag -> chunk + dedup -> final pass
//! ```
//!
//! [`ProperNounExtractor`] is generic over its tagger, so the compiler
//! monomorphizes each tagger choice. Every call builds its own token
//! buffer, chunk accumulator and result set; nothing is shared between
//! calls except the read-only config and tagger, which makes the extractor
//! safe to use from many threads at once.

use rayon::prelude::*;

use crate::config::ExtractorConfig;
use crate::errors::Result;
use crate::nlp::guard;
use crate::nlp::tagger::{tag_tokens, LexiconTagger, PosTagger};
use crate::nlp::tokenizer::Tokenizer;
use crate::phrase::chunker::ProperNounChunker;
use crate::phrase::normalize::final_pass;
use crate::phrase::reconcile::Reconciler;

pub const STAGE_TOKENIZE: &str = "tokenize";
pub const STAGE_GUARD: &str = "garbage_guard";
pub const STAGE_TAG: &str = "tag";
pub const STAGE_CHUNK: &str = "chunk";
pub const STAGE_FINAL_PASS: &str = "final_pass";

/// Enter a tracing span for an extraction stage (when the `tracing` feature
/// is enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::trace_span!("extraction_stage", stage = $name).entered();
    };
}

/// Proper-noun extractor
#[derive(Debug, Clone)]
pub struct ProperNounExtractor<T = LexiconTagger> {
    config: ExtractorConfig,
    tagger: T,
}

impl Default for ProperNounExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ProperNounExtractor {
    /// Create an extractor with default config and the built-in tagger
    pub fn new() -> Self {
        Self::with_config(ExtractorConfig::default())
    }

    /// Create an extractor with custom config and the built-in tagger
    pub fn with_config(config: ExtractorConfig) -> Self {
        let tagger = LexiconTagger::from_config(&config);
        Self { config, tagger }
    }
}

impl<T: PosTagger> ProperNounExtractor<T> {
    /// Create an extractor around an external tagger
    pub fn with_tagger(config: ExtractorConfig, tagger: T) -> Self {
        Self { config, tagger }
    }

    /// Swap the tagger, keeping the config
    pub fn tagger<U: PosTagger>(self, tagger: U) -> ProperNounExtractor<U> {
        ProperNounExtractor {
            config: self.config,
            tagger,
        }
    }

    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Extract proper-noun phrases from one text.
    ///
    /// Returns phrases in order of first appearance, with no phrase a
    /// case-insensitive substring of another. Mostly-capitalized text
    /// yields an empty list without being tagged.
    pub fn extract(&self, text: &str) -> Result<Vec<String>> {
        trace_stage!(STAGE_TOKENIZE);
        let tokens = Tokenizer::new(&self.config).tokenize(text);

        trace_stage!(STAGE_GUARD);
        if guard::is_garbage(&tokens, self.config.garbage_threshold) {
            debug_event!(tokens = tokens.len(), "garbage guard rejected text");
            return Ok(Vec::new());
        }

        trace_stage!(STAGE_TAG);
        let tagged = tag_tokens(&self.tagger, tokens)?;

        trace_stage!(STAGE_CHUNK);
        let found = ProperNounChunker::new(&self.config).extract_chunks(&tagged);

        trace_stage!(STAGE_FINAL_PASS);
        let phrases = final_pass(found, &self.config).into_vec();

        debug_event!(phrases = phrases.len(), "extracted proper nouns");
        Ok(phrases)
    }

    /// Extract from many texts in parallel. Results keep the input order.
    pub fn extract_batch<S>(&self, texts: &[S]) -> Vec<Result<Vec<String>>>
    where
        S: AsRef<str> + Sync,
    {
        texts
            .par_iter()
            .map(|text| self.extract(text.as_ref()))
            .collect()
    }

    /// Pick the better of two names for the same entity
    pub fn better_proper_noun<'a>(&self, first: &'a str, second: &'a str) -> &'a str {
        Reconciler::new(&self.config).better(first, second)
    }

    /// Merge phrase lists extracted from two fields of the same record
    pub fn reconcile(&self, first: &[String], second: &[String]) -> Vec<String> {
        Reconciler::new(&self.config).merge(first, second)
    }
}
