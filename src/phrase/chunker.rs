//! Proper-noun chunk detection
//!
//! Merges runs of consecutive proper-noun tokens into candidate phrases.
//! Pattern: NNP+ (JOINER NNP+)*
//!
//! A joiner ("of") inside a run is kept tentatively: it glues
//! "Ministry of Defence" together, but is dropped again when the run ends
//! right after it ("Theresa May of his party" -> "Theresa May").

use crate::config::ExtractorConfig;
use crate::phrase::dedup::ProperNounSet;
use crate::types::{TaggedToken, Token};

/// Chunker state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChunkState {
    Outside,
    InChunk,
}

/// Proper-noun chunk detector
#[derive(Debug, Clone, Copy)]
pub struct ProperNounChunker<'c> {
    config: &'c ExtractorConfig,
}

impl<'c> ProperNounChunker<'c> {
    pub fn new(config: &'c ExtractorConfig) -> Self {
        Self { config }
    }

    /// Extract proper-noun phrases from a tagged token sequence.
    ///
    /// Each closed chunk goes straight into the returned [`ProperNounSet`],
    /// so abbreviations are resolved as they are found.
    pub fn extract_chunks(&self, tokens: &[TaggedToken]) -> ProperNounSet {
        let mut found = ProperNounSet::new();
        let mut chunk: Vec<String> = Vec::new();
        let mut state = ChunkState::Outside;

        for tagged in tokens {
            let word = match &tagged.token {
                Token::Word(word) => Some(word.as_str()),
                Token::Boundary => None,
            };
            let is_proper = word.is_some() && tagged.tag.is_proper_noun();

            match (state, word) {
                (ChunkState::Outside, Some(word)) if is_proper => {
                    if self.config.false_positives.contains(word) {
                        continue;
                    }
                    if let Some(word) = self.normalize_word(word) {
                        chunk.push(word);
                        state = ChunkState::InChunk;
                    }
                }
                (ChunkState::Outside, _) => {}
                (ChunkState::InChunk, Some(word)) if is_proper => {
                    if let Some(word) = self.normalize_word(word) {
                        chunk.push(word);
                    }
                }
                (ChunkState::InChunk, Some(word)) if self.config.is_joiner(word) => {
                    chunk.push(word.to_string());
                }
                (ChunkState::InChunk, _) => {
                    self.close_chunk(&mut chunk, &mut found);
                    state = ChunkState::Outside;
                }
            }
        }

        if state == ChunkState::InChunk {
            self.close_chunk(&mut chunk, &mut found);
        }

        found
    }

    /// Rewrite a proper-noun word before it joins a chunk.
    ///
    /// Returns `None` for pure punctuation, which taggers occasionally label
    /// as a proper noun.
    fn normalize_word(&self, word: &str) -> Option<String> {
        if self.config.is_punctuation(word) {
            return None;
        }

        // EUROPE -> Europe, U.S -> U.s
        let word = if is_all_uppercase(word) && word.chars().count() > 2 {
            capitalize(word)
        } else {
            word.to_string()
        };

        match self.config.problem_words.get(&word) {
            Some(replacement) => Some(replacement.clone()),
            None => Some(word),
        }
    }

    /// Turn the accumulated words into a phrase and hand it to `found`
    fn close_chunk(&self, chunk: &mut Vec<String>, found: &mut ProperNounSet) {
        let mut words = std::mem::take(chunk);

        while words.last().is_some_and(|w| self.config.is_joiner(w)) {
            words.pop();
        }
        if words.is_empty() {
            return;
        }

        if words.len() > self.config.max_phrase_words {
            debug_event!(words = words.len(), "discarding overlong chunk");
            return;
        }

        let phrase = words.join(" ");
        debug_event!(phrase = %phrase, "closed chunk");
        found.insert(phrase);
    }
}

/// At least one uppercase letter and no lowercase ones
fn is_all_uppercase(word: &str) -> bool {
    word.chars().any(char::is_uppercase) && !word.chars().any(char::is_lowercase)
}

/// First character uppercase, the rest lowercase
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}
