//! Part-of-speech tagging
//!
//! Extraction only needs to know whether each token is a proper noun, so the
//! tagger sits behind the small [`PosTagger`] trait. Plug in a statistical
//! model through it (any `Fn(&[&str]) -> Vec<PosTag>` works, and
//! [`PosTag::from_penn`] maps Treebank labels), or use the deterministic
//! [`LexiconTagger`] that ships with the crate.

use std::borrow::Cow;

use rustc_hash::FxHashSet;

use crate::config::ExtractorConfig;
use crate::errors::{ExtractError, Result};
use crate::nlp::stopwords::StopwordFilter;
use crate::types::{PosTag, TaggedToken, Token, BOUNDARY_MARKER};

/// Assigns one label per word.
///
/// Implementations must return exactly `words.len()` labels, in order, and
/// must be safe to share between threads: one tagger serves every
/// concurrent extraction.
pub trait PosTagger: Send + Sync {
    fn tag_sequence(&self, words: &[&str]) -> Vec<PosTag>;
}

impl<F> PosTagger for F
where
    F: Fn(&[&str]) -> Vec<PosTag> + Send + Sync,
{
    fn tag_sequence(&self, words: &[&str]) -> Vec<PosTag> {
        self(words)
    }
}

/// Run `tagger` over a token sequence and pair every token with its label.
///
/// Boundary sentinels are handed to the tagger as [`BOUNDARY_MARKER`].
pub fn tag_tokens<T: PosTagger + ?Sized>(
    tagger: &T,
    tokens: Vec<Token>,
) -> Result<Vec<TaggedToken>> {
    let words: Vec<&str> = tokens.iter().map(Token::as_str).collect();
    let tags = tagger.tag_sequence(&words);

    if tags.len() != tokens.len() {
        return Err(ExtractError::TaggerLengthMismatch {
            expected: tokens.len(),
            actual: tags.len(),
        });
    }

    Ok(tokens
        .into_iter()
        .zip(tags)
        .map(|(token, tag)| TaggedToken::new(token, tag))
        .collect())
}

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "each", "every", "some", "any", "no",
    "all", "both",
];

const PREPOSITIONS: &[&str] = &[
    "of", "in", "on", "at", "to", "for", "from", "with", "by", "about", "over", "under", "into",
    "after", "before", "between", "against", "during", "without", "through",
];

const PRONOUNS: &[&str] = &[
    "i", "me", "my", "he", "him", "his", "she", "her", "hers", "it", "its", "we", "us", "our",
    "they", "them", "their", "you", "your", "who", "whom", "whose",
];

const CONJUNCTIONS: &[&str] = &["and", "or", "but", "nor", "so", "yet"];

// Plural groups that open news sentences far more often than names do
const SENTENCE_OPENING_NOUNS: &[&str] = &[
    "officials", "police", "democrats", "republicans", "lawmakers", "protesters", "authorities",
    "investigators", "prosecutors", "residents", "critics", "analysts", "experts", "voters",
    "workers", "researchers", "scientists", "doctors", "sources", "shares", "stocks", "markets",
    "prices", "troops", "officers", "firefighters", "witnesses", "students", "leaders",
    "companies", "negotiators", "rescuers", "senators", "regulators", "investors", "fans",
];

/// Capitalization-driven tagger for headline-style English.
///
/// - Boundary markers and pure punctuation are `Punctuation`; numerals are `Number`.
/// - Honorifics and job titles are common nouns, so "President Donald Trump"
///   chunks as "Donald Trump".
/// - A capitalized word is a proper noun, unless it opens a sentence (first
///   token, or right after a boundary) and is a stopword ("The", "He"), a
///   common group noun ("Officials", "Police"), or a word the same text also
///   uses in lowercase ("Talks ... the talks").
/// - Lowercase words fall into small closed-class lexicons, or `Noun`.
#[derive(Debug, Clone)]
pub struct LexiconTagger {
    stopwords: Cow<'static, StopwordFilter>,
    titles: FxHashSet<String>,
    opening_nouns: FxHashSet<String>,
}

impl Default for LexiconTagger {
    fn default() -> Self {
        Self::new()
    }
}

impl LexiconTagger {
    /// Create a tagger with the default title list and the shared English stopwords
    pub fn new() -> Self {
        Self::from_config(&ExtractorConfig::default())
    }

    /// Create a tagger that uses the titles of `config`
    pub fn from_config(config: &ExtractorConfig) -> Self {
        Self {
            stopwords: Cow::Borrowed(StopwordFilter::shared()),
            titles: config.titles.clone(),
            opening_nouns: SENTENCE_OPENING_NOUNS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Add common nouns that must not be read as names when they open a
    /// sentence
    pub fn with_opening_nouns(mut self, words: &[&str]) -> Self {
        self.opening_nouns.extend(words.iter().map(|w| w.to_lowercase()));
        self
    }

    /// Replace the stopword list
    pub fn with_stopwords(mut self, stopwords: StopwordFilter) -> Self {
        self.stopwords = Cow::Owned(stopwords);
        self
    }

    /// Tag one word. `lowercase_uses` holds every word of the surrounding
    /// text that starts with a lowercase letter.
    fn tag_word(
        &self,
        word: &str,
        sentence_initial: bool,
        lowercase_uses: &FxHashSet<&str>,
    ) -> PosTag {
        let Some(first) = word.chars().next() else {
            return PosTag::Other;
        };

        if word == BOUNDARY_MARKER || !word.chars().any(char::is_alphanumeric) {
            return PosTag::Punctuation;
        }
        if first.is_ascii_digit() {
            return PosTag::Number;
        }

        let lower = word.to_lowercase();
        let bare = lower.trim_end_matches('.');
        if self.titles.contains(bare) {
            return PosTag::Noun;
        }

        if first.is_uppercase() {
            if word == "I" {
                return PosTag::Pronoun;
            }
            if sentence_initial {
                if self.stopwords.is_stopword(&lower) {
                    return self.closed_class(&lower);
                }
                if self.opening_nouns.contains(&lower) || lowercase_uses.contains(lower.as_str())
                {
                    return PosTag::Noun;
                }
            }
            return PosTag::ProperNoun;
        }

        self.closed_class(&lower)
    }

    fn closed_class(&self, lower: &str) -> PosTag {
        if DETERMINERS.contains(&lower) {
            PosTag::Determiner
        } else if PREPOSITIONS.contains(&lower) {
            PosTag::Preposition
        } else if PRONOUNS.contains(&lower) {
            PosTag::Pronoun
        } else if CONJUNCTIONS.contains(&lower) {
            PosTag::Conjunction
        } else if self.stopwords.is_stopword(lower) {
            PosTag::Other
        } else {
            PosTag::Noun
        }
    }
}

impl PosTagger for LexiconTagger {
    fn tag_sequence(&self, words: &[&str]) -> Vec<PosTag> {
        let lowercase_uses: FxHashSet<&str> = words
            .iter()
            .copied()
            .filter(|w| w.chars().next().is_some_and(char::is_lowercase))
            .collect();

        words
            .iter()
            .enumerate()
            .map(|(i, word)| {
                let sentence_initial = i == 0 || words[i - 1] == BOUNDARY_MARKER;
                self.tag_word(word, sentence_initial, &lowercase_uses)
            })
            .collect()
    }
}
