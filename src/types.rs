//! Core types shared by every extraction stage
//!
//! A text is turned into a sequence of [`Token`]s, tagged into
//! [`TaggedToken`]s, and finally reduced to plain phrase strings.

/// Surface text of a boundary sentinel when a token sequence is rendered as
/// plain words (e.g. when handed to an external tagger).
pub const BOUNDARY_MARKER: &str = "{}";

/// A single unit produced by the tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// A word, possibly with punctuation stripped from its edges
    Word(String),
    /// Marks a word edge truncated by punctuation or quotation.
    /// Never part of a phrase; always ends phrase accumulation.
    Boundary,
}

impl Token {
    /// Create a word token
    pub fn word(text: impl Into<String>) -> Self {
        Token::Word(text.into())
    }

    /// The token's surface text ([`BOUNDARY_MARKER`] for sentinels)
    pub fn as_str(&self) -> &str {
        match self {
            Token::Word(text) => text,
            Token::Boundary => BOUNDARY_MARKER,
        }
    }
}

/// Part-of-speech labels.
///
/// Coarse enough to be produced by a simple lexicon tagger, fine enough to
/// carry the Penn Treebank distinctions the chunker cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PosTag {
    Noun,
    /// Singular proper noun (Treebank `NNP`)
    ProperNoun,
    /// Plural proper noun (Treebank `NNPS`)
    ProperNounPlural,
    Verb,
    Adjective,
    Adverb,
    Determiner,
    Preposition,
    Pronoun,
    Conjunction,
    Number,
    Punctuation,
    Other,
}

impl PosTag {
    /// Check if this tag can open or extend a proper-noun chunk
    pub fn is_proper_noun(&self) -> bool {
        *self == PosTag::ProperNoun
    }

    /// Map a Penn Treebank label (as produced by most statistical taggers)
    /// to a [`PosTag`].
    pub fn from_penn(label: &str) -> Self {
        match label {
            "NNP" => PosTag::ProperNoun,
            "NNPS" => PosTag::ProperNounPlural,
            "NN" | "NNS" => PosTag::Noun,
            "JJ" | "JJR" | "JJS" => PosTag::Adjective,
            "RB" | "RBR" | "RBS" | "WRB" => PosTag::Adverb,
            "DT" | "PDT" | "WDT" => PosTag::Determiner,
            "IN" | "TO" => PosTag::Preposition,
            "PRP" | "PRP$" | "WP" | "WP$" => PosTag::Pronoun,
            "CC" => PosTag::Conjunction,
            "CD" => PosTag::Number,
            "." | "," | ":" | "``" | "''" | "(" | ")" | "#" | "$" | "-LRB-" | "-RRB-" => {
                PosTag::Punctuation
            }
            l if l.starts_with("VB") || l == "MD" => PosTag::Verb,
            _ => PosTag::Other,
        }
    }
}

/// A token paired with the label the tagger assigned to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedToken {
    pub token: Token,
    pub tag: PosTag,
}

impl TaggedToken {
    pub fn new(token: Token, tag: PosTag) -> Self {
        Self { token, tag }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundary_renders_marker() {
        assert_eq!(Token::Boundary.as_str(), BOUNDARY_MARKER);
    }

    #[test]
    fn test_word_token() {
        let token = Token::word("Trump");
        assert_eq!(token.as_str(), "Trump");
    }

    #[test]
    fn test_penn_mapping() {
        assert_eq!(PosTag::from_penn("NNP"), PosTag::ProperNoun);
        assert_eq!(PosTag::from_penn("NNPS"), PosTag::ProperNounPlural);
        assert_eq!(PosTag::from_penn("NNS"), PosTag::Noun);
        assert_eq!(PosTag::from_penn("VBD"), PosTag::Verb);
        assert_eq!(PosTag::from_penn("MD"), PosTag::Verb);
        assert_eq!(PosTag::from_penn("IN"), PosTag::Preposition);
        assert_eq!(PosTag::from_penn(","), PosTag::Punctuation);
        assert_eq!(PosTag::from_penn("FW"), PosTag::Other);
    }

    #[test]
    fn test_only_singular_proper_nouns_chunk() {
        assert!(PosTag::ProperNoun.is_proper_noun());
        assert!(!PosTag::ProperNounPlural.is_proper_noun());
        assert!(!PosTag::Noun.is_proper_noun());
    }
}
