//! Tokenization and edge stripping
//!
//! Splits raw text into words and peels quotes, parentheses, ellipses,
//! sentence punctuation and possessives off their edges. Every edge that
//! loses a character gets a [`Token::Boundary`] next to it, so that
//! `Trump's Ford` becomes `Trump {} Ford` and never the phrase "Trump Ford".

use crate::config::ExtractorConfig;
use crate::types::Token;

/// Word tokenizer with punctuation-aware edge stripping
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'c> {
    config: &'c ExtractorConfig,
}

/// Which edges of a word were stripped
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Edges {
    start: bool,
    end: bool,
}

impl<'c> Tokenizer<'c> {
    pub fn new(config: &'c ExtractorConfig) -> Self {
        Self { config }
    }

    /// Tokenize `text` into words interleaved with boundary sentinels.
    ///
    /// Empty words are never emitted.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        let normalized: String = text
            .chars()
            .map(|c| {
                if self.config.separators.contains(&c) {
                    ' '
                } else {
                    c
                }
            })
            .collect();

        let mut tokens = Vec::new();
        for word in normalized.split(' ') {
            self.push_word(word, &mut tokens);
        }

        debug_event!(tokens = tokens.len(), "tokenized text");
        tokens
    }

    /// Strip one word and append it (with any boundaries) to `out`
    fn push_word(&self, word: &str, out: &mut Vec<Token>) {
        if word.is_empty() {
            return;
        }

        // Initials ("A.") and name suffixes ("Jr.") keep their punctuation
        if word.chars().count() < 2 || self.config.distinguishers.contains(word) {
            out.push(Token::word(word));
            return;
        }

        let mut parsed = word.to_string();
        let mut edges = Edges::default();

        self.strip_interruptors(&mut parsed, &mut edges);
        self.strip_ellipses(&mut parsed, &mut edges);
        self.strip_punctuation(&mut parsed, word.chars().count(), &mut edges);
        self.strip_single_quotes(&mut parsed, &mut edges);

        if edges.start {
            out.push(Token::Boundary);
        }
        if !parsed.is_empty() {
            out.push(Token::Word(parsed));
        }
        if edges.end {
            out.push(Token::Boundary);
        }
    }

    /// Quotes and parentheses. The end check also looks one character in,
    /// since the interruptor is often glued to trailing punctuation (`Biden":`).
    fn strip_interruptors(&self, word: &mut String, edges: &mut Edges) {
        for &interruptor in &self.config.interruptors {
            if first_char(word) == Some(interruptor) {
                drop_first(word);
                edges.start = true;
            }
            if char_from_end(word, 1) == Some(interruptor) {
                drop_last(word, 2);
                edges.end = true;
            } else if char_from_end(word, 0) == Some(interruptor) {
                drop_last(word, 1);
                edges.end = true;
            }
        }
    }

    fn strip_ellipses(&self, word: &mut String, edges: &mut Edges) {
        for ellipsis in &self.config.ellipses {
            if word.len() > ellipsis.len() && word.ends_with(ellipsis.as_str()) {
                word.truncate(word.len() - ellipsis.len());
                edges.end = true;
            }
        }
    }

    /// Sentence punctuation at the end of the word. A lone letter followed by
    /// a period is an initial, so the last character is only stripped from
    /// words longer than two characters.
    fn strip_punctuation(&self, word: &mut String, original_len: usize, edges: &mut Edges) {
        for &mark in &self.config.punctuation {
            if char_from_end(word, 0) == Some(mark) && original_len > 2 {
                drop_last(word, 1);
                edges.end = true;
            } else if char_from_end(word, 1) == Some(mark) {
                // `Dreamers,'` -> `Dreamers`
                drop_last(word, 2);
                edges.end = true;
            }
        }
    }

    /// Single quotes open quoted text at the start of a word; at the end they
    /// are either a possessive (`'s`) or a closing quote. Both end a chunk.
    fn strip_single_quotes(&self, word: &mut String, edges: &mut Edges) {
        for &quote in &self.config.single_quotes {
            if first_char(word) == Some(quote) {
                drop_first(word);
                edges.start = true;
            }
            if char_from_end(word, 0) == Some('s') && char_from_end(word, 1) == Some(quote) {
                drop_last(word, 2);
                edges.end = true;
            } else if char_from_end(word, 0) == Some(quote) {
                drop_last(word, 1);
                edges.end = true;
            }
        }
    }
}

fn first_char(word: &str) -> Option<char> {
    word.chars().next()
}

/// The character `n` positions from the end (0 = last)
fn char_from_end(word: &str, n: usize) -> Option<char> {
    word.chars().rev().nth(n)
}

fn drop_first(word: &mut String) {
    if let Some(c) = word.chars().next() {
        word.drain(..c.len_utf8());
    }
}

fn drop_last(word: &mut String, n: usize) {
    for _ in 0..n {
        word.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(text: &str) -> Vec<String> {
        let config = ExtractorConfig::default();
        Tokenizer::new(&config)
            .tokenize(text)
            .iter()
            .map(|t| t.as_str().to_string())
            .collect()
    }

    #[test]
    fn test_plain_words() {
        assert_eq!(tokenize("Donald Trump met"), vec!["Donald", "Trump", "met"]);
    }

    #[test]
    fn test_separators_split_words() {
        assert_eq!(
            tokenize("Anglo-French\r\ntalks"),
            vec!["Anglo", "French", "talks"]
        );
    }

    #[test]
    fn test_empty_strings_removed() {
        assert_eq!(tokenize("  Theresa   May  "), vec!["Theresa", "May"]);
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn test_possessive_adds_boundary() {
        assert_eq!(tokenize("Trump's Ford"), vec!["Trump", "{}", "Ford"]);
    }

    #[test]
    fn test_sentence_end() {
        assert_eq!(tokenize("McDonalds."), vec!["McDonalds", "{}"]);
    }

    #[test]
    fn test_comma_before_quote() {
        assert_eq!(tokenize("Dreamers,'"), vec!["Dreamers", "{}"]);
        assert_eq!(tokenize("Dreamers,\""), vec!["Dreamers", "{}"]);
    }

    #[test]
    fn test_quote_glued_to_punctuation() {
        assert_eq!(
            tokenize("\"like Biden\":"),
            vec!["{}", "like", "Biden", "{}"]
        );
    }

    #[test]
    fn test_parentheses() {
        assert_eq!(
            tokenize("(Reuters) said"),
            vec!["{}", "Reuters", "{}", "said"]
        );
    }

    #[test]
    fn test_curly_quotes() {
        assert_eq!(
            tokenize("\u{201C}Brexit\u{201D} vote"),
            vec!["{}", "Brexit", "{}", "vote"]
        );
        assert_eq!(tokenize("\u{2018}Europe\u{2019}"), vec!["{}", "Europe", "{}"]);
    }

    #[test]
    fn test_ellipsis_stripped() {
        assert_eq!(tokenize("Washington... later"), vec!["Washington", "{}", "later"]);
        assert_eq!(tokenize("Paris\u{2026}"), vec!["Paris", "{}"]);
    }

    #[test]
    fn test_initial_keeps_period() {
        assert_eq!(tokenize("George W. Bush"), vec!["George", "W.", "Bush"]);
    }

    #[test]
    fn test_distinguishers_verbatim() {
        assert_eq!(
            tokenize("Donald Trump Jr. spoke"),
            vec!["Donald", "Trump", "Jr.", "spoke"]
        );
        assert_eq!(tokenize("St. Louis"), vec!["St.", "Louis"]);
    }

    #[test]
    fn test_acronym_period_stripped() {
        assert_eq!(tokenize("the U.S. said"), vec!["the", "U.S", "{}", "said"]);
    }

    #[test]
    fn test_short_words_never_panic() {
        for word in [
            "a", "'", "\"", "(", ".", "..", "''", "'s", "\"(", ").", "\u{2026}", "\u{2019}s", "a'",
            ".\"", "\u{201C}\u{201D}",
        ] {
            let _ = tokenize(word);
        }
    }

    #[test]
    fn test_pure_punctuation_words_vanish() {
        let tokens = tokenize("\"\" ...");
        assert!(tokens.iter().all(|t| !t.is_empty()));
    }
}
