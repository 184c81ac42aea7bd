//! Garbage guard
//!
//! Bylines, captions and all-caps banners ("BREAKING NEWS ALERT") are
//! mostly capitalized words, and a tagger calls nearly all of them proper
//! nouns. Such texts are rejected before tagging.

use crate::types::Token;

/// Share of real words whose first character is an uppercase ASCII letter.
///
/// Boundary sentinels are not words. Returns `None` when there are no words.
pub fn capitalized_fraction(tokens: &[Token]) -> Option<f64> {
    let mut words = 0usize;
    let mut capitalized = 0usize;

    for token in tokens {
        if let Token::Word(word) = token {
            words += 1;
            if word.chars().next().is_some_and(|c| c.is_ascii_uppercase()) {
                capitalized += 1;
            }
        }
    }

    (words > 0).then(|| capitalized as f64 / words as f64)
}

/// Check if a token sequence is too capitalized to be worth tagging
pub fn is_garbage(tokens: &[Token], threshold: f64) -> bool {
    capitalized_fraction(tokens).is_some_and(|fraction| fraction >= threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_GARBAGE_THRESHOLD;

    fn words(text: &str) -> Vec<Token> {
        text.split(' ').map(Token::word).collect()
    }

    #[test]
    fn test_all_caps_banner_rejected() {
        let tokens = words("BREAKING NEWS ALERT SPECIAL REPORT TODAY");
        assert!(is_garbage(&tokens, DEFAULT_GARBAGE_THRESHOLD));
    }

    #[test]
    fn test_prose_accepted() {
        let tokens = words("He met with the Ministry of Defence yesterday");
        assert!(!is_garbage(&tokens, DEFAULT_GARBAGE_THRESHOLD));
    }

    #[test]
    fn test_threshold_is_inclusive() {
        // 5 of 6 capitalized
        let tokens = words("Joe Biden Meets Angela Merkel today");
        assert!(is_garbage(&tokens, DEFAULT_GARBAGE_THRESHOLD));

        // 4 of 6
        let tokens = words("Joe Biden meets Angela Merkel today");
        assert!(!is_garbage(&tokens, DEFAULT_GARBAGE_THRESHOLD));
    }

    #[test]
    fn test_boundaries_not_counted() {
        let mut tokens = words("Trump spoke");
        tokens.extend([Token::Boundary, Token::Boundary, Token::Boundary]);
        assert_eq!(capitalized_fraction(&tokens), Some(0.5));
    }

    #[test]
    fn test_no_words() {
        assert_eq!(capitalized_fraction(&[]), None);
        assert!(!is_garbage(&[Token::Boundary], DEFAULT_GARBAGE_THRESHOLD));
    }
}
