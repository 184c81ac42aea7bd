//! Final-pass phrase corrections
//!
//! Fixes systematic mis-extractions once a text has been fully chunked: a
//! bare "House of" is almost always "House of Representatives", and a
//! phrase must never end in a joiner.

use crate::config::ExtractorConfig;
use crate::phrase::dedup::ProperNounSet;

/// Apply phrase corrections and strip dangling joiners.
///
/// Untouched phrases keep their order; corrected phrases move to the end in
/// the order they were found. Corrections go back through the
/// deduplicator, so the result still has no phrase contained in another.
pub fn final_pass(phrases: ProperNounSet, config: &ExtractorConfig) -> ProperNounSet {
    let mut kept = Vec::new();
    let mut corrected = Vec::new();

    for phrase in phrases.into_vec() {
        if let Some(replacement) = config.problem_phrases.get(&phrase) {
            debug_event!(from = %phrase, to = %replacement, "corrected phrase");
            corrected.push(replacement.clone());
        } else if let Some(stripped) = strip_trailing_joiner(&phrase, config) {
            corrected.push(stripped);
        } else {
            kept.push(phrase);
        }
    }

    let mut result = ProperNounSet::from_phrases(kept);
    for phrase in corrected {
        result.insert(phrase);
    }
    result
}

/// `Some(phrase without its last word)` if the last word is a joiner
fn strip_trailing_joiner(phrase: &str, config: &ExtractorConfig) -> Option<String> {
    let (head, last) = match phrase.rsplit_once(' ') {
        Some((head, last)) => (head, last),
        None => ("", phrase),
    };
    config.is_joiner(last).then(|| head.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(phrases: &[&str]) -> Vec<String> {
        let config = ExtractorConfig::default();
        final_pass(ProperNounSet::from_phrases(phrases.iter().copied()), &config).into_vec()
    }

    #[test]
    fn test_problem_phrase_replaced() {
        assert_eq!(
            run(&["House of", "Nancy Pelosi"]),
            vec!["Nancy Pelosi", "House of Representatives"]
        );
        assert_eq!(run(&["United"]), vec!["United States"]);
    }

    #[test]
    fn test_trailing_joiner_stripped() {
        assert_eq!(
            run(&["Bank of", "Mark Carney"]),
            vec!["Mark Carney", "Bank"]
        );
    }

    #[test]
    fn test_lone_joiner_removed() {
        assert_eq!(run(&["of", "Paris"]), vec!["Paris"]);
    }

    #[test]
    fn test_untouched_order_preserved() {
        assert_eq!(
            run(&["Ministry of Defence", "Ben Wallace", "London"]),
            vec!["Ministry of Defence", "Ben Wallace", "London"]
        );
    }

    #[test]
    fn test_correction_respects_subsumption() {
        // "Trump of" -> "Trump", which "Donald Trump" already covers
        assert_eq!(run(&["Donald Trump", "Trump of"]), vec!["Donald Trump"]);
        // "United" -> "United States" absorbs an earlier "States"
        assert_eq!(run(&["States", "United"]), vec!["United States"]);
    }
}
