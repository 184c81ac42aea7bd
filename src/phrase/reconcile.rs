//! Cross-field reconciliation
//!
//! A title and a description of the same article are extracted
//! independently and often name one entity differently ("Trump" in the
//! headline, "Donald Trump" in the body). Reconciliation merges the two
//! phrase lists, keeping one name per entity.
//!
//! Two phrases refer to the same entity when the words of one are all
//! found in the other (ignoring case, joiners, titles and name suffixes):
//! "Trump" and "Donald Trump" match, "New York" and "New Zealand" do not. The better name is picked by
//! [`Reconciler::better`]:
//!
//! 1. Same word count: the longer string wins ("vladimir putin" over
//!    "mr. putin").
//! 2. The shorter phrase's words all occur in the longer one: the longer
//!    phrase wins ("donald trump" over "trump"), unless everything it adds
//!    is a title ("trump" over "president trump").
//! 3. Otherwise the phrase with fewer words wins ("theresa may" over
//!    "prime minister may").

use rustc_hash::FxHashSet;

use crate::config::ExtractorConfig;

/// Merges phrase lists and breaks ties between overlapping names
#[derive(Debug, Clone, Copy)]
pub struct Reconciler<'c> {
    config: &'c ExtractorConfig,
}

impl<'c> Reconciler<'c> {
    pub fn new(config: &'c ExtractorConfig) -> Self {
        Self { config }
    }

    /// Pick the better of two names for the same entity.
    ///
    /// Ties go to `first`.
    pub fn better<'a>(&self, first: &'a str, second: &'a str) -> &'a str {
        let first_words = lowercase_words(first);
        let second_words = lowercase_words(second);

        if first_words.len() == second_words.len() {
            return if second.chars().count() > first.chars().count() {
                second
            } else {
                first
            };
        }

        let (short, short_words, long, long_words) = if first_words.len() < second_words.len() {
            (first, first_words, second, second_words)
        } else {
            (second, second_words, first, first_words)
        };

        let short_set: FxHashSet<&str> = short_words.iter().map(String::as_str).collect();
        let is_sub_phrase = short_words
            .iter()
            .all(|w| long_words.iter().any(|l| l == w));

        if !is_sub_phrase {
            return short;
        }

        let only_titles_added = long_words
            .iter()
            .filter(|w| !short_set.contains(w.as_str()))
            .all(|w| self.config.is_title(w));

        if only_titles_added {
            short
        } else {
            long
        }
    }

    /// Merge two phrase lists into one with a single name per entity.
    ///
    /// Phrases are visited in order, `first` then `second`. A phrase that
    /// names the same entity as already-kept phrases replaces all of them
    /// by the best name among them, at the position of the earliest one.
    pub fn merge(&self, first: &[String], second: &[String]) -> Vec<String> {
        let mut merged: Vec<String> = Vec::with_capacity(first.len() + second.len());

        for candidate in first.iter().chain(second) {
            let keys = self.entity_words(candidate);
            let overlapping: Vec<usize> = merged
                .iter()
                .enumerate()
                .filter(|(_, kept)| same_entity(&keys, &self.entity_words(kept)))
                .map(|(i, _)| i)
                .collect();

            let Some(&slot) = overlapping.first() else {
                merged.push(candidate.clone());
                continue;
            };

            let mut winner = candidate.as_str();
            for &i in &overlapping {
                winner = self.better(&merged[i], winner);
            }
            let winner = winner.to_string();
            debug_event!(candidate = %candidate, winner = %winner, "reconciled phrase");

            for &i in overlapping[1..].iter().rev() {
                merged.remove(i);
            }
            merged[slot] = winner;
        }

        merged
    }

    /// Lowercase words that identify an entity
    fn entity_words(&self, phrase: &str) -> FxHashSet<String> {
        lowercase_words(phrase)
            .into_iter()
            .filter(|w| {
                !self.config.is_joiner(w)
                    && !self.config.is_title(w)
                    && !self
                        .config
                        .distinguishers
                        .iter()
                        .any(|d| d.eq_ignore_ascii_case(w))
            })
            .collect()
    }
}

/// One word set contains the other. Phrases made only of titles or joiners
/// name nothing and never match.
fn same_entity(a: &FxHashSet<String>, b: &FxHashSet<String>) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    a.is_subset(b) || b.is_subset(a)
}

fn lowercase_words(phrase: &str) -> Vec<String> {
    phrase.split_whitespace().map(str::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn better<'a>(first: &'a str, second: &'a str) -> &'a str {
        let config = ExtractorConfig::default();
        Reconciler::new(&config).better(first, second)
    }

    fn merge(first: &[&str], second: &[&str]) -> Vec<String> {
        let config = ExtractorConfig::default();
        let to_vec = |s: &[&str]| s.iter().map(|p| p.to_string()).collect::<Vec<_>>();
        Reconciler::new(&config).merge(&to_vec(first), &to_vec(second))
    }

    #[test]
    fn test_full_name_beats_surname() {
        assert_eq!(better("trump", "donald trump"), "donald trump");
        assert_eq!(better("donald trump", "trump"), "donald trump");
    }

    #[test]
    fn test_full_name_with_suffix() {
        assert_eq!(better("Trump Jr.", "Donald Trump Jr."), "Donald Trump Jr.");
    }

    #[test]
    fn test_same_word_count_prefers_longer() {
        assert_eq!(better("mr. putin", "vladimir putin"), "vladimir putin");
        assert_eq!(better("vladimir putin", "mr. putin"), "vladimir putin");
    }

    #[test]
    fn test_fewer_words_when_not_a_sub_phrase() {
        assert_eq!(better("theresa may", "prime minister may"), "theresa may");
        assert_eq!(better("prime minister may", "theresa may"), "theresa may");
    }

    #[test]
    fn test_title_prefix_loses() {
        assert_eq!(better("President Trump", "Trump"), "Trump");
    }

    #[test]
    fn test_tie_goes_to_first() {
        assert_eq!(better("Paris", "paris"), "Paris");
    }

    #[test]
    fn test_merge_keeps_best_names() {
        assert_eq!(
            merge(&["Trump", "Brexit"], &["Donald Trump", "Theresa May"]),
            vec!["Donald Trump", "Brexit", "Theresa May"]
        );
    }

    #[test]
    fn test_merge_disjoint_lists() {
        assert_eq!(
            merge(&["Paris"], &["Berlin", "Rome"]),
            vec!["Paris", "Berlin", "Rome"]
        );
    }

    #[test]
    fn test_merge_exact_duplicates() {
        assert_eq!(
            merge(&["Angela Merkel"], &["angela merkel"]),
            vec!["Angela Merkel"]
        );
    }

    #[test]
    fn test_joiners_do_not_link_entities() {
        assert_eq!(
            merge(&["Ministry of Defence"], &["Bank of England"]),
            vec!["Ministry of Defence", "Bank of England"]
        );
    }

    #[test]
    fn test_one_candidate_absorbs_several() {
        assert_eq!(
            merge(&["Theresa", "Brexit", "May"], &["Theresa May"]),
            vec!["Theresa May", "Brexit"]
        );
    }

    #[test]
    fn test_shared_word_is_not_same_entity() {
        assert_eq!(
            merge(&["New York"], &["New Zealand"]),
            vec!["New York", "New Zealand"]
        );
        assert_eq!(
            merge(&["United States"], &["United Nations"]),
            vec!["United States", "United Nations"]
        );
        assert_eq!(
            merge(&["Hillary Clinton", "Bill Clinton"], &[]),
            vec!["Hillary Clinton", "Bill Clinton"]
        );
    }

    #[test]
    fn test_title_variant_matches_full_name() {
        assert_eq!(
            merge(&["Prime Minister May"], &["Theresa May"]),
            vec!["Theresa May"]
        );
    }

    #[test]
    fn test_title_only_phrase_stands_alone() {
        assert_eq!(
            merge(&["President", "Donald Trump"], &[]),
            vec!["President", "Donald Trump"]
        );
    }

    #[test]
    fn test_empty_inputs() {
        assert!(merge(&[], &[]).is_empty());
        assert_eq!(merge(&[], &["Paris"]), vec!["Paris"]);
    }
}
