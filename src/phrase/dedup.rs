//! In-text phrase deduplication
//!
//! A news sentence often names the same entity more than once, in full and
//! abbreviated ("Donald Trump ... Trump"). [`ProperNounSet`] keeps only the
//! longest form. Comparison is a case-insensitive substring test, so
//! "New York" and "New york" are the same phrase.

/// Ordered phrase list in which no phrase is a case-insensitive substring
/// of another
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProperNounSet {
    phrases: Vec<String>,
    /// Lowercase copies, index-aligned with `phrases`
    lowered: Vec<String>,
}

impl ProperNounSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set by inserting `phrases` in order
    pub fn from_phrases<I, S>(phrases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut set = Self::new();
        for phrase in phrases {
            set.insert(phrase);
        }
        set
    }

    /// Insert a phrase, resolving overlap with the phrases already present.
    ///
    /// - If `phrase` is contained in (or equal to) an existing phrase, it is
    ///   dropped and `false` is returned.
    /// - Otherwise every existing phrase contained in `phrase` is removed and
    ///   `phrase` is appended.
    ///
    /// Empty phrases are never inserted.
    pub fn insert(&mut self, phrase: impl Into<String>) -> bool {
        let phrase = phrase.into();
        if phrase.is_empty() {
            return false;
        }

        let lower = phrase.to_lowercase();
        if self.lowered.iter().any(|existing| existing.contains(&lower)) {
            return false;
        }

        let mut i = 0;
        while i < self.lowered.len() {
            if lower.contains(&self.lowered[i]) {
                self.phrases.remove(i);
                self.lowered.remove(i);
            } else {
                i += 1;
            }
        }

        self.phrases.push(phrase);
        self.lowered.push(lower);
        true
    }

    /// Check if the set holds a phrase equal to `phrase`, ignoring case
    pub fn contains(&self, phrase: &str) -> bool {
        let lower = phrase.to_lowercase();
        self.lowered.iter().any(|existing| *existing == lower)
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.phrases
    }
}

impl<S: Into<String>> FromIterator<S> for ProperNounSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_phrases(iter)
    }
}
