//! News article record
//!
//! Holds the text fields of one article together with the extractor that
//! reads them, and computes its proper nouns on first access. Each result
//! is cached in a [`OnceLock`]. The fields and the extractor never change
//! after construction, so a cached list is always the one a fresh
//! extraction would produce. An article can be shared between threads; if
//! two threads race on an empty cache, both compute and the first write
//! wins.

use std::sync::{Arc, OnceLock};

use crate::errors::Result;
use crate::nlp::tagger::{LexiconTagger, PosTagger};
use crate::pipeline::extractor::ProperNounExtractor;

/// Site signatures appended to titles and descriptions. They are mostly
/// capitalized and would otherwise show up as proper nouns.
pub const NEWS_SIGNATURES: &[&str] = &[
    "| TheHill",
    "- CNN",
    "  Guardian News",
    "| NYT News - The New York Times",
    " | NBC Nightly News",
    " - Bloomberg",
    " - The Boston Globe",
    "at CNN.com",
    "NY POST:",
    " - Fox News",
    "Visit MarketsInsider.com \u{2026}",
    "Visit Business Insider",
];

/// URL fragments of sources whose text is never worth extracting from
pub const GARBAGE_SOURCES: &[&str] = &["youtube.com/", "bbc.co.uk/programmes"];

/// Clean a raw article field before extraction.
///
/// Keeps only the text before the first carriage return (trailing ad copy),
/// turns non-breaking spaces into spaces, removes site signatures and trims.
pub fn clean_text(raw: &str) -> String {
    let head = raw.split('\r').next().unwrap_or_default();
    let mut text = head.replace('\u{a0}', " ");
    for signature in NEWS_SIGNATURES {
        text = text.replace(signature, "");
    }
    text.trim().to_string()
}

/// Check if an article URL belongs to a garbage source
pub fn is_garbage_source(url: &str) -> bool {
    GARBAGE_SOURCES.iter().any(|source| url.contains(source))
}

/// One article with lazily computed proper nouns
#[derive(Debug)]
pub struct NewsArticle<T = LexiconTagger> {
    source: String,
    url: String,
    title: String,
    description: String,
    content: String,
    extractor: Arc<ProperNounExtractor<T>>,
    title_nouns: OnceLock<Vec<String>>,
    description_nouns: OnceLock<Vec<String>>,
    all_nouns: OnceLock<Vec<String>>,
}

impl NewsArticle {
    /// Build an article from raw API fields, read by the shared default
    /// extractor.
    ///
    /// Missing fields become empty strings. Articles from garbage sources
    /// keep their source and URL but lose all text.
    pub fn new(
        source: impl Into<String>,
        url: impl Into<String>,
        title: Option<&str>,
        description: Option<&str>,
        content: Option<&str>,
    ) -> Self {
        Self::with_extractor(
            Arc::clone(crate::default_extractor()),
            source,
            url,
            title,
            description,
            content,
        )
    }
}

impl<T: PosTagger> NewsArticle<T> {
    /// Build an article whose proper nouns come from `extractor`
    pub fn with_extractor(
        extractor: Arc<ProperNounExtractor<T>>,
        source: impl Into<String>,
        url: impl Into<String>,
        title: Option<&str>,
        description: Option<&str>,
        content: Option<&str>,
    ) -> Self {
        let url = url.into();
        let clean = |field: Option<&str>| field.map(clean_text).unwrap_or_default();

        let (title, description, content) = if is_garbage_source(&url) {
            (String::new(), String::new(), String::new())
        } else {
            (clean(title), clean(description), clean(content))
        };

        Self {
            source: source.into(),
            url,
            title,
            description,
            content,
            extractor,
            title_nouns: OnceLock::new(),
            description_nouns: OnceLock::new(),
            all_nouns: OnceLock::new(),
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn extractor(&self) -> &ProperNounExtractor<T> {
        &self.extractor
    }

    /// Proper nouns of the title, computed on first call
    pub fn proper_nouns_in_title(&self) -> Result<&[String]> {
        cached_extract(&self.title_nouns, &self.title, &self.extractor)
    }

    /// Proper nouns of the description, computed on first call
    pub fn proper_nouns_in_description(&self) -> Result<&[String]> {
        cached_extract(&self.description_nouns, &self.description, &self.extractor)
    }

    /// Title and description proper nouns merged into one list with a
    /// single name per entity. `None` when both fields are empty.
    pub fn all_proper_nouns(&self) -> Result<Option<&[String]>> {
        if self.title.is_empty() && self.description.is_empty() {
            return Ok(None);
        }
        if let Some(all) = self.all_nouns.get() {
            return Ok(Some(all));
        }

        let merged = self.extractor.reconcile(
            self.proper_nouns_in_title()?,
            self.proper_nouns_in_description()?,
        );
        Ok(Some(self.all_nouns.get_or_init(|| merged)))
    }
}

fn cached_extract<'a, T: PosTagger>(
    cell: &'a OnceLock<Vec<String>>,
    text: &str,
    extractor: &ProperNounExtractor<T>,
) -> Result<&'a [String]> {
    if text.is_empty() {
        return Ok(&[]);
    }
    if let Some(nouns) = cell.get() {
        return Ok(nouns);
    }

    let nouns = extractor.extract(text)?;
    Ok(cell.get_or_init(|| nouns))
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;
    use crate::config::ExtractorConfig;
    use crate::types::PosTag;

    #[test]
    fn test_clean_text() {
        assert_eq!(
            clean_text("Trump meets Kim\u{a0}Jong Un - CNN\r\nRead more ads"),
            "Trump meets Kim Jong Un"
        );
        assert_eq!(clean_text("  Budget vote | TheHill "), "Budget vote");
    }

    #[test]
    fn test_garbage_source_blanks_text() {
        let article = NewsArticle::new(
            "YouTube",
            "https://www.youtube.com/watch?v=abc",
            Some("Donald Trump Speech"),
            Some("Full video"),
            None,
        );
        assert_eq!(article.title(), "");
        assert_eq!(article.source(), "YouTube");

        assert!(article.proper_nouns_in_title().unwrap().is_empty());
        assert_eq!(article.all_proper_nouns().unwrap(), None);
    }

    #[test]
    fn test_all_proper_nouns_merges_fields() {
        let article = NewsArticle::new(
            "Reuters",
            "https://reuters.com/a",
            Some("Trump to meet Macron in Paris"),
            Some("President Donald Trump will travel to France."),
            None,
        );

        assert_eq!(
            article.proper_nouns_in_title().unwrap(),
            &["Trump", "Macron", "Paris"]
        );
        assert_eq!(
            article.all_proper_nouns().unwrap().unwrap(),
            &["Donald Trump", "Macron", "Paris", "France"]
        );
    }

    #[test]
    fn test_results_are_memoized() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let counting = move |words: &[&str]| {
            counter.fetch_add(1, Ordering::SeqCst);
            LexiconTagger::new().tag_sequence(words)
        };
        let extractor = Arc::new(ProperNounExtractor::with_tagger(
            ExtractorConfig::default(),
            counting,
        ));

        let article = NewsArticle::with_extractor(
            extractor,
            "AP",
            "https://apnews.com/a",
            Some("Angela Merkel visits Rome"),
            Some("The chancellor met officials in Rome."),
            None,
        );

        let first = article.all_proper_nouns().unwrap().unwrap().to_vec();
        let second = article.all_proper_nouns().unwrap().unwrap().to_vec();
        article.proper_nouns_in_title().unwrap();

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_each_article_uses_its_own_extractor() {
        let title = Some("Angela Merkel visits Rome");
        let builtin = NewsArticle::new("AP", "https://apnews.com/d", title, None, None);

        let nouns_only = |words: &[&str]| vec![PosTag::Noun; words.len()];
        let extractor = Arc::new(ProperNounExtractor::new().tagger(nouns_only));
        let scripted =
            NewsArticle::with_extractor(extractor, "AP", "https://apnews.com/d", title, None, None);

        assert_eq!(
            builtin.proper_nouns_in_title().unwrap(),
            &["Angela Merkel", "Rome"]
        );
        assert!(scripted.proper_nouns_in_title().unwrap().is_empty());
        assert_eq!(scripted.all_proper_nouns().unwrap(), Some(&[][..]));

        // a cached result does not leak into another article's extraction
        assert_eq!(
            builtin.proper_nouns_in_title().unwrap(),
            &["Angela Merkel", "Rome"]
        );
    }

    #[test]
    fn test_article_shared_across_threads() {
        let article = Arc::new(NewsArticle::new(
            "AP",
            "https://apnews.com/b",
            Some("Boris Johnson wins vote"),
            None,
            None,
        ));

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let article = Arc::clone(&article);
                std::thread::spawn(move || {
                    article.all_proper_nouns().unwrap().map(<[String]>::to_vec)
                })
            })
            .collect();

        for handle in handles {
            assert_eq!(
                handle.join().unwrap(),
                Some(vec!["Boris Johnson".to_string()])
            );
        }
    }
}
