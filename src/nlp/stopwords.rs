//! Stopword filtering
//!
//! The default filter holds the twenty English function words the summarizer
//! has always ignored. Fuller per-language lists come from the `stop-words`
//! crate, and callers can supply their own.

use crate::types::StopwordSource;
use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// Function words excluded from similarity by default
pub const DEFAULT_STOPWORDS: [&str; 20] = [
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "from", "up", "about", "into", "over", "after",
];

/// A filter for removing stopwords from word sets
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Set of stopwords (lowercase)
    stopwords: FxHashSet<String>,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::from_list(&DEFAULT_STOPWORDS)
    }
}

impl StopwordFilter {
    /// Create the default filter
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty stopword filter (no filtering)
    pub fn empty() -> Self {
        Self {
            stopwords: FxHashSet::default(),
        }
    }

    /// Create a stopword filter from a custom list
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let stopwords = words.iter().map(|w| w.as_ref().to_lowercase()).collect();
        Self { stopwords }
    }

    /// Create a filter holding the full list for a language
    ///
    /// Unknown codes fall back to English.
    pub fn for_language(language: &str) -> Self {
        Self {
            stopwords: Self::load_stopwords(language),
        }
    }

    /// Build the filter a configuration asks for, plus any extra words
    pub fn from_source<S: AsRef<str>>(source: &StopwordSource, extra: &[S]) -> Self {
        let mut filter = match source {
            StopwordSource::Default => Self::default(),
            StopwordSource::None => Self::empty(),
            StopwordSource::Language(language) => Self::for_language(language),
            StopwordSource::Custom(words) => Self::from_list(words.as_slice()),
        };
        filter.add_stopwords(extra);
        filter
    }

    /// Add additional stopwords to the filter
    pub fn add_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.insert(word.as_ref().to_lowercase());
        }
    }

    /// Remove stopwords from the filter
    pub fn remove_stopwords<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.stopwords.remove(&word.as_ref().to_lowercase());
        }
    }

    /// Check if an already-lowercased word is a stopword
    pub fn is_stopword(&self, word: &str) -> bool {
        self.stopwords.contains(word)
    }

    /// Get the number of stopwords in the filter
    pub fn len(&self) -> usize {
        self.stopwords.len()
    }

    /// Check if the filter is empty
    pub fn is_empty(&self) -> bool {
        self.stopwords.is_empty()
    }

    fn load_stopwords(language: &str) -> FxHashSet<String> {
        let lang = match language.to_lowercase().as_str() {
            "en" | "english" => LANGUAGE::English,
            "de" | "german" => LANGUAGE::German,
            "fr" | "french" => LANGUAGE::French,
            "es" | "spanish" => LANGUAGE::Spanish,
            "it" | "italian" => LANGUAGE::Italian,
            "pt" | "portuguese" => LANGUAGE::Portuguese,
            "nl" | "dutch" => LANGUAGE::Dutch,
            "ru" | "russian" => LANGUAGE::Russian,
            "sv" | "swedish" => LANGUAGE::Swedish,
            "no" | "norwegian" => LANGUAGE::Norwegian,
            "da" | "danish" => LANGUAGE::Danish,
            "fi" | "finnish" => LANGUAGE::Finnish,
            other => {
                tracing::warn!(language = other, "no stopword list for language, using English");
                LANGUAGE::English
            }
        };

        get(lang).iter().map(|s| s.to_lowercase()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_list() {
        let filter = StopwordFilter::new();

        assert_eq!(filter.len(), 20);
        for word in DEFAULT_STOPWORDS {
            assert!(filter.is_stopword(word));
        }
        // Not in the short list, even though most English lists carry them
        assert!(!filter.is_stopword("are"));
        assert!(!filter.is_stopword("is"));
        assert!(!filter.is_stopword("cats"));
    }

    #[test]
    fn test_english_language_list() {
        let filter = StopwordFilter::for_language("en");

        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("is"));
        assert!(!filter.is_stopword("machine"));
        assert!(filter.len() > DEFAULT_STOPWORDS.len());
    }

    #[test]
    fn test_german_language_list() {
        let filter = StopwordFilter::for_language("de");

        assert!(filter.is_stopword("und"));
        assert!(!filter.is_stopword("maschine"));
    }

    #[test]
    fn test_custom_stopwords() {
        let mut filter = StopwordFilter::from_list(&["Custom", "words"]);

        assert!(filter.is_stopword("custom"));
        assert!(filter.is_stopword("words"));
        assert!(!filter.is_stopword("the"));

        filter.add_stopwords(&["extra"]);
        assert!(filter.is_stopword("extra"));

        filter.remove_stopwords(&["custom"]);
        assert!(!filter.is_stopword("custom"));
    }

    #[test]
    fn test_empty_filter() {
        let filter = StopwordFilter::empty();

        assert!(!filter.is_stopword("the"));
        assert!(filter.is_empty());
    }

    #[test]
    fn test_from_source_adds_extra_words() {
        let filter = StopwordFilter::from_source(&StopwordSource::None, &["Dogs"]);
        assert_eq!(filter.len(), 1);
        assert!(filter.is_stopword("dogs"));

        let filter = StopwordFilter::from_source(&StopwordSource::Default, &["are"]);
        assert!(filter.is_stopword("are"));
        assert!(filter.is_stopword("the"));
    }
}
