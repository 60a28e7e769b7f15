//! Sentence and word tokenization
//!
//! Sentences end at `.`, `!` or `?` when whitespace follows. Words are maximal
//! runs of Unicode alphanumerics and underscores, lowercased, with stopwords
//! removed. Nothing smarter than that: abbreviations such as "e.g. this" split
//! the sentence.

use super::stopwords::StopwordFilter;
use crate::types::Sentence;
use once_cell::sync::Lazy;
use regex::Regex;
use rustc_hash::FxHashSet;

static SENTENCE_BOUNDARY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[.!?]\s+").expect("sentence boundary pattern is valid"));

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

/// Normalized, stopword-free words of one sentence
pub type WordSet = FxHashSet<String>;

/// Splits documents into sentences and sentences into word sets
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    stopwords: StopwordFilter,
}

impl Tokenizer {
    /// Create a tokenizer with the default stopword list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer with a specific stopword filter
    pub fn with_stopwords(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    /// The stopword filter in use
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Split `text` into indexed sentences
    ///
    /// The terminal punctuation stays with its sentence; whitespace around each
    /// sentence is trimmed and empty fragments are dropped. Indices are
    /// contiguous from 0 over the kept sentences.
    pub fn split_sentences(&self, text: &str) -> Vec<Sentence> {
        let mut fragments = Vec::new();
        let mut start = 0;

        for boundary in SENTENCE_BOUNDARY.find_iter(text) {
            // Punctuation is ASCII, so one byte past the match start is a char boundary
            fragments.push(&text[start..boundary.start() + 1]);
            start = boundary.end();
        }
        fragments.push(&text[start..]);

        fragments
            .into_iter()
            .map(str::trim)
            .filter(|fragment| !fragment.is_empty())
            .enumerate()
            .map(|(index, fragment)| Sentence::new(index, fragment))
            .collect()
    }

    /// Normalized word set of one sentence
    pub fn words(&self, sentence: &str) -> WordSet {
        WORD.find_iter(sentence)
            .map(|m| m.as_str().to_lowercase())
            .filter(|word| !self.stopwords.is_stopword(word))
            .collect()
    }

    /// Word sets for every sentence, in sentence order
    pub fn word_sets(&self, sentences: &[Sentence]) -> Vec<WordSet> {
        sentences.iter().map(|s| self.words(&s.content)).collect()
    }
}
