//! Core data types shared by all pipeline stages

use crate::errors::{Result, TextRankError};
use serde::{Deserialize, Serialize};

/// Score every sentence starts with before propagation
pub const INITIAL_SCORE: f64 = 1.0;

/// A sentence of the source document
///
/// `index` is fixed at tokenization time and is what restores reading order
/// after selection. `score` is rewritten by the rank propagator.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sentence {
    index: usize,
    /// Trimmed sentence text, terminal punctuation included
    pub content: String,
    /// Current rank score
    pub score: f64,
}

impl Sentence {
    /// Create a sentence with the initial score
    pub fn new(index: usize, content: impl Into<String>) -> Self {
        Self {
            index,
            content: content.into(),
            score: INITIAL_SCORE,
        }
    }

    /// Position in the original document (0-based)
    pub fn index(&self) -> usize {
        self.index
    }
}

/// Where the tokenizer's stop-word list comes from
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StopwordSource {
    /// The built-in list of twenty English function words
    #[default]
    Default,
    /// No stop words at all
    None,
    /// Full list for a language code (`en`, `de`, `fr`, ...)
    Language(String),
    /// Caller-supplied list
    Custom(Vec<String>),
}

/// Configuration for a summarization run
///
/// Every field has a default, so a JSON file only needs to name the values
/// it overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextRankConfig {
    /// Share of each score that flows through the graph
    pub damping: f64,
    /// Iteration cap for the propagator
    pub max_iterations: usize,
    /// Total absolute score change below which propagation stops.
    /// `0.0` disables early exit.
    pub convergence_threshold: f64,
    /// Stop-word list selection
    pub stopwords: StopwordSource,
    /// Words added on top of `stopwords`
    pub extra_stopwords: Vec<String>,
    /// Sentence count from which graph building and propagation use rayon
    pub parallel_threshold: usize,
}

impl Default for TextRankConfig {
    fn default() -> Self {
        Self {
            damping: 0.85,
            max_iterations: 30,
            convergence_threshold: 1e-4,
            stopwords: StopwordSource::Default,
            extra_stopwords: Vec::new(),
            parallel_threshold: 256,
        }
    }
}

impl TextRankConfig {
    /// Parse a configuration from JSON
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Check that numeric parameters are usable
    pub fn validate(&self) -> Result<()> {
        validate_damping(self.damping)?;
        validate_threshold(self.convergence_threshold)
    }
}

pub(crate) fn validate_damping(damping: f64) -> Result<()> {
    if !damping.is_finite() || !(0.0..=1.0).contains(&damping) {
        return Err(TextRankError::invalid_parameter(
            "damping",
            format!("{damping} is not within [0, 1]"),
        ));
    }
    Ok(())
}

pub(crate) fn validate_threshold(threshold: f64) -> Result<()> {
    if !threshold.is_finite() || threshold < 0.0 {
        return Err(TextRankError::invalid_parameter(
            "convergence_threshold",
            format!("{threshold} must be a finite, non-negative number"),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_sentence_starts_at_initial_score() {
        let s = Sentence::new(3, "Cats like naps.");
        assert_eq!(s.index(), 3);
        assert_eq!(s.score, INITIAL_SCORE);
    }

    #[test]
    fn test_config_defaults() {
        let cfg = TextRankConfig::default();
        assert_eq!(cfg.damping, 0.85);
        assert_eq!(cfg.max_iterations, 30);
        assert_eq!(cfg.convergence_threshold, 1e-4);
        assert_eq!(cfg.stopwords, StopwordSource::Default);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let cfg = TextRankConfig::from_json(r#"{ "damping": 0.5, "max_iterations": 20 }"#).unwrap();
        assert_eq!(cfg.damping, 0.5);
        assert_eq!(cfg.max_iterations, 20);
        assert_eq!(cfg.convergence_threshold, 1e-4);
    }

    #[test]
    fn test_stopword_source_json_shapes() {
        let cfg = TextRankConfig::from_json(r#"{ "stopwords": "none" }"#).unwrap();
        assert_eq!(cfg.stopwords, StopwordSource::None);

        let cfg = TextRankConfig::from_json(r#"{ "stopwords": { "language": "de" } }"#).unwrap();
        assert_eq!(cfg.stopwords, StopwordSource::Language("de".to_string()));

        let cfg =
            TextRankConfig::from_json(r#"{ "stopwords": { "custom": ["foo", "bar"] } }"#).unwrap();
        assert_eq!(
            cfg.stopwords,
            StopwordSource::Custom(vec!["foo".to_string(), "bar".to_string()])
        );
    }

    #[test]
    fn test_validate_rejects_bad_damping() {
        let cfg = TextRankConfig {
            damping: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(TextRankError::InvalidParameter { name: "damping", .. })
        ));

        let cfg = TextRankConfig {
            damping: f64::NAN,
            ..Default::default()
        };
        assert!(cfg.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_negative_threshold() {
        let cfg = TextRankConfig {
            convergence_threshold: -1.0,
            ..Default::default()
        };
        assert!(matches!(
            cfg.validate(),
            Err(TextRankError::InvalidParameter {
                name: "convergence_threshold",
                ..
            })
        ));
    }
}
