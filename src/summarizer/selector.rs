//! Top-K sentence selection
//!
//! Picks the highest-scoring sentences and hands them back in reading order.

use crate::errors::{Result, TextRankError};
use crate::types::Sentence;
use std::cmp::Ordering;

/// Number of sentences a summary of `percentage` percent should hold
///
/// `ceil(total * percentage / 100)`, clamped to `[1, total]`. The percentage
/// must lie in `(0, 100]`.
pub fn summary_size(total: usize, percentage: f64) -> Result<usize> {
    if !percentage.is_finite() || percentage <= 0.0 || percentage > 100.0 {
        return Err(TextRankError::InvalidPercentage(percentage));
    }
    if total == 0 {
        return Err(TextRankError::EmptyDocument);
    }

    let wanted = (total as f64 * percentage / 100.0).ceil() as usize;
    Ok(wanted.clamp(1, total))
}

/// Selects the top-ranked sentences
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSelector;

impl SentenceSelector {
    /// Create a new selector
    pub fn new() -> Self {
        Self
    }

    /// Select `count` sentences by score, returned in document order
    ///
    /// Equal scores are broken by the earlier sentence winning, so selection
    /// is deterministic.
    pub fn select<'a>(&self, sentences: &'a [Sentence], count: usize) -> Result<Vec<&'a Sentence>> {
        if count == 0 || count > sentences.len() {
            return Err(TextRankError::InvalidCount {
                requested: count,
                available: sentences.len(),
            });
        }

        let mut ranked: Vec<&Sentence> = sentences.iter().collect();
        ranked.sort_by(|a, b| by_score_then_index(a, b));
        ranked.truncate(count);
        ranked.sort_by_key(|s| s.index());

        Ok(ranked)
    }
}

fn by_score_then_index(a: &Sentence, b: &Sentence) -> Ordering {
    b.score
        .total_cmp(&a.score)
        .then_with(|| a.index().cmp(&b.index()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scored(scores: &[f64]) -> Vec<Sentence> {
        scores
            .iter()
            .enumerate()
            .map(|(i, &score)| {
                let mut s = Sentence::new(i, format!("Sentence {i}."));
                s.score = score;
                s
            })
            .collect()
    }

    fn indices(selected: &[&Sentence]) -> Vec<usize> {
        selected.iter().map(|s| s.index()).collect()
    }

    #[test]
    fn test_select_restores_document_order() {
        let sentences = scored(&[0.2, 0.9, 0.1, 0.5]);
        let selected = SentenceSelector::new().select(&sentences, 2).unwrap();

        // Score order would be 1, 3
        assert_eq!(indices(&selected), vec![1, 3]);

        let selected = SentenceSelector::new().select(&sentences, 3).unwrap();
        assert_eq!(indices(&selected), vec![0, 1, 3]);
    }

    #[test]
    fn test_ties_prefer_earlier_sentences() {
        let sentences = scored(&[0.5, 0.7, 0.5, 0.5]);
        let selected = SentenceSelector::new().select(&sentences, 2).unwrap();

        assert_eq!(indices(&selected), vec![0, 1]);
    }

    #[test]
    fn test_select_all() {
        let sentences = scored(&[0.3, 0.2, 0.1]);
        let selected = SentenceSelector::new().select(&sentences, 3).unwrap();

        assert_eq!(indices(&selected), vec![0, 1, 2]);
    }

    #[test]
    fn test_invalid_counts() {
        let sentences = scored(&[0.3, 0.2]);
        let selector = SentenceSelector::new();

        assert!(matches!(
            selector.select(&sentences, 0),
            Err(TextRankError::InvalidCount {
                requested: 0,
                available: 2
            })
        ));
        assert!(selector.select(&sentences, 3).is_err());
        assert!(selector.select(&[], 1).is_err());
    }

    #[test]
    fn test_summary_size() {
        assert_eq!(summary_size(4, 50.0).unwrap(), 2);
        assert_eq!(summary_size(4, 100.0).unwrap(), 4);
        assert_eq!(summary_size(10, 25.0).unwrap(), 3);
        assert_eq!(summary_size(7, 0.01).unwrap(), 1);
        assert_eq!(summary_size(1, 10.0).unwrap(), 1);
    }

    #[test]
    fn test_summary_size_rejects_bad_percentages() {
        for bad in [0.0, -5.0, 100.5, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                summary_size(10, bad),
                Err(TextRankError::InvalidPercentage(_))
            ));
        }
    }

    #[test]
    fn test_summary_size_of_empty_document() {
        assert!(matches!(
            summary_size(0, 50.0),
            Err(TextRankError::EmptyDocument)
        ));
    }
}
