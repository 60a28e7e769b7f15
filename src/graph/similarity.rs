//! Sentence similarity
//!
//! Word overlap normalized by the log-scaled sizes of both sets:
//!
//! ```text
//! sim(A, B) = |A ∩ B| / (ln(|A| + 1) + ln(|B| + 1))
//! ```
//!
//! Unlike Jaccard the denominator grows only logarithmically, so long
//! sentences that share many words score higher than short ones sharing few.

use crate::nlp::tokenizer::WordSet;

/// Similarity of two word sets
///
/// Two empty sets make the denominator zero; that pair scores 0.
pub fn similarity(a: &WordSet, b: &WordSet) -> f64 {
    let denominator = ((a.len() + 1) as f64).ln() + ((b.len() + 1) as f64).ln();
    if denominator <= 0.0 {
        return 0.0;
    }

    let (small, large) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let common = small.iter().filter(|w| large.contains(*w)).count();

    common as f64 / denominator
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn set(words: &[&str]) -> WordSet {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_shared_word() {
        let a = set(&["cats", "are", "small"]);
        let b = set(&["cats", "like", "naps"]);

        let expected = 1.0 / (4f64.ln() + 4f64.ln());
        assert!((similarity(&a, &b) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_disjoint_sets_score_zero() {
        let a = set(&["cats", "small"]);
        let b = set(&["dogs", "loyal"]);

        assert_eq!(similarity(&a, &b), 0.0);
    }

    #[test]
    fn test_both_empty_scores_zero() {
        let empty = WordSet::default();
        assert_eq!(similarity(&empty, &empty), 0.0);
    }

    #[test]
    fn test_one_empty_scores_zero() {
        let empty = WordSet::default();
        let a = set(&["cats"]);

        assert_eq!(similarity(&empty, &a), 0.0);
        assert_eq!(similarity(&a, &empty), 0.0);
    }

    #[test]
    fn test_reflexive_is_size_over_log_normalization() {
        let a = set(&["one", "two", "three", "four"]);
        let expected = 4.0 / (2.0 * 5f64.ln());

        assert!((similarity(&a, &a) - expected).abs() < 1e-12);
    }

    proptest! {
        #[test]
        fn prop_symmetric(
            a in prop::collection::hash_set("[a-e]{1,2}", 0..8),
            b in prop::collection::hash_set("[a-e]{1,2}", 0..8),
        ) {
            let a: WordSet = a.into_iter().collect();
            let b: WordSet = b.into_iter().collect();
            prop_assert_eq!(similarity(&a, &b), similarity(&b, &a));
        }

        #[test]
        fn prop_finite_and_non_negative(
            a in prop::collection::hash_set("[a-z]{1,3}", 0..12),
            b in prop::collection::hash_set("[a-z]{1,3}", 0..12),
        ) {
            let a: WordSet = a.into_iter().collect();
            let b: WordSet = b.into_iter().collect();
            let s = similarity(&a, &b);
            prop_assert!(s.is_finite());
            prop_assert!(s >= 0.0);
        }
    }
}
