//! Top-k sentence selection, returned in document order.

use super::scorer::ScoredSentence;
use crate::config::SelectionConfig;

/// Number of sentences kept for `total` input sentences:
/// `max(min_sentences, ceil(ratio * total))`, never more than `total`.
pub fn target_count(total: usize, config: &SelectionConfig) -> usize {
    let by_ratio = (total as f64 * config.target_ratio).ceil() as usize;
    by_ratio.max(config.min_sentences).min(total)
}

/// Indices of the `target` best sentences, ascending.
///
/// Ranking is by score descending; equal scores keep the earlier sentence first.
pub fn select_indices(scores: &[ScoredSentence], target: usize) -> Vec<usize> {
    let mut ranked: Vec<&ScoredSentence> = scores.iter().collect();
    ranked.sort_by(|a, b| b.score.total_cmp(&a.score).then(a.index.cmp(&b.index)));

    let mut selected: Vec<usize> = ranked.into_iter().take(target).map(|s| s.index).collect();

    // Sort by document order
    selected.sort_unstable();
    tracing::debug!(target_count = target, selected = ?selected, "Sentences selected");
    selected
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::scorer::ScoreBreakdown;

    fn scored(values: &[f64]) -> Vec<ScoredSentence> {
        values
            .iter()
            .enumerate()
            .map(|(index, &score)| ScoredSentence {
                index,
                score,
                breakdown: ScoreBreakdown::default(),
            })
            .collect()
    }

    #[test]
    fn test_target_count_formula() {
        let cfg = SelectionConfig::default();
        assert_eq!(target_count(3, &cfg), 2);
        assert_eq!(target_count(4, &cfg), 2);
        assert_eq!(target_count(5, &cfg), 2);
        assert_eq!(target_count(6, &cfg), 3);
        assert_eq!(target_count(10, &cfg), 4);
        assert_eq!(target_count(11, &cfg), 5);
    }

    #[test]
    fn test_target_count_capped_at_total() {
        let cfg = SelectionConfig {
            min_sentences: 5,
            ..SelectionConfig::default()
        };
        assert_eq!(target_count(3, &cfg), 3);
        assert_eq!(target_count(1, &SelectionConfig::default()), 1);
    }

    #[test]
    fn test_select_restores_document_order() {
        let scores = scored(&[0.1, 0.9, 0.2, 0.8, 0.5]);
        assert_eq!(select_indices(&scores, 3), vec![1, 3, 4]);
    }

    #[test]
    fn test_ties_prefer_earlier_sentence() {
        let scores = scored(&[0.5, 0.7, 0.5, 0.5]);
        assert_eq!(select_indices(&scores, 2), vec![0, 1]);
        assert_eq!(select_indices(&scores, 3), vec![0, 1, 2]);
    }

    #[test]
    fn test_negative_scores_still_ranked() {
        let scores = scored(&[-0.3, -0.1, -0.2]);
        assert_eq!(select_indices(&scores, 2), vec![1, 2]);
    }

    #[test]
    fn test_target_larger_than_input() {
        let scores = scored(&[0.3, 0.1]);
        assert_eq!(select_indices(&scores, 5), vec![0, 1]);
    }
}
