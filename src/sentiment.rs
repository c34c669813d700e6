use serde::{Deserialize, Serialize};
use vader_sentiment::SentimentIntensityAnalyzer;

/// The four VADER polarity sub-scores. `neg`, `neu` and `pos` each fall in
/// [0, 1] and sum to roughly 1; `compound` is the normalized summary in
/// [-1, 1], more positive meaning more positive sentiment.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SentimentScores {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

/// Wraps the VADER analyzer behind the score contract the rest of the crate
/// relies on. Scoring is deterministic for identical input and never fails.
pub struct SentimentScorer {
    analyzer: SentimentIntensityAnalyzer<'static>,
}

impl SentimentScorer {
    pub fn new() -> Self {
        Self {
            analyzer: SentimentIntensityAnalyzer::new(),
        }
    }

    pub fn score(&self, text: &str) -> SentimentScores {
        let scores = self.analyzer.polarity_scores(text);
        let field = |key: &str| scores.get(key).copied().unwrap_or(0.0);

        SentimentScores {
            neg: field("neg"),
            neu: field("neu"),
            pos: field("pos"),
            compound: field("compound"),
        }
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_text_scores_positive_compound() {
        let scorer = SentimentScorer::new();
        assert!(scorer.score("Great stay").compound > 0.0);
    }

    #[test]
    fn negative_text_scores_negative_compound() {
        let scorer = SentimentScorer::new();
        assert!(scorer.score("The room was dirty and the staff were awful").compound < 0.0);
    }

    #[test]
    fn scoring_is_deterministic_for_identical_input() {
        let scorer = SentimentScorer::new();
        let text = "Lovely pool, terrible parking.";
        assert_eq!(scorer.score(text), scorer.score(text));
    }

    #[test]
    fn sub_scores_stay_in_range() {
        let scorer = SentimentScorer::new();
        let scores = scorer.score("An absolutely wonderful, horrible, confusing visit!");

        for part in [scores.neg, scores.neu, scores.pos] {
            assert!((0.0..=1.0).contains(&part));
        }
        assert!((-1.0..=1.0).contains(&scores.compound));
        assert!((scores.neg + scores.neu + scores.pos - 1.0).abs() < 0.05);
    }
}
