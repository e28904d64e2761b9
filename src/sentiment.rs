//! VADER polarity scoring of review text.
//!
//! The analyzer is deterministic for a given text, so scores are recomputed
//! on every read instead of being stored with the review.

use serde::Serialize;
use vader_sentiment::SentimentIntensityAnalyzer;

use crate::error::AppError;

/// Polarity components. `compound` summarizes the text in [-1, 1]; the
/// remaining components are proportions in [0, 1].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Sentiment {
    pub neg: f64,
    pub neu: f64,
    pub pos: f64,
    pub compound: f64,
}

pub struct SentimentScorer;

impl SentimentScorer {
    pub fn new() -> Self {
        Self
    }

    pub fn score(&self, text: &str) -> Result<Sentiment, AppError> {
        let analyzer = SentimentIntensityAnalyzer::new();
        let scores = analyzer.polarity_scores(text);

        let component = |key: &'static str| scores.get(key).copied().ok_or(AppError::Scoring(key));

        Ok(Sentiment {
            neg: component("neg")?,
            neu: component("neu")?,
            pos: component("pos")?,
            compound: component("compound")?,
        })
    }
}

impl Default for SentimentScorer {
    fn default() -> Self {
        Self::new()
    }
}
