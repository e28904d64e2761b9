//! Sentiment ranking of filtered reviews.

use serde::Serialize;

use crate::{
    error::AppError,
    sentiment::{Sentiment, SentimentScorer},
    store::Review,
};

/// A review joined with its freshly computed sentiment, as served by the
/// read endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct RankedReview {
    #[serde(flatten)]
    pub review: Review,
    pub sentiment: Sentiment,
}

/// Scores every review and orders the result by compound sentiment,
/// strongest first. The sort is stable: reviews with equal compound scores
/// keep their collection order.
pub fn rank(scorer: &SentimentScorer, reviews: Vec<Review>) -> Result<Vec<RankedReview>, AppError> {
    let mut ranked = reviews
        .into_iter()
        .map(|review| {
            let sentiment = scorer.score(&review.review_body)?;
            Ok(RankedReview { review, sentiment })
        })
        .collect::<Result<Vec<_>, AppError>>()?;

    ranked.sort_by(|a, b| b.sentiment.compound.total_cmp(&a.sentiment.compound));

    Ok(ranked)
}
