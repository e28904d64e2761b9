//! Query-parameter filtering of the review collection.
//!
//! Every present constraint narrows the same base collection, so
//! `location=A&start_date=X` and `start_date=X&location=A` always produce
//! identical results. With no recognized parameter the filter is the
//! identity.

use std::collections::HashSet;

use serde::Deserialize;

use crate::{error::AppError, store::Review};

/// Raw query parameters accepted by the read endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ReviewQuery {
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Validated filter set.
#[derive(Debug)]
pub struct ReviewFilter {
    location: Option<String>,
    start_date: Option<String>,
    end_date: Option<String>,
}

impl ReviewFilter {
    /// A present `location` must name a whitelisted location; this fails the
    /// whole request no matter which other parameters are present.
    pub fn from_query(
        query: ReviewQuery,
        known_locations: &HashSet<String>,
    ) -> Result<Self, AppError> {
        if let Some(location) = &query.location {
            if !known_locations.contains(location) {
                return Err(AppError::UnknownFilterLocation);
            }
        }

        Ok(Self {
            location: query.location,
            start_date: query.start_date,
            end_date: query.end_date,
        })
    }

    fn matches(&self, review: &Review) -> bool {
        if let Some(location) = &self.location {
            if review.location != *location {
                return false;
            }
        }

        // Timestamps are fixed-width, so string order is date order.
        if let Some(start_date) = &self.start_date {
            if review.timestamp.as_str() < start_date.as_str() {
                return false;
            }
        }
        if let Some(end_date) = &self.end_date {
            if review.timestamp.as_str() > end_date.as_str() {
                return false;
            }
        }

        true
    }

    pub fn apply(&self, reviews: Vec<Review>) -> Vec<Review> {
        reviews.into_iter().filter(|r| self.matches(r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(id: &str, location: &str, timestamp: &str) -> Review {
        Review {
            review_id: id.to_string(),
            location: location.to_string(),
            review_body: "A stay to remember".to_string(),
            timestamp: timestamp.to_string(),
        }
    }

    fn seed() -> Vec<Review> {
        vec![
            review("r1", "Paris", "2021-03-01 09:00:00.000"),
            review("r2", "Rome", "2021-04-15 18:30:00.000"),
            review("r3", "Paris", "2021-05-20 12:00:00.000"),
            review("r4", "Rome", "2021-06-02 08:15:00.000"),
        ]
    }

    fn whitelist() -> HashSet<String> {
        seed().into_iter().map(|r| r.location).collect()
    }

    fn ids(reviews: &[Review]) -> Vec<&str> {
        reviews.iter().map(|r| r.review_id.as_str()).collect()
    }

    #[test]
    fn test_no_params_is_identity() {
        let filter = ReviewFilter::from_query(ReviewQuery::default(), &whitelist()).unwrap();

        assert_eq!(ids(&filter.apply(seed())), vec!["r1", "r2", "r3", "r4"]);
    }

    #[test]
    fn test_location_filter() {
        let query = ReviewQuery {
            location: Some("Paris".to_string()),
            ..Default::default()
        };
        let filter = ReviewFilter::from_query(query, &whitelist()).unwrap();

        assert_eq!(ids(&filter.apply(seed())), vec!["r1", "r3"]);
    }

    #[test]
    fn test_date_range() {
        let query = ReviewQuery {
            start_date: Some("2021-04-01".to_string()),
            end_date: Some("2021-06-01".to_string()),
            ..Default::default()
        };
        let filter = ReviewFilter::from_query(query, &whitelist()).unwrap();

        assert_eq!(ids(&filter.apply(seed())), vec!["r2", "r3"]);
    }

    #[test]
    fn test_end_date_is_inclusive_of_full_timestamps() {
        let query = ReviewQuery {
            end_date: Some("2021-03-01 09:00:00.000".to_string()),
            ..Default::default()
        };
        let filter = ReviewFilter::from_query(query, &whitelist()).unwrap();

        assert_eq!(ids(&filter.apply(seed())), vec!["r1"]);
    }

    #[test]
    fn test_filters_compose_over_the_base_collection() {
        // A location matching exactly one review must still be narrowed by
        // the date bound, never widened back to the full collection.
        let query = ReviewQuery {
            location: Some("Paris".to_string()),
            start_date: Some("2021-04-01".to_string()),
            ..Default::default()
        };
        let filter = ReviewFilter::from_query(query, &whitelist()).unwrap();

        assert_eq!(ids(&filter.apply(seed())), vec!["r3"]);
    }

    #[test]
    fn test_composition_matches_sequential_application() {
        let combined = ReviewFilter::from_query(
            ReviewQuery {
                location: Some("Rome".to_string()),
                start_date: Some("2021-05-01".to_string()),
                ..Default::default()
            },
            &whitelist(),
        )
        .unwrap();

        let location_only = ReviewFilter::from_query(
            ReviewQuery {
                location: Some("Rome".to_string()),
                ..Default::default()
            },
            &whitelist(),
        )
        .unwrap();
        let date_only = ReviewFilter::from_query(
            ReviewQuery {
                start_date: Some("2021-05-01".to_string()),
                ..Default::default()
            },
            &whitelist(),
        )
        .unwrap();

        assert_eq!(
            ids(&combined.apply(seed())),
            ids(&date_only.apply(location_only.apply(seed())))
        );
        assert_eq!(
            ids(&combined.apply(seed())),
            ids(&location_only.apply(date_only.apply(seed())))
        );
    }

    #[test]
    fn test_unknown_location_fails_even_with_other_params() {
        let query = ReviewQuery {
            location: Some("Berlin".to_string()),
            start_date: Some("2021-01-01".to_string()),
            ..Default::default()
        };

        let result = ReviewFilter::from_query(query, &whitelist());

        assert!(matches!(result, Err(AppError::UnknownFilterLocation)));
    }
}
