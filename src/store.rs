//! In-memory review collection.
//!
//! The seed dataset is read once at startup. The distinct locations present
//! in it form the fixed whitelist used to validate both read filters and new
//! submissions; appending a review never extends the whitelist. New reviews
//! only ever live in memory.

use std::{collections::HashSet, fs::File, io::Read, path::Path};

use anyhow::{Context, bail};
use chrono::Local;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

use crate::error::AppError;

/// Fixed-width so date filtering can compare timestamps as plain strings.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Review {
    #[serde(default = "fresh_id")]
    pub review_id: String,
    pub location: String,
    pub review_body: String,
    pub timestamp: String,
}

pub struct ReviewStore {
    reviews: RwLock<Vec<Review>>,
    locations: HashSet<String>,
}

impl ReviewStore {
    /// Reads the seed CSV. Required columns: `Location`, `ReviewBody`,
    /// `Timestamp`. `ReviewId` is generated for rows that do not carry one.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let file = File::open(path.as_ref())
            .with_context(|| format!("Failed to open {}", path.as_ref().display()))?;

        Self::from_reader(file)
    }

    pub fn from_reader(reader: impl Read) -> anyhow::Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut reviews = Vec::new();

        for (row, record) in csv_reader.deserialize().enumerate() {
            let review: Review = record.with_context(|| format!("Malformed review row {row}"))?;

            if review.location.is_empty() {
                bail!("Review row {row} has an empty Location");
            }

            reviews.push(review);
        }

        let count = reviews.len();
        let store = Self::from_reviews(reviews);
        info!(
            "Loaded {count} reviews across {} locations",
            store.locations.len()
        );

        Ok(store)
    }

    pub fn from_reviews(reviews: Vec<Review>) -> Self {
        let locations = reviews.iter().map(|r| r.location.clone()).collect();

        Self {
            reviews: RwLock::new(reviews),
            locations,
        }
    }

    pub fn known_locations(&self) -> &HashSet<String> {
        &self.locations
    }

    /// Clone of the full collection in insertion order. Scoring and
    /// serialization happen on the clone, outside the lock.
    pub async fn snapshot(&self) -> Vec<Review> {
        self.reviews.read().await.clone()
    }

    /// Single point of mutation. Validates against the whitelist, stamps a
    /// fresh id and the current time, and appends.
    pub async fn append(&self, location: &str, review_body: &str) -> Result<Review, AppError> {
        if !self.locations.contains(location) {
            return Err(AppError::UnknownReviewLocation);
        }
        if review_body.is_empty() {
            return Err(AppError::MissingField("ReviewBody"));
        }

        let review = Review {
            review_id: fresh_id(),
            location: location.to_string(),
            review_body: review_body.to_string(),
            timestamp: now_timestamp(),
        };

        self.reviews.write().await.push(review.clone());

        Ok(review)
    }
}

fn fresh_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
