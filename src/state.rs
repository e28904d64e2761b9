use std::sync::Arc;

use anyhow::Context;

use super::{config::Config, sentiment::SentimentScorer, store::ReviewStore};

pub struct AppState {
    pub store: ReviewStore,
    pub scorer: SentimentScorer,
    pub config: Config,
}

impl AppState {
    pub fn new() -> anyhow::Result<Arc<Self>> {
        let config = Config::load();

        let store = ReviewStore::load(&config.data_path)
            .with_context(|| format!("Failed to load reviews from {}", config.data_path))?;

        Ok(Arc::new(Self {
            store,
            scorer: SentimentScorer::new(),
            config,
        }))
    }
}
