use std::sync::Arc;

use crate::{reviews::Review, sentiment::SentimentScorer, store::ReviewStore};

/// Shared handles passed into every request handler; no ambient globals.
#[derive(Clone)]
pub struct AppState {
    store: ReviewStore,
    scorer: Arc<SentimentScorer>,
}

impl AppState {
    pub fn new(seed: Vec<Review>) -> Self {
        Self {
            store: ReviewStore::new(seed),
            scorer: Arc::new(SentimentScorer::new()),
        }
    }

    pub fn store(&self) -> &ReviewStore {
        &self.store
    }

    pub fn scorer(&self) -> &SentimentScorer {
        &self.scorer
    }
}
