use std::sync::Arc;

use tokio::sync::RwLock;

use crate::reviews::Review;

/// Append-only in-memory review collection, shared across request handlers.
/// The lock keeps snapshot reads from observing a partial append and keeps
/// concurrent appends from interleaving.
#[derive(Clone)]
pub struct ReviewStore {
    inner: Arc<RwLock<Vec<Review>>>,
}

impl ReviewStore {
    pub fn new(seed: Vec<Review>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(seed)),
        }
    }

    pub async fn append(&self, review: Review) {
        self.inner.write().await.push(review);
    }

    /// Owned copy in insertion order; callers cannot mutate stored state
    /// through query results.
    pub async fn snapshot(&self) -> Vec<Review> {
        self.inner.read().await.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reviews::Review;

    fn review(body: &str) -> Review {
        Review::create(body.to_owned(), "Denver, Colorado".to_owned())
    }

    #[tokio::test]
    async fn append_preserves_insertion_order() {
        let store = ReviewStore::new(vec![review("first")]);
        store.append(review("second")).await;
        store.append(review("third")).await;

        let snapshot = store.snapshot().await;
        let bodies: Vec<&str> = snapshot.iter().map(|r| r.body.as_str()).collect();
        assert_eq!(bodies, ["first", "second", "third"]);
    }

    #[tokio::test]
    async fn snapshot_is_detached_from_the_store() {
        let store = ReviewStore::new(vec![review("only")]);

        let mut snapshot = store.snapshot().await;
        snapshot.clear();

        assert_eq!(store.snapshot().await.len(), 1);
    }
}
