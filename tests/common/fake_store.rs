//! FakeStore, an instrumented [`CollectionStore`] for harnesses.
//!
//! Wraps a [`MemoryStore`] and records every fetch per collection. Individual
//! collections can be made to fail (and later healed), and every fetch can be
//! slowed by a fixed delay. Delays use `tokio::time::sleep`, so they complete
//! instantly under `tokio::time::pause()` once the runtime is idle.

use griot_core::{Collection, CollectionStore, Document, StoreError};
use griot_store::MemoryStore;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;
use std::time::Duration;

pub struct FakeStore {
    inner: MemoryStore,
    calls: Mutex<HashMap<Collection, usize>>,
    failing: Mutex<HashSet<Collection>>,
    delay: Option<Duration>,
}

impl FakeStore {
    pub fn new(inner: MemoryStore) -> Self {
        Self {
            inner,
            calls: Mutex::new(HashMap::new()),
            failing: Mutex::new(HashSet::new()),
            delay: None,
        }
    }

    pub fn empty() -> Self {
        Self::new(MemoryStore::new())
    }

    /// A store seeded with [`heritage_documents`](super::heritage_documents).
    pub fn heritage() -> Self {
        Self::new(super::heritage_store())
    }

    /// Every fetch of `collection` fails with [`StoreError::Unavailable`].
    pub fn failing_on(self, collection: Collection) -> Self {
        self.failing.lock().unwrap().insert(collection);
        self
    }

    /// Every fetch sleeps for `delay` before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Stop failing fetches of `collection`.
    pub fn heal(&self, collection: Collection) {
        self.failing.lock().unwrap().remove(&collection);
    }

    pub async fn insert(&self, collection: Collection, docs: Vec<Document>) {
        self.inner.insert(collection, docs).await;
    }

    pub fn calls(&self, collection: Collection) -> usize {
        self.calls.lock().unwrap().get(&collection).copied().unwrap_or(0)
    }

    pub fn total_calls(&self) -> usize {
        self.calls.lock().unwrap().values().sum()
    }
}

impl CollectionStore for FakeStore {
    async fn fetch_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        *self.calls.lock().unwrap().entry(collection).or_default() += 1;

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        let failing = self.failing.lock().unwrap().contains(&collection);
        if failing {
            return Err(StoreError::Unavailable(collection));
        }
        self.inner.fetch_all(collection).await
    }
}
