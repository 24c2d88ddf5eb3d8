//! In-memory store, seeded programmatically.

use griot_core::store::sort_documents;
use griot_core::{Collection, CollectionStore, Document, StoreError};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<Collection, Vec<Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert), for seeding before the store
    /// is shared.
    pub fn with_documents(mut self, collection: Collection, docs: Vec<Document>) -> Self {
        self.collections
            .get_mut()
            .entry(collection)
            .or_default()
            .extend(docs);
        self
    }

    /// Append documents to `collection`.
    pub async fn insert(&self, collection: Collection, docs: Vec<Document>) {
        let mut collections = self.collections.write().await;
        collections.entry(collection).or_default().extend(docs);
    }

    /// Drop every document of `collection`.
    pub async fn clear(&self, collection: Collection) {
        self.collections.write().await.remove(&collection);
    }
}

impl CollectionStore for MemoryStore {
    async fn fetch_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        let mut docs = self
            .collections
            .read()
            .await
            .get(&collection)
            .cloned()
            .unwrap_or_default();
        sort_documents(collection, &mut docs);
        Ok(docs)
    }
}
