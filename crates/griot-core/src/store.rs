//! Collection store seam.
//!
//! The document database is an external collaborator. All the core needs from
//! it is "every document of a collection, ordered by its sort key"; adapters
//! live in the `griot-store` crate.

use crate::error::StoreError;
use crate::types::Collection;
use std::future::Future;

/// A raw document: a JSON object holding `id` plus the record fields.
pub type Document = serde_json::Value;

/// Read access to the nine content collections.
pub trait CollectionStore: Send + Sync {
    /// Fetch every document of `collection`, ordered by
    /// [`Collection::order_field`].
    fn fetch_all(
        &self,
        collection: Collection,
    ) -> impl Future<Output = Result<Vec<Document>, StoreError>> + Send;
}

/// Sort documents the way a store returns them: by the collection's order
/// field, then by `id`. Documents missing the field sort first.
pub fn sort_documents(collection: Collection, docs: &mut [Document]) {
    let field = collection.order_field();
    docs.sort_by_cached_key(|doc| {
        let text = |key: &str| doc.get(key).and_then(|v| v.as_str()).unwrap_or("").to_string();
        (text(field), text("id"))
    });
}
