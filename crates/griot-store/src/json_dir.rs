//! Directory-backed store: one `<collection>.json` file per collection, each
//! holding a JSON array of documents.
//!
//! Files are re-read on every fetch; caching is the service's job. A missing
//! file is an empty collection, so a partially populated directory still
//! serves.

use griot_core::store::sort_documents;
use griot_core::{Collection, CollectionStore, Document, StoreError};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct JsonDirStore {
    root: PathBuf,
}

impl JsonDirStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path of the file backing `collection`.
    pub fn path_for(&self, collection: Collection) -> PathBuf {
        self.root.join(format!("{}.json", collection.name()))
    }
}

impl CollectionStore for JsonDirStore {
    async fn fetch_all(&self, collection: Collection) -> Result<Vec<Document>, StoreError> {
        let path = self.path_for(collection);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no collection file, treating as empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        let mut docs = match serde_json::from_slice::<Document>(&bytes)? {
            Document::Array(docs) => docs,
            other => {
                return Err(StoreError::Malformed {
                    collection,
                    reason: format!("expected a JSON array, found {}", kind_of(&other)),
                })
            }
        };
        if let Some(pos) = docs.iter().position(|d| !d.is_object()) {
            return Err(StoreError::Malformed {
                collection,
                reason: format!("element {pos} is not an object"),
            });
        }

        sort_documents(collection, &mut docs);
        tracing::trace!(%collection, documents = docs.len(), "collection file read");
        Ok(docs)
    }
}

fn kind_of(value: &Document) -> &'static str {
    match value {
        Document::Null => "null",
        Document::Bool(_) => "a boolean",
        Document::Number(_) => "a number",
        Document::String(_) => "a string",
        Document::Array(_) => "an array",
        Document::Object(_) => "an object",
    }
}
