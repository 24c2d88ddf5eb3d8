//! Error types for griot-core.

use crate::types::Collection;
use std::time::Duration;
use thiserror::Error;

/// Failure reported by a [`CollectionStore`](crate::store::CollectionStore).
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("collection {0} is unavailable")]
    Unavailable(Collection),
    #[error("store io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("undecodable document: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("malformed collection {collection}: {reason}")]
    Malformed {
        collection: Collection,
        reason: String,
    },
}

#[derive(Debug, Error)]
pub enum EncyclopediaError {
    /// The collection store failed. Never retried and never cached.
    #[error("failed to fetch {collection}: {source}")]
    Fetch {
        collection: Collection,
        #[source]
        source: StoreError,
    },
    /// A stored document does not match the record schema of its collection.
    #[error("failed to decode {collection} document {id:?}: {source}")]
    Decode {
        collection: Collection,
        id: Option<String>,
        #[source]
        source: serde_json::Error,
    },
    /// A collection fetch inside a cross-collection search failed; no partial
    /// results are returned.
    #[error("search failed")]
    SearchFailed(#[source] Box<EncyclopediaError>),
    #[error("deadline of {0:?} exceeded")]
    DeadlineExceeded(Duration),
    #[error("invalid filter: {0}")]
    InvalidFilter(String),
    #[error("failed to encode records: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type Result<T, E = EncyclopediaError> = std::result::Result<T, E>;
