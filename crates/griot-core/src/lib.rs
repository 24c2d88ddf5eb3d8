//! griot-core — cultural encyclopedia core library.
//!
//! This crate holds the record model of the nine content collections and the
//! layers that serve them: filtering, caching, cross-collection search and
//! statistics. Storage is a seam ([`CollectionStore`]); concrete stores live
//! in `griot-store`.
//!
//! # Architecture
//!
//! ```text
//! CollectionStore ──► Cache ──► Filter ──► Encyclopedia
//!                                             │
//!                              Search ◄───────┼───────► Stats
//! ```
//!
//! Every read goes through the cache keyed by collection and normalised
//! filter set. Search and statistics fan out over all nine collections
//! concurrently and reduce the results with pure functions.

pub mod cache;
pub mod collections;
pub mod config;
pub mod error;
pub mod filter;
pub mod record;
pub mod search;
pub mod service;
pub mod stats;
pub mod store;
pub mod types;

pub use cache::{CacheDebugInfo, ContentCache};
pub use collections::CollectionSet;
pub use config::Config;
pub use error::{EncyclopediaError, Result, StoreError};
pub use filter::FilterSet;
pub use record::Record;
pub use search::{Hit, SearchResults};
pub use service::{Encyclopedia, RegionContent};
pub use stats::EncyclopediaStats;
pub use store::{CollectionStore, Document};
pub use types::{Collection, REGIONS};
