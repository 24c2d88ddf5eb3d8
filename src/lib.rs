//! griot — searchable encyclopedia of Cameroonian cultural heritage.
//!
//! Facade over the workspace crates so that integration tests, benchmarks and
//! the `griot` binary import one path.
//!
//! # Architecture
//!
//! ```text
//! griot-store ──► griot-core (cache ─► filter ─► search / stats) ──► CLI
//! ```

pub use griot_core::{
    CacheDebugInfo, Collection, CollectionSet, CollectionStore, Config, ContentCache, Document,
    Encyclopedia, EncyclopediaError, EncyclopediaStats, FilterSet, Record, RegionContent,
    SearchResults, StoreError, REGIONS,
};
pub use griot_store::{JsonDirStore, MemoryStore};
