//! The caller-facing encyclopedia service.
//!
//! [`Encyclopedia`] owns nothing global: the collection store and the cache
//! are injected, so a process shares one cache by handing the same
//! `Arc<ContentCache>` to every service, and tests get isolation from a fresh
//! instance.

use crate::cache::{CacheDebugInfo, ContentCache};
use crate::collections::CollectionSet;
use crate::config::{Config, SearchConfig};
use crate::error::{EncyclopediaError, Result};
use crate::filter::{self, FilterSet};
use crate::record::Record;
use crate::search::{normalize_query, SearchResults};
use crate::stats::{self, EncyclopediaStats};
use crate::store::{CollectionStore, Document};
use crate::types::{
    Ceremony, Collection, Craft, CuisineItem, Dance, EthnicGroup, MusicItem, Proverb, Story,
    Tradition,
};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;

/// Content associated with one region.
#[derive(Debug, Clone, Serialize)]
pub struct RegionContent {
    pub groups: Arc<Vec<EthnicGroup>>,
    pub traditions: Arc<Vec<Tradition>>,
    pub cuisine: Arc<Vec<CuisineItem>>,
    pub crafts: Arc<Vec<Craft>>,
}

pub struct Encyclopedia<S> {
    store: Arc<S>,
    cache: Arc<ContentCache>,
    settings: SearchConfig,
}

impl<S: CollectionStore> Encyclopedia<S> {
    pub fn new(store: Arc<S>, cache: Arc<ContentCache>, settings: SearchConfig) -> Self {
        Self {
            store,
            cache,
            settings,
        }
    }

    /// Build a service with a fresh cache sized from `config`.
    pub fn from_config(store: Arc<S>, config: &Config) -> Self {
        let cache = Arc::new(ContentCache::from_config(&config.cache));
        Self::new(store, cache, config.search.clone())
    }

    pub fn settings(&self) -> &SearchConfig {
        &self.settings
    }

    pub fn cache(&self) -> &Arc<ContentCache> {
        &self.cache
    }

    // -----------------------------------------------------------------------
    // Entity access
    // -----------------------------------------------------------------------

    /// Every record of `T`'s collection satisfying `filters`, in store order.
    /// Served from the cache while the entry for this filter shape is live.
    pub async fn entities<T: Record>(&self, filters: &FilterSet) -> Result<Arc<Vec<T>>> {
        let filters = filters.normalized();
        self.cache
            .get_or_fetch(T::COLLECTION, &filters, || async {
                let records = self.load::<T>().await?;
                let kept = if filters.is_unconstrained() {
                    records
                } else {
                    filter::apply(&records, &filters)
                };
                Ok::<_, EncyclopediaError>(kept)
            })
            .await
    }

    /// Look a record up by id within its (cached) collection.
    pub async fn entity<T: Record>(&self, id: &str) -> Result<Option<T>> {
        let all = self.entities::<T>(&FilterSet::default()).await?;
        Ok(all.iter().find(|record| record.id() == id).cloned())
    }

    /// [`entities`](Self::entities) for a collection chosen at runtime,
    /// returned as JSON documents.
    pub async fn collection_json(
        &self,
        collection: Collection,
        filters: &FilterSet,
    ) -> Result<Vec<Document>> {
        match collection {
            Collection::EthnicGroups => to_documents(&self.entities::<EthnicGroup>(filters).await?),
            Collection::Traditions => to_documents(&self.entities::<Tradition>(filters).await?),
            Collection::Cuisine => to_documents(&self.entities::<CuisineItem>(filters).await?),
            Collection::Crafts => to_documents(&self.entities::<Craft>(filters).await?),
            Collection::Stories => to_documents(&self.entities::<Story>(filters).await?),
            Collection::Proverbs => to_documents(&self.entities::<Proverb>(filters).await?),
            Collection::Music => to_documents(&self.entities::<MusicItem>(filters).await?),
            Collection::Dances => to_documents(&self.entities::<Dance>(filters).await?),
            Collection::Ceremonies => to_documents(&self.entities::<Ceremony>(filters).await?),
        }
    }

    /// Fetch all nine collections concurrently. Any failure fails the whole
    /// set.
    pub async fn fetch_all(&self, filters: &FilterSet) -> Result<CollectionSet> {
        let (groups, traditions, cuisine, crafts, stories, proverbs, music, dances, ceremonies) = tokio::try_join!(
            self.entities::<EthnicGroup>(filters),
            self.entities::<Tradition>(filters),
            self.entities::<CuisineItem>(filters),
            self.entities::<Craft>(filters),
            self.entities::<Story>(filters),
            self.entities::<Proverb>(filters),
            self.entities::<MusicItem>(filters),
            self.entities::<Dance>(filters),
            self.entities::<Ceremony>(filters),
        )?;
        Ok(CollectionSet {
            groups,
            traditions,
            cuisine,
            crafts,
            stories,
            proverbs,
            music,
            dances,
            ceremonies,
        })
    }

    /// Groups, traditions, cuisine and crafts fetched under a single-region
    /// filter. Only ethnic groups carry a region, so the other three come back
    /// unfiltered.
    pub async fn content_by_region(&self, region: &str) -> Result<RegionContent> {
        let filters = FilterSet::new().with_regions([region]);
        let (groups, traditions, cuisine, crafts) = tokio::try_join!(
            self.entities::<EthnicGroup>(&filters),
            self.entities::<Tradition>(&filters),
            self.entities::<CuisineItem>(&filters),
            self.entities::<Craft>(&filters),
        )?;
        Ok(RegionContent {
            groups,
            traditions,
            cuisine,
            crafts,
        })
    }

    // -----------------------------------------------------------------------
    // Search
    // -----------------------------------------------------------------------

    /// Cross-collection search, bounded by the configured fetch timeout.
    pub async fn search(&self, query: &str, limit: usize) -> Result<SearchResults> {
        self.run_search(query, limit, self.settings.fetch_timeout()).await
    }

    /// Cross-collection search whose collection fan-out must finish within
    /// `deadline`.
    pub async fn search_within(
        &self,
        query: &str,
        limit: usize,
        deadline: Duration,
    ) -> Result<SearchResults> {
        self.run_search(query, limit, Some(deadline)).await
    }

    async fn run_search(
        &self,
        query: &str,
        limit: usize,
        deadline: Option<Duration>,
    ) -> Result<SearchResults> {
        let started = Instant::now();
        let needle = normalize_query(query);

        if needle.chars().count() < self.settings.min_query_len {
            tracing::debug!(query, "query too short, skipping search");
            return Ok(SearchResults::empty(started.elapsed()));
        }

        let everything = FilterSet::default();
        let fetched = match deadline {
            Some(deadline) => tokio::time::timeout(deadline, self.fetch_all(&everything))
                .await
                .map_err(|_| {
                    tracing::warn!(query, ?deadline, "search deadline exceeded");
                    EncyclopediaError::DeadlineExceeded(deadline)
                })?,
            None => self.fetch_all(&everything).await,
        };
        let set = fetched.map_err(|error| {
            tracing::warn!(query, %error, "search aborted");
            EncyclopediaError::SearchFailed(Box::new(error))
        })?;

        let mut results =
            SearchResults::assemble(&set, &needle, limit, self.settings.max_suggestions);
        results.search_time_ms = started.elapsed().as_millis() as u64;
        tracing::debug!(
            query,
            scanned = set.len(),
            total = results.total_results,
            elapsed_ms = results.search_time_ms,
            "search complete"
        );
        Ok(results)
    }

    // -----------------------------------------------------------------------
    // Statistics and cache administration
    // -----------------------------------------------------------------------

    /// Counts over the nine collections, each narrowed by `filters`.
    pub async fn stats(&self, filters: &FilterSet) -> Result<EncyclopediaStats> {
        let set = self.fetch_all(filters).await?;
        Ok(stats::aggregate(&set))
    }

    pub async fn clear_cache(&self) {
        self.cache.clear().await;
    }

    pub async fn cache_debug_info(&self) -> CacheDebugInfo {
        self.cache.debug_info().await
    }

    // -----------------------------------------------------------------------
    // Store access
    // -----------------------------------------------------------------------

    async fn load<T: Record>(&self) -> Result<Vec<T>> {
        let collection = T::COLLECTION;
        let docs = self.store.fetch_all(collection).await.map_err(|source| {
            tracing::warn!(%collection, error = %source, "collection fetch failed");
            EncyclopediaError::Fetch { collection, source }
        })?;
        tracing::debug!(%collection, documents = docs.len(), "collection fetched");
        docs.into_iter().map(|doc| decode(collection, doc)).collect()
    }
}

fn decode<T: Record>(collection: Collection, doc: Document) -> Result<T> {
    let id = doc.get("id").and_then(|v| v.as_str()).map(str::to_owned);
    serde_json::from_value(doc).map_err(|source| EncyclopediaError::Decode {
        collection,
        id,
        source,
    })
}

fn to_documents<T: Record>(records: &[T]) -> Result<Vec<Document>> {
    records
        .iter()
        .map(|r| serde_json::to_value(r).map_err(EncyclopediaError::Encode))
        .collect()
}
