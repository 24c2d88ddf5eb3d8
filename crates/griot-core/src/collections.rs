//! The nine collections fetched together.

use crate::types::{
    Ceremony, Craft, CuisineItem, Dance, EthnicGroup, MusicItem, Proverb, Story, Tradition,
};
use std::sync::Arc;

/// One snapshot of every collection, as served by the cache. Fields are
/// shared with the cache, so holding a set is cheap.
#[derive(Debug, Clone, Default)]
pub struct CollectionSet {
    pub groups: Arc<Vec<EthnicGroup>>,
    pub traditions: Arc<Vec<Tradition>>,
    pub cuisine: Arc<Vec<CuisineItem>>,
    pub crafts: Arc<Vec<Craft>>,
    pub stories: Arc<Vec<Story>>,
    pub proverbs: Arc<Vec<Proverb>>,
    pub music: Arc<Vec<MusicItem>>,
    pub dances: Arc<Vec<Dance>>,
    pub ceremonies: Arc<Vec<Ceremony>>,
}

impl CollectionSet {
    /// Total number of records across all nine collections.
    pub fn len(&self) -> usize {
        self.groups.len()
            + self.traditions.len()
            + self.cuisine.len()
            + self.crafts.len()
            + self.stories.len()
            + self.proverbs.len()
            + self.music.len()
            + self.dances.len()
            + self.ceremonies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
