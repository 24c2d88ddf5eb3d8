//! Statistics aggregator: a pure reduction over a [`CollectionSet`].

use crate::collections::CollectionSet;
use crate::record::Record;
use crate::types::REGIONS;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EncyclopediaStats {
    pub total_groups: usize,
    pub total_traditions: usize,
    pub total_cuisine_items: usize,
    pub total_crafts: usize,
    pub total_stories: usize,
    pub total_proverbs: usize,
    pub total_music_items: usize,
    pub total_dances: usize,
    pub total_ceremonies: usize,
    /// Distinct `region` values across ethnic groups.
    pub regions: usize,
    /// Distinct languages across ethnic groups.
    pub languages: usize,
    /// Media references across all nine collections.
    pub total_media_items: usize,
    /// How many of the ten administrative regions have at least one group.
    pub regions_covered: usize,
    pub last_updated: DateTime<Utc>,
}

pub fn aggregate(set: &CollectionSet) -> EncyclopediaStats {
    let regions: HashSet<&str> = set.groups.iter().map(|g| g.region.as_str()).collect();
    let languages: HashSet<&str> = set
        .groups
        .iter()
        .flat_map(|g| g.languages.iter().map(String::as_str))
        .collect();

    EncyclopediaStats {
        total_groups: set.groups.len(),
        total_traditions: set.traditions.len(),
        total_cuisine_items: set.cuisine.len(),
        total_crafts: set.crafts.len(),
        total_stories: set.stories.len(),
        total_proverbs: set.proverbs.len(),
        total_music_items: set.music.len(),
        total_dances: set.dances.len(),
        total_ceremonies: set.ceremonies.len(),
        regions: regions.len(),
        languages: languages.len(),
        total_media_items: media_total(&set.groups)
            + media_total(&set.traditions)
            + media_total(&set.cuisine)
            + media_total(&set.crafts)
            + media_total(&set.stories)
            + media_total(&set.proverbs)
            + media_total(&set.music)
            + media_total(&set.dances)
            + media_total(&set.ceremonies),
        regions_covered: REGIONS.iter().filter(|r| regions.contains(*r)).count(),
        last_updated: Utc::now(),
    }
}

fn media_total<T: Record>(items: &[T]) -> usize {
    items.iter().map(|item| item.media_count()).sum()
}
