//! Cross-collection free-text matching, relevance ranking and
//! autocomplete suggestions.
//!
//! Matching checks exactly two fields per record (its headline and summary).
//! Each collection keeps its first `limit` matches in collection order, and
//! only those are scored and stably re-sorted, so truncation never depends on
//! relevance.
//!
//! # Scoring
//!
//! | Signal | Points |
//! |--------|--------|
//! | needle in headline (name, title, text) | +10 |
//! | needle in any secondary prose (history, description, meaning, …) | +5 |
//! | needle in at least one element of a related list | +3 per list |

use crate::collections::CollectionSet;
use crate::record::Record;
use crate::types::{
    Ceremony, Craft, CuisineItem, Dance, EthnicGroup, MusicItem, Proverb, Story, Tradition,
    REGIONS,
};
use serde::Serialize;
use std::time::Duration;

pub const HEADLINE_WEIGHT: u32 = 10;
pub const SECONDARY_WEIGHT: u32 = 5;
pub const RELATED_WEIGHT: u32 = 3;

const GROUP_SUGGESTIONS: usize = 3;
const TRADITION_SUGGESTIONS: usize = 2;
const REGION_SUGGESTIONS: usize = 2;

/// A matched record and its relevance score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Hit<T> {
    pub score: u32,
    #[serde(flatten)]
    pub record: T,
}

/// The ranked result envelope of a cross-collection search.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchResults {
    pub groups: Vec<Hit<EthnicGroup>>,
    pub traditions: Vec<Hit<Tradition>>,
    pub cuisine: Vec<Hit<CuisineItem>>,
    pub crafts: Vec<Hit<Craft>>,
    pub stories: Vec<Hit<Story>>,
    pub proverbs: Vec<Hit<Proverb>>,
    pub music: Vec<Hit<MusicItem>>,
    pub dances: Vec<Hit<Dance>>,
    pub ceremonies: Vec<Hit<Ceremony>>,
    /// Sum of the nine per-collection lengths.
    pub total_results: usize,
    pub search_time_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<Vec<String>>,
}

impl SearchResults {
    /// The envelope returned for a query too short to search.
    pub fn empty(elapsed: Duration) -> Self {
        Self {
            search_time_ms: elapsed.as_millis() as u64,
            ..Self::default()
        }
    }

    /// Match, truncate and rank every collection of `set` against `needle`
    /// (already normalised with [`normalize_query`]).
    pub fn assemble(
        set: &CollectionSet,
        needle: &str,
        limit: usize,
        max_suggestions: usize,
    ) -> Self {
        let mut results = Self {
            groups: matching(&set.groups, needle, limit),
            traditions: matching(&set.traditions, needle, limit),
            cuisine: matching(&set.cuisine, needle, limit),
            crafts: matching(&set.crafts, needle, limit),
            stories: matching(&set.stories, needle, limit),
            proverbs: matching(&set.proverbs, needle, limit),
            music: matching(&set.music, needle, limit),
            dances: matching(&set.dances, needle, limit),
            ceremonies: matching(&set.ceremonies, needle, limit),
            total_results: 0,
            search_time_ms: 0,
            suggestions: Some(suggestions(
                needle,
                &set.groups,
                &set.traditions,
                max_suggestions,
            )),
        };
        results.total_results = results.groups.len()
            + results.traditions.len()
            + results.cuisine.len()
            + results.crafts.len()
            + results.stories.len()
            + results.proverbs.len()
            + results.music.len()
            + results.dances.len()
            + results.ceremonies.len();
        results
    }
}

/// Trim and lowercase a raw query.
pub fn normalize_query(query: &str) -> String {
    query.trim().to_lowercase()
}

/// Does the needle occur in the record's headline or summary?
pub fn is_match<T: Record>(item: &T, needle: &str) -> bool {
    contains(item.headline(), needle) || contains(item.summary(), needle)
}

/// First `limit` matches in collection order, then ranked.
pub fn matching<T: Record>(items: &[T], needle: &str, limit: usize) -> Vec<Hit<T>> {
    let matched: Vec<T> = items
        .iter()
        .filter(|item| is_match(*item, needle))
        .take(limit)
        .cloned()
        .collect();
    rank(matched, needle)
}

/// Score `items` and sort them by descending score. Ties keep their input
/// order.
pub fn rank<T: Record>(items: Vec<T>, needle: &str) -> Vec<Hit<T>> {
    let mut hits: Vec<Hit<T>> = items
        .into_iter()
        .map(|record| Hit {
            score: relevance(&record, needle),
            record,
        })
        .collect();
    hits.sort_by(|a, b| b.score.cmp(&a.score));
    hits
}

pub fn relevance<T: Record>(item: &T, needle: &str) -> u32 {
    let mut score = 0;
    if contains(item.headline(), needle) {
        score += HEADLINE_WEIGHT;
    }
    if item.secondary_text().iter().any(|text| contains(text, needle)) {
        score += SECONDARY_WEIGHT;
    }
    for list in item.related() {
        if list.iter().any(|name| contains(name, needle)) {
            score += RELATED_WEIGHT;
        }
    }
    score
}

/// Autocomplete strings for `needle`: group names, then tradition names, then
/// regions, each starting with the needle. Duplicates are dropped and the
/// first occurrence keeps its priority.
pub fn suggestions(
    needle: &str,
    groups: &[EthnicGroup],
    traditions: &[Tradition],
    max: usize,
) -> Vec<String> {
    let starts = |s: &str| s.to_lowercase().starts_with(needle);

    let candidates = groups
        .iter()
        .map(|g| g.name.as_str())
        .filter(|n| starts(*n))
        .take(GROUP_SUGGESTIONS)
        .chain(
            traditions
                .iter()
                .map(|t| t.name.as_str())
                .filter(|n| starts(*n))
                .take(TRADITION_SUGGESTIONS),
        )
        .chain(
            REGIONS
                .iter()
                .copied()
                .filter(|r| starts(*r))
                .take(REGION_SUGGESTIONS),
        );

    let mut out: Vec<String> = Vec::new();
    for candidate in candidates {
        if !out.iter().any(|s| s == candidate) {
            out.push(candidate.to_string());
        }
    }
    out.truncate(max);
    out
}

fn contains(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}
