//! Query/filter engine.
//!
//! A [`FilterSet`] is a partially specified predicate over a record's region,
//! category/type tag, free text, media presence and difficulty. Absent fields
//! and empty lists both mean "no constraint". An empty string inside a list
//! is a literal value, not a wildcard. [`apply`] is the single generic
//! composer: every active dimension is an independent intersection, so the
//! order in which they run never changes the result.

use crate::error::EncyclopediaError;
use crate::record::{Record, Tag};
use crate::types::Collection;
use serde::{Deserialize, Serialize};

/// Filter options shared by every collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FilterSet {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub regions: Option<Vec<String>>,
    /// Single-region shorthand. It constrains alongside `regions`: a record
    /// must satisfy both.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub types: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_query: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub has_media: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub difficulty: Option<Vec<String>>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a filter set from JSON, rejecting unknown keys.
    pub fn from_json(json: &str) -> Result<Self, EncyclopediaError> {
        serde_json::from_str(json).map_err(|e| EncyclopediaError::InvalidFilter(e.to_string()))
    }

    pub fn with_regions<I, S>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.regions = Some(regions.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = Some(categories.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_types<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.types = Some(types.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.search_query = Some(query.into());
        self
    }

    pub fn with_media(mut self, has_media: bool) -> Self {
        self.has_media = Some(has_media);
        self
    }

    pub fn with_difficulty<I, S>(mut self, difficulty: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.difficulty = Some(difficulty.into_iter().map(Into::into).collect());
        self
    }

    /// Canonical form: `region` intersected into `regions`, lists sorted and
    /// de-duplicated, empty lists and empty queries dropped, query lowercased.
    /// Logically identical filter sets normalise to equal values, and
    /// normalising twice changes nothing.
    ///
    /// When `region` is not among `regions` no region-bearing record can
    /// match, and both are kept so the set stays unsatisfiable.
    pub fn normalized(&self) -> Self {
        let (regions, region) = match (canonical_list(self.regions.clone()), &self.region) {
            (None, None) => (None, None),
            (None, Some(r)) => (Some(vec![r.clone()]), None),
            (Some(list), None) => (Some(list), None),
            (Some(list), Some(r)) if list.contains(r) => (Some(vec![r.clone()]), None),
            (Some(list), Some(r)) => (Some(list), Some(r.clone())),
        };

        Self {
            regions,
            region,
            categories: canonical_list(self.categories.clone()),
            types: canonical_list(self.types.clone()),
            search_query: self
                .search_query
                .as_ref()
                .filter(|q| !q.is_empty())
                .map(|q| q.to_lowercase()),
            has_media: self.has_media,
            difficulty: canonical_list(self.difficulty.clone()),
        }
    }

    /// True when no dimension constrains anything.
    pub fn is_unconstrained(&self) -> bool {
        self.normalized() == Self::default()
    }

    /// Deterministic cache key for `collection` under this filter set.
    ///
    /// Dimensions are written in a fixed order, so the key depends only on
    /// the normalised content, never on how the set was built.
    pub fn cache_key(&self, collection: Collection) -> String {
        let n = self.normalized();
        let mut parts = Vec::new();
        if let Some(v) = &n.categories {
            parts.push(format!("categories={v:?}"));
        }
        if let Some(v) = &n.difficulty {
            parts.push(format!("difficulty={v:?}"));
        }
        if let Some(v) = n.has_media {
            parts.push(format!("hasMedia={v}"));
        }
        if let Some(v) = &n.region {
            parts.push(format!("region={v:?}"));
        }
        if let Some(v) = &n.regions {
            parts.push(format!("regions={v:?}"));
        }
        if let Some(v) = &n.search_query {
            parts.push(format!("searchQuery={v:?}"));
        }
        if let Some(v) = &n.types {
            parts.push(format!("types={v:?}"));
        }
        format!("{}_{{{}}}", collection.name(), parts.join(";"))
    }
}

fn canonical_list(list: Option<Vec<String>>) -> Option<Vec<String>> {
    let mut list = list?;
    list.sort();
    list.dedup();
    (!list.is_empty()).then_some(list)
}

// ---------------------------------------------------------------------------
// Predicate composition
// ---------------------------------------------------------------------------

/// Keep the records satisfying every active dimension of `filters`, in their
/// input order. The input is never modified.
pub fn apply<T: Record>(items: &[T], filters: &FilterSet) -> Vec<T> {
    let filters = filters.normalized();
    items
        .iter()
        .filter(|item| matches_normalized(*item, &filters))
        .cloned()
        .collect()
}

/// Does a single record satisfy `filters`?
pub fn matches<T: Record>(item: &T, filters: &FilterSet) -> bool {
    matches_normalized(item, &filters.normalized())
}

fn matches_normalized<T: Record>(item: &T, filters: &FilterSet) -> bool {
    region_matches(item, filters)
        && tag_matches(item, filters)
        && text_matches(item, filters)
        && media_matches(item, filters)
        && difficulty_matches(item, filters)
}

fn region_matches<T: Record>(item: &T, filters: &FilterSet) -> bool {
    let Some(region) = item.region() else {
        return true;
    };
    filters
        .regions
        .as_ref()
        .map_or(true, |regions| regions.iter().any(|r| r == region))
        && filters.region.as_ref().map_or(true, |r| r == region)
}

fn tag_matches<T: Record>(item: &T, filters: &FilterSet) -> bool {
    match item.tag() {
        Some(Tag::Category(category)) => filters
            .categories
            .as_ref()
            .map_or(true, |wanted| wanted.iter().any(|c| c == category)),
        Some(Tag::Type(kind)) => filters
            .types
            .as_ref()
            .map_or(true, |wanted| wanted.iter().any(|t| t == kind)),
        None => true,
    }
}

fn text_matches<T: Record>(item: &T, filters: &FilterSet) -> bool {
    match &filters.search_query {
        Some(query) => item
            .text_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(query.as_str())),
        None => true,
    }
}

fn media_matches<T: Record>(item: &T, filters: &FilterSet) -> bool {
    match filters.has_media {
        Some(wanted) => item.has_media() == wanted,
        None => true,
    }
}

fn difficulty_matches<T: Record>(item: &T, filters: &FilterSet) -> bool {
    match (&filters.difficulty, item.difficulties()) {
        (Some(wanted), Some(levels)) => levels.iter().any(|l| wanted.iter().any(|w| w == l)),
        _ => true,
    }
}
