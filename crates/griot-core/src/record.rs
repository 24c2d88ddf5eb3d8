//! Per-type field descriptors.
//!
//! [`Record`] tells the generic filter, ranking and statistics code which
//! fields of a record count as searchable text, which carry a region, a tag,
//! difficulties, or media. Each of the nine record types implements it once;
//! nothing else in the crate knows about concrete record fields.

use crate::types::{
    Ceremony, Collection, Craft, CuisineItem, Dance, EthnicGroup, MusicItem, Proverb, Story,
    Tradition,
};
use serde::{de::DeserializeOwned, Serialize};

/// The closed type/category tag a record carries, and which filter list it is
/// checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    /// Checked against `FilterSet::categories`.
    Category(&'static str),
    /// Checked against `FilterSet::types`.
    Type(&'static str),
}

/// A cultural content record stored in one of the nine collections.
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    const COLLECTION: Collection;

    fn id(&self) -> &str;

    /// Name, title or text. First field checked by cross-collection search.
    fn headline(&self) -> &str;

    /// Description or meaning. Second field checked by cross-collection search.
    fn summary(&self) -> &str;

    /// Fields consulted by the free-text filter (any may match).
    fn text_fields(&self) -> Vec<&str>;

    /// Prose worth a secondary relevance bonus. Defaults to the summary.
    fn secondary_text(&self) -> Vec<&str> {
        vec![self.summary()]
    }

    /// Lists of related names; each list with a match earns one bonus.
    fn related(&self) -> Vec<&[String]> {
        Vec::new()
    }

    fn region(&self) -> Option<&str> {
        None
    }

    fn tag(&self) -> Option<Tag> {
        None
    }

    /// `None` when the record type has no notion of difficulty.
    fn difficulties(&self) -> Option<Vec<&'static str>> {
        None
    }

    /// Every media list (images, videos, audio) the record carries.
    fn media(&self) -> Vec<&[String]>;

    fn has_media(&self) -> bool {
        self.media().iter().any(|list| !list.is_empty())
    }

    fn media_count(&self) -> usize {
        self.media().iter().map(|list| list.len()).sum()
    }
}

impl Record for EthnicGroup {
    const COLLECTION: Collection = Collection::EthnicGroups;

    fn id(&self) -> &str {
        &self.id
    }

    fn headline(&self) -> &str {
        &self.name
    }

    fn summary(&self) -> &str {
        &self.description
    }

    fn text_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.native_name.as_str(),
            self.description.as_str(),
            self.region.as_str(),
        ]
    }

    fn secondary_text(&self) -> Vec<&str> {
        vec![self.history.as_str(), self.description.as_str()]
    }

    fn related(&self) -> Vec<&[String]> {
        vec![self.traditions.as_slice(), self.cuisine.as_slice(), self.crafts.as_slice()]
    }

    fn region(&self) -> Option<&str> {
        Some(self.region.as_str())
    }

    fn media(&self) -> Vec<&[String]> {
        vec![self.images.as_slice(), self.videos.as_slice(), self.audio.as_slice()]
    }
}

impl Record for Tradition {
    const COLLECTION: Collection = Collection::Traditions;

    fn id(&self) -> &str {
        &self.id
    }

    fn headline(&self) -> &str {
        &self.name
    }

    fn summary(&self) -> &str {
        &self.description
    }

    fn text_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str(), self.significance.as_str()]
    }

    fn secondary_text(&self) -> Vec<&str> {
        vec![self.description.as_str(), self.significance.as_str()]
    }

    fn related(&self) -> Vec<&[String]> {
        vec![self.materials.as_slice()]
    }

    fn tag(&self) -> Option<Tag> {
        Some(Tag::Type(self.kind.as_str()))
    }

    fn media(&self) -> Vec<&[String]> {
        vec![self.images.as_slice(), self.videos.as_slice()]
    }
}

impl Record for CuisineItem {
    const COLLECTION: Collection = Collection::Cuisine;

    fn id(&self) -> &str {
        &self.id
    }

    fn headline(&self) -> &str {
        &self.name
    }

    fn summary(&self) -> &str {
        &self.description
    }

    fn text_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.native_name.as_str(), self.description.as_str()]
    }

    fn related(&self) -> Vec<&[String]> {
        vec![self.occasions.as_slice()]
    }

    fn tag(&self) -> Option<Tag> {
        Some(Tag::Category(self.category.as_str()))
    }

    fn difficulties(&self) -> Option<Vec<&'static str>> {
        Some(self.recipes.iter().map(|r| r.difficulty.as_str()).collect())
    }

    fn media(&self) -> Vec<&[String]> {
        vec![self.images.as_slice(), self.videos.as_slice()]
    }
}

impl Record for Craft {
    const COLLECTION: Collection = Collection::Crafts;

    fn id(&self) -> &str {
        &self.id
    }

    fn headline(&self) -> &str {
        &self.name
    }

    fn summary(&self) -> &str {
        &self.description
    }

    fn text_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.native_name.as_str(), self.description.as_str()]
    }

    fn related(&self) -> Vec<&[String]> {
        vec![self.materials.as_slice(), self.techniques.as_slice()]
    }

    fn tag(&self) -> Option<Tag> {
        Some(Tag::Category(self.category.as_str()))
    }

    fn difficulties(&self) -> Option<Vec<&'static str>> {
        Some(self.tutorials.iter().map(|t| t.difficulty.as_str()).collect())
    }

    fn media(&self) -> Vec<&[String]> {
        vec![self.images.as_slice(), self.videos.as_slice()]
    }
}

impl Record for Story {
    const COLLECTION: Collection = Collection::Stories;

    fn id(&self) -> &str {
        &self.id
    }

    fn headline(&self) -> &str {
        &self.title
    }

    fn summary(&self) -> &str {
        &self.description
    }

    fn text_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.native_title.as_str(),
            self.description.as_str(),
            self.content.as_str(),
        ]
    }

    fn secondary_text(&self) -> Vec<&str> {
        vec![self.description.as_str(), self.content.as_str()]
    }

    fn related(&self) -> Vec<&[String]> {
        vec![self.themes.as_slice()]
    }

    fn tag(&self) -> Option<Tag> {
        Some(Tag::Type(self.kind.as_str()))
    }

    fn media(&self) -> Vec<&[String]> {
        vec![self.images.as_slice(), self.videos.as_slice(), self.audio.as_slice()]
    }
}

impl Record for Proverb {
    const COLLECTION: Collection = Collection::Proverbs;

    fn id(&self) -> &str {
        &self.id
    }

    fn headline(&self) -> &str {
        &self.text
    }

    fn summary(&self) -> &str {
        &self.meaning
    }

    fn text_fields(&self) -> Vec<&str> {
        vec![
            self.text.as_str(),
            self.native_text.as_str(),
            self.translation.as_str(),
            self.meaning.as_str(),
        ]
    }

    fn secondary_text(&self) -> Vec<&str> {
        vec![self.meaning.as_str(), self.translation.as_str()]
    }

    fn related(&self) -> Vec<&[String]> {
        vec![self.similar_proverbs.as_slice()]
    }

    fn media(&self) -> Vec<&[String]> {
        vec![self.images.as_slice(), self.audio.as_slice()]
    }
}

impl Record for MusicItem {
    const COLLECTION: Collection = Collection::Music;

    fn id(&self) -> &str {
        &self.id
    }

    fn headline(&self) -> &str {
        &self.name
    }

    fn summary(&self) -> &str {
        &self.description
    }

    fn text_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.native_name.as_str(), self.description.as_str()]
    }

    fn related(&self) -> Vec<&[String]> {
        vec![self.performers.as_slice(), self.occasions.as_slice()]
    }

    fn tag(&self) -> Option<Tag> {
        Some(Tag::Type(self.kind.as_str()))
    }

    fn media(&self) -> Vec<&[String]> {
        vec![self.videos.as_slice(), self.audio.as_slice()]
    }
}

impl Record for Dance {
    const COLLECTION: Collection = Collection::Dances;

    fn id(&self) -> &str {
        &self.id
    }

    fn headline(&self) -> &str {
        &self.name
    }

    fn summary(&self) -> &str {
        &self.description
    }

    fn text_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.native_name.as_str(), self.description.as_str()]
    }

    fn related(&self) -> Vec<&[String]> {
        vec![self.movements.as_slice(), self.occasions.as_slice()]
    }

    fn tag(&self) -> Option<Tag> {
        Some(Tag::Type(self.kind.as_str()))
    }

    fn media(&self) -> Vec<&[String]> {
        vec![self.images.as_slice(), self.videos.as_slice(), self.audio.as_slice()]
    }
}

impl Record for Ceremony {
    const COLLECTION: Collection = Collection::Ceremonies;

    fn id(&self) -> &str {
        &self.id
    }

    fn headline(&self) -> &str {
        &self.name
    }

    fn summary(&self) -> &str {
        &self.description
    }

    fn text_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.native_name.as_str(), self.description.as_str()]
    }

    fn related(&self) -> Vec<&[String]> {
        vec![self.symbols.as_slice(), self.offerings.as_slice()]
    }

    fn tag(&self) -> Option<Tag> {
        Some(Tag::Type(self.kind.as_str()))
    }

    fn media(&self) -> Vec<&[String]> {
        vec![self.images.as_slice(), self.videos.as_slice(), self.audio.as_slice()]
    }
}
