//! Ergonomic constructors for records and documents.
//!
//! These builders are designed for readability in test assertions, not for
//! production use. They panic on invalid input rather than returning `Result`.

use griot_core::types::{
    Craft, CraftCategory, CuisineCategory, CuisineItem, EthnicGroup, Proverb, Recipe,
    RecipeDifficulty, Tradition, TraditionType,
};
use griot_core::Document;
use serde::Serialize;

// ---------------------------------------------------------------------------
// GroupBuilder
// ---------------------------------------------------------------------------

/// Fluent builder for [`EthnicGroup`] test fixtures.
///
/// ```rust
/// let group = GroupBuilder::new("duala", "Duala")
///     .region("Littoral")
///     .languages(&["Duala"])
///     .traditions(&["Ngondo"])
///     .build();
/// ```
pub struct GroupBuilder {
    group: EthnicGroup,
}

impl GroupBuilder {
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            group: EthnicGroup {
                id: id.to_string(),
                name: name.to_string(),
                native_name: String::new(),
                region: "Centre".to_string(),
                population: 0,
                languages: Vec::new(),
                description: String::new(),
                history: String::new(),
                traditions: Vec::new(),
                cuisine: Vec::new(),
                crafts: Vec::new(),
                images: Vec::new(),
                videos: Vec::new(),
                audio: Vec::new(),
            },
        }
    }

    pub fn region(mut self, region: &str) -> Self {
        self.group.region = region.to_string();
        self
    }

    pub fn native_name(mut self, native_name: &str) -> Self {
        self.group.native_name = native_name.to_string();
        self
    }

    pub fn description(mut self, description: &str) -> Self {
        self.group.description = description.to_string();
        self
    }

    pub fn history(mut self, history: &str) -> Self {
        self.group.history = history.to_string();
        self
    }

    pub fn languages(mut self, languages: &[&str]) -> Self {
        self.group.languages = strings(languages);
        self
    }

    pub fn traditions(mut self, traditions: &[&str]) -> Self {
        self.group.traditions = strings(traditions);
        self
    }

    pub fn cuisine(mut self, cuisine: &[&str]) -> Self {
        self.group.cuisine = strings(cuisine);
        self
    }

    pub fn crafts(mut self, crafts: &[&str]) -> Self {
        self.group.crafts = strings(crafts);
        self
    }

    pub fn image(mut self, url: &str) -> Self {
        self.group.images.push(url.to_string());
        self
    }

    pub fn build(self) -> EthnicGroup {
        self.group
    }

    pub fn doc(self) -> Document {
        to_doc(&self.group)
    }
}

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

pub fn tradition(id: &str, name: &str, kind: TraditionType) -> Tradition {
    Tradition {
        id: id.to_string(),
        name: name.to_string(),
        kind,
        description: String::new(),
        significance: String::new(),
        materials: Vec::new(),
        images: Vec::new(),
        videos: Vec::new(),
    }
}

pub fn dish(id: &str, category: CuisineCategory, levels: &[RecipeDifficulty]) -> CuisineItem {
    CuisineItem {
        id: id.to_string(),
        name: id.to_string(),
        native_name: String::new(),
        category,
        description: String::new(),
        occasions: Vec::new(),
        recipes: levels
            .iter()
            .enumerate()
            .map(|(i, difficulty)| Recipe {
                id: format!("{id}-{i}"),
                name: format!("{id} recipe {i}"),
                difficulty: *difficulty,
            })
            .collect(),
        images: Vec::new(),
        videos: Vec::new(),
    }
}

pub fn craft(id: &str, category: CraftCategory) -> Craft {
    Craft {
        id: id.to_string(),
        name: id.to_string(),
        native_name: String::new(),
        category,
        description: String::new(),
        materials: Vec::new(),
        techniques: Vec::new(),
        tutorials: Vec::new(),
        images: Vec::new(),
        videos: Vec::new(),
    }
}

pub fn proverb(id: &str, text: &str, meaning: &str) -> Proverb {
    Proverb {
        id: id.to_string(),
        text: text.to_string(),
        native_text: String::new(),
        translation: String::new(),
        meaning: meaning.to_string(),
        similar_proverbs: Vec::new(),
        images: Vec::new(),
        audio: Vec::new(),
    }
}

// ---------------------------------------------------------------------------
// Document helpers
// ---------------------------------------------------------------------------

pub fn to_doc<T: Serialize>(record: &T) -> Document {
    serde_json::to_value(record).expect("test record must serialize")
}

pub fn to_docs<T: Serialize>(records: &[T]) -> Vec<Document> {
    records.iter().map(to_doc).collect()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
