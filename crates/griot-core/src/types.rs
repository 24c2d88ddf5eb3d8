//! Core types for griot-core.
//!
//! This module defines the nine [`Collection`]s of cultural content, the
//! record type stored in each of them, and the closed tag enumerations those
//! records carry. Records deserialize from the camelCase JSON documents the
//! collection store hands back; absent list fields default to empty.

use serde::{Deserialize, Serialize};

/// The ten administrative regions, in display order.
pub const REGIONS: [&str; 10] = [
    "Adamaoua",
    "Centre",
    "Est",
    "Extrême-Nord",
    "Littoral",
    "Nord",
    "Nord-Ouest",
    "Ouest",
    "Sud",
    "Sud-Ouest",
];

// ---------------------------------------------------------------------------
// Collection
// ---------------------------------------------------------------------------

/// One of the nine fixed collections of cultural content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    EthnicGroups,
    Traditions,
    Cuisine,
    Crafts,
    Stories,
    Proverbs,
    Music,
    Dances,
    Ceremonies,
}

impl Collection {
    /// Every collection, in the order search results are assembled.
    pub const ALL: [Collection; 9] = [
        Collection::EthnicGroups,
        Collection::Traditions,
        Collection::Cuisine,
        Collection::Crafts,
        Collection::Stories,
        Collection::Proverbs,
        Collection::Music,
        Collection::Dances,
        Collection::Ceremonies,
    ];

    /// Name of the collection in the document store.
    pub fn name(self) -> &'static str {
        match self {
            Collection::EthnicGroups => "ethnic_groups",
            Collection::Traditions => "traditions",
            Collection::Cuisine => "cuisine",
            Collection::Crafts => "crafts",
            Collection::Stories => "stories",
            Collection::Proverbs => "proverbs",
            Collection::Music => "music",
            Collection::Dances => "dances",
            Collection::Ceremonies => "ceremonies",
        }
    }

    /// Document field the store orders a full-collection fetch by.
    pub fn order_field(self) -> &'static str {
        match self {
            Collection::Stories => "title",
            Collection::Proverbs => "text",
            _ => "name",
        }
    }

    /// Parse a store name (`ethnic_groups`) or its hyphenated form.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.trim().to_ascii_lowercase().replace('-', "_");
        Self::ALL.into_iter().find(|c| c.name() == normalized)
    }
}

impl std::fmt::Display for Collection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Collection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| format!("unknown collection: {s}"))
    }
}

// ---------------------------------------------------------------------------
// Tag enumerations
// ---------------------------------------------------------------------------

/// Declares a closed, kebab-case tag enumeration with an `as_str` accessor.
macro_rules! tag_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "kebab-case")]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($name::$variant => $text),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

tag_enum!(TraditionType {
    Ceremonial => "ceremonial",
    Social => "social",
    Religious => "religious",
    Seasonal => "seasonal",
    LifeCycle => "life-cycle",
});

tag_enum!(CuisineCategory {
    Main => "main",
    Side => "side",
    Beverage => "beverage",
    Dessert => "dessert",
    Snack => "snack",
});

tag_enum!(CraftCategory {
    Textile => "textile",
    Pottery => "pottery",
    Woodwork => "woodwork",
    Metalwork => "metalwork",
    Basketwork => "basketwork",
    Sculpture => "sculpture",
    Jewelry => "jewelry",
});

tag_enum!(StoryType {
    Folktale => "folktale",
    Legend => "legend",
    Myth => "myth",
    History => "history",
    Moral => "moral",
    Creation => "creation",
});

tag_enum!(MusicType {
    Song => "song",
    Instrumental => "instrumental",
    Chant => "chant",
    Drumming => "drumming",
});

tag_enum!(DanceType {
    Ceremonial => "ceremonial",
    Social => "social",
    Ritual => "ritual",
    Entertainment => "entertainment",
    War => "war",
});

tag_enum!(CeremonyType {
    Birth => "birth",
    Initiation => "initiation",
    Marriage => "marriage",
    Death => "death",
    Harvest => "harvest",
    Healing => "healing",
    Spiritual => "spiritual",
});

tag_enum!(
    /// Recipe difficulty.
    RecipeDifficulty {
        Easy => "easy",
        Medium => "medium",
        Hard => "hard",
    }
);

tag_enum!(
    /// Craft tutorial difficulty.
    TutorialDifficulty {
        Beginner => "beginner",
        Intermediate => "intermediate",
        Advanced => "advanced",
    }
);

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// An ethnic group. The only region-bearing record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EthnicGroup {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub native_name: String,
    pub region: String,
    #[serde(default)]
    pub population: u64,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub history: String,
    /// Names of traditions practised by the group.
    #[serde(default)]
    pub traditions: Vec<String>,
    /// Names of dishes associated with the group.
    #[serde(default)]
    pub cuisine: Vec<String>,
    /// Names of crafts associated with the group.
    #[serde(default)]
    pub crafts: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
    #[serde(default)]
    pub audio: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tradition {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TraditionType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub significance: String,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub name: String,
    pub difficulty: RecipeDifficulty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CuisineItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub native_name: String,
    pub category: CuisineCategory,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub occasions: Vec<String>,
    #[serde(default)]
    pub recipes: Vec<Recipe>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutorial {
    pub id: String,
    pub title: String,
    pub difficulty: TutorialDifficulty,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Craft {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub native_name: String,
    pub category: CraftCategory,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub materials: Vec<String>,
    #[serde(default)]
    pub techniques: Vec<String>,
    #[serde(default)]
    pub tutorials: Vec<Tutorial>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub native_title: String,
    #[serde(rename = "type")]
    pub kind: StoryType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub themes: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
    #[serde(default)]
    pub audio: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proverb {
    pub id: String,
    pub text: String,
    #[serde(default)]
    pub native_text: String,
    #[serde(default)]
    pub translation: String,
    #[serde(default)]
    pub meaning: String,
    #[serde(default)]
    pub similar_proverbs: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub audio: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MusicItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub native_name: String,
    #[serde(rename = "type")]
    pub kind: MusicType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub performers: Vec<String>,
    #[serde(default)]
    pub occasions: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
    #[serde(default)]
    pub audio: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dance {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub native_name: String,
    #[serde(rename = "type")]
    pub kind: DanceType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub movements: Vec<String>,
    #[serde(default)]
    pub occasions: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
    #[serde(default)]
    pub audio: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ceremony {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub native_name: String,
    #[serde(rename = "type")]
    pub kind: CeremonyType,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub symbols: Vec<String>,
    #[serde(default)]
    pub offerings: Vec<String>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default)]
    pub videos: Vec<String>,
    #[serde(default)]
    pub audio: Vec<String>,
}
