//! Static heritage corpus used across harnesses.
//!
//! A small but complete data set: every one of the nine collections has at
//! least two documents, groups span four regions, and some records carry
//! media while others do not.

use super::FakeStore;
use griot_core::config::SearchConfig;
use griot_core::{Collection, ContentCache, Document, Encyclopedia};
use griot_store::MemoryStore;
use serde_json::json;
use std::path::Path;
use std::sync::Arc;

pub fn groups() -> Vec<Document> {
    vec![
        json!({
            "id": "bamileke",
            "name": "Bamiléké",
            "nativeName": "Bamiléké",
            "region": "Ouest",
            "population": 3500000,
            "languages": ["Ghomálá'", "Fe'fe'"],
            "description": "Grassfields peoples organised in chiefdoms",
            "history": "Settled the western highlands after leaving the Tikar plain",
            "traditions": ["Nguon"],
            "cuisine": ["Taro sauce jaune"],
            "crafts": ["Beaded masks"],
            "images": ["https://media.example/bamileke.jpg"]
        }),
        json!({
            "id": "bamoun",
            "name": "Bamoun",
            "region": "Ouest",
            "population": 400000,
            "languages": ["Shüpamom"],
            "description": "Kingdom of Foumban, known for bronze casting",
            "history": "Founded by Nchare Yen in the fourteenth century",
            "traditions": ["Nguon"],
            "crafts": ["Bronze casting"],
            "videos": ["https://media.example/foumban.mp4"]
        }),
        json!({
            "id": "duala",
            "name": "Duala",
            "region": "Littoral",
            "population": 150000,
            "languages": ["Duala"],
            "description": "Coastal Sawa people of the Wouri estuary",
            "history": "Traders on the Wouri since the sixteenth century",
            "traditions": ["Ngondo"],
            "cuisine": ["Ndolé"],
            "audio": ["https://media.example/essewe.mp3"]
        }),
        json!({
            "id": "beti",
            "name": "Beti",
            "region": "Centre",
            "population": 2000000,
            "languages": ["Ewondo", "Bulu"],
            "description": "Forest peoples of the Centre and Sud"
        }),
        json!({
            "id": "fulbe",
            "name": "Fulbe",
            "nativeName": "Fulɓe",
            "region": "Nord",
            "languages": ["Fulfulde"],
            "description": "Pastoralist communities of the northern savanna",
            "history": "Established the Adamawa emirates"
        }),
    ]
}

pub fn traditions() -> Vec<Document> {
    vec![
        json!({
            "id": "ngondo",
            "name": "Ngondo",
            "type": "ceremonial",
            "description": "Annual water festival of the Sawa",
            "significance": "Communion with the ancestral water spirits",
            "materials": ["pirogues", "sacred vessel"],
            "images": ["https://media.example/ngondo.jpg"]
        }),
        json!({
            "id": "nguon",
            "name": "Nguon",
            "type": "religious",
            "description": "Bamoun festival of renewal",
            "significance": "The people judge their king"
        }),
        json!({
            "id": "lela",
            "name": "Lela",
            "type": "seasonal",
            "description": "Year-end festival of Bali Nyonga"
        }),
    ]
}

pub fn cuisine() -> Vec<Document> {
    vec![
        json!({
            "id": "ndole",
            "name": "Ndolé",
            "category": "main",
            "description": "Bitterleaf stew with groundnuts",
            "occasions": ["weddings", "Sunday lunch"],
            "recipes": [{"id": "ndole-1", "name": "Ndolé with shrimp", "difficulty": "hard"}],
            "images": ["https://media.example/ndole.jpg"]
        }),
        json!({
            "id": "koki",
            "name": "Koki",
            "category": "main",
            "description": "Steamed black-eyed pea cake",
            "recipes": [{"id": "koki-1", "name": "Koki in banana leaves", "difficulty": "medium"}]
        }),
        json!({
            "id": "puff-puff",
            "name": "Puff-puff",
            "category": "snack",
            "description": "Fried dough balls",
            "recipes": [{"id": "puff-1", "name": "Street puff-puff", "difficulty": "easy"}]
        }),
    ]
}

pub fn crafts() -> Vec<Document> {
    vec![
        json!({
            "id": "bronze",
            "name": "Bronze casting",
            "category": "metalwork",
            "description": "Lost-wax casting from the Foumban workshops",
            "materials": ["bronze", "wax", "clay"],
            "techniques": ["lost-wax"],
            "tutorials": [{"id": "bronze-1", "title": "Modelling in wax", "difficulty": "advanced"}],
            "images": ["https://media.example/bronze.jpg"]
        }),
        json!({
            "id": "baskets",
            "name": "Raffia baskets",
            "category": "basketwork",
            "description": "Coiled raffia baskets",
            "materials": ["raffia"],
            "tutorials": [{"id": "baskets-1", "title": "First coil", "difficulty": "beginner"}]
        }),
    ]
}

pub fn stories() -> Vec<Document> {
    vec![
        json!({
            "id": "tortoise",
            "title": "The Tortoise and the Birds",
            "type": "folktale",
            "description": "Why the tortoise shell is cracked",
            "content": "Tortoise borrowed feathers from every bird...",
            "themes": ["cunning", "greed"]
        }),
        json!({
            "id": "wouri",
            "title": "The Birth of the Wouri",
            "type": "legend",
            "description": "How the river came to the Sawa",
            "themes": ["water", "ancestors"],
            "audio": ["https://media.example/wouri.mp3"]
        }),
    ]
}

pub fn proverbs() -> Vec<Document> {
    vec![
        json!({
            "id": "bracelet",
            "text": "A single bracelet does not jingle",
            "translation": "One bracelet makes no sound",
            "meaning": "Unity is strength",
            "similarProverbs": ["One finger cannot lift a pebble"]
        }),
        json!({
            "id": "stranger",
            "text": "The stranger has big eyes but sees nothing",
            "meaning": "Newcomers miss what locals know"
        }),
    ]
}

pub fn music() -> Vec<Document> {
    vec![
        json!({
            "id": "bikutsi",
            "name": "Bikutsi",
            "type": "song",
            "description": "Fast triple-time rhythm of the Beti",
            "performers": ["Les Têtes Brûlées"],
            "audio": ["https://media.example/bikutsi.mp3"]
        }),
        json!({
            "id": "makossa",
            "name": "Makossa",
            "type": "song",
            "description": "Urban dance music from Duala",
            "performers": ["Manu Dibango"]
        }),
    ]
}

pub fn dances() -> Vec<Document> {
    vec![
        json!({
            "id": "ben-skin",
            "name": "Ben skin",
            "type": "social",
            "description": "Hip-driven dance of the Ouest",
            "occasions": ["weddings"]
        }),
        json!({
            "id": "mbaya",
            "name": "Mbaya",
            "type": "ceremonial",
            "description": "Royal dance of the Bamoun court",
            "videos": ["https://media.example/mbaya.mp4"]
        }),
    ]
}

pub fn ceremonies() -> Vec<Document> {
    vec![
        json!({
            "id": "funerailles",
            "name": "Funérailles",
            "type": "death",
            "description": "Bamiléké funeral celebrations",
            "symbols": ["skulls of ancestors"],
            "offerings": ["goats", "palm wine"]
        }),
        json!({
            "id": "naming",
            "name": "Naming ceremony",
            "type": "birth",
            "description": "Presentation of the newborn to the lineage"
        }),
    ]
}

/// The whole corpus, keyed by collection.
pub fn heritage_documents() -> Vec<(Collection, Vec<Document>)> {
    vec![
        (Collection::EthnicGroups, groups()),
        (Collection::Traditions, traditions()),
        (Collection::Cuisine, cuisine()),
        (Collection::Crafts, crafts()),
        (Collection::Stories, stories()),
        (Collection::Proverbs, proverbs()),
        (Collection::Music, music()),
        (Collection::Dances, dances()),
        (Collection::Ceremonies, ceremonies()),
    ]
}

pub fn heritage_store() -> MemoryStore {
    heritage_documents()
        .into_iter()
        .fold(MemoryStore::new(), |store, (collection, docs)| {
            store.with_documents(collection, docs)
        })
}

/// A service over `store` with its own default cache.
pub fn encyclopedia(store: Arc<FakeStore>) -> Encyclopedia<FakeStore> {
    Encyclopedia::new(
        store,
        Arc::new(ContentCache::default()),
        SearchConfig::default(),
    )
}

/// Write the corpus to `dir` as one `<collection>.json` file per collection.
pub fn write_data_dir(dir: &Path) -> std::io::Result<()> {
    for (collection, docs) in heritage_documents() {
        let body = serde_json::to_string_pretty(&docs).expect("fixture must serialize");
        std::fs::write(dir.join(format!("{}.json", collection.name())), body)?;
    }
    Ok(())
}
