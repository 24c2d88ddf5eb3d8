//! Configuration types for griot.
//!
//! Every source is layered over an embedded TOML document, so a user file only
//! needs the keys it changes. `0` disables both the cache entry cap and the
//! search deadline.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_CONFIG: &str = r#"
[cache]
ttl_secs    = 300
max_entries = 1024

[search]
default_limit    = 20
min_query_len    = 2
max_suggestions  = 5
fetch_timeout_ms = 10000

[store]
data_dir = "data"
"#;

/// Top-level configuration, loaded from `~/.config/griot/config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

/// `[cache]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CacheConfig {
    #[serde(default = "default_ttl_secs")]
    pub ttl_secs: u64,
    /// `0` disables the cap.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

fn default_ttl_secs() -> u64 { 300 }
fn default_max_entries() -> usize { 1024 }

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_ttl_secs(),
            max_entries: default_max_entries(),
        }
    }
}

/// `[search]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SearchConfig {
    #[serde(default = "default_limit")]
    pub default_limit: usize,
    /// Queries shorter than this (after trimming) return an empty envelope.
    #[serde(default = "default_min_query_len")]
    pub min_query_len: usize,
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
    /// Deadline for the collection fan-out of a search. `0` disables it.
    #[serde(default = "default_fetch_timeout_ms")]
    pub fetch_timeout_ms: u64,
}

fn default_limit() -> usize { 20 }
fn default_min_query_len() -> usize { 2 }
fn default_max_suggestions() -> usize { 5 }
fn default_fetch_timeout_ms() -> u64 { 10_000 }

impl SearchConfig {
    pub fn fetch_timeout(&self) -> Option<Duration> {
        (self.fetch_timeout_ms > 0).then(|| Duration::from_millis(self.fetch_timeout_ms))
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            min_query_len: default_min_query_len(),
            max_suggestions: default_max_suggestions(),
            fetch_timeout_ms: default_fetch_timeout_ms(),
        }
    }
}

/// `[store]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct StoreConfig {
    /// Directory holding one `<collection>.json` file per collection.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

fn default_data_dir() -> PathBuf { PathBuf::from("data") }

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the user config, layered on top of the built-in defaults.
    ///
    /// The file is `$GRIOT_CONFIG` when set, otherwise
    /// `$XDG_CONFIG_HOME/griot/config.toml`. A missing file is created with
    /// the defaults.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();
        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
            tracing::debug!(path = %path.display(), "wrote default config");
        }
        Self::from_file(&path)
    }

    /// Layer `path` over the built-in defaults. A missing file is an error.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let layered = base().add_source(config::File::from(path)).build()?;
        Ok(layered.try_deserialize()?)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        base()
            .build()
            .and_then(|c| c.try_deserialize())
            .expect("embedded default config must parse")
    }
}

fn base() -> config::ConfigBuilder<config::builder::DefaultState> {
    config::Config::builder()
        .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
}

fn config_path() -> PathBuf {
    if let Some(explicit) = std::env::var_os("GRIOT_CONFIG") {
        return PathBuf::from(explicit);
    }
    let config_home = std::env::var_os("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|home| PathBuf::from(home).join(".config")))
        .unwrap_or_else(|| PathBuf::from("."));
    config_home.join("griot").join("config.toml")
}
