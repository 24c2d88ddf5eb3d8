use anyhow::Context;
use clap::{Parser, Subcommand};
use griot::{Collection, Config, Encyclopedia, FilterSet, JsonDirStore};
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "griot", about = "Search and browse Cameroonian cultural heritage")]
struct Cli {
    /// Directory holding one `<collection>.json` file per collection.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Config file to use instead of ~/.config/griot/config.toml.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Write debug logs to stderr.
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Search every collection and rank the matches.
    Search {
        query: String,
        /// Maximum matches kept per collection.
        #[arg(long)]
        limit: Option<usize>,
    },
    /// List one collection, optionally filtered.
    List {
        collection: Collection,
        #[arg(long)]
        region: Vec<String>,
        #[arg(long = "type")]
        types: Vec<String>,
        #[arg(long)]
        category: Vec<String>,
        #[arg(long)]
        query: Option<String>,
        #[arg(long, conflicts_with = "no_media")]
        has_media: bool,
        #[arg(long)]
        no_media: bool,
        #[arg(long)]
        difficulty: Vec<String>,
    },
    /// Collection counts, distinct regions and languages.
    Stats,
    /// Groups of a region, with traditions, cuisine and crafts.
    Region { name: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };
    let data_dir = cli.data_dir.clone().unwrap_or_else(|| config.store.data_dir.clone());
    tracing::debug!(data_dir = %data_dir.display(), "opening collection store");

    let encyclopedia = Encyclopedia::from_config(Arc::new(JsonDirStore::new(data_dir)), &config);

    match cli.command {
        Command::Search { query, limit } => {
            let limit = limit.unwrap_or(encyclopedia.settings().default_limit);
            print_json(&encyclopedia.search(&query, limit).await?)
        }
        Command::List {
            collection,
            region,
            types,
            category,
            query,
            has_media,
            no_media,
            difficulty,
        } => {
            let mut filters = FilterSet::new()
                .with_regions(region)
                .with_types(types)
                .with_categories(category)
                .with_difficulty(difficulty);
            if let Some(query) = query {
                filters = filters.with_query(query);
            }
            if has_media || no_media {
                filters = filters.with_media(has_media);
            }
            print_json(&encyclopedia.collection_json(collection, &filters).await?)
        }
        Command::Stats => print_json(&encyclopedia.stats(&FilterSet::new()).await?),
        Command::Region { name } => print_json(&encyclopedia.content_by_region(&name).await?),
    }
}

/// Pretty-print in field declaration order.
fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
