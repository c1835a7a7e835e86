use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use tracing::info;

use super::logging::initialize_logging;
use super::session::Session;
use crate::filters::parse_filter;
use crate::loader::{ContentPage, record_previews};
use crate::models::ContentCategory;
use crate::persistence::{DEFAULT_STORAGE_KEY, FileStorage};
use crate::store::{ContentCacheEntry, ContentCacheStore, EntryStatus};
use crate::utils::{format_age, format_millis, get_storage_dir, validate_storage_key};

#[derive(Parser)]
#[command(name = "content-cache")]
#[command(version = "0.1.0")]
#[command(about = "Inspect and manage the persisted content listing cache", long_about = None)]
pub struct Cli {
    /// Directory holding the cache file (defaults to $CONTENT_CACHE_DIR or the platform cache dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub cache_dir: Option<PathBuf>,

    /// Storage key naming the cache file
    #[arg(long, global = true, default_value = DEFAULT_STORAGE_KEY)]
    pub key: String,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the status of every category and the preview count
    Stats,
    /// List the cached items of a category (expired entries are removed)
    Show {
        #[arg(value_parser = parse_category)]
        category: ContentCategory,
    },
    /// Check whether a category holds a fresh entry for the given filters
    Check {
        #[arg(value_parser = parse_category)]
        category: ContentCategory,
        /// Filter expression, e.g. 'search:"spring set" month:2024-05'
        #[arg(long, default_value = "")]
        filter: String,
    },
    /// Cache a listing page read from a JSON file
    Import {
        #[arg(value_parser = parse_category)]
        category: ContentCategory,
        file: PathBuf,
        /// Filter expression the page was fetched with
        #[arg(long, default_value = "")]
        filter: String,
    },
    /// Append a further listing page from a JSON file to a cached category
    Append {
        #[arg(value_parser = parse_category)]
        category: ContentCategory,
        file: PathBuf,
    },
    /// Clear one category, or all of them with --all
    Clear {
        #[arg(value_parser = parse_category)]
        category: Option<ContentCategory>,
        #[arg(long, conflicts_with = "category")]
        all: bool,
    },
    /// Print the stored preview for a slug
    Preview { slug: String },
    /// Store a preview for a slug
    SetPreview { slug: String, image: String, name: String },
}

fn parse_category(value: &str) -> std::result::Result<ContentCategory, String> {
    value.parse().map_err(|e: anyhow::Error| e.to_string())
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    initialize_logging(&cli)?;

    let Some(command) = &cli.command else {
        println!("Use --help for usage information");
        return Ok(());
    };

    validate_storage_key(&cli.key)?;
    let dir = match &cli.cache_dir {
        Some(dir) => dir.clone(),
        None => get_storage_dir()?,
    };

    let mut session = Session::open(FileStorage::new(dir, cli.key.clone()))?;
    execute(command, &mut session)?;
    session.close()
}

fn execute(command: &Commands, session: &mut Session) -> Result<()> {
    let store = &mut session.store;
    match command {
        Commands::Stats => show_stats(store, &session.storage),
        Commands::Show { category } => show_category(store, *category),
        Commands::Check { category, filter } => {
            let filters = parse_filter(filter)?;
            let valid = store.is_cache_valid(*category, &filters);
            println!("{}", if valid { "valid" } else { "invalid" });
            Ok(())
        }
        Commands::Import { category, file, filter } => {
            let filters = parse_filter(filter)?;
            let page = read_page(file)?;
            let entry = ContentCacheEntry::new(
                page.items,
                page.categories,
                page.current_page,
                page.total_pages,
                filters,
                store.now_millis(),
            );
            record_previews(store, &entry.items);
            let count = entry.items.len();
            store.set_cache(*category, entry);
            info!(%category, count, "imported page");
            println!("Cached {} items for {}", count, category);
            Ok(())
        }
        Commands::Append { category, file } => {
            let page = read_page(file)?;
            if store.peek(*category).is_none() {
                println!("No cached entry for {}; nothing appended", category);
                return Ok(());
            }
            record_previews(store, &page.items);
            let count = page.items.len();
            store.append_to_cache(*category, page.items, page.current_page);
            println!("Appended {} items to {} (page {})", count, category, page.current_page);
            Ok(())
        }
        Commands::Clear { category, all } => match (category, all) {
            (Some(category), _) => {
                store.clear_cache(*category);
                println!("Cleared {}", category);
                Ok(())
            }
            (None, true) => {
                store.clear_all_caches();
                println!("Cleared all categories");
                Ok(())
            }
            (None, false) => bail!("Specify a category or --all"),
        },
        Commands::Preview { slug } => {
            match store.get_preview(slug) {
                Some(preview) => println!("{}\t{}", preview.name, preview.image),
                None => println!("No preview for {}", slug),
            }
            Ok(())
        }
        Commands::SetPreview { slug, image, name } => {
            store.set_preview(slug, image, name);
            println!("Stored preview for {}", slug);
            Ok(())
        }
    }
}

fn read_page(path: &Path) -> Result<ContentPage> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read page file: {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse page file: {}", path.display()))
}

fn show_stats(store: &ContentCacheStore, storage: &FileStorage) -> Result<()> {
    let now = store.now_millis();

    println!("Content Cache Statistics");
    println!("========================");
    println!("Storage: {}", storage.path().display());
    println!();
    println!("{:<12} {:<8} {:>6} {:>7}  {}", "CATEGORY", "STATUS", "ITEMS", "PAGE", "REFRESHED");

    for category in ContentCategory::ALL {
        let status = match store.status(category) {
            EntryStatus::Absent => "absent",
            EntryStatus::Valid => "valid",
            EntryStatus::Expired => "expired",
        };
        match store.peek(category) {
            Some(entry) => println!(
                "{:<12} {:<8} {:>6} {:>7}  {}",
                category.as_str(),
                status,
                entry.items.len(),
                format!("{}/{}", entry.current_page, entry.total_pages),
                format_age(entry.age_millis(now))
            ),
            None => println!("{:<12} {:<8} {:>6} {:>7}  -", category.as_str(), status, "-", "-"),
        }
    }

    println!();
    println!("Previews: {}", store.preview_count());
    Ok(())
}

fn show_category(store: &mut ContentCacheStore, category: ContentCategory) -> Result<()> {
    let Some(entry) = store.get_cache(category) else {
        println!("No cached entry for {}", category);
        return Ok(());
    };

    println!(
        "{}: {} items, page {}/{}{}",
        category,
        entry.items.len(),
        entry.current_page,
        entry.total_pages,
        if entry.has_more_content { ", more available" } else { "" }
    );
    println!("Refreshed: {}", format_millis(entry.timestamp));
    if !entry.filters.is_empty() {
        println!(
            "Filters: search={:?} category={:?} month={:?} date={:?}",
            entry.filters.search_name,
            entry.filters.selected_category,
            entry.filters.selected_month,
            entry.filters.date_filter
        );
    }
    println!();
    for item in &entry.items {
        println!("{}\t{}\t{}\t{}", item.id, item.post_date, item.slug, item.name);
    }
    Ok(())
}
