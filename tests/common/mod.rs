//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use content_cache::filters::FilterState;
use content_cache::loader::ContentPage;
use content_cache::models::{CategoryInfo, ContentItem};
use content_cache::store::{ContentCacheEntry, ContentCacheStore, ManualClock};

/// 2023-11-14T22:13:20Z
pub const T0: i64 = 1_700_000_000_000;

/// Store on a manual clock starting at `start`, plus a handle to drive the clock
pub fn store_at(start: i64) -> (ContentCacheStore, ManualClock) {
    let clock = ManualClock::new(start);
    (ContentCacheStore::with_clock(Arc::new(clock.clone())), clock)
}

/// Builder for listing items
pub struct ItemBuilder {
    item: ContentItem,
}

impl ItemBuilder {
    /// Item with id, slug and name derived from `id`
    pub fn new(id: &str) -> Self {
        Self {
            item: ContentItem {
                id: id.to_string(),
                name: format!("Item {}", id),
                category: "photos".to_string(),
                post_date: "2024-05-01".to_string(),
                slug: format!("item-{}", id),
                preview: None,
                thumbnail: None,
                created_at: "2024-05-01T10:00:00Z".to_string(),
                content_type: None,
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.item.name = name.to_string();
        self
    }

    pub fn preview(mut self, url: &str) -> Self {
        self.item.preview = Some(url.to_string());
        self
    }

    pub fn thumbnail(mut self, url: &str) -> Self {
        self.item.thumbnail = Some(url.to_string());
        self
    }

    pub fn content_type(mut self, content_type: &str) -> Self {
        self.item.content_type = Some(content_type.to_string());
        self
    }

    pub fn build(self) -> ContentItem {
        self.item
    }
}

/// Items for a list of ids
pub fn items(ids: &[&str]) -> Vec<ContentItem> {
    ids.iter().map(|id| ItemBuilder::new(id).build()).collect()
}

/// Builder for cache entries
pub struct EntryBuilder {
    items: Vec<ContentItem>,
    categories: Vec<CategoryInfo>,
    current_page: u32,
    total_pages: u32,
    filters: FilterState,
    timestamp: i64,
}

impl EntryBuilder {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            categories: Vec::new(),
            current_page: 1,
            total_pages: 1,
            filters: FilterState::new(),
            timestamp: T0,
        }
    }

    pub fn items(mut self, items: Vec<ContentItem>) -> Self {
        self.items = items;
        self
    }

    pub fn category(mut self, id: &str, name: &str) -> Self {
        self.categories.push(CategoryInfo {
            id: id.to_string(),
            name: name.to_string(),
            category: "photos".to_string(),
        });
        self
    }

    pub fn pages(mut self, current_page: u32, total_pages: u32) -> Self {
        self.current_page = current_page;
        self.total_pages = total_pages;
        self
    }

    pub fn filters(mut self, filters: FilterState) -> Self {
        self.filters = filters;
        self
    }

    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    pub fn build(self) -> ContentCacheEntry {
        ContentCacheEntry::new(
            self.items,
            self.categories,
            self.current_page,
            self.total_pages,
            self.filters,
            self.timestamp,
        )
    }
}

impl Default for EntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Write a listing page JSON file, as the listing endpoint would return it
pub fn write_page_file(dir: &Path, name: &str, page: &ContentPage) -> PathBuf {
    let path = dir.join(name);
    let json = serde_json::to_string_pretty(page).expect("Failed to serialize page");
    fs::write(&path, json).expect("Failed to write page file");
    path
}

/// Listing page with the given items and counters
pub fn page(items: Vec<ContentItem>, current_page: u32, total_pages: u32) -> ContentPage {
    ContentPage { items, categories: Vec::new(), current_page, total_pages }
}
