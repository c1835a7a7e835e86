//! Fetch-or-serve orchestration on top of the cache store.

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::source::{ContentPage, ContentSource};
use crate::filters::FilterState;
use crate::models::{ContentCategory, ContentItem};
use crate::store::{ContentCacheEntry, ContentCacheStore};

/// Where a listing came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Cached(ContentCacheEntry),
    Fetched(ContentCacheEntry),
}

impl LoadOutcome {
    pub fn entry(&self) -> &ContentCacheEntry {
        match self {
            LoadOutcome::Cached(entry) | LoadOutcome::Fetched(entry) => entry,
        }
    }

    pub fn is_cached(&self) -> bool {
        matches!(self, LoadOutcome::Cached(_))
    }
}

/// Serves listings from the store when valid, otherwise fetches and caches them
///
/// Fetch errors leave the store untouched.
pub struct ContentLoader<'a, S: ContentSource> {
    store: &'a mut ContentCacheStore,
    source: &'a mut S,
}

impl<'a, S: ContentSource> ContentLoader<'a, S> {
    pub fn new(store: &'a mut ContentCacheStore, source: &'a mut S) -> Self {
        Self { store, source }
    }

    /// First page for `category` under `filters`
    pub fn load(&mut self, category: ContentCategory, filters: &FilterState) -> Result<LoadOutcome> {
        if self.store.is_cache_valid(category, filters)
            && let Some(entry) = self.store.get_cache(category)
        {
            debug!(%category, items = entry.items.len(), "serving cached listing");
            return Ok(LoadOutcome::Cached(entry));
        }

        let page = self
            .source
            .fetch_page(category, filters, 1)
            .with_context(|| format!("Failed to fetch first page of {}", category))?;
        let entry = self.entry_from_page(page, filters);
        record_previews(self.store, &entry.items);
        self.store.set_cache(category, entry.clone());

        info!(%category, items = entry.items.len(), pages = entry.total_pages, "listing fetched");
        Ok(LoadOutcome::Fetched(entry))
    }

    /// Fetch and append the next page
    ///
    /// Returns `Ok(None)` when nothing is cached for `category` (or it expired) or when
    /// the last page is already loaded.
    pub fn load_more(&mut self, category: ContentCategory) -> Result<Option<ContentCacheEntry>> {
        let Some(entry) = self.store.get_cache(category) else {
            debug!(%category, "load more without a cached listing");
            return Ok(None);
        };
        if !entry.has_more_content {
            return Ok(None);
        }

        let next_page = entry.current_page + 1;
        let page = self
            .source
            .fetch_page(category, &entry.filters, next_page)
            .with_context(|| format!("Failed to fetch page {} of {}", next_page, category))?;

        record_previews(self.store, &page.items);
        self.store.append_to_cache(category, page.items, next_page);
        Ok(self.store.get_cache(category))
    }

    /// Drop the cached listing after an upstream change
    pub fn invalidate(&mut self, category: ContentCategory) {
        self.store.clear_cache(category);
    }

    fn entry_from_page(&self, page: ContentPage, filters: &FilterState) -> ContentCacheEntry {
        ContentCacheEntry::new(
            page.items,
            page.categories,
            page.current_page,
            page.total_pages,
            filters.clone(),
            self.store.now_millis(),
        )
    }
}

/// Remember the preview of every item that carries a preview image
pub fn record_previews(store: &mut ContentCacheStore, items: &[ContentItem]) {
    for item in items {
        if let Some(image) = item.preview.as_deref() {
            store.set_preview(&item.slug, image, &item.name);
        }
    }
}
