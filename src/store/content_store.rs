//! The content cache store: per-category listing caches and the preview map.

use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use super::clock::{Clock, SystemClock};
use super::entry::ContentCacheEntry;
use super::events::{StoreEvent, StoreObserver};
use super::state::StoreState;
use crate::filters::FilterState;
use crate::models::{ContentCategory, ContentItem, PreviewEntry};

/// Validity window of a category entry, measured from its timestamp
pub const CACHE_TTL: Duration = Duration::from_secs(5 * 60);

/// Read-time classification of a category slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    Absent,
    Valid,
    /// Still stored, but the next `get_cache` will remove it
    Expired,
}

/// In-memory cache of listing pages keyed by [`ContentCategory`] plus a slug-keyed
/// preview map.
///
/// All operations are total: missing entries read as `None` and mutations on
/// missing entries are no-ops. Reads hand out clones; callers never hold references
/// into the store. Every mutation is reported to subscribed [`StoreObserver`]s,
/// which is how persistence is attached.
pub struct ContentCacheStore {
    state: StoreState,
    clock: Arc<dyn Clock>,
    observers: Vec<Box<dyn StoreObserver>>,
}

impl ContentCacheStore {
    /// Empty store on the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::from_state(StoreState::default(), clock)
    }

    /// Rehydrate from previously persisted state
    pub fn from_state(state: StoreState, clock: Arc<dyn Clock>) -> Self {
        Self { state, clock, observers: Vec::new() }
    }

    pub fn subscribe(&mut self, observer: Box<dyn StoreObserver>) {
        self.observers.push(observer);
    }

    /// Current clock reading, for callers stamping new entries
    pub fn now_millis(&self) -> i64 {
        self.clock.now_millis()
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    /// Replace the entry for `category` unconditionally
    pub fn set_cache(&mut self, category: ContentCategory, entry: ContentCacheEntry) {
        debug!(%category, items = entry.items.len(), page = entry.current_page, "cache set");
        *self.state.caches.slot_mut(category) = Some(entry);
        self.notify(StoreEvent::CacheSet(category));
    }

    /// Entry for `category` if present and within the TTL
    ///
    /// An expired entry is removed as part of the read, so repeated reads stay absent.
    pub fn get_cache(&mut self, category: ContentCategory) -> Option<ContentCacheEntry> {
        let now = self.clock.now_millis();
        let expired = match self.state.caches.slot(category) {
            None => return None,
            Some(entry) => entry.is_expired_at(now, CACHE_TTL),
        };

        if expired {
            debug!(%category, "cache expired");
            *self.state.caches.slot_mut(category) = None;
            self.notify(StoreEvent::CacheExpired(category));
            return None;
        }

        self.state.caches.slot(category).clone()
    }

    /// True when a fresh entry exists and was produced by exactly `filters`
    pub fn is_cache_valid(&mut self, category: ContentCategory, filters: &FilterState) -> bool {
        let valid = self.get_cache(category).is_some_and(|entry| entry.filters == *filters);
        debug!(%category, valid, "cache validity check");
        valid
    }

    pub fn clear_cache(&mut self, category: ContentCategory) {
        *self.state.caches.slot_mut(category) = None;
        self.notify(StoreEvent::CacheCleared(category));
    }

    /// Reset every category slot; previews are kept
    pub fn clear_all_caches(&mut self) {
        for category in ContentCategory::ALL {
            *self.state.caches.slot_mut(category) = None;
        }
        self.notify(StoreEvent::AllCachesCleared);
    }

    /// Append a further page to an existing entry and refresh its timestamp
    ///
    /// Works on the raw slot, so an expired entry that has not been read yet is
    /// still extended. Does nothing when the slot is empty.
    pub fn append_to_cache(
        &mut self,
        category: ContentCategory,
        new_items: Vec<ContentItem>,
        new_page: u32,
    ) {
        let now = self.clock.now_millis();
        let Some(existing) = self.state.caches.slot(category).as_ref() else {
            debug!(%category, "append ignored, no entry");
            return;
        };

        let added = new_items.len();
        let mut items = Vec::with_capacity(existing.items.len() + added);
        items.extend(existing.items.iter().cloned());
        items.extend(new_items);

        let updated = ContentCacheEntry {
            items,
            current_page: new_page,
            has_more_content: new_page < existing.total_pages,
            timestamp: now,
            ..existing.clone()
        };

        *self.state.caches.slot_mut(category) = Some(updated);
        debug!(%category, added, page = new_page, "cache appended");
        self.notify(StoreEvent::CacheAppended { category, added });
    }

    pub fn set_preview(&mut self, slug: &str, image: &str, name: &str) {
        self.state.preview_cache.insert(slug.to_string(), PreviewEntry::new(image, name));
        self.notify(StoreEvent::PreviewSet(slug.to_string()));
    }

    pub fn get_preview(&self, slug: &str) -> Option<PreviewEntry> {
        self.state.preview_cache.get(slug).cloned()
    }

    pub fn preview_count(&self) -> usize {
        self.state.preview_cache.len()
    }

    /// Raw slot contents without the TTL check or its side effect
    pub fn peek(&self, category: ContentCategory) -> Option<&ContentCacheEntry> {
        self.state.caches.slot(category).as_ref()
    }

    /// Classify a slot without modifying it
    pub fn status(&self, category: ContentCategory) -> EntryStatus {
        match self.peek(category) {
            None => EntryStatus::Absent,
            Some(entry) if entry.is_expired_at(self.clock.now_millis(), CACHE_TTL) => {
                EntryStatus::Expired
            }
            Some(_) => EntryStatus::Valid,
        }
    }

    fn notify(&mut self, event: StoreEvent) {
        for observer in self.observers.iter_mut() {
            observer.on_change(&event, &self.state);
        }
    }
}

impl Default for ContentCacheStore {
    fn default() -> Self {
        Self::new()
    }
}
