use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::filters::FilterState;
use crate::models::{CategoryInfo, ContentItem};

/// Cached listing page(s) for one category plus the filter context that produced them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentCacheEntry {
    #[serde(rename = "links")]
    pub items: Vec<ContentItem>,
    pub categories: Vec<CategoryInfo>,
    pub current_page: u32,
    pub total_pages: u32,
    pub has_more_content: bool,
    pub filters: FilterState,
    /// Creation or last refresh, milliseconds since epoch
    pub timestamp: i64,
}

impl ContentCacheEntry {
    /// Build an entry with `has_more_content` derived from the page counters
    pub fn new(
        items: Vec<ContentItem>,
        categories: Vec<CategoryInfo>,
        current_page: u32,
        total_pages: u32,
        filters: FilterState,
        timestamp: i64,
    ) -> Self {
        Self {
            items,
            categories,
            current_page,
            total_pages,
            has_more_content: current_page < total_pages,
            filters,
            timestamp,
        }
    }

    pub fn age_millis(&self, now_millis: i64) -> i64 {
        now_millis.saturating_sub(self.timestamp)
    }

    /// Entries stay fresh while their age is at most `ttl`
    pub fn is_expired_at(&self, now_millis: i64, ttl: Duration) -> bool {
        self.age_millis(now_millis) > ttl.as_millis() as i64
    }
}
