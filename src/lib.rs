//! Content Cache - Category-keyed listing cache with filter-gated validity
//!
//! This library keeps recently fetched content listings so repeated requests can be
//! served without a network round trip. It provides:
//!
//! - One cache entry per content category (four content classes × VIP/non-VIP)
//! - A fixed five-minute TTL with self-cleaning reads
//! - Validity gated on an exact match of the filters that produced a page
//! - Pagination by appending pages to an entry, which refreshes its TTL
//! - A slug-keyed preview map that never expires
//! - Best-effort persistence of both maps under a single storage key
//!
//! # Example
//!
//! ```
//! use content_cache::filters::FilterState;
//! use content_cache::models::ContentCategory;
//! use content_cache::store::{ContentCacheEntry, ContentCacheStore};
//!
//! let mut store = ContentCacheStore::new();
//! let filters = FilterState::new().with_selected_month("2024-05");
//! let entry = ContentCacheEntry::new(Vec::new(), Vec::new(), 1, 3, filters.clone(), store.now_millis());
//! store.set_cache(ContentCategory::Asian, entry);
//!
//! assert!(store.is_cache_valid(ContentCategory::Asian, &filters));
//! assert!(!store.is_cache_valid(ContentCategory::Asian, &FilterState::new()));
//! ```

pub mod cli;
pub mod filters;
pub mod loader;
pub mod models;
pub mod persistence;
pub mod store;
pub mod utils;

// Re-export commonly used types
pub use filters::{FilterState, parse_filter};
pub use loader::{ContentLoader, ContentPage, ContentSource, LoadOutcome};
pub use models::{CategoryInfo, ContentCategory, ContentItem, PreviewEntry};
pub use persistence::{FileStorage, spawn_writer};
pub use store::{CACHE_TTL, ContentCacheEntry, ContentCacheStore};
