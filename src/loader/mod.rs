//! Caller-side workflow for listing pages.
//!
//! [`ContentLoader`] answers "do I already have valid data for this request?" via
//! [`ContentCacheStore::is_cache_valid`](crate::store::ContentCacheStore::is_cache_valid)
//! and only reaches the [`ContentSource`] on a miss. Pagination appends to the cached
//! entry, which also extends its TTL. Items carrying a preview image are remembered
//! in the store's preview map as they arrive.

pub mod content_loader;
pub mod source;

pub use content_loader::{ContentLoader, LoadOutcome, record_previews};
pub use source::{ContentPage, ContentSource};
