//! Category-keyed content cache with TTL and filter-gated validity.
//!
//! # State Model
//!
//! Each category slot moves through `absent → valid → expired → absent`:
//!
//! - [`ContentCacheStore::set_cache`] or a successful
//!   [`ContentCacheStore::append_to_cache`] makes a slot valid
//! - A slot older than [`CACHE_TTL`] is expired; the first [`ContentCacheStore::get_cache`]
//!   that observes this removes it
//! - A filter mismatch is never stored: [`ContentCacheStore::is_cache_valid`] reports a
//!   miss while the raw entry stays in place until it is overwritten
//!
//! Previews live in a separate map with no TTL and are untouched by cache clearing.
//!
//! # Persistence
//!
//! The store itself performs no I/O. Observers registered with
//! [`ContentCacheStore::subscribe`] receive a [`StoreEvent`] and the post-change
//! [`StoreState`] after every mutation; see [`crate::persistence`].

pub mod clock;
pub mod content_store;
pub mod entry;
pub mod events;
pub mod state;

pub use clock::{Clock, ManualClock, SystemClock};
pub use content_store::{CACHE_TTL, ContentCacheStore, EntryStatus};
pub use entry::ContentCacheEntry;
pub use events::{StoreEvent, StoreObserver};
pub use state::{CacheSlots, StoreState};
