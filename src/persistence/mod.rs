//! Durable storage for the content cache.
//!
//! Both sub-trees of [`StoreState`](crate::store::StoreState) are written together
//! under one storage key:
//!
//! - `<dir>/<encoded key>.json`: `{"version": 1, "state": {"caches": ..., "previewCache": ...}}`
//!
//! Writes are atomic (temp file + rename) and happen on a background thread fed by
//! [`PersistenceAdapter`]. Persistence is best effort: the in-memory store stays
//! authoritative and a failed write is only logged.
//!
//! Default location: platform cache directory
//! - macOS: `~/Library/Caches/content-cache/`
//! - Linux: `~/.cache/content-cache/`
//! - Windows: `%LOCALAPPDATA%\content-cache\`

pub mod error;
pub mod file_store;
pub mod persisted;
pub mod writer;

pub use error::PersistenceError;
pub use file_store::{DEFAULT_STORAGE_KEY, FileStorage};
pub use persisted::{CACHE_VERSION, PersistedState};
pub use writer::{PersistenceAdapter, PersistenceWriter, WriterStats, spawn_writer};
