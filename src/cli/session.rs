use std::sync::Arc;

use anyhow::{Result, bail};
use tracing::debug;

use crate::persistence::{FileStorage, PersistenceWriter, spawn_writer};
use crate::store::{ContentCacheStore, SystemClock};

/// A store rehydrated from disk with persistence attached for one CLI invocation
pub struct Session {
    pub store: ContentCacheStore,
    pub storage: FileStorage,
    writer: PersistenceWriter,
}

impl Session {
    pub fn open(storage: FileStorage) -> Result<Self> {
        let state = storage.load();
        let mut store = ContentCacheStore::from_state(state, Arc::new(SystemClock));
        let (adapter, writer) = spawn_writer(storage.clone())?;
        store.subscribe(Box::new(adapter));
        Ok(Self { store, storage, writer })
    }

    /// Flush pending writes; unlike the store, the CLI reports persistence failures
    pub fn close(self) -> Result<()> {
        let Session { store, storage, writer } = self;
        drop(store);
        let stats = writer.finish();
        debug!(writes = stats.writes, failures = stats.failures, "persistence finished");
        if stats.failures > 0 {
            bail!("Failed to persist cache to {}", storage.path().display());
        }
        Ok(())
    }
}
