//! Key-addressed JSON storage with atomic writes

use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::{debug, warn};

use super::error::{PersistenceError, Result};
use super::persisted::{CACHE_VERSION, PersistedState, encode_state};
use crate::store::StoreState;
use crate::utils::paths::encode_storage_key;

/// Default storage key, shared with the browser build of the site
pub const DEFAULT_STORAGE_KEY: &str = "content-cache-storage";

/// One JSON file per storage key inside a directory
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
    key: String,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self { dir: dir.into(), key: key.into() }
    }

    /// File holding this key's state
    pub fn path(&self) -> PathBuf {
        self.dir.join(format!("{}.json", encode_storage_key(&self.key)))
    }

    /// Load persisted state, distinguishing every failure
    ///
    /// A missing file is `Ok(None)`.
    pub fn load_checked(&self) -> Result<Option<StoreState>> {
        let path = self.path();
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(source) => return Err(PersistenceError::Io { path, source }),
        };

        // Read the version first so a future layout reports a mismatch, not corruption
        let document: serde_json::Value = serde_json::from_str(&raw)
            .map_err(|e| PersistenceError::Corrupt { path: path.clone(), reason: e.to_string() })?;
        let found = document.get("version").and_then(|v| v.as_u64()).ok_or_else(|| {
            PersistenceError::Corrupt { path: path.clone(), reason: "missing version".to_string() }
        })? as u32;
        if found != CACHE_VERSION {
            return Err(PersistenceError::VersionMismatch { expected: CACHE_VERSION, found });
        }

        let persisted: PersistedState = serde_json::from_value(document)
            .map_err(|e| PersistenceError::Corrupt { path, reason: e.to_string() })?;
        Ok(Some(persisted.state))
    }

    /// Load persisted state, falling back to empty on any failure
    pub fn load(&self) -> StoreState {
        match self.load_checked() {
            Ok(Some(state)) => {
                debug!(path = %self.path().display(), "loaded persisted cache");
                state
            }
            Ok(None) => StoreState::default(),
            Err(e) => {
                warn!("Ignoring persisted cache: {}", e);
                StoreState::default()
            }
        }
    }

    pub fn save(&self, state: &StoreState) -> Result<()> {
        let payload = encode_state(state)?;
        self.write_raw(&payload)
    }

    /// Write an already-encoded payload atomically (temp file + rename)
    pub fn write_raw(&self, payload: &str) -> Result<()> {
        if !self.dir.exists() {
            fs::create_dir_all(&self.dir)
                .map_err(|source| PersistenceError::Io { path: self.dir.clone(), source })?;
        }

        let path = self.path();
        let temp = path.with_extension("json.tmp");
        fs::write(&temp, payload)
            .map_err(|source| PersistenceError::Io { path: temp.clone(), source })?;
        fs::rename(&temp, &path).map_err(|source| PersistenceError::Io { path, source })?;
        Ok(())
    }

}
