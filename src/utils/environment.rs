use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Environment variable overriding the storage directory
pub const CACHE_DIR_ENV: &str = "CONTENT_CACHE_DIR";

const APP_DIR_NAME: &str = "content-cache";

/// Get the directory holding persisted cache files
///
/// `CONTENT_CACHE_DIR` wins when set and non-empty; otherwise the platform cache
/// directory is used.
pub fn get_storage_dir() -> Result<PathBuf> {
    resolve_storage_dir(env::var(CACHE_DIR_ENV).ok().as_deref())
}

pub(crate) fn resolve_storage_dir(env_override: Option<&str>) -> Result<PathBuf> {
    if let Some(dir) = env_override
        && !dir.trim().is_empty()
    {
        return Ok(PathBuf::from(dir));
    }

    let base = dirs::cache_dir().context("Failed to get platform cache directory")?;
    Ok(base.join(APP_DIR_NAME))
}
