use anyhow::{Result, bail};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

// Characters that are unsafe or ambiguous in file names on common platforms
const KEY_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'%')
    .add(b'*')
    .add(b'/')
    .add(b':')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'\\')
    .add(b'|');

/// Encodes a storage key into a file-name-safe stem using percent encoding
///
/// # Examples
///
/// ```
/// use content_cache::utils::encode_storage_key;
///
/// assert_eq!(encode_storage_key("content-cache-storage"), "content-cache-storage");
/// assert_eq!(encode_storage_key("site/vip:1"), "site%2Fvip%3A1");
/// ```
pub fn encode_storage_key(key: &str) -> String {
    utf8_percent_encode(key, KEY_ENCODE_SET).to_string()
}

/// Rejects keys that cannot name a storage file
///
/// # Errors
///
/// Returns an error if the key is empty, whitespace-only, or a relative path component.
pub fn validate_storage_key(key: &str) -> Result<()> {
    if key.trim().is_empty() {
        bail!("Storage key must not be empty");
    }
    if key == "." || key == ".." {
        bail!("Storage key must not be '{}'", key);
    }
    Ok(())
}
