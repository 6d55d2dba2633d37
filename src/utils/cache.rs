//! Caching utilities for network requests.
//!
//! Provides sessionStorage-based caching for the current browser session.
//! Cache is automatically cleared when the tab/window is closed, so a new
//! visit always picks up a fresh catalog.

use serde::{Serialize, de::DeserializeOwned};

use super::dom;
use crate::core::error::CacheError;

/// Get cached data from sessionStorage.
///
/// Returns `None` if the key doesn't exist or deserialization fails.
pub fn get<T: DeserializeOwned>(key: &str) -> Option<T> {
    let storage = dom::session_storage()?;
    let json = storage.get_item(key).ok()??;
    serde_json::from_str(&json).ok()
}

/// Store data in sessionStorage.
pub fn set<T: Serialize>(key: &str, data: &T) -> Result<(), CacheError> {
    let storage = dom::session_storage().ok_or(CacheError::StorageUnavailable)?;
    let json = serde_json::to_string(data).map_err(|_| CacheError::WriteFailed)?;
    storage
        .set_item(key, &json)
        .map_err(|_| CacheError::WriteFailed)
}

/// Drop a cached entry.
pub fn remove(key: &str) {
    if let Some(storage) = dom::session_storage() {
        let _ = storage.remove_item(key);
    }
}
