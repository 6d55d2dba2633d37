//! Preference persistence using localStorage.
//!
//! Values are stored as JSON under the engine's preference key, in the
//! same shape earlier versions of the site wrote.

use custody_core::{PreferenceError, PreferencePort, UserPreference};

use crate::utils::dom;

/// [`PreferencePort`] backed by `window.localStorage`.
///
/// Write and remove failures are returned untouched; the app context logs
/// them in one place.
///
/// Holds no handle; storage is looked up on every call so the type stays
/// `Send + Sync` for use inside reactive signals.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStoragePreferences;

impl PreferencePort for LocalStoragePreferences {
    fn get(&self, key: &str) -> Result<Option<UserPreference>, PreferenceError> {
        let storage = dom::local_storage().ok_or(PreferenceError::StorageUnavailable)?;
        let Some(json) = storage
            .get_item(key)
            .map_err(|_| PreferenceError::StorageUnavailable)?
        else {
            return Ok(None);
        };

        serde_json::from_str(&json).map(Some).map_err(|e| {
            dom::warn(&format!("Ignoring stored preference: {}", e));
            PreferenceError::Malformed(e.to_string())
        })
    }

    fn set(&mut self, key: &str, preference: &UserPreference) -> Result<(), PreferenceError> {
        let storage = dom::local_storage().ok_or(PreferenceError::StorageUnavailable)?;
        let json = serde_json::to_string(preference).map_err(|_| PreferenceError::WriteFailed)?;
        storage
            .set_item(key, &json)
            .map_err(|_| PreferenceError::WriteFailed)
    }

    fn remove(&mut self, key: &str) -> Result<(), PreferenceError> {
        let storage = dom::local_storage().ok_or(PreferenceError::StorageUnavailable)?;
        storage
            .remove_item(key)
            .map_err(|_| PreferenceError::RemoveFailed)
    }
}
