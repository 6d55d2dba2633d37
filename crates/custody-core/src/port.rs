//! Preference persistence boundary.
//!
//! The engine never touches a storage API directly. The host supplies a
//! [`PreferencePort`] (the web app uses localStorage); tests use
//! [`MemoryPreferences`].

use std::collections::HashMap;

use crate::error::PreferenceError;
use crate::models::UserPreference;

/// Key-value store for the user's preference.
pub trait PreferencePort {
    /// Read a stored preference. `Ok(None)` when nothing is stored,
    /// `Err(PreferenceError::Malformed)` when the value does not parse.
    fn get(&self, key: &str) -> Result<Option<UserPreference>, PreferenceError>;

    fn set(&mut self, key: &str, preference: &UserPreference) -> Result<(), PreferenceError>;

    fn remove(&mut self, key: &str) -> Result<(), PreferenceError>;
}

/// In-memory store holding serialized values, like a browser storage would.
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferences {
    values: HashMap<String, String>,
}

impl MemoryPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a raw string, bypassing serialization.
    pub fn insert_raw(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }
}

impl PreferencePort for MemoryPreferences {
    fn get(&self, key: &str) -> Result<Option<UserPreference>, PreferenceError> {
        self.values
            .get(key)
            .map(|json| {
                serde_json::from_str(json).map_err(|e| PreferenceError::Malformed(e.to_string()))
            })
            .transpose()
    }

    fn set(&mut self, key: &str, preference: &UserPreference) -> Result<(), PreferenceError> {
        let json = serde_json::to_string(preference).map_err(|_| PreferenceError::WriteFailed)?;
        self.values.insert(key.to_string(), json);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PreferenceError> {
        self.values.remove(key);
        Ok(())
    }
}
