//! Error types for catalog loading and preference persistence.
//!
//! None of these ever reach the engine's pure functions. They are raised by
//! the loader and persistence boundaries and recovered there:
//!
//! - [`CatalogError`] - catalog document could not be fetched, parsed or validated
//! - [`PreferenceError`] - stored preference could not be read or written

use thiserror::Error;

use crate::models::Category;

/// Catalog loading and validation errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog source could not be reached. Callers fall back to the
    /// bundled dataset.
    #[error("catalog data unavailable: {0}")]
    DataUnavailable(String),

    /// The document is not valid catalog JSON.
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two components in the same category share an id.
    #[error("duplicate {category} id '{id}' in catalog")]
    DuplicateId { category: Category, id: String },
}

/// Preference store errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreferenceError {
    /// Backing storage is not available.
    #[error("preference storage not available")]
    StorageUnavailable,

    /// A stored value exists but does not parse as a preference.
    #[error("malformed preference: {0}")]
    Malformed(String),

    /// Failed to write the preference.
    #[error("failed to save preference")]
    WriteFailed,

    /// Failed to remove the preference.
    #[error("failed to remove preference")]
    RemoveFailed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_id_message() {
        let err = CatalogError::DuplicateId {
            category: Category::Wallet,
            id: "sparrow".to_string(),
        };
        assert_eq!(err.to_string(), "duplicate wallet id 'sparrow' in catalog");
    }

    #[test]
    fn test_parse_error_from_serde() {
        let serde_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: CatalogError = serde_err.into();
        assert!(matches!(err, CatalogError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse catalog"));
    }
}
