//! Catalog loading.
//!
//! The catalog is fetched once at startup. Any failure (network, HTTP
//! status, bad JSON, duplicate ids) is logged and replaced by the dataset
//! compiled into the binary, so the picker always has something to show.

use custody_core::{Catalog, CatalogError};

use crate::config::{CATALOG_URL, cache::CATALOG_KEY};
use crate::core::error::FetchError;
use crate::utils::{cache, dom, fetch_json};

/// Load the catalog, falling back to the bundled copy on any failure.
pub async fn load_catalog() -> Catalog {
    match fetch_catalog().await {
        Ok(catalog) => catalog,
        Err(e) => {
            let unavailable = CatalogError::DataUnavailable(e.to_string());
            dom::warn(&format!("{}; using bundled catalog", unavailable));
            bundled_catalog()
        }
    }
}

async fn fetch_catalog() -> Result<Catalog, FetchError> {
    if let Some(cached) = cache::get::<Catalog>(CATALOG_KEY) {
        if cached.validate().is_ok() {
            return Ok(cached);
        }
        cache::remove(CATALOG_KEY);
    }

    let catalog: Catalog = fetch_json(CATALOG_URL).await?;
    catalog
        .validate()
        .map_err(|e| FetchError::InvalidCatalog(e.to_string()))?;

    if let Err(e) = cache::set(CATALOG_KEY, &catalog) {
        dom::warn(&format!("Catalog not cached: {}", e));
    }
    Ok(catalog)
}

/// The compiled-in catalog. Empty if even that fails to parse.
pub fn bundled_catalog() -> Catalog {
    Catalog::fallback().unwrap_or_else(|e| {
        dom::warn(&format!("Bundled catalog unusable: {}", e));
        Catalog::default()
    })
}
