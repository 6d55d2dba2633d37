//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.

use custody_core::Category;

// =============================================================================
// Application Metadata
// =============================================================================

/// Application title shown in the header.
pub const APP_TITLE: &str = "Bitcoin Self-Custody Builder";

/// One-line description under the title.
pub const APP_TAGLINE: &str = "Combine a hardware signer, a software wallet and a node";

// =============================================================================
// Network Configuration
// =============================================================================

/// Catalog document served next to the app.
pub const CATALOG_URL: &str = "/catalog.json";

/// Fetch request timeout in milliseconds.
pub const FETCH_TIMEOUT_MS: i32 = 10000;

// =============================================================================
// Cache Configuration
// =============================================================================

/// Session cache configuration.
pub mod cache {
    /// sessionStorage key for the catalog document.
    pub const CATALOG_KEY: &str = "custody_catalog_cache";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Media query below which the columns stack vertically.
pub const MOBILE_MEDIA_QUERY: &str = "(max-width: 768px)";

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
pub const ICON_THEME: IconTheme = IconTheme::Bootstrap;

/// Column heading for a category.
pub fn column_title(category: Category) -> &'static str {
    match category {
        Category::Signer => "Hardware signer",
        Category::Wallet => "Software wallet",
        Category::Node => "Blockchain node",
    }
}

/// Feature panel heading for a category.
pub fn features_title(category: Category) -> &'static str {
    match category {
        Category::Signer => "Hardware signer features",
        Category::Wallet => "Software wallet features",
        Category::Node => "Blockchain node features",
    }
}
