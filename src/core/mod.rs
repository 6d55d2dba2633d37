//! Browser-side adapters around the custody engine.
//!
//! This module provides:
//! - [`load_catalog`] - remote catalog with bundled fallback
//! - [`LocalStoragePreferences`] - localStorage-backed preference port

pub mod catalog;
pub mod error;
mod preferences;

pub use catalog::load_catalog;
pub use preferences::LocalStoragePreferences;
