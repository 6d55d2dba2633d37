//! Utility modules for browser storage and network access.
//!
//! Provides:
//! - [`dom`] - window and storage handles
//! - [`cache`] - sessionStorage cache
//! - [`fetch_json`] - network fetching with timeout

pub mod cache;
pub mod dom;
mod fetch;

pub use fetch::fetch_json;
