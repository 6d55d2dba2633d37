//! Selection and compatibility engine for a self-custody setup picker.
//!
//! The user picks one entry from each of three columns (hardware signer,
//! software wallet, blockchain node). This crate holds the rules:
//!
//! - [`classify`] - how each candidate looks given the current picks
//! - [`SelectionStore`] - how a click changes the picks
//! - [`score`] - completion percentage of the current combination
//! - [`CustodySession`] - the facade a UI talks to
//!
//! Everything here is synchronous and free of browser APIs. Storage is
//! reached through the [`PreferencePort`] trait.

pub mod error;
pub mod insights;
pub mod models;
mod port;
mod resolver;
mod scoring;
mod session;
mod store;

pub use error::{CatalogError, PreferenceError};
pub use insights::{CombinationAdvice, DataFlow, FeatureSummary};
pub use models::{
    AffordanceState, Catalog, Category, Component, DeviceType, Feature, FeatureKind,
    NONE_SIGNER_ID, SelectionState, SignerWillingness, UserPreference,
};
pub use port::{MemoryPreferences, PreferencePort};
pub use resolver::classify;
pub use scoring::{COMPLETE_SCORE, MAX_SCORE, score};
pub use session::{CustodySession, PREFERENCE_KEY};
pub use store::{ClickOutcome, SelectionStore, Transition, transition};
