//! Data model for the custody picker.
//!
//! - [`Catalog`], [`Component`], [`Feature`] - the static dataset
//! - [`UserPreference`] - onboarding answers
//! - [`SelectionState`], [`AffordanceState`] - current picks and their derived look

mod catalog;
mod preference;
mod selection;

pub use catalog::{
    Catalog, Category, Component, DeviceType, Feature, FeatureKind, NONE_SIGNER_ID,
    TransferMethods,
};
pub use preference::{SignerWillingness, UserPreference};
pub use selection::{AffordanceState, SelectionState};
