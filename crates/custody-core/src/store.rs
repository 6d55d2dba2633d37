//! Selection state transitions.
//!
//! [`SelectionStore`] owns the current [`SelectionState`] and applies click
//! events. Every transition keeps these properties:
//!
//! - at most one wallet and one node
//! - `"none"` is never mixed with other signer ids
//! - changing the root signer (from an inactive card, or out of `"none"`)
//!   clears wallet and node

use crate::models::{
    AffordanceState, Catalog, Category, NONE_SIGNER_ID, SelectionState, SignerWillingness,
    UserPreference,
};
use crate::resolver::classify;

/// Result of a click.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Selection or preference changed.
    Applied,
    /// The click was valid but had no effect (e.g. an inactive node).
    Unchanged,
    /// The id is not in the catalog for that category.
    UnknownComponent,
    /// No preference yet; clicks wait for onboarding.
    OnboardingPending,
}

/// New selection and preference produced by a click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: SelectionState,
    pub preference: UserPreference,
}

/// Compute the state that follows a click without mutating anything.
///
/// Ids missing from the catalog leave both state and preference untouched.
pub fn transition(
    state: &SelectionState,
    preference: &UserPreference,
    catalog: &Catalog,
    id: &str,
    category: Category,
) -> Transition {
    let mut next = state.clone();
    let mut preference = *preference;

    if !catalog.contains(category, id) {
        return Transition {
            state: next,
            preference,
        };
    }

    let affordance = classify(category, id, state, &preference, catalog);

    match category {
        Category::Signer => {
            if id == NONE_SIGNER_ID {
                preference.signer_willingness = SignerWillingness::NoSigner;
                next.reroot_signer(NONE_SIGNER_ID);
            } else if state.has_none_signer() {
                // Leaving no-signer mode is a root change
                preference.signer_willingness = SignerWillingness::WithSigner;
                next.reroot_signer(id);
            } else if affordance == AffordanceState::Inactive {
                next.reroot_signer(id);
            } else if state.has_signer(id) {
                next.remove_signer(id);
            } else {
                next.add_signer(id);
            }
        }
        Category::Wallet => {
            if affordance == AffordanceState::Inactive {
                next.wallet = Some(id.to_string());
                next.node = None;
            } else if state.wallet() == Some(id) {
                next.wallet = None;
            } else {
                next.wallet = Some(id.to_string());
            }
        }
        Category::Node => {
            if affordance != AffordanceState::Inactive {
                next.node = if state.node() == Some(id) {
                    None
                } else {
                    Some(id.to_string())
                };
            }
        }
    }

    Transition {
        state: next,
        preference,
    }
}

/// Owner of the current selection.
#[derive(Clone, Debug, Default)]
pub struct SelectionStore {
    state: SelectionState,
}

impl SelectionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SelectionState {
        &self.state
    }

    /// Apply a click, updating `preference` in place when the signer
    /// choice contradicts it.
    pub fn apply_click(
        &mut self,
        id: &str,
        category: Category,
        preference: &mut UserPreference,
        catalog: &Catalog,
    ) -> ClickOutcome {
        if !catalog.contains(category, id) {
            return ClickOutcome::UnknownComponent;
        }

        let next = transition(&self.state, preference, catalog, id, category);
        if next.state == self.state && next.preference == *preference {
            return ClickOutcome::Unchanged;
        }

        self.state = next.state;
        *preference = next.preference;
        ClickOutcome::Applied
    }

    /// Pre-select the `"none"` signer, as done when onboarding declines a signer.
    ///
    /// Returns `false` and leaves the state alone when the catalog has no
    /// `"none"` entry.
    pub fn select_no_signer(&mut self, catalog: &Catalog) -> bool {
        if !catalog.contains(Category::Signer, NONE_SIGNER_ID) {
            return false;
        }
        self.state.reroot_signer(NONE_SIGNER_ID);
        true
    }

    pub fn reset(&mut self) {
        self.state.clear();
    }
}
