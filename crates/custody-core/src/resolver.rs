//! Compatibility resolution.
//!
//! [`classify`] decides how a candidate component should look given the
//! current picks. Rules per column:
//!
//! | Column | Breathing when |
//! |--------|----------------|
//! | Signer | no signer picked, and either the picked wallet accepts it or (no wallet and the user wants a signer) |
//! | Wallet | no wallet picked, runs on the user's device, and works with the picked signer (`"none"` works with all; no signer only if the user declined one) |
//! | Node   | no node picked and it accepts the picked wallet |
//!
//! Selected candidates are always `Active`; anything else is `Inactive`.

use crate::models::{AffordanceState, Catalog, Category, Component, SelectionState, UserPreference};

/// Classify one candidate. Unknown ids resolve to `Inactive`.
pub fn classify(
    category: Category,
    candidate_id: &str,
    state: &SelectionState,
    preference: &UserPreference,
    catalog: &Catalog,
) -> AffordanceState {
    let Some(candidate) = catalog.find(category, candidate_id) else {
        return AffordanceState::Inactive;
    };

    if state.is_selected(category, candidate_id) {
        return AffordanceState::Active;
    }

    let breathing = match category {
        Category::Signer => signer_breathes(candidate, state, preference, catalog),
        Category::Wallet => wallet_breathes(candidate, state, preference),
        Category::Node => node_breathes(candidate, state),
    };

    if breathing {
        AffordanceState::Breathing
    } else {
        AffordanceState::Inactive
    }
}

fn signer_breathes(
    candidate: &Component,
    state: &SelectionState,
    preference: &UserPreference,
    catalog: &Catalog,
) -> bool {
    // One selection group per column
    if !state.signers().is_empty() {
        return false;
    }

    match state.wallet() {
        Some(wallet_id) => catalog
            .find(Category::Wallet, wallet_id)
            .is_some_and(|wallet| wallet.accepts_signer(&candidate.id)),
        None => preference.wants_signer(),
    }
}

fn wallet_breathes(
    candidate: &Component,
    state: &SelectionState,
    preference: &UserPreference,
) -> bool {
    if state.wallet().is_some() {
        return false;
    }

    if !candidate.supports(preference.device_type) {
        return false;
    }

    if state.has_none_signer() {
        return true;
    }

    if state.signers().is_empty() {
        // Waiting for a signer pick
        return !preference.wants_signer();
    }

    state
        .hardware_signers()
        .any(|signer| candidate.accepts_signer(signer))
}

fn node_breathes(candidate: &Component, state: &SelectionState) -> bool {
    if state.node().is_some() {
        return false;
    }

    state
        .wallet()
        .is_some_and(|wallet_id| candidate.accepts_wallet(wallet_id))
}
