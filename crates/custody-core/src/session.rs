//! Engine facade used by the UI.
//!
//! [`CustodySession`] ties the catalog, the selection store and the user's
//! preference together and exposes the four UI events: click, affordance,
//! score and reset. Preference changes are written back through the
//! [`PreferencePort`]. A storage failure never rolls back a transition; it
//! is returned to the caller after the in-memory state has been updated.

use crate::error::PreferenceError;
use crate::insights::{self, CombinationAdvice, DataFlow, FeatureSummary};
use crate::models::{
    AffordanceState, Catalog, Category, SelectionState, SignerWillingness, UserPreference,
};
use crate::port::PreferencePort;
use crate::resolver::classify;
use crate::scoring;
use crate::store::{ClickOutcome, SelectionStore};

/// Storage key for the persisted preference.
pub const PREFERENCE_KEY: &str = "userPreference";

/// One user's picking session.
#[derive(Clone, Debug)]
pub struct CustodySession<P> {
    catalog: Catalog,
    store: SelectionStore,
    preference: Option<UserPreference>,
    port: P,
}

impl<P: PreferencePort> CustodySession<P> {
    /// Start a session, restoring any stored preference.
    ///
    /// A missing or malformed stored value leaves the session waiting for
    /// onboarding.
    pub fn new(catalog: Catalog, port: P) -> Self {
        let preference = port.get(PREFERENCE_KEY).ok().flatten();
        Self {
            catalog,
            store: SelectionStore::new(),
            preference,
            port,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn state(&self) -> &SelectionState {
        self.store.state()
    }

    pub fn preference(&self) -> Option<&UserPreference> {
        self.preference.as_ref()
    }

    pub fn port(&self) -> &P {
        &self.port
    }

    pub fn needs_onboarding(&self) -> bool {
        self.preference.is_none()
    }

    /// Record onboarding answers. Declining a signer pre-selects `"none"`
    /// when the catalog offers it.
    ///
    /// The preference is kept in memory even if saving it fails.
    pub fn complete_onboarding(
        &mut self,
        preference: UserPreference,
    ) -> Result<(), PreferenceError> {
        if preference.signer_willingness == SignerWillingness::NoSigner {
            self.store.select_no_signer(&self.catalog);
        }
        self.preference = Some(preference);
        self.port.set(PREFERENCE_KEY, &preference)
    }

    /// Route a click to the selection store.
    ///
    /// Returns `Err` only when a changed preference could not be saved; the
    /// click itself has been applied by then.
    pub fn on_click(
        &mut self,
        id: &str,
        category: Category,
    ) -> Result<ClickOutcome, PreferenceError> {
        let Some(mut preference) = self.preference else {
            return Ok(ClickOutcome::OnboardingPending);
        };

        let outcome = self
            .store
            .apply_click(id, category, &mut preference, &self.catalog);

        if Some(preference) != self.preference {
            self.preference = Some(preference);
            self.port.set(PREFERENCE_KEY, &preference)?;
        }

        Ok(outcome)
    }

    /// Affordance of a candidate. Everything is inactive until onboarding completes.
    pub fn affordance(&self, id: &str, category: Category) -> AffordanceState {
        match &self.preference {
            Some(preference) => classify(category, id, self.state(), preference, &self.catalog),
            None => AffordanceState::Inactive,
        }
    }

    /// Completion percentage; zero until onboarding completes.
    pub fn score(&self) -> u8 {
        if self.preference.is_none() {
            return 0;
        }
        scoring::score(self.state())
    }

    /// Clear selection and preference, and forget the stored preference.
    ///
    /// The in-memory reset always happens; a failed removal is returned.
    pub fn reset(&mut self) -> Result<(), PreferenceError> {
        self.store.reset();
        self.preference = None;
        self.port.remove(PREFERENCE_KEY)
    }

    pub fn features(&self) -> FeatureSummary {
        insights::selected_features(self.state(), &self.catalog)
    }

    pub fn advice(&self) -> Option<CombinationAdvice> {
        insights::combination_advice(self.state())
    }

    pub fn transfer_methods(&self) -> Vec<String> {
        insights::transfer_methods(self.state(), &self.catalog)
    }

    pub fn data_flow(&self) -> DataFlow {
        insights::data_flow(self.state())
    }
}
