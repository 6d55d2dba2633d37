//! Current picks across the three columns.

use super::{Category, NONE_SIGNER_ID};

/// Derived visual state of a candidate component. Never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AffordanceState {
    /// Currently selected.
    Active,
    /// Selectable and compatible with the current picks.
    Breathing,
    /// Not reachable from the current picks.
    Inactive,
}

impl AffordanceState {
    /// CSS class name for the state.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Breathing => "breathing",
            Self::Inactive => "inactive",
        }
    }
}

/// Selected signers, wallet and node.
///
/// Signers are kept in selection order without duplicates. The
/// [`NONE_SIGNER_ID`] entry is only ever present on its own.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub(crate) signers: Vec<String>,
    pub(crate) wallet: Option<String>,
    pub(crate) node: Option<String>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn signers(&self) -> &[String] {
        &self.signers
    }

    pub fn wallet(&self) -> Option<&str> {
        self.wallet.as_deref()
    }

    pub fn node(&self) -> Option<&str> {
        self.node.as_deref()
    }

    pub fn has_signer(&self, id: &str) -> bool {
        self.signers.iter().any(|s| s == id)
    }

    /// `"none"` is selected.
    pub fn has_none_signer(&self) -> bool {
        self.has_signer(NONE_SIGNER_ID)
    }

    /// At least one real hardware signer is selected.
    pub fn has_hardware_signer(&self) -> bool {
        self.hardware_signers().next().is_some()
    }

    /// Selected signer ids other than `"none"`.
    pub fn hardware_signers(&self) -> impl Iterator<Item = &str> {
        self.signers
            .iter()
            .map(String::as_str)
            .filter(|id| *id != NONE_SIGNER_ID)
    }

    pub fn is_selected(&self, category: Category, id: &str) -> bool {
        match category {
            Category::Signer => self.has_signer(id),
            Category::Wallet => self.wallet() == Some(id),
            Category::Node => self.node() == Some(id),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.signers.is_empty() && self.wallet.is_none() && self.node.is_none()
    }

    /// Replace the signer set with a single id and drop downstream picks.
    pub(crate) fn reroot_signer(&mut self, id: &str) {
        self.signers = vec![id.to_string()];
        self.wallet = None;
        self.node = None;
    }

    pub(crate) fn add_signer(&mut self, id: &str) {
        if !self.has_signer(id) {
            self.signers.push(id.to_string());
        }
    }

    pub(crate) fn remove_signer(&mut self, id: &str) {
        self.signers.retain(|s| s != id);
    }

    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}
