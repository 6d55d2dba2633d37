//! Read-only views derived from the current selection.
//!
//! Used by the host to render feature panels, the combination hint, the
//! transfer-method tags and the data-flow arrows between columns.

use crate::models::{Catalog, Category, Feature, SelectionState};

/// Features of the selected components, grouped by column.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FeatureSummary {
    pub signer: Vec<Feature>,
    pub wallet: Vec<Feature>,
    pub node: Vec<Feature>,
}

impl FeatureSummary {
    pub fn for_category(&self, category: Category) -> &[Feature] {
        match category {
            Category::Signer => &self.signer,
            Category::Wallet => &self.wallet,
            Category::Node => &self.node,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.signer.is_empty() && self.wallet.is_empty() && self.node.is_empty()
    }
}

/// Hint shown once a signer and a wallet are both picked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CombinationAdvice {
    /// Signer and wallet, no node yet.
    Basic,
    /// Signer, wallet and node.
    Complete,
}

/// Live links between columns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DataFlow {
    /// Hardware signer exchanges keys and signatures with the wallet.
    pub signer_to_wallet: bool,
    /// Node feeds chain data to the wallet.
    pub node_to_wallet: bool,
}

/// Collect features of every selected component. Unknown ids contribute nothing.
pub fn selected_features(state: &SelectionState, catalog: &Catalog) -> FeatureSummary {
    let collect = |category: Category, id: &str| {
        catalog
            .find(category, id)
            .map(|c| c.features.clone())
            .unwrap_or_default()
    };

    FeatureSummary {
        signer: state
            .signers()
            .iter()
            .flat_map(|id| collect(Category::Signer, id))
            .collect(),
        wallet: state
            .wallet()
            .map(|id| collect(Category::Wallet, id))
            .unwrap_or_default(),
        node: state
            .node()
            .map(|id| collect(Category::Node, id))
            .unwrap_or_default(),
    }
}

pub fn combination_advice(state: &SelectionState) -> Option<CombinationAdvice> {
    if state.signers().is_empty() || state.wallet().is_none() {
        return None;
    }

    Some(if state.node().is_some() {
        CombinationAdvice::Complete
    } else {
        CombinationAdvice::Basic
    })
}

/// Ways the selected signers talk to the selected wallet, de-duplicated in
/// first-seen order.
pub fn transfer_methods(state: &SelectionState, catalog: &Catalog) -> Vec<String> {
    let Some(wallet_id) = state.wallet() else {
        return Vec::new();
    };
    if state.has_none_signer() {
        return Vec::new();
    }

    let mut methods: Vec<String> = Vec::new();
    for signer_id in state.hardware_signers() {
        for method in catalog.transfer_methods_for(signer_id, wallet_id) {
            if !methods.contains(method) {
                methods.push(method.clone());
            }
        }
    }
    methods
}

pub fn data_flow(state: &SelectionState) -> DataFlow {
    let wallet = state.wallet().is_some();
    DataFlow {
        signer_to_wallet: wallet && state.has_hardware_signer(),
        node_to_wallet: wallet && state.node().is_some(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FeatureKind, NONE_SIGNER_ID};
    use crate::test_support::sample_catalog;

    fn state(signers: &[&str], wallet: Option<&str>, node: Option<&str>) -> SelectionState {
        SelectionState {
            signers: signers.iter().map(|s| s.to_string()).collect(),
            wallet: wallet.map(String::from),
            node: node.map(String::from),
        }
    }

    #[test]
    fn test_features_empty_selection() {
        let summary = selected_features(&SelectionState::new(), &sample_catalog());
        assert!(summary.is_empty());
    }

    #[test]
    fn test_features_grouped_by_column() {
        let catalog = sample_catalog();
        let summary = selected_features(&state(&["s1"], Some("w1"), Some("n1")), &catalog);
        assert_eq!(summary.signer[0].text, "air-gapped");
        assert_eq!(summary.wallet[0].kind, FeatureKind::Negative);
        assert_eq!(summary.for_category(Category::Node).len(), 1);
    }

    #[test]
    fn test_features_follow_signer_order() {
        let catalog = sample_catalog();
        let summary = selected_features(&state(&["s2", "s1"], None, None), &catalog);
        let texts: Vec<_> = summary.signer.iter().map(|f| f.text.as_str()).collect();
        assert_eq!(texts, ["qr only", "air-gapped", "expensive"]);
    }

    #[test]
    fn test_features_skip_unknown() {
        let summary = selected_features(&state(&["ghost"], Some("ghost"), None), &sample_catalog());
        assert!(summary.is_empty());
    }

    #[test]
    fn test_combination_advice() {
        assert_eq!(combination_advice(&state(&["s1"], None, None)), None);
        assert_eq!(combination_advice(&state(&[], Some("w1"), Some("n1"))), None);
        assert_eq!(
            combination_advice(&state(&["s1"], Some("w1"), None)),
            Some(CombinationAdvice::Basic)
        );
        assert_eq!(
            combination_advice(&state(&[NONE_SIGNER_ID], Some("w1"), Some("n1"))),
            Some(CombinationAdvice::Complete)
        );
    }

    #[test]
    fn test_transfer_methods() {
        let catalog = sample_catalog();
        assert_eq!(
            transfer_methods(&state(&["s1"], Some("w1"), None), &catalog),
            ["USB", "SD card"]
        );
        assert!(transfer_methods(&state(&["s1"], None, None), &catalog).is_empty());
        assert!(transfer_methods(&state(&[NONE_SIGNER_ID], Some("w1"), None), &catalog).is_empty());
        assert!(transfer_methods(&state(&["s2"], Some("w1"), None), &catalog).is_empty());
    }

    #[test]
    fn test_transfer_methods_deduplicated() {
        let catalog = sample_catalog();
        assert_eq!(
            transfer_methods(&state(&["s1", "s2"], Some("w3"), None), &catalog),
            ["QR code", "NFC"]
        );
    }

    #[test]
    fn test_data_flow() {
        assert_eq!(data_flow(&SelectionState::new()), DataFlow::default());
        let flow = data_flow(&state(&["s1"], Some("w1"), None));
        assert!(flow.signer_to_wallet);
        assert!(!flow.node_to_wallet);
        let flow = data_flow(&state(&[NONE_SIGNER_ID], Some("w1"), Some("n1")));
        assert!(!flow.signer_to_wallet);
        assert!(flow.node_to_wallet);
    }
}
