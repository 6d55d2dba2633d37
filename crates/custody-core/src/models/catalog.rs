//! Custody catalog: hardware signers, software wallets and blockchain nodes.

use std::collections::{BTreeMap, BTreeSet, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// Bundled catalog used when the remote document cannot be loaded.
const FALLBACK_CATALOG: &str = include_str!("../../data/catalog.json");

/// Signer id meaning "no hardware signer". Never combined with other signer ids.
pub const NONE_SIGNER_ID: &str = "none";

/// Component category (one column of the picker).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    Signer,
    Wallet,
    Node,
}

impl Category {
    /// All categories in column order.
    pub const ALL: [Category; 3] = [Category::Signer, Category::Wallet, Category::Node];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Signer => "signer",
            Self::Wallet => "wallet",
            Self::Node => "node",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Device the user goes online with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Mobile,
    Desktop,
}

/// Tone of a feature bullet.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeatureKind {
    Positive,
    Negative,
    Warning,
}

/// A single pro/con/caveat line shown for a component.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub kind: FeatureKind,
    pub text: String,
}

/// A catalog entry in any category.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Component {
    pub id: String,
    pub name: String,
    /// Short glyph rendered on the card.
    #[serde(default)]
    pub logo: String,
    #[serde(default)]
    pub compatible_signers: BTreeSet<String>,
    #[serde(default)]
    pub compatible_wallets: BTreeSet<String>,
    #[serde(default)]
    pub compatible_nodes: BTreeSet<String>,
    #[serde(default)]
    pub supported_platforms: BTreeSet<DeviceType>,
    #[serde(default)]
    pub features: Vec<Feature>,
}

impl Component {
    pub fn supports(&self, device: DeviceType) -> bool {
        self.supported_platforms.contains(&device)
    }

    pub fn accepts_signer(&self, signer_id: &str) -> bool {
        self.compatible_signers.contains(signer_id)
    }

    pub fn accepts_wallet(&self, wallet_id: &str) -> bool {
        self.compatible_wallets.contains(wallet_id)
    }
}

/// Transfer methods keyed by signer id, then wallet id.
pub type TransferMethods = BTreeMap<String, BTreeMap<String, Vec<String>>>;

/// Immutable component dataset.
///
/// Loaded once at startup (remote document or [`Catalog::fallback`]) and
/// never mutated afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Catalog {
    #[serde(default)]
    pub hardware_signers: Vec<Component>,
    #[serde(default)]
    pub software_wallets: Vec<Component>,
    #[serde(default)]
    pub nodes: Vec<Component>,
    #[serde(default)]
    pub transfer_methods: TransferMethods,
}

impl Catalog {
    /// Parse and validate a catalog document.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The catalog compiled into the binary.
    pub fn fallback() -> Result<Self, CatalogError> {
        Self::from_json(FALLBACK_CATALOG)
    }

    /// Check that ids are unique within each category.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for category in Category::ALL {
            let mut seen = HashSet::new();
            for component in self.components(category) {
                if !seen.insert(component.id.as_str()) {
                    return Err(CatalogError::DuplicateId {
                        category,
                        id: component.id.clone(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Components of one category, in document order.
    pub fn components(&self, category: Category) -> &[Component] {
        match category {
            Category::Signer => &self.hardware_signers,
            Category::Wallet => &self.software_wallets,
            Category::Node => &self.nodes,
        }
    }

    pub fn find(&self, category: Category, id: &str) -> Option<&Component> {
        self.components(category).iter().find(|c| c.id == id)
    }

    pub fn contains(&self, category: Category, id: &str) -> bool {
        self.find(category, id).is_some()
    }

    /// Transfer methods between a signer and a wallet, if the pair is listed.
    pub fn transfer_methods_for(&self, signer_id: &str, wallet_id: &str) -> &[String] {
        self.transfer_methods
            .get(signer_id)
            .and_then(|wallets| wallets.get(wallet_id))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
