//! User preference captured by onboarding.

use serde::{Deserialize, Serialize};

use super::DeviceType;

/// Whether the user wants to use a dedicated hardware signer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SignerWillingness {
    WithSigner,
    NoSigner,
}

/// Onboarding answers, persisted through a [`PreferencePort`](crate::PreferencePort).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPreference {
    pub device_type: DeviceType,
    pub signer_willingness: SignerWillingness,
}

impl UserPreference {
    pub fn new(device_type: DeviceType, signer_willingness: SignerWillingness) -> Self {
        Self {
            device_type,
            signer_willingness,
        }
    }

    pub fn wants_signer(&self) -> bool {
        self.signer_willingness == SignerWillingness::WithSigner
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let pref = UserPreference::new(DeviceType::Mobile, SignerWillingness::NoSigner);
        let json = serde_json::to_string(&pref).unwrap();
        assert_eq!(
            json,
            r#"{"deviceType":"mobile","signerWillingness":"no-signer"}"#
        );
    }

    #[test]
    fn test_parse_stored_value() {
        let pref: UserPreference =
            serde_json::from_str(r#"{"deviceType":"desktop","signerWillingness":"with-signer"}"#)
                .unwrap();
        assert_eq!(pref.device_type, DeviceType::Desktop);
        assert!(pref.wants_signer());
    }

    #[test]
    fn test_reject_unknown_willingness() {
        let result = serde_json::from_str::<UserPreference>(
            r#"{"deviceType":"desktop","signerWillingness":"maybe"}"#,
        );
        assert!(result.is_err());
    }
}
