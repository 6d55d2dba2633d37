//! End-to-end picking flows through the session facade.

use custody_core::{
    AffordanceState, Catalog, Category, ClickOutcome, CustodySession, DeviceType,
    MemoryPreferences, NONE_SIGNER_ID, PREFERENCE_KEY, PreferencePort, SignerWillingness,
    UserPreference,
};

const CATALOG: &str = r#"{
    "hardwareSigners": [
        { "id": "none", "name": "No signer" },
        { "id": "s1", "name": "Signer One" },
        { "id": "s2", "name": "Signer Two" }
    ],
    "softwareWallets": [
        {
            "id": "w1",
            "name": "Wallet One",
            "compatibleSigners": ["none", "s1"],
            "supportedPlatforms": ["desktop", "mobile"]
        },
        {
            "id": "w2",
            "name": "Wallet Two",
            "compatibleSigners": ["none", "s2"],
            "supportedPlatforms": ["desktop"]
        }
    ],
    "nodes": [
        { "id": "n1", "name": "Node One", "compatibleWallets": ["w1"] },
        { "id": "n2", "name": "Node Two", "compatibleWallets": ["w2"] }
    ]
}"#;

fn session_with(willingness: SignerWillingness) -> CustodySession<MemoryPreferences> {
    let catalog = Catalog::from_json(CATALOG).unwrap();
    let mut session = CustodySession::new(catalog, MemoryPreferences::new());
    // No-signer scenarios reach "none" through a click, not onboarding
    session
        .complete_onboarding(UserPreference::new(
            DeviceType::Mobile,
            SignerWillingness::WithSigner,
        ))
        .unwrap();
    if willingness == SignerWillingness::NoSigner {
        session.on_click(NONE_SIGNER_ID, Category::Signer).unwrap();
    }
    session
}

fn affordances(
    session: &CustodySession<MemoryPreferences>,
    category: Category,
) -> Vec<(String, AffordanceState)> {
    session
        .catalog()
        .components(category)
        .iter()
        .map(|c| (c.id.clone(), session.affordance(&c.id, category)))
        .collect()
}

#[test]
fn scenario_a_initial_hint() {
    let session = session_with(SignerWillingness::WithSigner);

    for (id, state) in affordances(&session, Category::Signer) {
        assert_eq!(state, AffordanceState::Breathing, "signer {}", id);
    }
    for (_, state) in affordances(&session, Category::Wallet) {
        assert_eq!(state, AffordanceState::Inactive);
    }
    assert_eq!(session.score(), 0);
}

#[test]
fn scenario_b_no_signer() {
    let session = session_with(SignerWillingness::NoSigner);

    assert_eq!(session.state().signers(), [NONE_SIGNER_ID.to_string()]);
    // Mobile user: w1 runs on mobile, w2 is desktop only
    assert_eq!(
        session.affordance("w1", Category::Wallet),
        AffordanceState::Breathing
    );
    assert_eq!(
        session.affordance("w2", Category::Wallet),
        AffordanceState::Inactive
    );
    assert_eq!(session.score(), 0);
}

#[test]
fn scenario_c_and_d_no_signer_wallet_then_node() {
    let mut session = session_with(SignerWillingness::NoSigner);

    assert_eq!(session.on_click("w1", Category::Wallet), Ok(ClickOutcome::Applied));
    assert_eq!(session.score(), 60);
    assert_eq!(
        session.affordance("n1", Category::Node),
        AffordanceState::Breathing
    );
    assert_eq!(
        session.affordance("n2", Category::Node),
        AffordanceState::Inactive
    );

    assert_eq!(session.on_click("n1", Category::Node), Ok(ClickOutcome::Applied));
    assert_eq!(session.score(), 80);
}

#[test]
fn scenario_e_full_hardware_setup() {
    let mut session = session_with(SignerWillingness::WithSigner);

    session.on_click("s1", Category::Signer).unwrap();
    assert_eq!(session.score(), 50);

    session.on_click("w1", Category::Wallet).unwrap();
    assert_eq!(session.score(), 100);

    session.on_click("n1", Category::Node).unwrap();
    assert_eq!(session.score(), 120);
    assert_eq!(session.state().signers(), ["s1".to_string()]);
    assert_eq!(session.state().wallet(), Some("w1"));
    assert_eq!(session.state().node(), Some("n1"));
}

#[test]
fn scenario_f_unknown_ids() {
    let mut session = session_with(SignerWillingness::WithSigner);
    session.on_click("s1", Category::Signer).unwrap();
    let before = session.state().clone();

    for category in Category::ALL {
        assert_eq!(
            session.on_click("missing", category),
            Ok(ClickOutcome::UnknownComponent)
        );
        assert_eq!(
            session.affordance("missing", category),
            AffordanceState::Inactive
        );
    }
    assert_eq!(session.state(), &before);
}

#[test]
fn repeating_no_signer_clears_wallet_and_node() {
    let mut session = session_with(SignerWillingness::NoSigner);
    session.on_click("w1", Category::Wallet).unwrap();
    session.on_click("n1", Category::Node).unwrap();
    assert_eq!(session.score(), 80);

    assert_eq!(
        session.on_click(NONE_SIGNER_ID, Category::Signer),
        Ok(ClickOutcome::Applied)
    );
    assert_eq!(session.state().signers(), [NONE_SIGNER_ID.to_string()]);
    assert_eq!(session.state().wallet(), None);
    assert_eq!(session.state().node(), None);
    assert_eq!(session.score(), 0);

    assert_eq!(
        session.on_click(NONE_SIGNER_ID, Category::Signer),
        Ok(ClickOutcome::Unchanged)
    );
}

#[test]
fn root_change_from_inactive_signer() {
    let mut session = session_with(SignerWillingness::WithSigner);
    session.on_click("s1", Category::Signer).unwrap();
    session.on_click("w1", Category::Wallet).unwrap();
    session.on_click("n1", Category::Node).unwrap();

    assert_eq!(
        session.affordance("s2", Category::Signer),
        AffordanceState::Inactive
    );
    session.on_click("s2", Category::Signer).unwrap();

    assert_eq!(session.state().signers(), ["s2".to_string()]);
    assert_eq!(session.state().wallet(), None);
    assert_eq!(session.state().node(), None);
    assert_eq!(session.score(), 50);
}

#[test]
fn switching_out_of_no_signer_updates_preference() {
    let mut session = session_with(SignerWillingness::NoSigner);
    session.on_click("w1", Category::Wallet).unwrap();
    assert_eq!(
        session.preference().map(|p| p.signer_willingness),
        Some(SignerWillingness::NoSigner)
    );

    session.on_click("s1", Category::Signer).unwrap();

    assert_eq!(session.state().wallet(), None);
    assert_eq!(
        session
            .port()
            .get(PREFERENCE_KEY)
            .unwrap()
            .map(|p| p.signer_willingness),
        Some(SignerWillingness::WithSigner)
    );
}

#[test]
fn preference_survives_new_session() {
    let catalog = Catalog::from_json(CATALOG).unwrap();
    let mut first = CustodySession::new(catalog.clone(), MemoryPreferences::new());
    first
        .complete_onboarding(UserPreference::new(
            DeviceType::Desktop,
            SignerWillingness::NoSigner,
        ))
        .unwrap();

    let second = CustodySession::new(catalog, first.port().clone());
    assert!(!second.needs_onboarding());
    assert_eq!(
        second.preference().map(|p| p.device_type),
        Some(DeviceType::Desktop)
    );
    // Only onboarding itself pre-selects "none"
    assert!(second.state().is_empty());
}
