//! Root application module.
//!
//! Contains the main App component and the AppContext that wraps the
//! custody engine in a Leptos signal.

use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use custody_core::{
    AffordanceState, Catalog, Category, ClickOutcome, Component, CustodySession, PreferenceError,
    UserPreference,
};

use crate::components::{FeaturePanels, Header, MainLayout, Onboarding};
use crate::core::{LocalStoragePreferences, load_catalog};
use crate::utils::dom;

/// Engine session as stored in the context.
pub type Session = CustodySession<LocalStoragePreferences>;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// The session is `None` until the catalog has loaded. All selection state
/// lives inside the engine; components only read it and dispatch events
/// through the methods below.
#[derive(Clone, Copy)]
pub struct AppContext {
    pub session: RwSignal<Option<Session>>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            session: RwSignal::new(None),
        }
    }

    /// Install the engine once the catalog is available.
    pub fn start(&self, catalog: Catalog) {
        self.session
            .set(Some(CustodySession::new(catalog, LocalStoragePreferences)));
    }

    pub fn is_loading(&self) -> bool {
        self.session.with(|s| s.is_none())
    }

    pub fn needs_onboarding(&self) -> bool {
        self.session
            .with(|s| s.as_ref().is_some_and(|s| s.needs_onboarding()))
    }

    pub fn complete_onboarding(&self, preference: UserPreference) {
        self.session.update(|s| {
            if let Some(session) = s
                && let Err(e) = session.complete_onboarding(preference)
            {
                dom::warn(&unsaved_preference_message("save", &e));
            }
        });
    }

    pub fn click(&self, id: &str, category: Category) {
        self.session.update(|s| {
            let Some(session) = s else {
                return;
            };
            match session.on_click(id, category) {
                Ok(ClickOutcome::UnknownComponent) => {
                    dom::warn(&format!("Ignoring click on unknown {} '{}'", category, id));
                }
                Ok(_) => {}
                Err(e) => dom::warn(&unsaved_preference_message("save", &e)),
            }
        });
    }

    pub fn affordance(&self, id: &str, category: Category) -> AffordanceState {
        self.session.with(|s| {
            s.as_ref()
                .map(|s| s.affordance(id, category))
                .unwrap_or(AffordanceState::Inactive)
        })
    }

    pub fn is_selected(&self, id: &str, category: Category) -> bool {
        self.session.with(|s| {
            s.as_ref()
                .is_some_and(|s| s.state().is_selected(category, id))
        })
    }

    pub fn score(&self) -> u8 {
        self.session
            .with(|s| s.as_ref().map(|s| s.score()).unwrap_or(0))
    }

    pub fn reset(&self) {
        self.session.update(|s| {
            if let Some(session) = s
                && let Err(e) = session.reset()
            {
                dom::warn(&unsaved_preference_message("clear", &e));
            }
        });
    }

    /// Catalog entries of one column, in document order.
    pub fn components(&self, category: Category) -> Vec<Component> {
        self.session.with(|s| {
            s.as_ref()
                .map(|s| s.catalog().components(category).to_vec())
                .unwrap_or_default()
        })
    }

    /// Run `f` against the loaded session, or return `default` while loading.
    pub fn with_session<T>(&self, default: T, f: impl FnOnce(&Session) -> T) -> T {
        self.session.with(|s| s.as_ref().map(f).unwrap_or(default))
    }
}

/// Console message for a preference the browser could not persist.
fn unsaved_preference_message(action: &str, error: &PreferenceError) -> String {
    format!("Could not {} preference in localStorage: {}", action, error)
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Root application component.
///
/// Provides the [`AppContext`], starts the catalog load and renders the
/// header, the three columns, the feature panels and, when needed, the
/// onboarding overlay.
#[component]
pub fn App() -> impl IntoView {
    let ctx = AppContext::new();
    provide_context(ctx);

    spawn_local(async move {
        let catalog = load_catalog().await;
        ctx.start(catalog);
    });

    let loading = Signal::derive(move || ctx.is_loading());
    let onboarding = Signal::derive(move || ctx.needs_onboarding());

    view! {
        <Show
            when=move || !loading.get()
            fallback=|| view! {
                <div style="
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    font-size: 1.2rem;
                    color: #666;
                ">
                    "Loading..."
                </div>
            }
        >
            <Show when=move || onboarding.get()>
                <Onboarding />
            </Show>
            <Header />
            <MainLayout />
            <FeaturePanels />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsaved_preference_message() {
        assert_eq!(
            unsaved_preference_message("save", &PreferenceError::StorageUnavailable),
            "Could not save preference in localStorage: preference storage not available"
        );
        assert!(
            unsaved_preference_message("clear", &PreferenceError::RemoveFailed)
                .starts_with("Could not clear preference")
        );
    }
}
