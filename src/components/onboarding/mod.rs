//! First-visit onboarding.
//!
//! Two questions: which device the user goes online with, then whether
//! they are willing to use a hardware signer. The answers become the
//! session's [`UserPreference`].

use leptos::prelude::*;
use leptos_icons::Icon;

use custody_core::{DeviceType, SignerWillingness, UserPreference};

use crate::app::AppContext;
use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/onboarding/onboarding.module.css");

#[component]
pub fn Onboarding() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let device = RwSignal::new(None::<DeviceType>);

    let choose_signer = move |willingness: SignerWillingness| {
        if let Some(device_type) = device.get_untracked() {
            ctx.complete_onboarding(UserPreference::new(device_type, willingness));
        }
    };

    view! {
        <div class=css::overlay>
            <div class=css::card role="dialog" aria-modal="true">
                {move || match device.get() {
                    None => view! {
                        <h2 class=css::heading>"Welcome"</h2>
                        <p class=css::question>"Which device do you go online with?"</p>
                        <div class=css::choices>
                            <button
                                class=css::choice
                                on:click=move |_| device.set(Some(DeviceType::Mobile))
                            >
                                <Icon icon=ic::MOBILE />
                                <span class=css::choiceLabel>"My phone"</span>
                            </button>
                            <button
                                class=css::choice
                                on:click=move |_| device.set(Some(DeviceType::Desktop))
                            >
                                <Icon icon=ic::DESKTOP />
                                <span class=css::choiceLabel>"My computer"</span>
                            </button>
                        </div>
                    }
                    .into_any(),
                    Some(_) => view! {
                        <h2 class=css::heading>"Security preference"</h2>
                        <p class=css::question>"Are you willing to use a dedicated signer?"</p>
                        <div class=css::choices>
                            <button
                                class=css::choice
                                on:click=move |_| choose_signer(SignerWillingness::NoSigner)
                            >
                                <Icon icon=ic::WALLET />
                                <span class=css::choiceLabel>"No dedicated signer"</span>
                                <span class=css::choiceHint>"Software wallet + node"</span>
                            </button>
                            <button
                                class=css::choice
                                on:click=move |_| choose_signer(SignerWillingness::WithSigner)
                            >
                                <Icon icon=ic::SIGNER />
                                <span class=css::choiceLabel>"I'll try a hardware signer"</span>
                                <span class=css::choiceHint>"Hardware + software + node"</span>
                            </button>
                        </div>
                        <button class=css::back on:click=move |_| device.set(None)>
                            "Back"
                        </button>
                    }
                    .into_any(),
                }}
            </div>
        </div>
    }
}
