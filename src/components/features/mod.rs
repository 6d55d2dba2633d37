//! Feature panels for the current picks.
//!
//! One box per column that has a selection, aligned under the columns,
//! followed by a short note on the combination as a whole.

use leptos::prelude::*;
use leptos_icons::Icon;

use custody_core::{Category, CombinationAdvice, Feature, FeatureKind};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::features_title;

stylance::import_crate_style!(css, "src/components/features/features.module.css");

fn advice_text(advice: CombinationAdvice) -> (&'static str, &'static str) {
    match advice {
        CombinationAdvice::Complete => (
            "Complete setup:",
            "you have picked a full self-custody stack. Back up your seed phrase and keep the signer somewhere safe.",
        ),
        CombinationAdvice::Basic => (
            "Basic setup:",
            "this combination already covers the essentials. Add your own node for better privacy and full validation.",
        ),
    }
}

#[component]
pub fn FeaturePanels() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let summary = Signal::derive(move || ctx.with_session(Default::default(), |s| s.features()));
    let advice = Signal::derive(move || ctx.with_session(None, |s| s.advice()));

    view! {
        <section class=css::features>
            <div class=css::boxes>
                {Category::ALL
                    .into_iter()
                    .map(|category| {
                        let features = Signal::derive(move || {
                            summary.with(|s| s.for_category(category).to_vec())
                        });
                        view! {
                            <Show when=move || !features.with(|f| f.is_empty())>
                                <FeatureBox title=features_title(category) features=features />
                            </Show>
                        }
                    })
                    .collect_view()}
            </div>
            {move || {
                advice
                    .get()
                    .map(|advice| {
                        let (lead, body) = advice_text(advice);
                        view! {
                            <div class=css::advice>
                                <strong>{lead}</strong>
                                " "
                                {body}
                            </div>
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn FeatureBox(title: &'static str, features: Signal<Vec<Feature>>) -> impl IntoView {
    view! {
        <div class=css::featureBox>
            <h4 class=css::boxTitle>{title}</h4>
            <ul class=css::list>
                {move || {
                    features
                        .get()
                        .into_iter()
                        .map(|feature| {
                            let (icon, class) = match feature.kind {
                                FeatureKind::Positive => (ic::POSITIVE, css::positive),
                                FeatureKind::Negative => (ic::NEGATIVE, css::negative),
                                FeatureKind::Warning => (ic::WARNING, css::warning),
                            };
                            view! {
                                <li class=format!("{} {}", css::item, class)>
                                    <Icon icon=icon />
                                    <span>{feature.text}</span>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}
