//! Header with the completion bar.
//!
//! The bar is scaled so that 100% sits at five sixths of its width and the
//! remaining sixth is reserved for the node bonus (up to [`MAX_SCORE`]).

use leptos::prelude::*;
use leptos_icons::Icon;

use custody_core::MAX_SCORE;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_TAGLINE, APP_TITLE};

stylance::import_crate_style!(css, "src/components/header/header.module.css");

/// Fill width of the completion bar, in percent of the bar.
fn bar_width(score: u8) -> f64 {
    f64::from(score.min(MAX_SCORE)) / f64::from(MAX_SCORE) * 100.0
}

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let score = Signal::derive(move || ctx.score());
    let complete = Signal::derive(move || score.get() == MAX_SCORE);
    let multisig_hint = RwSignal::new(false);

    view! {
        <header class=css::header>
            <div class=css::titleBlock>
                <h1 class=css::title>{APP_TITLE}</h1>
                <p class=css::tagline>{APP_TAGLINE}</p>
            </div>

            <div class=css::progress>
                <div class=css::track>
                    <div
                        class=move || {
                            if complete.get() {
                                format!("{} {}", css::fill, css::fillComplete)
                            } else {
                                css::fill.to_string()
                            }
                        }
                        style=move || format!("width: {:.2}%", bar_width(score.get()))
                    />
                    <span class=css::marker />
                </div>
                <span class=css::percentage>{move || format!("{}%", score.get())}</span>
                <Show when=move || complete.get()>
                    <span class=css::celebration>"🎉"</span>
                </Show>
            </div>

            <div class=css::actions>
                <div class=css::modeSelector>
                    <button class=format!("{} {}", css::modeButton, css::modeActive)>
                        "Single-sig"
                    </button>
                    <button
                        class=format!("{} {}", css::modeButton, css::modeDisabled)
                        aria-disabled="true"
                        on:mouseenter=move |_| multisig_hint.set(true)
                        on:mouseleave=move |_| multisig_hint.set(false)
                    >
                        "Multisig"
                        <Show when=move || multisig_hint.get()>
                            <span class=css::tooltip>"Coming soon"</span>
                        </Show>
                    </button>
                </div>
                <button
                    class=css::resetButton
                    title="Reset preferences"
                    on:click=move |_| ctx.reset()
                >
                    <Icon icon=ic::RESET />
                    "Reset"
                </button>
            </div>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bar_width_scale() {
        assert_eq!(bar_width(0), 0.0);
        assert_eq!(bar_width(60), 50.0);
        assert_eq!(bar_width(MAX_SCORE), 100.0);
        assert!((bar_width(100) - 83.333).abs() < 0.01);
    }

    #[test]
    fn test_bar_width_clamped() {
        assert_eq!(bar_width(200), 100.0);
    }
}
