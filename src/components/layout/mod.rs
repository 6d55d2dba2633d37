//! Main three-column layout.
//!
//! ## Layout
//!
//! - **Desktop (> 768px)**: signer, wallet and node columns side by side with
//!   link panels between them
//! - **Mobile (<= 768px)**: columns stacked, link panels collapsed to tags

mod column;

use leptos::prelude::*;
use leptos_use::use_media_query;

use custody_core::Category;

use column::ComponentColumn;

use crate::app::AppContext;
use crate::config::MOBILE_MEDIA_QUERY;

stylance::import_crate_style!(css, "src/components/layout/layout.module.css");

#[component]
pub fn MainLayout() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");
    let is_mobile = use_media_query(MOBILE_MEDIA_QUERY.to_string());

    let flow = Signal::derive(move || ctx.with_session(Default::default(), |s| s.data_flow()));
    let transfer_methods =
        Signal::derive(move || ctx.with_session(Vec::new(), |s| s.transfer_methods()));

    let link_class = move |live: bool| {
        if live {
            format!("{} {}", css::link, css::linkLive)
        } else {
            css::link.to_string()
        }
    };

    view! {
        <main class=move || {
            if is_mobile.get() {
                format!("{} {}", css::layout, css::stacked)
            } else {
                css::layout.to_string()
            }
        }>
            <ComponentColumn category=Category::Signer />

            <div class=move || link_class(flow.get().signer_to_wallet)>
                <span class=css::arrow>"→ signatures and public keys"</span>
                <div class=css::transferMethods>
                    <For
                        each=move || transfer_methods.get()
                        key=|method| method.clone()
                        children=move |method| view! { <span class=css::transferTag>{method}</span> }
                    />
                </div>
                <span class=css::arrow>"← transactions to sign"</span>
            </div>

            <ComponentColumn category=Category::Wallet />

            <div class=move || link_class(flow.get().node_to_wallet)>
                <span class=css::arrow>"→ addresses and signed transactions"</span>
                <span class=css::arrow>"← balances and chain data"</span>
            </div>

            <ComponentColumn category=Category::Node />
        </main>
    }
}
