//! One column of selectable component cards.

use leptos::prelude::*;
use leptos_icons::Icon;

use custody_core::{AffordanceState, Category, Component};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::column_title;

stylance::import_crate_style!(css, "src/components/layout/column.module.css");

fn affordance_class(state: AffordanceState) -> &'static str {
    match state {
        AffordanceState::Active => css::active,
        AffordanceState::Breathing => css::breathing,
        AffordanceState::Inactive => css::inactive,
    }
}

#[component]
pub fn ComponentColumn(category: Category) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let components = Signal::derive(move || ctx.components(category));
    let icon = match category {
        Category::Signer => ic::SIGNER,
        Category::Wallet => ic::WALLET,
        Category::Node => ic::NODE,
    };

    view! {
        <section class=css::column data-category=category.as_str()>
            <h2 class=css::title>
                <Icon icon=icon />
                {column_title(category)}
            </h2>
            <div class=css::grid>
                <For
                    each=move || components.get()
                    key=|component| component.id.clone()
                    children=move |component| {
                        view! { <ComponentCard component=component category=category /> }
                    }
                />
            </div>
        </section>
    }
}

#[component]
fn ComponentCard(component: Component, category: Category) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext must be provided at root");

    let Component { id, name, logo, .. } = component;
    let id_for_click = id.clone();

    let class = move || {
        let mut class = format!(
            "{} {}",
            css::card,
            affordance_class(ctx.affordance(&id, category))
        );
        if ctx.is_selected(&id, category) {
            class.push(' ');
            class.push_str(css::selected);
        }
        class
    };

    view! {
        <button class=class on:click=move |_| ctx.click(&id_for_click, category)>
            <span class=css::logo>{logo}</span>
            <span class=css::name>{name}</span>
        </button>
    }
}
