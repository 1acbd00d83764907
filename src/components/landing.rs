//! Landing Page Component

use leptos::prelude::*;
use list_store::StorageKind;

use crate::page::Page;

/// Storage variants shown as cards (kind, description)
const VARIANTS: &[(StorageKind, &str)] = &[
    (
        StorageKind::Local,
        "Local Storage persists data on a user's device, tied to a specific domain.",
    ),
    (
        StorageKind::Session,
        "Session Storage persists data only for the current browser session.",
    ),
];

#[component]
pub fn Landing() -> impl IntoView {
    view! {
        <section class="landing">
            <h1>"Storage Todos"</h1>
            <p class="landing-intro">
                "Small reference components that keep a todo list in browser storage. \
                 Pick a variant to try it out."
            </p>

            <ul class="variant-cards">
                {VARIANTS.iter().map(|(kind, description)| {
                    let page = Page::Todos(*kind);
                    view! {
                        <li class="variant-card">
                            <a href=page.hash()>{format!("Using {}", page.label())}</a>
                            <p>{*description}</p>
                        </li>
                    }
                }).collect_view()}
            </ul>
        </section>
    }
}
