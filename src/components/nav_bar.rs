//! Navigation Bar Component
//!
//! Tab bar linking the pages; the active one follows the URL fragment.

use leptos::prelude::*;

use crate::page::Page;

#[component]
pub fn NavBar(page: ReadSignal<Page>) -> impl IntoView {
    view! {
        <nav class="nav-bar">
            {Page::ALL.iter().map(|&target| {
                let tab_class = move || {
                    if page.get() == target { "nav-tab active" } else { "nav-tab" }
                };
                view! {
                    <a class=tab_class href=target.hash()>{target.label()}</a>
                }
            }).collect_view()}
        </nav>
    }
}
