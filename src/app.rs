//! Storage Todos App
//!
//! Navigation shell switching between the landing page and the two todo panels.

use leptos::ev;
use leptos::prelude::*;

use crate::components::{Landing, LogPanel, NavBar, TodoPanel};
use crate::page::{current_page, Page};

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(current_page());

    // Follow back/forward and link clicks
    let _ = window_event_listener(ev::hashchange, move |_| {
        let next = current_page();
        log::debug!("[APP] Navigated to {:?}", next);
        set_page.set(next);
    });

    view! {
        <div class="app-layout">
            <header class="app-header">
                <NavBar page=page />
            </header>

            <main class="main-content">
                {move || match page.get() {
                    Page::Home => view! { <Landing /> }.into_any(),
                    Page::Todos(kind) => view! { <TodoPanel kind=kind /> }.into_any(),
                }}
            </main>

            <footer class="app-footer">
                <LogPanel />
            </footer>
        </div>
    }
}
