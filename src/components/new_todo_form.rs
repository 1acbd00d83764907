//! New Todo Form Component
//!
//! Input row with Add and Clear All.

use leptos::prelude::*;
use list_store::ops;

use crate::context::use_todo_context;

/// Form for appending todos to the enclosing panel's list
#[component]
pub fn NewTodoForm() -> impl IntoView {
    let ctx = use_todo_context();

    let (new_text, set_new_text) = signal(String::new());

    let add_todo = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let text = new_text.get();
        if text.trim().is_empty() { return; }
        ctx.apply(|items| ops::add(items, &text));
        set_new_text.set(String::new());
    };

    view! {
        <form class="new-todo-form" on:submit=add_todo>
            <input
                type="text"
                placeholder="Add a new todo..."
                prop:value=move || new_text.get()
                on:input=move |ev| set_new_text.set(event_target_value(&ev))
            />
            <button type="submit" class="add-btn">"Add"</button>
            <button
                type="button"
                class="clear-btn"
                on:click=move |_| ctx.apply(|_| ops::clear())
            >
                "Clear All"
            </button>
        </form>
    }
}
