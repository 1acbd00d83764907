//! Todo Row Component
//!
//! One list entry: text or edit box, plus Edit/Save, Done/Undone, Remove.

use leptos::prelude::*;
use list_store::{ops, ItemState, ListItem};

use crate::context::use_todo_context;
use crate::store::TodoStateStoreFields;

/// A single row, addressed by its position in the list
///
/// Fields are read reactively by index so the edit input survives
/// keystrokes instead of being re-created.
#[component]
pub fn TodoRow(index: usize) -> impl IntoView {
    let ctx = use_todo_context();

    let item = Memo::new(move |_| {
        ctx.store.items().read().get(index).cloned().unwrap_or_default()
    });
    let state = Memo::new(move |_| item.with(ListItem::state));
    let is_done = Memo::new(move |_| item.with(|i| i.is_done));

    let row_class = move || if is_done.get() { "todo-row done" } else { "todo-row" };

    view! {
        <li class=row_class>
            {move || if state.get() == ItemState::Editing {
                view! {
                    <input
                        type="text"
                        class="todo-edit-input"
                        prop:value=move || item.with(|i| i.edit_text.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            ctx.apply(|items| ops::update_edit_text(items, index, &value));
                        }
                    />
                }.into_any()
            } else {
                view! {
                    <span class="todo-text">{move || item.with(|i| i.text.clone())}</span>
                }.into_any()
            }}

            <div class="todo-actions">
                {move || if state.get() == ItemState::Editing {
                    view! {
                        <button class="save-btn" on:click=move |_| ctx.apply(|items| ops::commit_edit(items, index))>
                            "Save"
                        </button>
                    }.into_any()
                } else {
                    view! {
                        <button class="edit-btn" on:click=move |_| ctx.apply(|items| ops::begin_edit(items, index))>
                            "Edit"
                        </button>
                    }.into_any()
                }}

                <button class="done-btn" on:click=move |_| ctx.apply(|items| ops::toggle_done(items, index))>
                    {move || if is_done.get() { "Undone" } else { "Done" }}
                </button>

                <button class="remove-btn" on:click=move |_| ctx.apply(|items| ops::remove(items, index))>
                    "Remove"
                </button>
            </div>
        </li>
    }
}
