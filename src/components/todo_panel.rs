//! Todo Panel Component
//!
//! A todo list hydrated from browser storage and written back on every change.

use leptos::prelude::*;
use list_store::{ListSession, StorageKind};
use reactive_stores::Store;

use crate::components::{NewTodoForm, TodoRow};
use crate::context::TodoContext;
use crate::storage::open_list;
use crate::store::{TodoState, TodoStateStoreFields};

#[component]
pub fn TodoPanel(kind: StorageKind) -> impl IntoView {
    // Hydrate once at mount; the session lives as long as the panel
    let session = ListSession::open(open_list(kind));
    let in_memory = session.list().backend().is_fallback();
    let items = session.items().to_vec();
    let hydrate_error = session.hydrate_error().map(|e| e.to_string());
    log::info!("[TODO] Mounted {} list with {} items", kind.as_str(), items.len());
    let store = Store::new(TodoState::new(items));
    let session = StoredValue::new_local(session);

    provide_context(TodoContext::new(kind, store));

    let (write_error, set_write_error) = signal::<Option<String>>(None);
    let (load_error, set_load_error) = signal(hydrate_error);

    // Write-through: re-serialize the whole list whenever it changes.
    // The session skips the write while the list still matches the store.
    Effect::new(move |_| {
        let items = store.items().get();
        session.update_value(|session| match session.sync(&items) {
            Ok(written) => {
                if written {
                    set_load_error.set(None);
                }
                set_write_error.set(None);
            }
            Err(e) => {
                log::error!("[TODO] {}", e);
                set_write_error.set(Some(e.to_string()));
            }
        });
    });

    let title = match kind {
        StorageKind::Local => "Local Storage Todo App",
        StorageKind::Session => "Session Storage Todo App",
    };
    let indices = move || (0..store.items().read().len()).collect::<Vec<_>>();
    let summary = move || {
        store.items().with(|items| {
            let done = items.iter().filter(|i| i.is_done).count();
            format!("{} items, {} done", items.len(), done)
        })
    };

    view! {
        <section class="todo-panel">
            <h2>{title}</h2>

            {in_memory.then(|| view! {
                <p class="storage-warning">
                    "Browser storage is unavailable; todos will be lost on reload."
                </p>
            })}

            {move || load_error.get().map(|msg| view! {
                <p class="storage-error">
                    {format!("Stored todos could not be read ({}). They are kept until your next change.", msg)}
                </p>
            })}

            {move || write_error.get().map(|msg| view! {
                <p class="storage-error">{format!("Could not save: {}", msg)}</p>
            })}

            <NewTodoForm />

            <ul class="todo-list">
                <For
                    each=indices
                    key=|index| *index
                    children=move |index| view! { <TodoRow index=index /> }
                />
            </ul>

            <p class="item-count">{summary}</p>
        </section>
    }
}
