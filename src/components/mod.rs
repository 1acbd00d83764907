//! UI Components
//!
//! Reusable Leptos components.

mod landing;
mod log_panel;
mod nav_bar;
mod new_todo_form;
mod todo_panel;
mod todo_row;

pub use landing::Landing;
pub use log_panel::LogPanel;
pub use nav_bar::NavBar;
pub use new_todo_form::NewTodoForm;
pub use todo_panel::TodoPanel;
pub use todo_row::TodoRow;
