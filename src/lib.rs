//! Todo-List View Component
//!
//! A Leptos widget that renders an owner-supplied collection of tasks with
//! client-side search, completion filter, sorting and a row cap. Add, toggle,
//! delete and edit requests are handed back to the owner through callbacks;
//! the widget never mutates the items it is given.
//!
//! - [`view_model`]: pure filter → search → sort → limit pipeline and stats
//! - [`store`]: per-instance view state (search, sort, filter, edit, add)
//! - [`components`]: table and card layouts, editors, footer
//! - [`editor`]: interface for swappable rich editors
//!
//! ```ignore
//! view! {
//!     <TodoList
//!         items=items
//!         config=TodoListConfig::default().with_all_columns()
//!         on_add=move |text: String| owner_add(text)
//!         on_toggle=move |id: String| owner_toggle(id)
//!     />
//! }
//! ```

pub mod components;
pub mod config;
pub mod context;
pub mod display;
pub mod editor;
pub mod error;
pub mod logging;
pub mod models;
pub mod store;
pub mod view_model;

pub use components::{ModalEditor, TodoList};
pub use config::{Layout, Theme, TodoListConfig};
pub use editor::{DetailEditor, EditableRecord, EditorOutcome, SharedEditor};
pub use error::TodoError;
pub use models::{CompletionFilter, Priority, SortField, SortOrder, TodoItem};
pub use view_model::{derive_view, DeriveOptions, DerivedView, Stats};
