//! UI Components
//!
//! Leptos components making up the todo list.

mod todo_list;
mod list_header;
mod filter_bar;
mod add_form;
mod inline_editor;
mod todo_table;
mod todo_row;
mod todo_cards;
mod stats_footer;
mod modal_editor;

pub use todo_list::TodoList;
pub use list_header::ListHeader;
pub use filter_bar::FilterBar;
pub use add_form::AddForm;
pub use inline_editor::InlineEditor;
pub use todo_table::TodoTable;
pub use todo_row::TodoRow;
pub use todo_cards::{TodoCard, TodoCards};
pub use stats_footer::StatsFooter;
pub use modal_editor::ModalEditor;
