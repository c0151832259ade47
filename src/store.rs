//! View State Store
//!
//! Ephemeral per-instance UI state, held in a `reactive_stores::Store` for
//! field-level reactivity. The item collection is never stored here; it
//! always comes from the owner.

use reactive_stores::Store;
use serde::{Deserialize, Serialize};

use crate::config::TodoListConfig;
use crate::models::{CompletionFilter, SortField, SortOrder, TodoItem};
use crate::view_model::DeriveOptions;

/// Inline edit state machine
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EditState {
    #[default]
    Idle,
    Editing { item_id: String, draft: String },
}

/// What a key press inside the inline editor asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditKeyAction {
    Commit,
    Cancel,
    None,
}

impl EditKeyAction {
    pub fn from_key(key: &str) -> Self {
        match key {
            "Enter" => EditKeyAction::Commit,
            "Escape" => EditKeyAction::Cancel,
            _ => EditKeyAction::None,
        }
    }
}

/// Per-instance view state
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, Store)]
pub struct ViewState {
    /// Free-text search query
    pub search: String,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    /// Tri-state completion filter
    pub filter: CompletionFilter,
    /// Inline editor
    pub edit: EditState,
    /// Add form buffer
    pub add_text: String,
}

impl ViewState {
    /// Initial state for a freshly mounted list
    pub fn from_config(config: &TodoListConfig) -> Self {
        Self {
            sort_field: config.sort_by,
            sort_order: config.sort_order,
            ..Default::default()
        }
    }

    pub fn set_search(&mut self, text: String) {
        self.search = text;
    }

    pub fn set_filter(&mut self, filter: CompletionFilter) {
        self.filter = filter;
    }

    /// Sort header click: same field flips direction, new field starts ascending
    pub fn toggle_sort(&mut self, field: SortField) {
        if self.sort_field == field {
            self.sort_order = self.sort_order.flipped();
        } else {
            self.sort_field = field;
            self.sort_order = SortOrder::Asc;
        }
    }

    pub fn set_add_text(&mut self, text: String) {
        self.add_text = text;
    }

    pub fn can_submit_add(&self) -> bool {
        !self.add_text.trim().is_empty()
    }

    /// Trimmed add text, clearing the buffer. `None` leaves a blank buffer alone.
    pub fn take_add_submission(&mut self) -> Option<String> {
        let text = self.add_text.trim().to_string();
        if text.is_empty() {
            return None;
        }
        self.add_text.clear();
        Some(text)
    }

    /// Enter editing for `item`, discarding any other draft
    pub fn start_edit(&mut self, item: &TodoItem) {
        if let EditState::Editing { item_id, .. } = &self.edit {
            if item_id != &item.id {
                log::debug!("[EDIT] discarding draft for {}", item_id);
            }
        }
        log::debug!("[EDIT] start {}", item.id);
        self.edit = EditState::Editing {
            item_id: item.id.clone(),
            draft: item.text.clone(),
        };
    }

    pub fn set_draft(&mut self, text: String) {
        if let EditState::Editing { draft, .. } = &mut self.edit {
            *draft = text;
        }
    }

    /// Leave editing with `(id, trimmed draft)`, or stay put if the draft is blank
    pub fn commit_edit(&mut self) -> Option<(String, String)> {
        let EditState::Editing { item_id, draft } = &self.edit else {
            return None;
        };
        let text = draft.trim().to_string();
        if text.is_empty() {
            return None;
        }
        let id = item_id.clone();
        log::debug!("[EDIT] commit {}", id);
        self.edit = EditState::Idle;
        Some((id, text))
    }

    pub fn cancel_edit(&mut self) {
        if let EditState::Editing { item_id, .. } = &self.edit {
            log::debug!("[EDIT] cancel {}", item_id);
        }
        self.edit = EditState::Idle;
    }

    pub fn is_editing(&self, id: &str) -> bool {
        matches!(&self.edit, EditState::Editing { item_id, .. } if item_id == id)
    }

    pub fn draft(&self) -> Option<&str> {
        match &self.edit {
            EditState::Editing { draft, .. } => Some(draft),
            EditState::Idle => None,
        }
    }

    /// Deriver options for this state under `config`
    pub fn derive_options(&self, config: &TodoListConfig) -> DeriveOptions {
        DeriveOptions {
            show_completed: config.show_completed,
            filter: self.filter,
            search: self.search.clone(),
            sort_field: self.sort_field,
            sort_order: self.sort_order,
            max_items: config.item_limit(),
        }
    }
}

/// Type alias for the store
pub type ViewStore = Store<ViewState>;
