//! List Context
//!
//! Handles shared by the components of one `TodoList` instance, provided via
//! the Leptos Context API.

use chrono::{DateTime, Utc};
use leptos::prelude::*;

use crate::config::TodoListConfig;
use crate::editor::{EditableRecord, EditorOutcome, SharedEditor};
use crate::models::TodoItem;
use crate::store::{ViewState, ViewStore};

/// Owner callbacks; `None` disables the affordance
#[derive(Clone, Copy, Default)]
pub struct TodoCallbacks {
    pub on_add: Option<Callback<String>>,
    pub on_toggle: Option<Callback<String>>,
    pub on_delete: Option<Callback<String>>,
    pub on_edit: Option<Callback<(String, String)>>,
}

/// Per-instance signals provided via context
#[derive(Clone, Copy)]
pub struct ListContext {
    pub config: StoredValue<TodoListConfig>,
    pub view: ViewStore,
    pub callbacks: TodoCallbacks,
    /// Record open in the detail editor, if any
    pub detail_record: RwSignal<Option<EditableRecord>>,
    /// Clock for overdue styling, advanced by the list's ticker
    pub now: RwSignal<DateTime<Utc>>,
    detail_editor: StoredValue<Option<SharedEditor>>,
}

impl ListContext {
    pub fn new(
        config: TodoListConfig,
        callbacks: TodoCallbacks,
        detail_editor: Option<SharedEditor>,
    ) -> Self {
        let view = ViewStore::new(ViewState::from_config(&config));
        Self {
            config: StoredValue::new(config),
            view,
            callbacks,
            detail_record: RwSignal::new(None),
            now: RwSignal::new(Utc::now()),
            detail_editor: StoredValue::new(detail_editor),
        }
    }

    pub fn config<T>(&self, f: impl FnOnce(&TodoListConfig) -> T) -> T {
        self.config.with_value(f)
    }

    /// Edit button shown on rows
    pub fn can_edit(&self) -> bool {
        self.config(|c| c.allow_edit) && self.callbacks.on_edit.is_some()
    }

    /// Delete button shown on rows
    pub fn can_delete(&self) -> bool {
        self.config(|c| c.allow_delete) && self.callbacks.on_delete.is_some()
    }

    pub fn toggle(&self, id: String) {
        if let Some(cb) = self.callbacks.on_toggle {
            log::debug!("[TODO] toggle {}", id);
            cb.run(id);
        }
    }

    pub fn delete(&self, id: String) {
        if let Some(cb) = self.callbacks.on_delete {
            log::debug!("[TODO] delete {}", id);
            cb.run(id);
        }
    }

    /// Submit the add form buffer
    pub fn submit_add(&self) {
        let Some(cb) = self.callbacks.on_add else {
            return;
        };
        let mut submitted = None;
        self.view.update(|s| submitted = s.take_add_submission());
        if let Some(text) = submitted {
            log::debug!("[TODO] add {:?}", text);
            cb.run(text);
        }
    }

    /// Open an editor for `item`: the detail editor when one is configured,
    /// otherwise the inline one
    pub fn begin_edit(&self, item: &TodoItem) {
        if self.detail_editor.with_value(|e| e.is_some()) {
            self.view.update(|s| s.cancel_edit());
            self.detail_record.set(Some(EditableRecord::from_item(item)));
        } else {
            self.view.update(|s| s.start_edit(item));
        }
    }

    /// Commit the inline draft. Without an edit callback nothing happens.
    pub fn commit_edit(&self) {
        let Some(cb) = self.callbacks.on_edit else {
            return;
        };
        let mut committed = None;
        self.view.update(|s| committed = s.commit_edit());
        if let Some((id, text)) = committed {
            log::debug!("[TODO] edit {} -> {:?}", id, text);
            cb.run((id, text));
        }
    }

    pub fn cancel_edit(&self) {
        self.view.update(|s| s.cancel_edit());
    }

    /// Detail editor session finished
    pub fn finish_detail_edit(&self, outcome: EditorOutcome) {
        self.detail_record.set(None);
        if let (Some(cb), Some((id, text))) = (self.callbacks.on_edit, outcome.into_edit()) {
            log::debug!("[TODO] detail edit {} -> {:?}", id, text);
            cb.run((id, text));
        }
    }

    pub fn detail_editor(&self) -> Option<SharedEditor> {
        self.detail_editor.get_value()
    }
}

/// Get the list context
pub fn use_list_context() -> ListContext {
    expect_context::<ListContext>()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use chrono::TimeZone;

    use super::*;
    use crate::editor::DetailEditor;
    use crate::view_model::is_overdue;

    type Calls<T> = Arc<Mutex<Vec<T>>>;

    fn make_item(id: &str, text: &str) -> TodoItem {
        TodoItem::new(id, text, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
    }

    fn recorder<T: Send + 'static>() -> (Callback<T>, Calls<T>) {
        let calls: Calls<T> = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let cb = Callback::new(move |value: T| sink.lock().unwrap().push(value));
        (cb, calls)
    }

    struct NullEditor;

    impl DetailEditor for NullEditor {
        fn render(&self, _record: EditableRecord, _on_close: Callback<EditorOutcome>) -> AnyView {
            ().into_any()
        }
    }

    #[test]
    fn test_add_trims_and_skips_blank() {
        let owner = Owner::new();
        owner.with(|| {
            let (on_add, calls) = recorder::<String>();
            let callbacks = TodoCallbacks {
                on_add: Some(on_add),
                ..Default::default()
            };
            let ctx = ListContext::new(TodoListConfig::default(), callbacks, None);

            ctx.view.update(|s| s.set_add_text("   ".to_string()));
            ctx.submit_add();
            assert!(calls.lock().unwrap().is_empty());

            ctx.view.update(|s| s.set_add_text("  buy milk  ".to_string()));
            ctx.submit_add();
            assert_eq!(*calls.lock().unwrap(), vec!["buy milk".to_string()]);
            assert!(ctx.view.with(|s| s.add_text.is_empty()));
        });
    }

    #[test]
    fn test_add_without_callback_keeps_buffer() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = ListContext::new(TodoListConfig::default(), TodoCallbacks::default(), None);
            ctx.view.update(|s| s.set_add_text("buy milk".to_string()));
            ctx.submit_add();
            assert_eq!(ctx.view.with(|s| s.add_text.clone()), "buy milk");
        });
    }

    #[test]
    fn test_replaced_edit_only_commits_latest() {
        let owner = Owner::new();
        owner.with(|| {
            let (on_edit, calls) = recorder::<(String, String)>();
            let callbacks = TodoCallbacks {
                on_edit: Some(on_edit),
                ..Default::default()
            };
            let ctx = ListContext::new(TodoListConfig::default(), callbacks, None);

            ctx.begin_edit(&make_item("a", "first"));
            ctx.view.update(|s| s.set_draft("first changed".to_string()));
            ctx.begin_edit(&make_item("b", "second"));
            ctx.view.update(|s| s.set_draft("  second changed ".to_string()));
            ctx.commit_edit();

            assert_eq!(
                *calls.lock().unwrap(),
                vec![("b".to_string(), "second changed".to_string())]
            );
            assert!(!ctx.view.with(|s| s.is_editing("b")));
        });
    }

    #[test]
    fn test_commit_without_edit_callback_stays_editing() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = ListContext::new(TodoListConfig::default(), TodoCallbacks::default(), None);
            ctx.begin_edit(&make_item("a", "first"));
            ctx.commit_edit();
            assert!(ctx.view.with(|s| s.is_editing("a")));

            ctx.cancel_edit();
            assert!(!ctx.view.with(|s| s.is_editing("a")));
        });
    }

    #[test]
    fn test_toggle_and_delete_pass_ids_through() {
        let owner = Owner::new();
        owner.with(|| {
            let (on_toggle, toggled) = recorder::<String>();
            let (on_delete, deleted) = recorder::<String>();
            let callbacks = TodoCallbacks {
                on_toggle: Some(on_toggle),
                on_delete: Some(on_delete),
                ..Default::default()
            };
            let ctx = ListContext::new(TodoListConfig::default(), callbacks, None);

            ctx.toggle("1".to_string());
            ctx.delete("2".to_string());
            assert_eq!(*toggled.lock().unwrap(), vec!["1".to_string()]);
            assert_eq!(*deleted.lock().unwrap(), vec!["2".to_string()]);
            assert!(ctx.can_delete());
            assert!(!ctx.can_edit());
        });
    }

    #[test]
    fn test_detail_editor_outcomes() {
        let owner = Owner::new();
        owner.with(|| {
            let (on_edit, calls) = recorder::<(String, String)>();
            let callbacks = TodoCallbacks {
                on_edit: Some(on_edit),
                ..Default::default()
            };
            let editor: SharedEditor = Arc::new(NullEditor);
            let ctx = ListContext::new(TodoListConfig::default(), callbacks, Some(editor));
            let item = make_item("a", "Plan trip");

            ctx.begin_edit(&item);
            assert!(ctx.detail_record.get_untracked().is_some());
            assert!(!ctx.view.with(|s| s.is_editing("a")));

            ctx.finish_detail_edit(EditorOutcome::Cancelled);
            assert!(ctx.detail_record.get_untracked().is_none());
            assert!(calls.lock().unwrap().is_empty());

            ctx.begin_edit(&item);
            let mut record = EditableRecord::from_item(&item);
            record.title = " Plan summer trip ".to_string();
            ctx.finish_detail_edit(EditorOutcome::Saved(record));
            assert!(ctx.detail_record.get_untracked().is_none());
            assert_eq!(
                *calls.lock().unwrap(),
                vec![("a".to_string(), "Plan summer trip".to_string())]
            );
        });
    }

    #[test]
    fn test_clock_drives_overdue() {
        let owner = Owner::new();
        owner.with(|| {
            let ctx = ListContext::new(TodoListConfig::default(), TodoCallbacks::default(), None);
            let due = ctx.now.get_untracked() + chrono::Duration::minutes(5);
            let item = make_item("a", "Call back").with_due_date(due);
            let overdue = move || is_overdue(&item, ctx.now.get_untracked());

            assert!(!overdue());
            ctx.now.set(due + chrono::Duration::minutes(1));
            assert!(overdue());
        });
    }
}
