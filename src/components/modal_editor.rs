//! Modal Editor
//!
//! Built-in [`DetailEditor`]: a dialog over an [`EditableRecord`]. Only the
//! title is editable; assignee, priority and due date are shown for context.

use leptos::prelude::*;

use crate::display::NOT_SET;
use crate::editor::{DetailEditor, EditableRecord, EditorOutcome};

/// Dialog-based detail editor
#[derive(Debug, Clone)]
pub struct ModalEditor {
    pub title: String,
}

impl Default for ModalEditor {
    fn default() -> Self {
        Self { title: "Edit Task".to_string() }
    }
}

impl DetailEditor for ModalEditor {
    fn render(&self, record: EditableRecord, on_close: Callback<EditorOutcome>) -> AnyView {
        view! { <EditorDialog heading=self.title.clone() record=record on_close=on_close /> }.into_any()
    }
}

#[component]
fn EditorDialog(
    heading: String,
    record: EditableRecord,
    on_close: Callback<EditorOutcome>,
) -> impl IntoView {
    let assigned_to = Some(record.assigned_to.clone()).filter(|a| !a.is_empty());
    let priority = record.priority.map(|p| p.as_str().to_string());
    let due_date = record.due_date.clone();
    let draft = RwSignal::new(record);

    let save = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        on_close.run(EditorOutcome::Saved(draft.get_untracked()));
    };
    let cancel = move |_: web_sys::MouseEvent| on_close.run(EditorOutcome::Cancelled);

    view! {
        <div class="modal-backdrop">
            <form class="modal-dialog" on:submit=save>
                <div class="modal-header">
                    <span class="modal-title">{heading}</span>
                    <button type="button" class="close-btn" on:click=cancel>"×"</button>
                </div>

                <div class="modal-body">
                    <label class="editor-label">"Title"</label>
                    <input
                        type="text"
                        prop:value=move || draft.with(|r| r.title.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            draft.update(|r| r.title = value);
                        }
                    />

                    <dl class="editor-details">
                        <dt>"Assigned To"</dt>
                        <dd>{or_not_set(assigned_to)}</dd>
                        <dt>"Priority"</dt>
                        <dd>{or_not_set(priority)}</dd>
                        <dt>"Due Date"</dt>
                        <dd>{or_not_set(due_date)}</dd>
                    </dl>
                </div>

                <div class="modal-footer">
                    <button type="button" class="btn-cancel" on:click=cancel>"Cancel"</button>
                    <button
                        type="submit"
                        class="btn-save"
                        disabled=move || draft.with(|r| r.title.trim().is_empty())
                    >
                        "Save"
                    </button>
                </div>
            </form>
        </div>
    }
}

fn or_not_set(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_SET.to_string())
}
