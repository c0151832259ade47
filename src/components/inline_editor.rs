//! Inline Editor Component
//!
//! Text input with save/cancel used for the row being edited. Enter commits,
//! Escape cancels.

use leptos::html::Input;
use leptos::prelude::*;

use crate::context::use_list_context;
use crate::store::EditKeyAction;

#[component]
pub fn InlineEditor() -> impl IntoView {
    let ctx = use_list_context();
    let input_ref = NodeRef::<Input>::new();

    // Focus on open
    Effect::new(move |_| {
        if let Some(input) = input_ref.get() {
            input.focus().ok();
        }
    });

    view! {
        <div class="inline-editor">
            <input
                type="text"
                class="inline-editor-input"
                node_ref=input_ref
                prop:value=move || ctx.view.with(|s| s.draft().unwrap_or_default().to_string())
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    ctx.view.update(|s| s.set_draft(text));
                }
                on:keydown=move |ev: web_sys::KeyboardEvent| {
                    match EditKeyAction::from_key(&ev.key()) {
                        EditKeyAction::Commit => {
                            ev.prevent_default();
                            ctx.commit_edit();
                        }
                        EditKeyAction::Cancel => ctx.cancel_edit(),
                        EditKeyAction::None => {}
                    }
                }
            />
            <button class="btn-save" title="Save" on:click=move |_| ctx.commit_edit()>"✓"</button>
            <button class="btn-cancel" title="Cancel" on:click=move |_| ctx.cancel_edit()>"✗"</button>
        </div>
    }
}
