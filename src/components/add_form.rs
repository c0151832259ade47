//! Add Form Component
//!
//! Text input that hands new task text to the owner. Ids and timestamps are
//! the owner's business.

use leptos::prelude::*;

use crate::context::use_list_context;
use crate::store::ViewStateStoreFields;

/// Form for requesting a new item
#[component]
pub fn AddForm() -> impl IntoView {
    let ctx = use_list_context();
    let placeholder = ctx.config(|c| c.placeholder.clone());
    let can_submit = move || ctx.view.with(|s| s.can_submit_add());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        ctx.submit_add();
    };

    view! {
        <form class="add-form" on:submit=on_submit>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || ctx.view.add_text().get()
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    ctx.view.update(|s| s.set_add_text(text));
                }
            />
            <button type="submit" class="add-btn" disabled=move || !can_submit()>
                "Add Task"
            </button>
        </form>
    }
}
