//! List Header Component
//!
//! Title with visible-row badge, completion summary and the search box.

use leptos::prelude::*;

use crate::context::use_list_context;
use crate::store::ViewStateStoreFields;
use crate::view_model::DerivedView;

#[component]
pub fn ListHeader(derived: Memo<DerivedView>) -> impl IntoView {
    let ctx = use_list_context();

    view! {
        <div class="todolist-header">
            <div class="todolist-title">
                <h2>
                    "Todo List"
                    <span class="badge badge-primary">{move || derived.with(|d| d.visible.len())}</span>
                </h2>
                <small class="text-muted">
                    {move || derived.with(|d| format!("{} of {} completed", d.stats.completed, d.stats.total))}
                </small>
            </div>
            <div class="todolist-search">
                <span class="search-icon">"🔍"</span>
                <input
                    type="text"
                    placeholder="Search tasks..."
                    prop:value=move || ctx.view.search().get()
                    on:input=move |ev| {
                        let text = event_target_value(&ev);
                        ctx.view.update(|s| s.set_search(text));
                    }
                />
            </div>
        </div>
    }
}
