//! Todo List Component
//!
//! Root of the widget. Owns the view state, derives the visible rows from
//! the owner's items and forwards user intent through the callbacks.

use chrono::Utc;
use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::components::{AddForm, FilterBar, ListHeader, StatsFooter, TodoCards, TodoTable};
use crate::config::{Layout, TodoListConfig};
use crate::context::{ListContext, TodoCallbacks};
use crate::editor::{EditorOutcome, SharedEditor};
use crate::models::TodoItem;
use crate::view_model::derive_view;

/// How often overdue styling is re-evaluated
const OVERDUE_TICK_MS: u32 = 60_000;

/// Todo list view.
///
/// `items` is read-only input; every change goes out through the callbacks
/// and comes back as a new collection.
#[component]
pub fn TodoList(
    #[prop(into)] items: Signal<Vec<TodoItem>>,
    #[prop(optional)] config: TodoListConfig,
    #[prop(optional, into)] on_add: Option<Callback<String>>,
    #[prop(optional, into)] on_toggle: Option<Callback<String>>,
    #[prop(optional, into)] on_delete: Option<Callback<String>>,
    #[prop(optional, into)] on_edit: Option<Callback<(String, String)>>,
    /// Rich editor used instead of the inline one
    #[prop(optional)]
    detail_editor: Option<SharedEditor>,
) -> impl IntoView {
    let root_class = config.root_class();
    let layout = config.layout;
    let callbacks = TodoCallbacks { on_add, on_toggle, on_delete, on_edit };
    let ctx = ListContext::new(config, callbacks, detail_editor);
    provide_context(ctx);

    // Dropped with the component's owner
    let ticker = Interval::new(OVERDUE_TICK_MS, move || ctx.now.set(Utc::now()));
    StoredValue::new_local(ticker);

    let derived = Memo::new(move |_| {
        let options = ctx.view.with(|state| ctx.config(|c| state.derive_options(c)));
        items.with(|items| derive_view(items, &options))
    });

    let detail_editor_view = move || {
        let record = ctx.detail_record.get()?;
        let editor = ctx.detail_editor()?;
        let on_close = Callback::new(move |outcome: EditorOutcome| ctx.finish_detail_edit(outcome));
        Some(editor.render(record, on_close))
    };

    view! {
        <div class=root_class>
            <div class="todolist-card">
                <ListHeader derived=derived />
                <FilterBar derived=derived />

                <Show when=move || ctx.callbacks.on_add.is_some()>
                    <AddForm />
                </Show>

                {match layout {
                    Layout::Table => view! { <TodoTable derived=derived /> }.into_any(),
                    Layout::Cards => view! { <TodoCards derived=derived /> }.into_any(),
                }}

                <StatsFooter derived=derived />
            </div>

            {detail_editor_view}
        </div>
    }
}
