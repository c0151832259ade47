//! Todo Cards Component
//!
//! Card layout of the same derived rows. Column headers are replaced by a
//! sort-field selector and a direction toggle.

use std::str::FromStr;

use leptos::prelude::*;

use crate::components::InlineEditor;
use crate::context::use_list_context;
use crate::display::{empty_message, format_local_date, priority_variant, row_class, toggle_title, NOT_SET};
use crate::models::{SortField, SortOrder, TodoItem};
use crate::store::ViewStateStoreFields;
use crate::view_model::DerivedView;

#[component]
pub fn TodoCards(derived: Memo<DerivedView>) -> impl IntoView {
    let ctx = use_list_context();

    let on_field_change = move |ev: web_sys::Event| {
        if let Ok(field) = SortField::from_str(&event_target_value(&ev)) {
            ctx.view.update(|s| {
                if s.sort_field != field {
                    s.toggle_sort(field);
                }
            });
        }
    };
    let direction_label = move || match ctx.view.sort_order().get() {
        SortOrder::Asc => "↑ Asc",
        SortOrder::Desc => "↓ Desc",
    };

    view! {
        <div class="todo-cards">
            <div class="card-sort-bar">
                <label>"Sort by"</label>
                <select on:change=on_field_change>
                    {SortField::ALL.iter().map(|field| {
                        let field = *field;
                        view! {
                            <option
                                value=field.as_str()
                                selected=move || ctx.view.sort_field().get() == field
                            >
                                {field.label()}
                            </option>
                        }
                    }).collect_view()}
                </select>
                <button
                    type="button"
                    class="sort-direction-btn"
                    on:click=move |_| {
                        let field = ctx.view.sort_field().get_untracked();
                        ctx.view.update(|s| s.toggle_sort(field));
                    }
                >
                    {direction_label}
                </button>
            </div>

            <Show
                when=move || derived.with(|d| !d.visible.is_empty())
                fallback=move || view! {
                    <div class="empty-state">{move || ctx.view.search().with(|s| empty_message(s))}</div>
                }
            >
                <div class="card-grid">
                    <For
                        each=move || derived.get().visible
                        key=|item| (item.id.clone(), item.updated_at, item.completed)
                        children=move |item| view! { <TodoCard item=item /> }
                    />
                </div>
            </Show>
        </div>
    }
}

/// A single item card
#[component]
pub fn TodoCard(item: TodoItem) -> impl IntoView {
    let ctx = use_list_context();
    let (show_priority, show_category, show_due_date, show_assigned_to) =
        ctx.config(|c| (c.show_priority, c.show_category, c.show_due_date, c.show_assigned_to));

    let id = item.id.clone();
    let completed = item.completed;
    let is_editing = {
        let id = id.clone();
        move || ctx.view.with(|s| s.is_editing(&id))
    };

    let badges = {
        let priority = item.priority.filter(|_| show_priority).map(|p| {
            let class = format!("badge badge-{}", priority_variant(Some(p)));
            view! { <span class=class>{p.as_str()}</span> }
        });
        let category = item
            .category
            .clone()
            .filter(|_| show_category)
            .map(|c| view! { <span class="badge badge-info">{c}</span> });
        view! { <div class="card-badges">{priority}{category}</div> }
    };

    let meta = {
        let due = show_due_date.then(|| {
            let due = item.due_date.map(|d| format_local_date(&d)).unwrap_or_else(|| NOT_SET.to_string());
            view! { <span class="card-due">"Due: " {due}</span> }
        });
        let assignee = show_assigned_to.then(|| {
            let name = item.assigned_to.clone().unwrap_or_else(|| NOT_SET.to_string());
            view! { <span class="card-assignee">"Assigned: " {name}</span> }
        });
        view! {
            <div class="card-meta">
                {due}
                {assignee}
                <span class="card-created">{format_local_date(&item.created_at)}</span>
            </div>
        }
    };

    let toggle_id = id.clone();
    let delete_id = id.clone();
    let edit_item = item.clone();
    let text = item.text.clone();
    let show_actions = is_editing.clone();

    view! {
        <div class=move || format!("todo-card {}", row_class(&item, ctx.now.get()))>
            <div class="card-main">
                <button
                    class=if completed { "status-btn done" } else { "status-btn" }
                    title=toggle_title(completed)
                    on:click=move |_| ctx.toggle(toggle_id.clone())
                >
                    {if completed { "✔" } else { "○" }}
                </button>
                <Show
                    when=is_editing
                    fallback=move || view! {
                        <span class=if completed { "item-text done" } else { "item-text" }>{text.clone()}</span>
                    }
                >
                    <InlineEditor />
                </Show>
            </div>
            {badges}
            {meta}
            <Show when=move || !show_actions()>
                <div class="card-actions">
                    {
                        let edit_item = edit_item.clone();
                        ctx.can_edit().then(|| view! {
                            <button class="btn-edit" title="Edit task" on:click=move |_| ctx.begin_edit(&edit_item)>"✎"</button>
                        })
                    }
                    {
                        let delete_id = delete_id.clone();
                        ctx.can_delete().then(|| view! {
                            <button class="btn-delete" title="Delete task" on:click=move |_| ctx.delete(delete_id.clone())>"🗑"</button>
                        })
                    }
                </div>
            </Show>
        </div>
    }
}
