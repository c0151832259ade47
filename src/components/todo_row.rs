//! Todo Row Component
//!
//! One table row. Optional columns follow the config flags; unset optional
//! fields render as a dash.

use leptos::prelude::*;

use crate::components::InlineEditor;
use crate::context::use_list_context;
use crate::display::{format_local_date, priority_variant, row_class, toggle_title, NOT_SET};
use crate::models::TodoItem;
use crate::view_model::is_overdue;

/// A single item row in the table
#[component]
pub fn TodoRow(item: TodoItem) -> impl IntoView {
    let ctx = use_list_context();
    let (show_priority, show_category, show_due_date, show_assigned_to, has_actions) =
        ctx.config(|c| {
            (c.show_priority, c.show_category, c.show_due_date, c.show_assigned_to, c.has_actions())
        });

    let id = item.id.clone();
    let completed = item.completed;
    let overdue = {
        let item = item.clone();
        move || is_overdue(&item, ctx.now.get())
    };
    let is_editing = {
        let id = id.clone();
        move || ctx.view.with(|s| s.is_editing(&id))
    };

    let status_cell = {
        let id = id.clone();
        view! {
            <td>
                <button
                    class=if completed { "status-btn done" } else { "status-btn" }
                    title=toggle_title(completed)
                    on:click=move |_| ctx.toggle(id.clone())
                >
                    {if completed { "✔" } else { "○" }}
                </button>
            </td>
        }
    };

    let text_cell = {
        let text = item.text.clone();
        let is_editing = is_editing.clone();
        view! {
            <td>
                <Show
                    when=is_editing
                    fallback=move || view! {
                        <span class=if completed { "item-text done" } else { "item-text" }>{text.clone()}</span>
                    }
                >
                    <InlineEditor />
                </Show>
            </td>
        }
    };

    let priority_cell = show_priority.then(|| {
        let badge = item.priority.map(|p| {
            let class = format!("badge badge-{}", priority_variant(Some(p)));
            view! { <span class=class>{p.as_str()}</span> }
        });
        view! { <td>{badge}</td> }
    });

    let category_cell = show_category.then(|| {
        let badge = item
            .category
            .clone()
            .map(|category| view! { <span class="badge badge-info">{category}</span> });
        view! { <td>{badge}</td> }
    });

    let due_date_cell = show_due_date.then(|| {
        let content = match item.due_date {
            Some(due) => {
                let overdue = overdue.clone();
                let class = move || {
                    if overdue() {
                        "due-date overdue"
                    } else if completed {
                        "due-date text-muted"
                    } else {
                        "due-date"
                    }
                };
                view! { <span class=class>{format_local_date(&due)}</span> }.into_any()
            }
            None => view! { <span class="text-muted">{NOT_SET}</span> }.into_any(),
        };
        view! { <td>{content}</td> }
    });

    let assigned_cell = show_assigned_to.then(|| {
        let content = match item.assigned_to.clone() {
            Some(name) => view! { <span class="assignee">{name}</span> }.into_any(),
            None => view! { <span class="text-muted">{NOT_SET}</span> }.into_any(),
        };
        view! { <td>{content}</td> }
    });

    let created_cell = view! {
        <td><span class="created-at text-muted">{format_local_date(&item.created_at)}</span></td>
    };

    // Actions column is dropped for the row being edited
    let actions_cell = has_actions.then(|| {
        let edit_item = item.clone();
        let delete_id = id.clone();
        let is_editing = is_editing.clone();
        move || {
            (!is_editing()).then(|| {
                let edit_item = edit_item.clone();
                let delete_id = delete_id.clone();
                view! {
                    <td>
                        <div class="btn-group">
                            {ctx.can_edit().then(|| view! {
                                <button class="btn-edit" title="Edit task" on:click=move |_| ctx.begin_edit(&edit_item)>
                                    "✎"
                                </button>
                            })}
                            {ctx.can_delete().then(|| view! {
                                <button class="btn-delete" title="Delete task" on:click=move |_| ctx.delete(delete_id.clone())>
                                    "🗑"
                                </button>
                            })}
                        </div>
                    </td>
                }
            })
        }
    });

    view! {
        <tr class=move || row_class(&item, ctx.now.get())>
            {status_cell}
            {text_cell}
            {priority_cell}
            {category_cell}
            {due_date_cell}
            {assigned_cell}
            {created_cell}
            {actions_cell}
        </tr>
    }
}
