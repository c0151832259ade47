//! Todo Table Component
//!
//! Table layout: sortable column headers over one row per visible item.

use leptos::prelude::*;

use crate::components::TodoRow;
use crate::context::use_list_context;
use crate::display::{empty_message, sort_indicator, visible_columns, Column};
use crate::store::ViewStateStoreFields;
use crate::view_model::DerivedView;

#[component]
pub fn TodoTable(derived: Memo<DerivedView>) -> impl IntoView {
    let ctx = use_list_context();
    let columns = ctx.config(visible_columns);
    let column_count = columns.len().to_string();

    view! {
        <div class="table-responsive">
            <table class="todo-table">
                <thead>
                    <tr>
                        {columns.iter().map(|column| view! { <ColumnHeader column=*column /> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || derived.with(|d| !d.visible.is_empty())
                        fallback=move || view! {
                            <tr>
                                <td colspan=column_count.clone() class="empty-state">
                                    {move || ctx.view.search().with(|s| empty_message(s))}
                                </td>
                            </tr>
                        }
                    >
                        <For
                            each=move || derived.get().visible
                            // updated_at is bumped by the owner on every change
                            key=|item| (item.id.clone(), item.updated_at, item.completed)
                            children=move |item| view! { <TodoRow item=item /> }
                        />
                    </Show>
                </tbody>
            </table>
        </div>
    }
}

/// Header cell; sortable columns flip or switch the active sort on click
#[component]
fn ColumnHeader(column: Column) -> impl IntoView {
    let ctx = use_list_context();
    let width = column.width().map(|w| format!("width: {};", w));

    match column.sort_field() {
        Some(field) => {
            let indicator = move || {
                sort_indicator(field, ctx.view.sort_field().get(), ctx.view.sort_order().get())
            };
            view! {
                <th
                    class="sortable"
                    style=width
                    on:click=move |_| ctx.view.update(|s| s.toggle_sort(field))
                >
                    <span>{column.label()}</span>
                    <span class="sort-indicator">{indicator}</span>
                </th>
            }
            .into_any()
        }
        None => view! { <th style=width>{column.label()}</th> }.into_any(),
    }
}
