//! Filter Bar Component
//!
//! All / Active / Completed buttons with counts over the whole collection.

use leptos::prelude::*;

use crate::context::use_list_context;
use crate::models::CompletionFilter;
use crate::store::ViewStateStoreFields;
use crate::view_model::{DerivedView, FilterCounts};

#[component]
pub fn FilterBar(derived: Memo<DerivedView>) -> impl IntoView {
    let ctx = use_list_context();
    let counts = move || derived.with(|d| FilterCounts::from_stats(d.stats));

    view! {
        <div class="filter-bar">
            {CompletionFilter::ALL.iter().map(|filter| {
                let filter = *filter;
                let is_selected = move || ctx.view.filter().get() == filter;
                view! {
                    <button
                        type="button"
                        class=move || if is_selected() { "filter-btn active" } else { "filter-btn" }
                        on:click=move |_| ctx.view.update(|s| s.set_filter(filter))
                    >
                        {move || format!("{} ({})", filter.label(), counts().count(filter))}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}
