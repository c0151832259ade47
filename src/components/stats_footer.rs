//! Stats Footer Component
//!
//! Shown / completed / remaining summary, plus a notice when the row cap
//! hides matches. Hidden while the list is empty.

use leptos::prelude::*;

use crate::display::{limit_notice, shown_label};
use crate::view_model::DerivedView;

#[component]
pub fn StatsFooter(derived: Memo<DerivedView>) -> impl IntoView {
    view! {
        <Show when=move || derived.with(|d| !d.visible.is_empty())>
            <div class="stats-footer">
                <div class="stat stat-shown">{move || derived.with(|d| shown_label(d.visible.len()))}</div>
                <div class="stat stat-completed">
                    <strong>{move || derived.with(|d| d.stats.completed)}</strong>" completed"
                </div>
                <div class="stat stat-remaining">
                    <strong>{move || derived.with(|d| d.stats.remaining())}</strong>" remaining"
                </div>
            </div>
            {move || derived.with(limit_notice)
                .map(|notice| view! { <p class="limit-notice">{notice}</p> })}
        </Show>
    }
}
