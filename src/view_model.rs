//! View-Model Derivation
//!
//! Turns the owner's item collection plus the current view state into the
//! ordered, bounded sequence of rows to render. Pipeline order is fixed:
//! completion filter, search, sort, limit.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use icu_collator::{Collator, CollatorOptions, Strength};

use crate::models::{CompletionFilter, SortField, SortOrder, TodoItem};

/// Inputs to [`derive_view`] besides the items themselves
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DeriveOptions {
    pub show_completed: bool,
    pub filter: CompletionFilter,
    pub search: String,
    pub sort_field: SortField,
    pub sort_order: SortOrder,
    pub max_items: Option<usize>,
}

/// Aggregate counts over the unfiltered collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub total: usize,
    pub completed: usize,
}

impl Stats {
    pub fn from_items(items: &[TodoItem]) -> Self {
        Self {
            total: items.len(),
            completed: items.iter().filter(|i| i.completed).count(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.total - self.completed
    }
}

/// Counts shown on the filter buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterCounts {
    pub all: usize,
    pub active: usize,
    pub completed: usize,
}

impl FilterCounts {
    pub fn from_stats(stats: Stats) -> Self {
        Self {
            all: stats.total,
            active: stats.remaining(),
            completed: stats.completed,
        }
    }

    pub fn count(&self, filter: CompletionFilter) -> usize {
        match filter {
            CompletionFilter::All => self.all,
            CompletionFilter::Active => self.active,
            CompletionFilter::Completed => self.completed,
        }
    }
}

/// Result of one derivation pass
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DerivedView {
    /// Rows to render, in order
    pub visible: Vec<TodoItem>,
    /// Rows that matched filters and search before the limit was applied
    pub matching: usize,
    pub stats: Stats,
}

impl DerivedView {
    /// True when the row cap hid some matching rows
    pub fn is_truncated(&self) -> bool {
        self.visible.len() < self.matching
    }
}

/// Case-insensitive substring match over text, category and assignee.
/// An empty query matches everything.
pub fn matches_search(item: &TodoItem, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    let contains = |field: &str| field.to_lowercase().contains(&needle);

    contains(&item.text)
        || item.category.as_deref().is_some_and(contains)
        || item.assigned_to.as_deref().is_some_and(contains)
}

thread_local! {
    static COLLATOR: Option<Collator> = {
        let mut options = CollatorOptions::new();
        options.strength = Some(Strength::Secondary);
        Collator::try_new(&Default::default(), options)
            .map_err(|e| log::warn!("root collator unavailable: {}", e))
            .ok()
    };
}

/// Locale-aware text order: accents count, case does not.
///
/// Falls back to lower-cased code point order if collation data is missing.
pub fn compare_text(a: &str, b: &str) -> Ordering {
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(a, b),
        None => a.to_lowercase().cmp(&b.to_lowercase()),
    })
}

/// Ascending comparison of two items on one field.
///
/// Items without a due date are not ordered here; see [`compare_items`].
fn compare_ascending(a: &TodoItem, b: &TodoItem, field: SortField) -> Ordering {
    match field {
        SortField::Text => compare_text(&a.text, &b.text),
        SortField::Priority => a.priority_rank().cmp(&b.priority_rank()),
        SortField::DueDate => a.due_date.cmp(&b.due_date),
        SortField::CreatedAt => a.created_at.cmp(&b.created_at),
    }
}

/// Full comparator for the sort step.
///
/// Missing due dates go last in both directions; everything else follows the
/// ascending comparison, negated for `Desc`.
pub fn compare_items(a: &TodoItem, b: &TodoItem, field: SortField, order: SortOrder) -> Ordering {
    if field == SortField::DueDate {
        match (a.due_date.is_some(), b.due_date.is_some()) {
            (true, false) => return Ordering::Less,
            (false, true) => return Ordering::Greater,
            (false, false) => return Ordering::Equal,
            (true, true) => {}
        }
    }
    let ordering = compare_ascending(a, b, field);
    match order {
        SortOrder::Asc => ordering,
        SortOrder::Desc => ordering.reverse(),
    }
}

/// Run the filter, search, sort and limit pipeline.
///
/// Pure and deterministic: identical inputs always give identical output.
/// Stats always describe the whole input.
pub fn derive_view(items: &[TodoItem], options: &DeriveOptions) -> DerivedView {
    let mut visible: Vec<TodoItem> = items
        .iter()
        .filter(|item| options.show_completed || !item.completed)
        .filter(|item| options.filter.matches(item))
        .filter(|item| matches_search(item, &options.search))
        .cloned()
        .collect();

    // slice::sort_by is stable, ties keep input order
    visible.sort_by(|a, b| compare_items(a, b, options.sort_field, options.sort_order));

    let matching = visible.len();
    if let Some(limit) = options.max_items {
        visible.truncate(limit);
    }

    log::trace!(
        "derived {} of {} items (matching={}, sort={} {})",
        visible.len(),
        items.len(),
        matching,
        options.sort_field.as_str(),
        options.sort_order.as_str()
    );

    DerivedView {
        visible,
        matching,
        stats: Stats::from_items(items),
    }
}

/// Due date has passed on an open item
pub fn is_overdue(item: &TodoItem, now: DateTime<Utc>) -> bool {
    !item.completed && item.due_date.is_some_and(|due| due < now)
}
