//! Display Helpers
//!
//! Pure formatting used by the components.

use chrono::{DateTime, TimeZone, Utc};

use crate::config::TodoListConfig;
use crate::models::{Priority, SortField, SortOrder, TodoItem};
use crate::view_model::{is_overdue, DerivedView};

/// Placeholder for an optional field that is not set
pub const NOT_SET: &str = "-";

/// `Jan 1, 2024`
pub fn format_date<Tz>(date: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    date.format("%b %-d, %Y").to_string()
}

/// Date in the viewer's local time zone
pub fn format_local_date(date: &DateTime<Utc>) -> String {
    format_date(&date.with_timezone(&chrono::Local))
}

pub fn priority_variant(priority: Option<Priority>) -> &'static str {
    priority.map(|p| p.badge_variant()).unwrap_or("secondary")
}

/// Row state classes
pub fn row_class(item: &TodoItem, now: DateTime<Utc>) -> &'static str {
    if is_overdue(item, now) {
        "todo-row overdue"
    } else if item.completed {
        "todo-row done"
    } else {
        "todo-row"
    }
}

pub fn sort_indicator(field: SortField, active: SortField, order: SortOrder) -> &'static str {
    if field != active {
        return "↕";
    }
    match order {
        SortOrder::Asc => "↑",
        SortOrder::Desc => "↓",
    }
}

pub fn empty_message(search: &str) -> &'static str {
    if search.is_empty() {
        "No tasks yet. Add one above!"
    } else {
        "No tasks found matching your search"
    }
}

pub fn shown_label(count: usize) -> String {
    if count == 1 {
        "1 task shown".to_string()
    } else {
        format!("{} tasks shown", count)
    }
}

/// Notice when the row cap hides matches
pub fn limit_notice(view: &DerivedView) -> Option<String> {
    view.is_truncated()
        .then(|| format!("Showing {} of {} items", view.visible.len(), view.matching))
}

pub fn toggle_title(completed: bool) -> &'static str {
    if completed {
        "Mark as incomplete"
    } else {
        "Mark as complete"
    }
}

/// Table columns
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Status,
    Task,
    Priority,
    Category,
    DueDate,
    AssignedTo,
    Created,
    Actions,
}

impl Column {
    pub fn label(&self) -> &'static str {
        match self {
            Column::Status => "Status",
            Column::Task => "Task",
            Column::Priority => "Priority",
            Column::Category => "Category",
            Column::DueDate => "Due Date",
            Column::AssignedTo => "Assigned To",
            Column::Created => "Created",
            Column::Actions => "Actions",
        }
    }

    /// Sort field behind a clickable header
    pub fn sort_field(&self) -> Option<SortField> {
        match self {
            Column::Task => Some(SortField::Text),
            Column::Priority => Some(SortField::Priority),
            Column::DueDate => Some(SortField::DueDate),
            Column::Created => Some(SortField::CreatedAt),
            _ => None,
        }
    }

    pub fn width(&self) -> Option<&'static str> {
        match self {
            Column::Status => Some("60px"),
            Column::Actions => Some("120px"),
            _ => None,
        }
    }
}

pub fn visible_columns(config: &TodoListConfig) -> Vec<Column> {
    [
        (true, Column::Status),
        (true, Column::Task),
        (config.show_priority, Column::Priority),
        (config.show_category, Column::Category),
        (config.show_due_date, Column::DueDate),
        (config.show_assigned_to, Column::AssignedTo),
        (true, Column::Created),
        (config.has_actions(), Column::Actions),
    ]
    .into_iter()
    .filter_map(|(shown, column)| shown.then_some(column))
    .collect()
}
