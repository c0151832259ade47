//! Detail Editor Interface
//!
//! A rich editor (usually a dialog) that can stand in for the inline text
//! editor. It receives an [`EditableRecord`] and reports an [`EditorOutcome`];
//! only the title travels back to the owner, through the edit callback.

use std::sync::Arc;

use chrono::Local;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::{Priority, TodoItem};

/// Shape accepted by detail editors
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditableRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    pub complete: bool,
    /// Empty when unassigned
    pub assigned_to: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// `YYYY-MM-DD` in the viewer's local time zone
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl EditableRecord {
    pub fn from_item(item: &TodoItem) -> Self {
        Self {
            id: item.id.clone(),
            title: item.text.clone(),
            description: String::new(),
            complete: item.completed,
            assigned_to: item.assigned_to.clone().unwrap_or_default(),
            priority: item.priority,
            due_date: item
                .due_date
                .map(|d| d.with_timezone(&Local).format("%Y-%m-%d").to_string()),
            tags: item.category.iter().cloned().collect(),
        }
    }
}

/// How a detail editor session ended
#[derive(Debug, Clone, PartialEq)]
pub enum EditorOutcome {
    Saved(EditableRecord),
    Cancelled,
}

impl EditorOutcome {
    /// Edit request for the owner: `(id, trimmed title)`, or `None` for a
    /// cancelled session or a blank title
    pub fn into_edit(self) -> Option<(String, String)> {
        match self {
            EditorOutcome::Saved(record) => {
                let title = record.title.trim();
                if title.is_empty() {
                    None
                } else {
                    Some((record.id, title.to_string()))
                }
            }
            EditorOutcome::Cancelled => None,
        }
    }
}

/// A swappable rich editor.
///
/// `render` is called once per editing session; the editor must call
/// `on_close` exactly once when the session ends.
pub trait DetailEditor: Send + Sync {
    fn render(&self, record: EditableRecord, on_close: Callback<EditorOutcome>) -> AnyView;
}

/// Shared handle passed as a component prop
pub type SharedEditor = Arc<dyn DetailEditor>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::format_local_date;
    use chrono::{NaiveDate, TimeZone, Utc};

    fn make_item() -> TodoItem {
        TodoItem::new("42", "Plan trip", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap())
            .with_priority(Priority::High)
            .with_category("travel")
            .with_due_date(Utc.with_ymd_and_hms(2024, 6, 30, 12, 0, 0).unwrap())
    }

    #[test]
    fn test_record_from_item() {
        let record = EditableRecord::from_item(&make_item());
        assert_eq!(record.id, "42");
        assert_eq!(record.title, "Plan trip");
        assert_eq!(record.assigned_to, "");
        assert_eq!(record.priority, Some(Priority::High));
        assert!(record.due_date.is_some());
        assert_eq!(record.tags, vec!["travel".to_string()]);
        assert!(!record.complete);
    }

    #[test]
    fn test_due_date_matches_row_day() {
        let late = Utc.with_ymd_and_hms(2024, 6, 30, 23, 30, 0).unwrap();
        let early = Utc.with_ymd_and_hms(2024, 7, 1, 0, 30, 0).unwrap();
        for due in [late, early] {
            let item = make_item().with_due_date(due);
            let record = EditableRecord::from_item(&item);
            let day = NaiveDate::parse_from_str(record.due_date.as_deref().unwrap(), "%Y-%m-%d").unwrap();
            assert_eq!(day.format("%b %-d, %Y").to_string(), format_local_date(&due));
        }
    }

    #[test]
    fn test_record_without_optionals() {
        let item = TodoItem::new("1", "Bare", Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        let record = EditableRecord::from_item(&item);
        assert!(record.due_date.is_none());
        assert!(record.tags.is_empty());
        assert!(record.priority.is_none());
    }

    #[test]
    fn test_saved_outcome_becomes_edit() {
        let mut record = EditableRecord::from_item(&make_item());
        record.title = "  Plan summer trip ".to_string();
        let edit = EditorOutcome::Saved(record).into_edit();
        assert_eq!(edit, Some(("42".to_string(), "Plan summer trip".to_string())));
    }

    #[test]
    fn test_blank_or_cancelled_outcome_is_ignored() {
        let mut record = EditableRecord::from_item(&make_item());
        record.title = "   ".to_string();
        assert_eq!(EditorOutcome::Saved(record).into_edit(), None);
        assert_eq!(EditorOutcome::Cancelled.into_edit(), None);
    }
}
