//! Todo Models
//!
//! Data structures supplied by the owning application.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::TodoError;

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }

    /// Numeric weight used when sorting (unset counts as 0)
    pub fn rank(&self) -> u8 {
        match self {
            Priority::Low => 1,
            Priority::Medium => 2,
            Priority::High => 3,
        }
    }

    /// Badge colour variant
    pub fn badge_variant(&self) -> &'static str {
        match self {
            Priority::Low => "success",
            Priority::Medium => "warning",
            Priority::High => "danger",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(TodoError::UnknownPriority(other.to_string())),
        }
    }
}

/// A single task.
///
/// The widget never creates or mutates these; the owner assigns `id` and
/// the timestamps and re-supplies the collection after every change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoItem {
    pub id: String,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<String>,
}

impl TodoItem {
    /// Create an open item with no optional fields set
    pub fn new(id: impl Into<String>, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            completed: false,
            created_at,
            updated_at: created_at,
            priority: None,
            category: None,
            due_date: None,
            assigned_to: None,
        }
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_due_date(mut self, due_date: DateTime<Utc>) -> Self {
        self.due_date = Some(due_date);
        self
    }

    pub fn with_assigned_to(mut self, assigned_to: impl Into<String>) -> Self {
        self.assigned_to = Some(assigned_to.into());
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Sort weight of the priority, 0 when unset
    pub fn priority_rank(&self) -> u8 {
        self.priority.map(|p| p.rank()).unwrap_or(0)
    }
}

/// Column the list is ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortField {
    #[default]
    CreatedAt,
    Priority,
    DueDate,
    Text,
}

impl SortField {
    pub const ALL: [SortField; 4] = [
        SortField::CreatedAt,
        SortField::Priority,
        SortField::DueDate,
        SortField::Text,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "createdAt",
            SortField::Priority => "priority",
            SortField::DueDate => "dueDate",
            SortField::Text => "text",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortField::CreatedAt => "Created",
            SortField::Priority => "Priority",
            SortField::DueDate => "Due Date",
            SortField::Text => "Task",
        }
    }
}

impl FromStr for SortField {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "createdAt" => Ok(SortField::CreatedAt),
            "priority" => Ok(SortField::Priority),
            "dueDate" => Ok(SortField::DueDate),
            "text" => Ok(SortField::Text),
            other => Err(TodoError::UnknownSortField(other.to_string())),
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl FromStr for SortOrder {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(SortOrder::Asc),
            "desc" => Ok(SortOrder::Desc),
            other => Err(TodoError::UnknownSortOrder(other.to_string())),
        }
    }
}

/// Tri-state completion filter shown above the list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CompletionFilter {
    #[default]
    All,
    Active,
    Completed,
}

impl CompletionFilter {
    pub const ALL: [CompletionFilter; 3] = [
        CompletionFilter::All,
        CompletionFilter::Active,
        CompletionFilter::Completed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CompletionFilter::All => "all",
            CompletionFilter::Active => "active",
            CompletionFilter::Completed => "completed",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CompletionFilter::All => "All",
            CompletionFilter::Active => "Active",
            CompletionFilter::Completed => "Completed",
        }
    }

    pub fn matches(&self, item: &TodoItem) -> bool {
        match self {
            CompletionFilter::All => true,
            CompletionFilter::Active => !item.completed,
            CompletionFilter::Completed => item.completed,
        }
    }
}

impl FromStr for CompletionFilter {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(CompletionFilter::All),
            "active" => Ok(CompletionFilter::Active),
            "completed" => Ok(CompletionFilter::Completed),
            other => Err(TodoError::UnknownFilter(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_item_builder() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let item = TodoItem::new("1", "Write docs", created)
            .with_priority(Priority::High)
            .with_assigned_to("john");

        assert_eq!(item.updated_at, item.created_at);
        assert_eq!(item.priority_rank(), 3);
        assert_eq!(item.assigned_to.as_deref(), Some("john"));
        assert!(item.category.is_none());
        assert!(!item.completed);
    }

    #[test]
    fn test_item_json_shape() {
        let json = r#"{
            "id": "7",
            "text": "Ship it",
            "completed": true,
            "createdAt": "2024-01-02T00:00:00Z",
            "updatedAt": "2024-01-03T00:00:00Z",
            "priority": "medium",
            "assignedTo": "jane"
        }"#;
        let item: TodoItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.priority, Some(Priority::Medium));
        assert_eq!(item.assigned_to.as_deref(), Some("jane"));
        assert!(item.due_date.is_none());

        let out = serde_json::to_value(&item).unwrap();
        assert!(out.get("dueDate").is_none());
        assert_eq!(out["assignedTo"], "jane");
    }

    #[test]
    fn test_enum_parsing() {
        assert_eq!("dueDate".parse::<SortField>().unwrap(), SortField::DueDate);
        assert_eq!("asc".parse::<SortOrder>().unwrap(), SortOrder::Asc);
        assert_eq!("high".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!("active".parse::<CompletionFilter>().unwrap(), CompletionFilter::Active);
        assert!(matches!(
            "due".parse::<SortField>(),
            Err(TodoError::UnknownSortField(s)) if s == "due"
        ));
        assert!("urgent".parse::<Priority>().is_err());
    }

    #[test]
    fn test_sort_order_flip() {
        assert_eq!(SortOrder::Asc.flipped(), SortOrder::Desc);
        assert_eq!(SortOrder::Desc.flipped(), SortOrder::Asc);
    }
}
