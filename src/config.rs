//! Widget Configuration
//!
//! Display toggles and initial ordering for a `TodoList` instance. Every key
//! is optional; missing keys fall back to the defaults below.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TodoError};
use crate::models::{SortField, SortOrder};

/// Colour scheme (styling only)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl FromStr for Theme {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(TodoError::UnknownTheme(other.to_string())),
        }
    }
}

/// How rows are laid out
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    #[default]
    Table,
    Cards,
}

impl FromStr for Layout {
    type Err = TodoError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "table" => Ok(Layout::Table),
            "cards" => Ok(Layout::Cards),
            other => Err(TodoError::UnknownLayout(other.to_string())),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_placeholder() -> String {
    "Add a new todo...".to_string()
}

/// Options for one list instance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodoListConfig {
    #[serde(default = "default_true")]
    pub show_completed: bool,
    #[serde(default = "default_true")]
    pub allow_edit: bool,
    #[serde(default = "default_true")]
    pub allow_delete: bool,
    #[serde(default)]
    pub show_priority: bool,
    #[serde(default)]
    pub show_category: bool,
    #[serde(default)]
    pub show_due_date: bool,
    #[serde(default)]
    pub show_assigned_to: bool,
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
    /// Extra class added to the root element
    #[serde(default)]
    pub class_name: Option<String>,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub max_items: Option<usize>,
    #[serde(default)]
    pub sort_by: SortField,
    #[serde(default)]
    pub sort_order: SortOrder,
    #[serde(default)]
    pub layout: Layout,
}

impl Default for TodoListConfig {
    fn default() -> Self {
        Self {
            show_completed: true,
            allow_edit: true,
            allow_delete: true,
            show_priority: false,
            show_category: false,
            show_due_date: false,
            show_assigned_to: false,
            placeholder: default_placeholder(),
            class_name: None,
            theme: Theme::Light,
            max_items: None,
            sort_by: SortField::CreatedAt,
            sort_order: SortOrder::Desc,
            layout: Layout::Table,
        }
    }
}

impl TodoListConfig {
    /// Parse a camelCase JSON document, filling gaps with defaults
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Row cap; zero means unlimited
    pub fn item_limit(&self) -> Option<usize> {
        self.max_items.filter(|n| *n > 0)
    }

    /// Whether the actions column exists at all
    pub fn has_actions(&self) -> bool {
        self.allow_edit || self.allow_delete
    }

    /// Class list for the root element
    pub fn root_class(&self) -> String {
        let mut class = format!("todolist todolist--{}", self.theme.as_str());
        if let Some(extra) = self.class_name.as_deref().filter(|c| !c.is_empty()) {
            class.push(' ');
            class.push_str(extra);
        }
        class
    }

    pub fn with_sort(mut self, sort_by: SortField, sort_order: SortOrder) -> Self {
        self.sort_by = sort_by;
        self.sort_order = sort_order;
        self
    }

    pub fn with_all_columns(mut self) -> Self {
        self.show_priority = true;
        self.show_category = true;
        self.show_due_date = true;
        self.show_assigned_to = true;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TodoListConfig::default();
        assert!(config.show_completed);
        assert!(config.allow_edit);
        assert!(config.allow_delete);
        assert!(!config.show_priority);
        assert_eq!(config.placeholder, "Add a new todo...");
        assert_eq!(config.sort_by, SortField::CreatedAt);
        assert_eq!(config.sort_order, SortOrder::Desc);
        assert_eq!(config.item_limit(), None);
    }

    #[test]
    fn test_empty_json_matches_default() {
        let config = TodoListConfig::from_json("{}").unwrap();
        assert_eq!(config, TodoListConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let config = TodoListConfig::from_json(
            r#"{"showPriority": true, "theme": "dark", "maxItems": 5, "sortBy": "priority", "layout": "cards"}"#,
        )
        .unwrap();
        assert!(config.show_priority);
        assert_eq!(config.theme, Theme::Dark);
        assert_eq!(config.item_limit(), Some(5));
        assert_eq!(config.sort_by, SortField::Priority);
        assert_eq!(config.sort_order, SortOrder::Desc);
        assert_eq!(config.layout, Layout::Cards);
        assert!(config.allow_edit);
    }

    #[test]
    fn test_theme_and_layout_parsing() {
        assert_eq!("dark".parse::<Theme>().unwrap(), Theme::Dark);
        assert_eq!("light".parse::<Theme>().unwrap(), Theme::Light);
        assert_eq!("cards".parse::<Layout>().unwrap(), Layout::Cards);
        assert_eq!("table".parse::<Layout>().unwrap(), Layout::Table);
        assert!(matches!(
            "sepia".parse::<Theme>(),
            Err(TodoError::UnknownTheme(s)) if s == "sepia"
        ));
        assert!(matches!(
            "grid".parse::<Layout>(),
            Err(TodoError::UnknownLayout(s)) if s == "grid"
        ));
    }

    #[test]
    fn test_invalid_json() {
        let err = TodoListConfig::from_json(r#"{"sortBy": "colour"}"#).unwrap_err();
        assert!(matches!(err, TodoError::InvalidConfig(_)));
    }

    #[test]
    fn test_zero_limit_is_unlimited() {
        let config = TodoListConfig {
            max_items: Some(0),
            ..Default::default()
        };
        assert_eq!(config.item_limit(), None);
    }

    #[test]
    fn test_root_class() {
        let config = TodoListConfig {
            theme: Theme::Dark,
            class_name: Some("sidebar".to_string()),
            ..Default::default()
        };
        assert_eq!(config.root_class(), "todolist todolist--dark sidebar");
        assert_eq!(TodoListConfig::default().root_class(), "todolist todolist--light");
    }

    #[test]
    fn test_actions_column() {
        let read_only = TodoListConfig {
            allow_edit: false,
            allow_delete: false,
            ..Default::default()
        };
        assert!(!read_only.has_actions());
        assert!(TodoListConfig::default().has_actions());
    }
}
