//! Error Types
//!
//! Failures at the edges of the widget: host-supplied configuration and
//! string names for the option enums. The view-model core itself is total.

use thiserror::Error;

/// Errors raised while reading host-supplied options
#[derive(Debug, Error)]
pub enum TodoError {
    /// Config document is not valid JSON or has mistyped fields
    #[error("invalid todo-list config: {0}")]
    InvalidConfig(#[from] serde_json::Error),

    #[error("unknown sort field: {0}")]
    UnknownSortField(String),

    #[error("unknown sort order: {0}")]
    UnknownSortOrder(String),

    #[error("unknown priority: {0}")]
    UnknownPriority(String),

    #[error("unknown theme: {0}")]
    UnknownTheme(String),

    #[error("unknown completion filter: {0}")]
    UnknownFilter(String),

    #[error("unknown layout: {0}")]
    UnknownLayout(String),
}

pub type Result<T> = std::result::Result<T, TodoError>;
