//! Backlog items owned by viewers.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

fn default_priority() -> i64 {
    crate::DEFAULT_PRIORITY
}

/// Request to create a backlog item.
///
/// The owning username is not checked against the viewer table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBacklogItem {
    pub username: String,
    pub description: String,
    /// Higher sorts first. No range is enforced.
    #[serde(default = "default_priority")]
    pub priority: i64,
    #[serde(default)]
    pub completed: bool,
}

impl NewBacklogItem {
    /// Create an incomplete item with the default priority.
    pub fn new(username: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            description: description.into(),
            priority: default_priority(),
            completed: false,
        }
    }

    pub fn with_priority(mut self, priority: i64) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}

/// A persisted backlog item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BacklogItem {
    pub id: i64,
    pub username: String,
    pub description: String,
    pub priority: i64,
    pub completed: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}
