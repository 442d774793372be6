//! Stat events and the aggregate summary.

use serde::{Deserialize, Serialize};

/// An event to append to the stat log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewStatEvent {
    pub event_type: String,
    #[serde(default)]
    pub username: Option<String>,
    /// Opaque payload, stored as-is.
    #[serde(default)]
    pub data: Option<String>,
}

impl NewStatEvent {
    pub fn new(event_type: impl Into<String>) -> Self {
        Self {
            event_type: event_type.into(),
            username: None,
            data: None,
        }
    }
}

/// Aggregate counters over viewers and backlog items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatsSummary {
    pub total_viewers: u64,
    pub active_viewers_24h: u64,
    pub total_backlog_items: u64,
    pub completed_backlog_items: u64,
    /// Percentage of completed backlog items, one decimal place.
    pub completion_rate: f64,
}

impl StatsSummary {
    /// Build a summary, deriving the completion rate from the backlog counts.
    pub fn new(
        total_viewers: u64,
        active_viewers_24h: u64,
        total_backlog_items: u64,
        completed_backlog_items: u64,
    ) -> Self {
        Self {
            total_viewers,
            active_viewers_24h,
            total_backlog_items,
            completed_backlog_items,
            completion_rate: completion_rate(completed_backlog_items, total_backlog_items),
        }
    }
}

/// Completed over total as a percentage rounded to one decimal place.
///
/// Zero when there are no items.
pub fn completion_rate(completed: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = completed as f64 / total as f64 * 100.0;
    (pct * 10.0).round() / 10.0
}
