//! Database models mapping to the overlay schema.

use crate::error::MetadataResult;
use overlay_core::viewer::decode_info;
use overlay_core::{BacklogItem, Preference, Viewer};
use sqlx::FromRow;
use time::OffsetDateTime;

// =============================================================================
// Viewers
// =============================================================================

/// Viewer profile record.
#[derive(Debug, Clone, FromRow)]
pub struct ViewerRow {
    pub username: String,
    /// JSON object text; null or empty means no info.
    pub info: Option<String>,
    pub last_active: Option<OffsetDateTime>,
    pub task_count: i64,
    pub created_at: OffsetDateTime,
}

impl ViewerRow {
    /// Convert to the API shape, decoding the stored info text.
    pub fn into_viewer(self) -> MetadataResult<Viewer> {
        let info = decode_info(self.info.as_deref())?;
        Ok(Viewer {
            username: self.username,
            info,
            task_count: self.task_count,
        })
    }
}

// =============================================================================
// Backlog
// =============================================================================

/// Backlog item record.
#[derive(Debug, Clone, FromRow)]
pub struct BacklogRow {
    pub id: i64,
    pub username: String,
    pub description: String,
    pub priority: i64,
    pub completed: bool,
    pub created_at: OffsetDateTime,
}

impl From<BacklogRow> for BacklogItem {
    fn from(row: BacklogRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            description: row.description,
            priority: row.priority,
            completed: row.completed,
            created_at: row.created_at,
        }
    }
}

// =============================================================================
// Preferences
// =============================================================================

/// Preference record.
#[derive(Debug, Clone, FromRow)]
pub struct PreferenceRow {
    pub key: String,
    pub value: String,
    pub updated_at: OffsetDateTime,
}

impl From<PreferenceRow> for Preference {
    fn from(row: PreferenceRow) -> Self {
        Self {
            key: row.key,
            value: row.value,
        }
    }
}

// =============================================================================
// Stats
// =============================================================================

/// Stat event record.
#[derive(Debug, Clone, FromRow)]
pub struct StatEventRow {
    pub id: i64,
    pub event_type: String,
    pub username: Option<String>,
    pub data: Option<String>,
    pub created_at: OffsetDateTime,
}
