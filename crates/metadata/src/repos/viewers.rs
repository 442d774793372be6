//! Viewer repository trait.

use crate::error::MetadataResult;
use async_trait::async_trait;
use overlay_core::Viewer;

/// Repository for viewer profiles.
#[async_trait]
pub trait ViewerRepo: Send + Sync {
    /// Insert or fully replace a viewer.
    ///
    /// On conflict the info map, task count and last-active timestamp are
    /// overwritten. The creation timestamp is kept.
    async fn upsert_viewer(&self, viewer: &Viewer) -> MetadataResult<()>;

    /// Set one info field, creating the viewer if it does not exist.
    ///
    /// Other info fields and the task count are left untouched; last-active
    /// is refreshed. The merge happens inside a single statement.
    async fn set_viewer_info_field(
        &self,
        username: &str,
        field: &str,
        value: &str,
    ) -> MetadataResult<()>;

    /// List all viewers, most recently active first.
    async fn list_viewers(&self) -> MetadataResult<Vec<Viewer>>;

    /// Get a viewer by username. Fails with `NotFound` if absent.
    async fn get_viewer(&self, username: &str) -> MetadataResult<Viewer>;
}
