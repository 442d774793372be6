//! Backlog repository trait.

use crate::error::MetadataResult;
use async_trait::async_trait;
use overlay_core::{BacklogItem, NewBacklogItem};

/// Repository for per-viewer backlog items.
#[async_trait]
pub trait BacklogRepo: Send + Sync {
    /// Insert an item and return it as persisted (generated id and timestamp).
    async fn add_backlog_item(&self, item: &NewBacklogItem) -> MetadataResult<BacklogItem>;

    /// List a viewer's items: incomplete first, then highest priority, then oldest.
    async fn list_backlog(&self, username: &str) -> MetadataResult<Vec<BacklogItem>>;

    /// Flip the completed flag. Fails with `NotFound` if no item has this id.
    async fn toggle_backlog_item(&self, id: i64) -> MetadataResult<()>;

    /// Delete an item. Fails with `NotFound` if no item has this id.
    async fn delete_backlog_item(&self, id: i64) -> MetadataResult<()>;
}
