//! Metadata store abstraction and SQLite implementation for the overlay backend.
//!
//! This crate owns the persisted state:
//! - Viewer profiles with merged info fields
//! - Per-viewer backlog items
//! - Key/value preferences
//! - The append-only stat log and its summary

pub mod error;
pub mod models;
pub mod repos;
pub mod store;

pub use error::{MetadataError, MetadataResult};
pub use store::{MetadataStore, SqliteStore};

use overlay_core::config::MetadataConfig;
use std::sync::Arc;

/// Create a metadata store from configuration.
pub async fn from_config(config: &MetadataConfig) -> MetadataResult<Arc<dyn MetadataStore>> {
    config
        .validate()
        .map_err(|e| MetadataError::Config(e.to_string()))?;
    let store = SqliteStore::new(&config.path, config.busy_timeout()).await?;
    Ok(Arc::new(store) as Arc<dyn MetadataStore>)
}
