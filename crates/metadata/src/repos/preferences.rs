//! Preference repository trait.

use crate::error::MetadataResult;
use async_trait::async_trait;
use overlay_core::Preference;

/// Repository for global key/value preferences.
#[async_trait]
pub trait PreferenceRepo: Send + Sync {
    /// Get a preference. Fails with `NotFound` if the key is absent.
    async fn get_preference(&self, key: &str) -> MetadataResult<Preference>;

    /// Insert or overwrite a preference, refreshing its updated timestamp.
    async fn set_preference(&self, preference: &Preference) -> MetadataResult<()>;
}
