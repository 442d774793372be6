//! Metadata store error types.

use thiserror::Error;

/// Metadata store operation errors.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("{0} not found")]
    NotFound(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid stored data: {0}")]
    InvalidData(#[from] overlay_core::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

impl MetadataError {
    pub(crate) fn viewer_not_found(username: &str) -> Self {
        Self::NotFound(format!("viewer '{username}'"))
    }

    pub(crate) fn backlog_item_not_found(id: i64) -> Self {
        Self::NotFound(format!("backlog item {id}"))
    }

    pub(crate) fn preference_not_found(key: &str) -> Self {
        Self::NotFound(format!("preference '{key}'"))
    }

    /// Whether this error means the requested record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// Result type for metadata operations.
pub type MetadataResult<T> = std::result::Result<T, MetadataError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_messages() {
        assert_eq!(
            MetadataError::viewer_not_found("alice").to_string(),
            "viewer 'alice' not found"
        );
        assert_eq!(
            MetadataError::backlog_item_not_found(42).to_string(),
            "backlog item 42 not found"
        );
        assert!(MetadataError::preference_not_found("theme").is_not_found());
    }
}
