//! HTTP request handlers.

pub mod backlog;
pub mod preferences;
pub mod stats;
pub mod status;
pub mod viewers;

pub use backlog::*;
pub use preferences::*;
pub use stats::*;
pub use status::*;
pub use viewers::*;

use serde::Serialize;

/// Acknowledgement for writes that address a backlog item by id.
#[derive(Debug, Serialize)]
pub struct ItemAckResponse {
    pub success: bool,
    pub id: i64,
}

/// Bare acknowledgement.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}
