//! HTTP API server for the task overlay backend.
//!
//! This crate provides the REST shell over the metadata store:
//! - Viewer profiles and info fields
//! - Backlog items per viewer
//! - Preferences
//! - Stat logging and summary

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::{ApiError, ApiResult};
pub use routes::create_router;
pub use state::AppState;
