//! Core domain types and shared logic for the task overlay backend.
//!
//! This crate defines the data model used across the other crates:
//! - Viewer profiles and their free-form info map
//! - Per-viewer backlog items
//! - Global key/value preferences
//! - Stat events and the aggregate summary

pub mod backlog;
pub mod config;
pub mod error;
pub mod preference;
pub mod stats;
pub mod viewer;

pub use backlog::{BacklogItem, NewBacklogItem};
pub use error::{Error, Result};
pub use preference::Preference;
pub use stats::{NewStatEvent, StatsSummary, completion_rate};
pub use viewer::{InfoMap, Viewer};

/// Priority assigned to backlog items that do not specify one.
pub const DEFAULT_PRIORITY: i64 = 3;

/// Window used to count a viewer as recently active.
pub const ACTIVE_WINDOW: time::Duration = time::Duration::hours(24);

/// Human-readable service name reported by the status endpoint.
pub const SERVICE_NAME: &str = "Task Overlay API";
