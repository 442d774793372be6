//! Repository traits for metadata operations.

pub mod backlog;
pub mod preferences;
pub mod stats;
pub mod viewers;

pub use backlog::BacklogRepo;
pub use preferences::PreferenceRepo;
pub use stats::StatsRepo;
pub use viewers::ViewerRepo;
