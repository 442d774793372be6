//! Stat log repository trait.

use crate::error::MetadataResult;
use crate::models::StatEventRow;
use async_trait::async_trait;
use overlay_core::{NewStatEvent, StatsSummary};
use time::OffsetDateTime;

/// Repository for the append-only stat log and aggregate counters.
#[async_trait]
pub trait StatsRepo: Send + Sync {
    /// Append an event. Returns the generated id.
    async fn log_stat(&self, event: &NewStatEvent) -> MetadataResult<i64>;

    /// Most recent events first, at most `limit`.
    async fn list_stats(&self, limit: u32) -> MetadataResult<Vec<StatEventRow>>;

    /// Compute viewer and backlog counters as of `now`.
    async fn stats_summary(&self, now: OffsetDateTime) -> MetadataResult<StatsSummary>;
}
