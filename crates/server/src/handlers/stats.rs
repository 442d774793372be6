//! Stat log endpoints.

use super::SuccessResponse;
use crate::error::ApiResult;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Query, State};
use overlay_core::{NewStatEvent, StatsSummary};
use overlay_metadata::repos::StatsRepo;
use time::OffsetDateTime;

/// POST /stats/log?event_type=&username=&data= - Append an event.
pub async fn log_stat(
    State(state): State<AppState>,
    Query(event): Query<NewStatEvent>,
) -> ApiResult<Json<SuccessResponse>> {
    let id = state.metadata.log_stat(&event).await?;

    tracing::debug!(id, event_type = %event.event_type, "Stat event logged");
    Ok(Json(SuccessResponse { success: true }))
}

/// GET /stats/summary
pub async fn stats_summary(State(state): State<AppState>) -> ApiResult<Json<StatsSummary>> {
    let summary = state
        .metadata
        .stats_summary(OffsetDateTime::now_utc())
        .await?;
    Ok(Json(summary))
}
