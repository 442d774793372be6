//! Viewer profile endpoints.

use crate::error::ApiResult;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, Query, State};
use overlay_core::Viewer;
use overlay_metadata::repos::ViewerRepo;
use serde::{Deserialize, Serialize};

/// Query parameters for setting one info field.
#[derive(Debug, Deserialize)]
pub struct SetInfoParams {
    pub field: String,
    pub value: String,
}

/// Response after setting an info field.
#[derive(Debug, Serialize)]
pub struct SetInfoResponse {
    pub success: bool,
    pub field: String,
    pub value: String,
}

/// GET /viewers - All viewers, most recently active first.
pub async fn list_viewers(State(state): State<AppState>) -> ApiResult<Json<Vec<Viewer>>> {
    let viewers = state.metadata.list_viewers().await?;
    Ok(Json(viewers))
}

/// GET /viewers/{username}
pub async fn get_viewer(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<Viewer>> {
    let viewer = state.metadata.get_viewer(&username).await?;
    Ok(Json(viewer))
}

/// POST /viewers - Create or fully replace a viewer.
pub async fn upsert_viewer(
    State(state): State<AppState>,
    Json(viewer): Json<Viewer>,
) -> ApiResult<Json<Viewer>> {
    state.metadata.upsert_viewer(&viewer).await?;

    tracing::info!(
        username = %viewer.username,
        task_count = viewer.task_count,
        "Viewer upserted"
    );
    Ok(Json(viewer))
}

/// PUT /viewers/{username}/info?field=&value= - Merge one info field.
pub async fn set_viewer_info(
    State(state): State<AppState>,
    Path(username): Path<String>,
    Query(params): Query<SetInfoParams>,
) -> ApiResult<Json<SetInfoResponse>> {
    state
        .metadata
        .set_viewer_info_field(&username, &params.field, &params.value)
        .await?;

    tracing::info!(username = %username, field = %params.field, "Viewer info field set");
    Ok(Json(SetInfoResponse {
        success: true,
        field: params.field,
        value: params.value,
    }))
}
