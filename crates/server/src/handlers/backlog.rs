//! Backlog endpoints.

use super::ItemAckResponse;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use overlay_core::{BacklogItem, NewBacklogItem};
use overlay_metadata::repos::BacklogRepo;

/// The backlog routes share a path segment that is a username on GET and an
/// item id elsewhere, so ids are parsed here rather than by the extractor.
fn parse_item_id(raw: &str) -> ApiResult<i64> {
    raw.parse::<i64>()
        .map_err(|e| ApiError::BadRequest(format!("invalid item id '{raw}': {e}")))
}

/// GET /backlog/{username} - Incomplete first, then by priority, then oldest.
pub async fn list_backlog(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> ApiResult<Json<Vec<BacklogItem>>> {
    let items = state.metadata.list_backlog(&username).await?;
    Ok(Json(items))
}

/// POST /backlog - Add an item; responds with the stored record.
pub async fn add_backlog_item(
    State(state): State<AppState>,
    Json(item): Json<NewBacklogItem>,
) -> ApiResult<Json<BacklogItem>> {
    let created = state.metadata.add_backlog_item(&item).await?;

    tracing::info!(
        id = created.id,
        username = %created.username,
        priority = created.priority,
        "Backlog item added"
    );
    Ok(Json(created))
}

/// PUT /backlog/{item_id}/complete - Flip the completed flag.
pub async fn toggle_backlog_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> ApiResult<Json<ItemAckResponse>> {
    let id = parse_item_id(&item_id)?;
    state.metadata.toggle_backlog_item(id).await?;

    tracing::info!(id, "Backlog item toggled");
    Ok(Json(ItemAckResponse { success: true, id }))
}

/// DELETE /backlog/{item_id}
pub async fn delete_backlog_item(
    State(state): State<AppState>,
    Path(item_id): Path<String>,
) -> ApiResult<Json<ItemAckResponse>> {
    let id = parse_item_id(&item_id)?;
    state.metadata.delete_backlog_item(id).await?;

    tracing::info!(id, "Backlog item deleted");
    Ok(Json(ItemAckResponse { success: true, id }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_item_id() {
        assert_eq!(parse_item_id("42").unwrap(), 42);
        assert!(matches!(parse_item_id("abc"), Err(ApiError::BadRequest(_))));
    }
}
