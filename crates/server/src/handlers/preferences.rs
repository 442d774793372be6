//! Preference endpoints.

use crate::error::ApiResult;
use crate::state::AppState;
use axum::Json;
use axum::extract::{Path, State};
use overlay_core::Preference;
use overlay_metadata::repos::PreferenceRepo;
use serde::Serialize;

/// Response after storing a preference.
#[derive(Debug, Serialize)]
pub struct SetPreferenceResponse {
    pub success: bool,
    pub key: String,
}

/// GET /preferences/{key}
pub async fn get_preference(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> ApiResult<Json<Preference>> {
    let preference = state.metadata.get_preference(&key).await?;
    Ok(Json(preference))
}

/// POST /preferences - Insert or overwrite.
pub async fn set_preference(
    State(state): State<AppState>,
    Json(preference): Json<Preference>,
) -> ApiResult<Json<SetPreferenceResponse>> {
    state.metadata.set_preference(&preference).await?;

    tracing::info!(key = %preference.key, "Preference set");
    Ok(Json(SetPreferenceResponse {
        success: true,
        key: preference.key,
    }))
}
