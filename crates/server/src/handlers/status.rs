//! Service status endpoint.

use crate::error::ApiResult;
use crate::state::AppState;
use axum::Json;
use axum::extract::State;
use serde::Serialize;

/// Status response.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// GET / - Health check.
///
/// Verifies the metadata store answers before reporting online.
pub async fn status(State(state): State<AppState>) -> ApiResult<Json<StatusResponse>> {
    state.metadata.health_check().await?;

    Ok(Json(StatusResponse {
        status: "online",
        service: overlay_core::SERVICE_NAME,
        version: env!("CARGO_PKG_VERSION"),
    }))
}
