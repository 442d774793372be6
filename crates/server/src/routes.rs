//! Route configuration.

use crate::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post, put};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    let mut router = Router::new()
        // Status
        .route("/", get(handlers::status))
        // Viewers
        .route(
            "/viewers",
            get(handlers::list_viewers).post(handlers::upsert_viewer),
        )
        .route("/viewers/{username}", get(handlers::get_viewer))
        .route("/viewers/{username}/info", put(handlers::set_viewer_info))
        // Backlog. The single segment is a username for GET and an item id for
        // DELETE; both must share one route since the paths are identical.
        .route("/backlog", post(handlers::add_backlog_item))
        .route(
            "/backlog/{target}",
            get(handlers::list_backlog).delete(handlers::delete_backlog_item),
        )
        .route(
            "/backlog/{target}/complete",
            put(handlers::toggle_backlog_item),
        )
        // Preferences
        .route("/preferences", post(handlers::set_preference))
        .route("/preferences/{key}", get(handlers::get_preference))
        // Stats
        .route("/stats/log", post(handlers::log_stat))
        .route("/stats/summary", get(handlers::stats_summary));

    // The overlay page is served from its own origin (often a local file or
    // the streaming software's browser source).
    if state.config.server.cors_permissive {
        router = router.layer(CorsLayer::permissive());
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}
