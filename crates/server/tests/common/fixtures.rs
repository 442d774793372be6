//! Request helpers and timestamp fixtures.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use sqlx::{Pool, Sqlite};
use time::OffsetDateTime;
use tower::ServiceExt;

/// Send a request to the router and decode the JSON response body.
#[allow(dead_code)]
pub async fn json_request(
    router: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<serde_json::Value>,
) -> (StatusCode, serde_json::Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    let body = match body {
        Some(v) => {
            builder = builder.header("Content-Type", "application/json");
            Body::from(serde_json::to_vec(&v).unwrap())
        }
        None => Body::empty(),
    };

    let request = builder.body(body).unwrap();
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body_json: serde_json::Value = if body_bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, body_json)
}

/// Overwrite a backlog item's creation time.
#[allow(dead_code)]
pub async fn set_backlog_created_at(pool: &Pool<Sqlite>, id: i64, at: OffsetDateTime) {
    sqlx::query("UPDATE backlog SET created_at = ? WHERE id = ?")
        .bind(at)
        .bind(id)
        .execute(pool)
        .await
        .expect("Failed to set created_at");
}

/// Overwrite a viewer's last-active time.
#[allow(dead_code)]
pub async fn set_viewer_last_active(pool: &Pool<Sqlite>, username: &str, at: OffsetDateTime) {
    sqlx::query("UPDATE viewers SET last_active = ? WHERE username = ?")
        .bind(at)
        .bind(username)
        .execute(pool)
        .await
        .expect("Failed to set last_active");
}
