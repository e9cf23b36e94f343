use axum::Json;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde_json::json;

/// Catch-all for unknown paths, in the same body shape as [`crate::ApiError`].
pub async fn default_handler(uri: axum::http::Uri) -> axum::response::Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": {
                "kind": "unknown_route",
                "message": format!("no route for {}", uri.path()),
            }
        })),
    )
        .into_response()
}
