use crate::AppData;
use axum::Router;
use axum::routing::delete;

pub fn routes() -> Router<AppData> {
    Router::new().route(
        "/api/sessions/{session_id}",
        delete(super::session_delete_action),
    )
}
