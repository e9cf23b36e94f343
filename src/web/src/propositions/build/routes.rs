use crate::AppData;
use axum::Router;
use axum::routing::post;

pub fn routes() -> Router<AppData> {
    Router::new().route(
        "/api/sessions/{session_id}/propositions",
        post(super::proposition_build_action),
    )
}
