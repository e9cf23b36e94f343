use crate::AppData;
use axum::Router;
use axum::routing::post;

pub fn routes() -> Router<AppData> {
    Router::new().route(
        "/api/sessions/{session_id}/games",
        post(super::game_record_action),
    )
}
