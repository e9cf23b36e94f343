use crate::AppData;
use axum::Router;
use axum::routing::post;

pub fn routes() -> Router<AppData> {
    Router::new().route(
        "/api/propositions/{proposition_id}/moves",
        post(super::proposition_moves_action),
    )
}
