use crate::AppData;
use axum::Router;
use axum::routing::delete;

pub fn routes() -> Router<AppData> {
    Router::new().route(
        "/api/players/{player_id}",
        delete(super::player_delete_action),
    )
}
