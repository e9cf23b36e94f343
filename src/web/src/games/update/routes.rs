use crate::AppData;
use axum::Router;
use axum::routing::put;

pub fn routes() -> Router<AppData> {
    Router::new().route("/api/games/{game_id}", put(super::game_update_action))
}
