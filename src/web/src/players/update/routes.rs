use crate::AppData;
use axum::Router;
use axum::routing::put;

pub fn routes() -> Router<AppData> {
    Router::new().route("/api/players/{player_id}", put(super::player_update_action))
}
