use crate::AppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<AppData> {
    Router::new().route("/api/players/{player_id}", get(super::player_get_action))
}
