use crate::AppData;
use axum::Router;
use axum::routing::post;

pub fn routes() -> Router<AppData> {
    Router::new().route("/api/players", post(super::player_create_action))
}
