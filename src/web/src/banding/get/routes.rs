use crate::AppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<AppData> {
    Router::new().route("/api/banding/{players}", get(super::banding_get_action))
}
