pub mod record;
pub mod update;

use crate::AppData;
use axum::Router;

pub fn game_routes() -> Router<AppData> {
    Router::new()
        .merge(record::routes::routes())
        .merge(update::routes::routes())
}
