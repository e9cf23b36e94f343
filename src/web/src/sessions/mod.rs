pub mod create;
pub mod delete;
pub mod get;
pub mod list;

use crate::AppData;
use axum::Router;

pub fn session_routes() -> Router<AppData> {
    Router::new()
        .merge(list::routes::routes())
        .merge(create::routes::routes())
        .merge(get::routes::routes())
        .merge(delete::routes::routes())
}
