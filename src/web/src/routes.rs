use crate::AppData;
use crate::banding::banding_routes;
use crate::common::default_handler::default_handler;
use crate::games::game_routes;
use crate::players::player_routes;
use crate::propositions::proposition_routes;
use crate::sessions::session_routes;
use crate::status::status_routes;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<AppData> {
        Router::<AppData>::new()
            .merge(status_routes())
            .merge(banding_routes())
            .merge(player_routes())
            .merge(session_routes())
            .merge(proposition_routes())
            .merge(game_routes())
            .fallback(default_handler)
    }
}
