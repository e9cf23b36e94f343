pub mod routes;

use crate::views::{PlayerDto, player_dto};
use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;

pub async fn player_list_action(State(state): State<AppData>) -> ApiResult<impl IntoResponse> {
    let storage = state.storage.read().await;

    let players: Vec<PlayerDto> = storage
        .players
        .players
        .iter()
        .map(|player| player_dto(&storage, player))
        .collect();

    Ok(Json(players))
}
