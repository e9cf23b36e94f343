pub mod routes;

use crate::views::player_dto;
use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

pub async fn player_get_action(
    State(state): State<AppData>,
    Path(player_id): Path<u32>,
) -> ApiResult<impl IntoResponse> {
    let storage = state.storage.read().await;

    let player = storage.player(player_id)?;

    Ok(Json(player_dto(&storage, player)))
}
