pub mod routes;

use crate::views::game_dto;
use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use courtside_core::ScoreInput;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct GameUpdateRequest {
    pub scores: Vec<ScoreInput>,
}

/// Corrects a recorded game. The replacement scores must cover exactly
/// the teams that played; a correction never rewrites history's lineup.
pub async fn game_update_action(
    State(state): State<AppData>,
    Path(game_id): Path<u32>,
    Json(payload): Json<GameUpdateRequest>,
) -> ApiResult<impl IntoResponse> {
    let mut storage = state.storage.write().await;

    let game = storage.update_game(game_id, &payload.scores)?;
    let response = game_dto(&game);

    state.persist(&storage);

    Ok(Json(response))
}
