pub mod routes;

use crate::views::game_dto;
use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use courtside_core::ScoreInput;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct GameRecordRequest {
    pub scores: Vec<ScoreInput>,
}

pub async fn game_record_action(
    State(state): State<AppData>,
    Path(session_id): Path<u32>,
    Json(payload): Json<GameRecordRequest>,
) -> ApiResult<impl IntoResponse> {
    let mut storage = state.storage.write().await;

    let game = storage.record_game(session_id, &payload.scores)?;
    let response = game_dto(&game);

    state.persist(&storage);

    Ok((StatusCode::CREATED, Json(response)))
}
