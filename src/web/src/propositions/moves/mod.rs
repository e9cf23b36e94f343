pub mod routes;

use crate::views::{TeamDto, team_dto};
use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use courtside_core::PlayerMove;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct PropositionMovesRequest {
    pub moves: Vec<PlayerMove>,
}

/// Applies a batch of player moves to one proposition. The batch lands
/// whole or not at all; a failure anywhere leaves every team untouched.
pub async fn proposition_moves_action(
    State(state): State<AppData>,
    Path(proposition_id): Path<u32>,
    Json(payload): Json<PropositionMovesRequest>,
) -> ApiResult<impl IntoResponse> {
    let mut storage = state.storage.write().await;

    let teams = storage.apply_moves(proposition_id, &payload.moves)?;
    let response: Vec<TeamDto> = teams.iter().map(|team| team_dto(&storage, team)).collect();

    state.persist(&storage);

    Ok(Json(response))
}
