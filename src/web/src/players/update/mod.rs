pub mod routes;

use crate::views::player_dto;
use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct PlayerUpdateRequest {
    pub name: String,
    pub tier: String,
    pub positions: Vec<String>,
}

pub async fn player_update_action(
    State(state): State<AppData>,
    Path(player_id): Path<u32>,
    Json(payload): Json<PlayerUpdateRequest>,
) -> ApiResult<impl IntoResponse> {
    let tier = super::parse_tier(&payload.tier)?;
    let positions = super::parse_positions(&payload.positions)?;

    let mut storage = state.storage.write().await;

    let player = storage.update_player(player_id, payload.name, tier, positions)?;
    let response = player_dto(&storage, &player);

    state.persist(&storage);

    Ok(Json(response))
}
