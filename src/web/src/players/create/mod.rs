pub mod routes;

use crate::views::player_dto;
use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct PlayerCreateRequest {
    pub name: String,
    pub tier: String,
    pub positions: Vec<String>,
}

pub async fn player_create_action(
    State(state): State<AppData>,
    Json(payload): Json<PlayerCreateRequest>,
) -> ApiResult<impl IntoResponse> {
    let tier = super::parse_tier(&payload.tier)?;
    let positions = super::parse_positions(&payload.positions)?;

    let mut storage = state.storage.write().await;

    let player = storage.add_player(payload.name, tier, positions)?;
    let response = player_dto(&storage, &player);

    state.persist(&storage);

    Ok((StatusCode::CREATED, Json(response)))
}
