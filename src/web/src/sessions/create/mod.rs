pub mod routes;

use crate::oracle::balanced_partitions;
use crate::propositions::{resolve_roster, validate_roster};
use crate::views::session_detail_dto;
use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::NaiveDateTime;
use courtside_core::TeamSizer;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct SessionCreateRequest {
    pub scheduled_at: NaiveDateTime,
    pub description: Option<String>,
    pub roster: Vec<u32>,
}

/// Creates a session and its initial propositions in one step. The roster
/// is checked and the oracle consulted before any write guard is taken;
/// the commit re-validates everything against the state it actually
/// lands on.
pub async fn session_create_action(
    State(state): State<AppData>,
    Json(payload): Json<SessionCreateRequest>,
) -> ApiResult<impl IntoResponse> {
    validate_roster(&payload.roster)?;

    let players = {
        let storage = state.storage.read().await;
        resolve_roster(&storage, &payload.roster)?
    };

    let banding = TeamSizer::size(players.len())?;
    let partitions = balanced_partitions(&state.oracle, &players, &banding).await?;

    let mut storage = state.storage.write().await;

    let session = storage.commit_new_session(
        payload.scheduled_at,
        payload.description,
        &payload.roster,
        &partitions,
    )?;
    let response = session_detail_dto(&storage, &session);

    state.persist(&storage);

    Ok((StatusCode::CREATED, Json(response)))
}
