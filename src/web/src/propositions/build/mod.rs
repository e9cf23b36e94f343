pub mod routes;

use crate::oracle::balanced_partitions;
use crate::views::{PropositionDto, proposition_dto};
use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use courtside_core::{SelectionGate, TeamSizer};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct PropositionBuildRequest {
    pub roster: Vec<u32>,
}

/// Rebuilds the candidate set for a session. The oracle round trip runs
/// outside any storage guard, so the storage layer re-validates the
/// partitions against current state before installing them.
pub async fn proposition_build_action(
    State(state): State<AppData>,
    Path(session_id): Path<u32>,
    Json(payload): Json<PropositionBuildRequest>,
) -> ApiResult<impl IntoResponse> {
    super::validate_roster(&payload.roster)?;

    let players = {
        let storage = state.storage.read().await;

        let session = storage.session(session_id)?;
        SelectionGate::ensure_buildable(session)?;

        super::resolve_roster(&storage, &payload.roster)?
    };

    let banding = TeamSizer::size(players.len())?;
    let partitions = balanced_partitions(&state.oracle, &players, &banding).await?;

    let mut storage = state.storage.write().await;

    let created = storage.replace_propositions(session_id, &payload.roster, &partitions)?;
    let response: Vec<PropositionDto> = created
        .iter()
        .map(|proposition| proposition_dto(&storage, proposition))
        .collect();

    state.persist(&storage);

    Ok((StatusCode::CREATED, Json(response)))
}
