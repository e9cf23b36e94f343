pub mod routes;

use crate::views::{SessionDto, session_dto};
use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use itertools::Itertools;

pub async fn session_list_action(State(state): State<AppData>) -> ApiResult<impl IntoResponse> {
    let storage = state.storage.read().await;

    // upcoming and recent sessions first
    let sessions: Vec<SessionDto> = storage
        .sessions
        .iter()
        .sorted_by_key(|session| session.scheduled_at)
        .rev()
        .map(|session| session_dto(&storage, session))
        .collect();

    Ok(Json(sessions))
}
