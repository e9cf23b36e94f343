pub mod routes;

use crate::views::session_detail_dto;
use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

pub async fn session_get_action(
    State(state): State<AppData>,
    Path(session_id): Path<u32>,
) -> ApiResult<impl IntoResponse> {
    let storage = state.storage.read().await;

    let session = storage.session(session_id)?;

    Ok(Json(session_detail_dto(&storage, session)))
}
