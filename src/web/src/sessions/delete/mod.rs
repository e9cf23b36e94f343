pub mod routes;

use crate::{ApiResult, AppData};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;

pub async fn session_delete_action(
    State(state): State<AppData>,
    Path(session_id): Path<u32>,
) -> ApiResult<impl IntoResponse> {
    let mut storage = state.storage.write().await;

    storage.remove_session(session_id)?;

    state.persist(&storage);

    Ok(StatusCode::NO_CONTENT)
}
