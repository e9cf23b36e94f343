pub mod routes;

use crate::ApiResult;
use axum::Json;
use axum::extract::Path;
use axum::response::IntoResponse;
use courtside_core::DomainError;
use courtside_core::TeamSizer;

pub async fn banding_get_action(Path(players): Path<i64>) -> ApiResult<impl IntoResponse> {
    if players < 0 {
        return Err(DomainError::InvalidRosterSize { players }.into());
    }

    let banding = TeamSizer::size(players as usize)?;

    Ok(Json(banding))
}
