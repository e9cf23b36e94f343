pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use crate::{ApiError, AppData};
use axum::Router;
use courtside_core::{CourtPosition, SkillTier};

pub fn player_routes() -> Router<AppData> {
    Router::new()
        .merge(list::routes::routes())
        .merge(create::routes::routes())
        .merge(get::routes::routes())
        .merge(update::routes::routes())
        .merge(delete::routes::routes())
}

fn parse_tier(value: &str) -> Result<SkillTier, ApiError> {
    value.parse().map_err(ApiError::BadRequest)
}

fn parse_positions(values: &[String]) -> Result<Vec<CourtPosition>, ApiError> {
    values
        .iter()
        .map(|value| value.parse().map_err(ApiError::BadRequest))
        .collect()
}
