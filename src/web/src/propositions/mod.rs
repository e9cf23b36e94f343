pub mod build;
pub mod moves;
pub mod select;

use std::collections::HashSet;

use crate::AppData;
use axum::Router;
use courtside_core::{DomainError, Player};
use database::Storage;

pub fn proposition_routes() -> Router<AppData> {
    Router::new()
        .merge(build::routes::routes())
        .merge(moves::routes::routes())
        .merge(select::routes::routes())
}

/// Duplicate roster ids are a client mistake, caught before any storage
/// or oracle work happens.
pub fn validate_roster(ids: &[u32]) -> Result<(), DomainError> {
    let mut seen = HashSet::with_capacity(ids.len());

    for &player_id in ids {
        if !seen.insert(player_id) {
            return Err(DomainError::DuplicateRosterEntry { player_id });
        }
    }

    Ok(())
}

pub fn resolve_roster(storage: &Storage, ids: &[u32]) -> Result<Vec<Player>, DomainError> {
    ids.iter()
        .map(|&player_id| storage.player(player_id).cloned())
        .collect()
}
