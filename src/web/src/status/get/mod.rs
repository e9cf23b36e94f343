pub mod routes;

use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use serde::Serialize;
use sysinfo::System;

#[derive(Serialize)]
pub struct StatusResponse {
    pub name: &'static str,
    pub version: &'static str,
    pub hostname: String,
    pub memory_used_mb: u64,
    pub players: usize,
    pub sessions: usize,
    pub games: usize,
}

pub async fn status_get_action(State(state): State<AppData>) -> ApiResult<impl IntoResponse> {
    let storage = state.storage.read().await;

    let hostname = hostname::get()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|_| String::from("unknown"));

    let mut system = System::new();
    system.refresh_memory();

    Ok(Json(StatusResponse {
        name: "courtside",
        version: env!("CARGO_PKG_VERSION"),
        hostname,
        memory_used_mb: system.used_memory() / (1024 * 1024),
        players: storage.players.len(),
        sessions: storage.sessions.len(),
        games: storage.games.len(),
    }))
}
