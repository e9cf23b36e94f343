pub mod routes;

use crate::views::session_detail_dto;
use crate::{ApiResult, AppData};
use axum::Json;
use axum::extract::{Path, State};
use axum::response::IntoResponse;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct PropositionSelectRequest {
    pub proposition_id: u32,
}

/// Marks one proposition as the session's final lineup. The decision is
/// exactly-once: the gate check and the write happen under the same
/// storage guard, so a second attempt always observes the first.
pub async fn proposition_select_action(
    State(state): State<AppData>,
    Path(session_id): Path<u32>,
    Json(payload): Json<PropositionSelectRequest>,
) -> ApiResult<impl IntoResponse> {
    let mut storage = state.storage.write().await;

    let session = storage.select_proposition(session_id, payload.proposition_id)?;
    let response = session_detail_dto(&storage, &session);

    state.persist(&storage);

    Ok(Json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OracleClient;
    use chrono::Utc;
    use courtside_core::{BalanceStrategy, CourtPosition, HeuristicBalancer, SkillTier, TeamSizer};
    use database::Storage;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    fn seeded_data() -> (AppData, u32, u32) {
        let mut storage = Storage::new();

        for index in 0..10u32 {
            storage
                .add_player(
                    format!("Player {index}"),
                    SkillTier::B,
                    vec![CourtPosition::PointGuard],
                )
                .unwrap();
        }

        let players = storage.players.players.clone();
        let roster: Vec<u32> = players.iter().map(|p| p.id).collect();
        let banding = TeamSizer::size(roster.len()).unwrap();

        let partitions: Vec<_> = BalanceStrategy::ALL
            .iter()
            .map(|&strategy| {
                (
                    strategy,
                    HeuristicBalancer::partition(&players, &banding, strategy),
                )
            })
            .collect();

        let session = storage
            .commit_new_session(Utc::now().naive_utc(), None, &roster, &partitions)
            .unwrap();
        let proposition_id = storage.propositions_for_session(session.id)[0].id;

        let data = AppData {
            storage: Arc::new(RwLock::new(storage)),
            oracle: Arc::new(OracleClient::Heuristic),
            snapshots: None,
        };

        (data, session.id, proposition_id)
    }

    #[tokio::test]
    async fn racing_selections_settle_on_exactly_one_winner() {
        let (data, session_id, proposition_id) = seeded_data();

        let mut handles = Vec::new();

        for _ in 0..2 {
            let data = data.clone();

            handles.push(tokio::spawn(async move {
                proposition_select_action(
                    State(data),
                    Path(session_id),
                    Json(PropositionSelectRequest { proposition_id }),
                )
                .await
                .is_ok()
            }));
        }

        let mut wins = 0;
        for handle in handles {
            if handle.await.unwrap() {
                wins += 1;
            }
        }

        assert_eq!(wins, 1);

        let storage = data.storage.read().await;
        let session = storage.session(session_id).unwrap();
        assert_eq!(session.selected_proposition_id, Some(proposition_id));
    }
}
