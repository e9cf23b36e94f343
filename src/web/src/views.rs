use chrono::NaiveDateTime;
use courtside_core::{BalanceStrategy, Game, GameScore, GameSession, Player, Proposition, Team};
use database::Storage;
use serde::Serialize;

#[derive(Serialize)]
pub struct PlayerDto {
    pub id: u32,
    pub name: String,
    pub tier: String,
    pub positions: Vec<String>,
    pub committed: bool,
    pub created_at: NaiveDateTime,
}

pub fn player_dto(storage: &Storage, player: &Player) -> PlayerDto {
    PlayerDto {
        id: player.id,
        name: player.name.clone(),
        tier: player.tier.to_string(),
        positions: player
            .positions
            .iter()
            .map(|p| p.code().to_owned())
            .collect(),
        committed: storage.is_player_committed(player.id),
        created_at: player.created_at,
    }
}

#[derive(Serialize)]
pub struct TeamMemberDto {
    pub id: u32,
    pub name: String,
    pub tier: String,
    pub positions: Vec<String>,
}

#[derive(Serialize)]
pub struct TeamDto {
    pub id: u32,
    pub size: usize,
    pub members: Vec<TeamMemberDto>,
}

pub fn team_dto(storage: &Storage, team: &Team) -> TeamDto {
    let members = team
        .members
        .iter()
        .filter_map(|id| storage.players.get(*id))
        .map(|player| TeamMemberDto {
            id: player.id,
            name: player.name.clone(),
            tier: player.tier.to_string(),
            positions: player
                .positions
                .iter()
                .map(|p| p.code().to_owned())
                .collect(),
        })
        .collect();

    TeamDto {
        id: team.id,
        size: team.size(),
        members,
    }
}

#[derive(Serialize)]
pub struct PropositionDto {
    pub id: u32,
    pub session_id: u32,
    pub strategy: BalanceStrategy,
    pub selected: bool,
    pub teams: Vec<TeamDto>,
    pub created_at: NaiveDateTime,
}

pub fn proposition_dto(storage: &Storage, proposition: &Proposition) -> PropositionDto {
    let selected = storage
        .sessions
        .iter()
        .find(|s| s.id == proposition.session_id)
        .map(|s| s.selected_proposition_id == Some(proposition.id))
        .unwrap_or(false);

    PropositionDto {
        id: proposition.id,
        session_id: proposition.session_id,
        strategy: proposition.strategy,
        selected,
        teams: storage
            .teams_for_proposition(proposition.id)
            .into_iter()
            .map(|team| team_dto(storage, team))
            .collect(),
        created_at: proposition.created_at,
    }
}

#[derive(Serialize)]
pub struct GameDto {
    pub id: u32,
    pub session_id: u32,
    pub entries: Vec<GameScore>,
    pub recorded_at: NaiveDateTime,
}

pub fn game_dto(game: &Game) -> GameDto {
    GameDto {
        id: game.id,
        session_id: game.session_id,
        entries: game.entries.clone(),
        recorded_at: game.recorded_at,
    }
}

#[derive(Serialize)]
pub struct SessionDto {
    pub id: u32,
    pub scheduled_at: NaiveDateTime,
    pub description: Option<String>,
    pub selected_proposition_id: Option<u32>,
    pub games: usize,
    pub created_at: NaiveDateTime,
}

pub fn session_dto(storage: &Storage, session: &GameSession) -> SessionDto {
    SessionDto {
        id: session.id,
        scheduled_at: session.scheduled_at,
        description: session.description.clone(),
        selected_proposition_id: session.selected_proposition_id,
        games: storage.games_for_session(session.id).len(),
        created_at: session.created_at,
    }
}

#[derive(Serialize)]
pub struct SessionDetailDto {
    pub id: u32,
    pub scheduled_at: NaiveDateTime,
    pub description: Option<String>,
    pub selected_proposition_id: Option<u32>,
    pub created_at: NaiveDateTime,
    pub propositions: Vec<PropositionDto>,
    pub games: Vec<GameDto>,
}

pub fn session_detail_dto(storage: &Storage, session: &GameSession) -> SessionDetailDto {
    SessionDetailDto {
        id: session.id,
        scheduled_at: session.scheduled_at,
        description: session.description.clone(),
        selected_proposition_id: session.selected_proposition_id,
        created_at: session.created_at,
        propositions: storage
            .propositions_for_session(session.id)
            .into_iter()
            .map(|proposition| proposition_dto(storage, proposition))
            .collect(),
        games: storage
            .games_for_session(session.id)
            .into_iter()
            .map(game_dto)
            .collect(),
    }
}
