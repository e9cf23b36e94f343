use crate::balance::BalanceStrategy;
use thiserror::Error;

/// Tagged failure for every operation the service exposes. Callers map these
/// onto user-facing messages and status codes; no other error type crosses
/// the operation boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("a roster of {players} players cannot form two teams of {}", crate::roster::MIN_TEAM_SIZE)]
    InvalidRosterSize { players: i64 },

    #[error("player {player_id} appears more than once in the roster")]
    DuplicateRosterEntry { player_id: u32 },

    #[error("balancing oracle returned an unusable {strategy} partition: {reason}")]
    InvalidOracleResult {
        strategy: BalanceStrategy,
        reason: String,
    },

    #[error("balancing oracle timed out while producing the {strategy} partition")]
    OracleTimeout { strategy: BalanceStrategy },

    #[error("balancing oracle is unreachable: {reason}")]
    OracleUnavailable { reason: String },

    #[error("proposition {proposition_id} belongs to a session that already made its selection")]
    PropositionLocked { proposition_id: u32 },

    #[error("session {session_id} already has a selected proposition")]
    AlreadySelected { session_id: u32 },

    #[error("team {team_id} has {size} players, outside the {min}..={max} band")]
    InvalidComposition {
        team_id: u32,
        size: usize,
        min: usize,
        max: usize,
    },

    #[error("session {session_id} has no selected proposition yet")]
    NoPropositionSelected { session_id: u32 },

    #[error("team {team_id} is not part of the selected proposition")]
    TeamNotInSelection { team_id: u32 },

    #[error("a score correction must keep the teams that played (team {team_id} differs)")]
    TeamNotInGame { team_id: u32 },

    #[error("a game needs scores for at least 2 teams, got {provided}")]
    InsufficientTeams { provided: usize },

    #[error("team {team_id} is scored more than once")]
    DuplicateScoreEntry { team_id: u32 },

    #[error("{points} is not a valid score (expected 0..={})", crate::scoring::MAX_TEAM_POINTS)]
    InvalidScore { points: i64 },

    #[error("a player needs at least one playable position")]
    EmptyPositions,

    #[error("a player needs a non-empty name")]
    EmptyName,

    #[error("player {player_id} is on a committed team and can no longer be edited")]
    PlayerCommitted { player_id: u32 },

    #[error("session {session_id} has {games} recorded games and cannot be deleted")]
    SessionHasGames { session_id: u32, games: usize },

    #[error("player {player_id} not found")]
    PlayerNotFound { player_id: u32 },

    #[error("team {team_id} not found")]
    TeamNotFound { team_id: u32 },

    #[error("session {session_id} not found")]
    SessionNotFound { session_id: u32 },

    #[error("proposition {proposition_id} not found")]
    PropositionNotFound { proposition_id: u32 },

    #[error("game {game_id} not found")]
    GameNotFound { game_id: u32 },
}

impl DomainError {
    /// Stable machine-readable tag for API payloads and logs.
    pub fn kind(&self) -> &'static str {
        match self {
            DomainError::InvalidRosterSize { .. } => "invalid_roster_size",
            DomainError::DuplicateRosterEntry { .. } => "duplicate_roster_entry",
            DomainError::InvalidOracleResult { .. } => "invalid_oracle_result",
            DomainError::OracleTimeout { .. } => "oracle_timeout",
            DomainError::OracleUnavailable { .. } => "oracle_unavailable",
            DomainError::PropositionLocked { .. } => "proposition_locked",
            DomainError::AlreadySelected { .. } => "already_selected",
            DomainError::InvalidComposition { .. } => "invalid_composition",
            DomainError::NoPropositionSelected { .. } => "no_proposition_selected",
            DomainError::TeamNotInSelection { .. } => "team_not_in_selection",
            DomainError::TeamNotInGame { .. } => "team_not_in_game",
            DomainError::InsufficientTeams { .. } => "insufficient_teams",
            DomainError::DuplicateScoreEntry { .. } => "duplicate_score_entry",
            DomainError::InvalidScore { .. } => "invalid_score",
            DomainError::EmptyPositions => "empty_positions",
            DomainError::EmptyName => "empty_name",
            DomainError::PlayerCommitted { .. } => "player_committed",
            DomainError::SessionHasGames { .. } => "session_has_games",
            DomainError::PlayerNotFound { .. } => "player_not_found",
            DomainError::TeamNotFound { .. } => "team_not_found",
            DomainError::SessionNotFound { .. } => "session_not_found",
            DomainError::PropositionNotFound { .. } => "proposition_not_found",
            DomainError::GameNotFound { .. } => "game_not_found",
        }
    }
}
