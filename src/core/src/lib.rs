pub mod balance;
pub mod error;
pub mod player;
pub mod proposition;
pub mod roster;
pub mod scoring;
pub mod selection;
pub mod session;
pub mod utils;

pub use error::DomainError;

// Re-export player items
pub use player::{CourtPosition, Player, PlayerCollection, SkillTier};

// Re-export roster sizing items
pub use roster::{MIN_ROSTER_SIZE, MIN_TEAM_SIZE, TeamBanding, TeamSizer};

// Re-export balancing items
pub use balance::{
    BalanceStrategy, HeuristicBalancer, OraclePartition, OraclePlayer, OracleRequest,
    validate_partition,
};

// Re-export proposition items
pub use proposition::{PlayerMove, Proposition, PropositionEditor, Team};

pub use selection::SelectionGate;

// Re-export session & scoring items
pub use session::GameSession;
pub use scoring::{Game, GameScore, MAX_TEAM_POINTS, ScoreInput, ScoreRecorder};

pub use utils::*;
