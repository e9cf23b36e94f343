use crate::balance::strategy::BalanceStrategy;
use crate::player::Player;
use crate::roster::TeamBanding;
use serde::{Deserialize, Serialize};

/// The roster view handed to the balancing oracle. Tiers travel as points so
/// the oracle can sum them without knowing the letter scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OraclePlayer {
    pub id: u32,
    pub name: String,
    pub skill: u8,
    pub positions: Vec<String>,
}

impl From<&Player> for OraclePlayer {
    fn from(player: &Player) -> Self {
        OraclePlayer {
            id: player.id,
            name: player.name.clone(),
            skill: player.tier.points(),
            positions: player.positions.iter().map(|p| p.code().to_owned()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OracleRequest {
    pub strategy: BalanceStrategy,
    pub team_count: usize,
    pub min_size: usize,
    pub max_size: usize,
    pub players: Vec<OraclePlayer>,
}

impl OracleRequest {
    pub fn new(strategy: BalanceStrategy, banding: &TeamBanding, players: &[Player]) -> Self {
        OracleRequest {
            strategy,
            team_count: banding.team_count,
            min_size: banding.min_size,
            max_size: banding.max_size,
            players: players.iter().map(OraclePlayer::from).collect(),
        }
    }
}

/// What the oracle must answer with: player ids grouped into teams. This is
/// untrusted until it passes [`validate_partition`](crate::balance::validate_partition).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OraclePartition {
    pub teams: Vec<Vec<u32>>,
}
