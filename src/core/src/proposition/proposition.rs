use crate::balance::BalanceStrategy;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// One side of a candidate lineup. Membership is mutable until the owning
/// session makes its selection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Team {
    pub id: u32,
    pub proposition_id: u32,
    pub members: Vec<u32>,
}

impl Team {
    pub fn new(id: u32, proposition_id: u32, members: Vec<u32>) -> Self {
        Team {
            id,
            proposition_id,
            members,
        }
    }

    pub fn size(&self) -> usize {
        self.members.len()
    }

    pub fn has_member(&self, player_id: u32) -> bool {
        self.members.contains(&player_id)
    }
}

impl PartialEq for Team {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

/// A candidate split of one session's roster, tagged with the strategy that
/// produced it. Sessions carry three of these until one is selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Proposition {
    pub id: u32,
    pub session_id: u32,
    pub strategy: BalanceStrategy,
    pub team_ids: Vec<u32>,
    pub created_at: NaiveDateTime,
}

impl Proposition {
    pub fn new(
        id: u32,
        session_id: u32,
        strategy: BalanceStrategy,
        team_ids: Vec<u32>,
        created_at: NaiveDateTime,
    ) -> Self {
        Proposition {
            id,
            session_id,
            strategy,
            team_ids,
            created_at,
        }
    }

    pub fn owns_team(&self, team_id: u32) -> bool {
        self.team_ids.contains(&team_id)
    }
}

impl PartialEq for Proposition {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
