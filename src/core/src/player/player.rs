use crate::error::DomainError;
use crate::player::position::CourtPosition;
use crate::player::tier::SkillTier;
use chrono::NaiveDateTime;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub id: u32,
    pub name: String,
    pub tier: SkillTier,
    pub positions: Vec<CourtPosition>,
    pub created_at: NaiveDateTime,
}

impl Player {
    pub fn new(
        id: u32,
        name: String,
        tier: SkillTier,
        positions: Vec<CourtPosition>,
        created_at: NaiveDateTime,
    ) -> Result<Player, DomainError> {
        let name = name.trim().to_owned();
        if name.is_empty() {
            return Err(DomainError::EmptyName);
        }

        if positions.is_empty() {
            return Err(DomainError::EmptyPositions);
        }

        let positions: Vec<CourtPosition> = positions.into_iter().unique().collect();

        Ok(Player {
            id,
            name,
            tier,
            positions,
            created_at,
        })
    }

    pub fn plays(&self, position: CourtPosition) -> bool {
        self.positions.contains(&position)
    }
}

impl PartialEq for Player {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}",
            self.name,
            self.tier,
            self.positions.iter().map(|p| p.code()).join("/")
        )
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerCollection {
    pub players: Vec<Player>,
}

impl PlayerCollection {
    pub fn new(players: Vec<Player>) -> Self {
        PlayerCollection { players }
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn get(&self, id: u32) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn contains(&self, id: u32) -> bool {
        self.players.iter().any(|p| p.id == id)
    }

    pub fn add(&mut self, player: Player) {
        self.players.push(player);
    }

    pub fn remove(&mut self, id: u32) -> Option<Player> {
        let idx = self.players.iter().position(|p| p.id == id)?;
        Some(self.players.remove(idx))
    }
}
