use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Upper bound on a single team's points in one game. Pickup runs never get
/// near it; anything above is a typo.
pub const MAX_TEAM_POINTS: u16 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameScore {
    pub team_id: u32,
    pub points: u16,
}

/// A finished game recorded against the session's selected proposition. The
/// set of teams that played is fixed at recording time; corrections may
/// only change their points.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    pub id: u32,
    pub session_id: u32,
    pub entries: Vec<GameScore>,
    pub recorded_at: NaiveDateTime,
}

impl Game {
    pub fn new(id: u32, session_id: u32, entries: Vec<GameScore>, recorded_at: NaiveDateTime) -> Self {
        Game {
            id,
            session_id,
            entries,
            recorded_at,
        }
    }

    pub fn involves(&self, team_id: u32) -> bool {
        self.entries.iter().any(|entry| entry.team_id == team_id)
    }
}

impl PartialEq for Game {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
