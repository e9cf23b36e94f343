use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A scheduled run at the court. The roster handed in at creation is
/// consumed to build propositions and never stored on the session itself;
/// `selected_proposition_id` flips from `None` to `Some` exactly once and
/// never back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameSession {
    pub id: u32,
    pub scheduled_at: NaiveDateTime,
    pub description: Option<String>,
    pub selected_proposition_id: Option<u32>,
    pub created_at: NaiveDateTime,
}

impl GameSession {
    pub fn new(
        id: u32,
        scheduled_at: NaiveDateTime,
        description: Option<String>,
        created_at: NaiveDateTime,
    ) -> Self {
        GameSession {
            id,
            scheduled_at,
            description,
            selected_proposition_id: None,
            created_at,
        }
    }

    pub fn has_selection(&self) -> bool {
        self.selected_proposition_id.is_some()
    }
}

impl PartialEq for GameSession {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}
