pub mod player;
pub mod position;
pub mod tier;

pub use player::{Player, PlayerCollection};
pub use position::{CourtPosition, PositionGroup};
pub use tier::SkillTier;
