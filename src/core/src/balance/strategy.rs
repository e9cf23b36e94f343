use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The three lineups every session gets. Each proposition is produced under
/// exactly one strategy, and a session always carries one of each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BalanceStrategy {
    /// Equalize summed skill points across teams.
    SkillBalanced,
    /// Spread guards, wings and bigs so every team can run an offense.
    PositionFocused,
    /// No constraint beyond the size band; mixes rosters up.
    General,
}

impl BalanceStrategy {
    pub const ALL: [BalanceStrategy; 3] = [
        BalanceStrategy::SkillBalanced,
        BalanceStrategy::PositionFocused,
        BalanceStrategy::General,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            BalanceStrategy::SkillBalanced => "skill_balanced",
            BalanceStrategy::PositionFocused => "position_focused",
            BalanceStrategy::General => "general",
        }
    }
}

impl FromStr for BalanceStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "skill_balanced" => Ok(BalanceStrategy::SkillBalanced),
            "position_focused" => Ok(BalanceStrategy::PositionFocused),
            "general" => Ok(BalanceStrategy::General),
            _ => Err(format!("'{}' is not a valid balance strategy", s)),
        }
    }
}

impl Display for BalanceStrategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
