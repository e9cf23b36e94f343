use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Ordinal skill rating assigned by the admin. The tier feeds the balancing
/// oracle as integer points; nothing in the lifecycle rules depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum SkillTier {
    S,
    A,
    B,
    C,
    D,
}

impl SkillTier {
    pub const ALL: [SkillTier; 5] = [
        SkillTier::S,
        SkillTier::A,
        SkillTier::B,
        SkillTier::C,
        SkillTier::D,
    ];

    /// S..D mapped onto 5..1.
    pub fn points(&self) -> u8 {
        match self {
            SkillTier::S => 5,
            SkillTier::A => 4,
            SkillTier::B => 3,
            SkillTier::C => 2,
            SkillTier::D => 1,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SkillTier::S => "S",
            SkillTier::A => "A",
            SkillTier::B => "B",
            SkillTier::C => "C",
            SkillTier::D => "D",
        }
    }
}

impl FromStr for SkillTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(SkillTier::S),
            "A" => Ok(SkillTier::A),
            "B" => Ok(SkillTier::B),
            "C" => Ok(SkillTier::C),
            "D" => Ok(SkillTier::D),
            _ => Err(format!("'{}' is not a valid skill tier", s)),
        }
    }
}

impl Display for SkillTier {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
