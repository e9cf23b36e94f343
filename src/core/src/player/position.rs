use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// The five standard basketball positions. Players may carry more than one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CourtPosition {
    #[serde(rename = "PG")]
    PointGuard,
    #[serde(rename = "SG")]
    ShootingGuard,
    #[serde(rename = "SF")]
    SmallForward,
    #[serde(rename = "PF")]
    PowerForward,
    #[serde(rename = "C")]
    Center,
}

impl CourtPosition {
    pub const ALL: [CourtPosition; 5] = [
        CourtPosition::PointGuard,
        CourtPosition::ShootingGuard,
        CourtPosition::SmallForward,
        CourtPosition::PowerForward,
        CourtPosition::Center,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            CourtPosition::PointGuard => "PG",
            CourtPosition::ShootingGuard => "SG",
            CourtPosition::SmallForward => "SF",
            CourtPosition::PowerForward => "PF",
            CourtPosition::Center => "C",
        }
    }

    /// Guards, wings and bigs. Used by the position-focused balancer to
    /// spread ball-handlers and size across teams.
    pub fn group(&self) -> PositionGroup {
        match self {
            CourtPosition::PointGuard | CourtPosition::ShootingGuard => PositionGroup::Guard,
            CourtPosition::SmallForward => PositionGroup::Wing,
            CourtPosition::PowerForward | CourtPosition::Center => PositionGroup::Big,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PositionGroup {
    Guard,
    Wing,
    Big,
}

impl FromStr for CourtPosition {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "PG" => Ok(CourtPosition::PointGuard),
            "SG" => Ok(CourtPosition::ShootingGuard),
            "SF" => Ok(CourtPosition::SmallForward),
            "PF" => Ok(CourtPosition::PowerForward),
            "C" => Ok(CourtPosition::Center),
            _ => Err(format!("'{}' is not a valid court position", s)),
        }
    }
}

impl Display for CourtPosition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}
