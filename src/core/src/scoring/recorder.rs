use crate::error::DomainError;
use crate::proposition::Team;
use crate::scoring::game::{Game, GameScore, MAX_TEAM_POINTS};
use crate::session::GameSession;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Raw score entry as submitted. Points stay signed until validation so a
/// negative submission is reported as an invalid score, not a parse error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ScoreInput {
    pub team_id: u32,
    pub points: i64,
}

/// Validates game results against the session's selected proposition.
/// Nothing here mutates state; callers persist the returned entries inside
/// their own transaction.
pub struct ScoreRecorder;

impl ScoreRecorder {
    /// Validation for a new game. `selection` is the selected proposition's
    /// teams; a session without a selection cannot record anything.
    pub fn record(
        session: &GameSession,
        selection: &[Team],
        scores: &[ScoreInput],
    ) -> Result<Vec<GameScore>, DomainError> {
        if !session.has_selection() {
            return Err(DomainError::NoPropositionSelected {
                session_id: session.id,
            });
        }

        Self::validate(scores, selection)
    }

    /// Validation for correcting an already recorded game. Runs the same
    /// checks as [`record`](Self::record), then pins the team set: a
    /// correction adjusts points for exactly the teams that played.
    pub fn correct(
        game: &Game,
        selection: &[Team],
        scores: &[ScoreInput],
    ) -> Result<Vec<GameScore>, DomainError> {
        let entries = Self::validate(scores, selection)?;

        let updated: HashSet<u32> = entries.iter().map(|entry| entry.team_id).collect();

        for entry in &entries {
            if !game.involves(entry.team_id) {
                return Err(DomainError::TeamNotInGame {
                    team_id: entry.team_id,
                });
            }
        }

        for entry in &game.entries {
            if !updated.contains(&entry.team_id) {
                return Err(DomainError::TeamNotInGame {
                    team_id: entry.team_id,
                });
            }
        }

        Ok(entries)
    }

    fn validate(
        scores: &[ScoreInput],
        selection: &[Team],
    ) -> Result<Vec<GameScore>, DomainError> {
        if scores.len() < 2 {
            return Err(DomainError::InsufficientTeams {
                provided: scores.len(),
            });
        }

        let mut seen: HashSet<u32> = HashSet::with_capacity(scores.len());
        let mut entries = Vec::with_capacity(scores.len());

        for score in scores {
            if !seen.insert(score.team_id) {
                return Err(DomainError::DuplicateScoreEntry {
                    team_id: score.team_id,
                });
            }

            if !selection.iter().any(|team| team.id == score.team_id) {
                return Err(DomainError::TeamNotInSelection {
                    team_id: score.team_id,
                });
            }

            if score.points < 0 || score.points > MAX_TEAM_POINTS as i64 {
                return Err(DomainError::InvalidScore {
                    points: score.points,
                });
            }

            entries.push(GameScore {
                team_id: score.team_id,
                points: score.points as u16,
            });
        }

        Ok(entries)
    }
}
