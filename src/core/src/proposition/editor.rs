use crate::error::DomainError;
use crate::proposition::proposition::Team;
use serde::{Deserialize, Serialize};

/// A single drag-and-drop reassignment within one proposition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerMove {
    pub player_id: u32,
    pub from_team: u32,
    pub to_team: u32,
}

/// Rewrites team membership inside a single proposition. A batch of moves
/// lands whole or not at all, so a rejected move can never leave the teams
/// half-updated. Size bands are deliberately not checked here: an admin may
/// drag a lineup through invalid intermediate shapes, and the band is only
/// enforced again when the session selects.
pub struct PropositionEditor;

impl PropositionEditor {
    /// `teams` must be exactly the owning proposition's teams; a move that
    /// names any other team is a referential error.
    pub fn apply(teams: &mut [Team], moves: &[PlayerMove]) -> Result<(), DomainError> {
        let mut scratch: Vec<Team> = teams.to_vec();

        for player_move in moves {
            Self::apply_one(&mut scratch, player_move)?;
        }

        for (team, updated) in teams.iter_mut().zip(scratch) {
            *team = updated;
        }

        Ok(())
    }

    fn apply_one(teams: &mut [Team], player_move: &PlayerMove) -> Result<(), DomainError> {
        let from_idx = teams
            .iter()
            .position(|team| team.id == player_move.from_team)
            .ok_or(DomainError::TeamNotFound {
                team_id: player_move.from_team,
            })?;

        let to_idx = teams
            .iter()
            .position(|team| team.id == player_move.to_team)
            .ok_or(DomainError::TeamNotFound {
                team_id: player_move.to_team,
            })?;

        let member_idx = teams[from_idx]
            .members
            .iter()
            .position(|id| *id == player_move.player_id)
            .ok_or(DomainError::PlayerNotFound {
                player_id: player_move.player_id,
            })?;

        // dropping a player back onto their own team is a validated no-op
        if from_idx == to_idx {
            return Ok(());
        }

        let player_id = teams[from_idx].members.remove(member_idx);
        teams[to_idx].members.push(player_id);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_teams() -> Vec<Team> {
        vec![
            Team::new(1, 100, vec![1, 2, 3, 4, 5]),
            Team::new(2, 100, vec![6, 7, 8, 9, 10]),
        ]
    }

    fn movement(player_id: u32, from_team: u32, to_team: u32) -> PlayerMove {
        PlayerMove {
            player_id,
            from_team,
            to_team,
        }
    }

    #[test]
    fn single_move_relocates_the_player() {
        let mut teams = two_teams();

        PropositionEditor::apply(&mut teams, &[movement(3, 1, 2)]).unwrap();

        assert!(!teams[0].has_member(3));
        assert!(teams[1].has_member(3));
        assert_eq!(teams[0].size(), 4);
        assert_eq!(teams[1].size(), 6);
    }

    #[test]
    fn moves_may_leave_teams_outside_the_band() {
        // {5,5} -> {3,7} is fine mid-edit; only selection rechecks sizes
        let mut teams = two_teams();

        PropositionEditor::apply(
            &mut teams,
            &[movement(1, 1, 2), movement(2, 1, 2)],
        )
        .unwrap();

        assert_eq!(teams[0].size(), 3);
        assert_eq!(teams[1].size(), 7);
    }

    #[test]
    fn failed_batch_changes_nothing() {
        let mut teams = two_teams();

        let result = PropositionEditor::apply(
            &mut teams,
            &[movement(3, 1, 2), movement(6, 2, 99)],
        );

        assert_eq!(result, Err(DomainError::TeamNotFound { team_id: 99 }));
        assert_eq!(teams[0].members, vec![1, 2, 3, 4, 5]);
        assert_eq!(teams[1].members, vec![6, 7, 8, 9, 10]);
    }

    #[test]
    fn batch_moves_see_earlier_moves() {
        let mut teams = two_teams();

        // the second move only works because the first already landed
        PropositionEditor::apply(
            &mut teams,
            &[movement(3, 1, 2), movement(3, 2, 1)],
        )
        .unwrap();

        assert!(teams[0].has_member(3));
        assert_eq!(teams[0].size(), 5);
        assert_eq!(teams[1].size(), 5);
    }

    #[test]
    fn rejects_player_missing_from_source_team() {
        let mut teams = two_teams();

        let result = PropositionEditor::apply(&mut teams, &[movement(6, 1, 2)]);

        assert_eq!(result, Err(DomainError::PlayerNotFound { player_id: 6 }));
    }

    #[test]
    fn same_team_drop_is_a_noop() {
        let mut teams = two_teams();

        PropositionEditor::apply(&mut teams, &[movement(3, 1, 1)]).unwrap();

        assert_eq!(teams[0].members, vec![1, 2, 3, 4, 5]);
    }
}
