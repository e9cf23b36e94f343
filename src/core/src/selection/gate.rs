use crate::error::DomainError;
use crate::proposition::{Proposition, Team};
use crate::roster::TeamSizer;
use crate::session::GameSession;

/// The one place that knows a session's lifecycle: `NoneSelected` permits
/// rebuilding propositions and editing teams, `Selected` permits neither
/// and is terminal. Every mutation path asks here before touching state,
/// so the rules cannot drift between call sites.
pub struct SelectionGate;

impl SelectionGate {
    /// Propositions may only be regenerated while the session is undecided.
    pub fn ensure_buildable(session: &GameSession) -> Result<(), DomainError> {
        if session.has_selection() {
            return Err(DomainError::AlreadySelected {
                session_id: session.id,
            });
        }

        Ok(())
    }

    /// Team membership may only change while the session is undecided.
    /// Once any proposition is selected, every sibling freezes with it.
    pub fn ensure_editable(
        session: &GameSession,
        proposition: &Proposition,
    ) -> Result<(), DomainError> {
        if proposition.session_id != session.id {
            return Err(DomainError::PropositionNotFound {
                proposition_id: proposition.id,
            });
        }

        if session.has_selection() {
            return Err(DomainError::PropositionLocked {
                proposition_id: proposition.id,
            });
        }

        Ok(())
    }

    /// The full precondition set for the one state transition a session
    /// has. Team sizes are rechecked because edits since the build may
    /// have dragged a team outside the band; moves preserve the total
    /// headcount, so the banding recomputed here is the one the
    /// proposition was built under.
    pub fn authorize(
        session: &GameSession,
        proposition: &Proposition,
        teams: &[Team],
    ) -> Result<(), DomainError> {
        if proposition.session_id != session.id {
            return Err(DomainError::PropositionNotFound {
                proposition_id: proposition.id,
            });
        }

        if session.has_selection() {
            return Err(DomainError::AlreadySelected {
                session_id: session.id,
            });
        }

        let player_count: usize = teams.iter().map(Team::size).sum();
        let banding = TeamSizer::size(player_count)?;

        for team in teams {
            if !banding.fits(team.size()) {
                return Err(DomainError::InvalidComposition {
                    team_id: team.id,
                    size: team.size(),
                    min: banding.min_size,
                    max: banding.max_size,
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::balance::BalanceStrategy;
    use chrono::NaiveDate;

    fn date() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 1)
            .unwrap()
            .and_hms_opt(19, 0, 0)
            .unwrap()
    }

    fn session(id: u32) -> GameSession {
        GameSession::new(id, date(), None, date())
    }

    fn proposition(id: u32, session_id: u32, team_ids: Vec<u32>) -> Proposition {
        Proposition::new(id, session_id, BalanceStrategy::General, team_ids, date())
    }

    fn teams_sized(proposition_id: u32, sizes: &[usize]) -> Vec<Team> {
        let mut next_player = 1u32;

        sizes
            .iter()
            .enumerate()
            .map(|(idx, &size)| {
                let members: Vec<u32> = (next_player..next_player + size as u32).collect();
                next_player += size as u32;
                Team::new(idx as u32 + 1, proposition_id, members)
            })
            .collect()
    }

    #[test]
    fn authorizes_an_even_split() {
        let session = session(1);
        let proposition = proposition(10, 1, vec![1, 2]);
        let teams = teams_sized(10, &[5, 5]);

        assert_eq!(
            SelectionGate::authorize(&session, &proposition, &teams),
            Ok(())
        );
    }

    #[test]
    fn authorizes_an_uneven_split_inside_the_band() {
        // 11 players band to 5..=6
        let session = session(1);
        let proposition = proposition(10, 1, vec![1, 2]);
        let teams = teams_sized(10, &[5, 6]);

        assert_eq!(
            SelectionGate::authorize(&session, &proposition, &teams),
            Ok(())
        );
    }

    #[test]
    fn rejects_a_split_edited_outside_the_band() {
        // still 11 players, but dragged into 4 vs 7
        let session = session(1);
        let proposition = proposition(10, 1, vec![1, 2]);
        let teams = teams_sized(10, &[4, 7]);

        assert_eq!(
            SelectionGate::authorize(&session, &proposition, &teams),
            Err(DomainError::InvalidComposition {
                team_id: 1,
                size: 4,
                min: 5,
                max: 6
            })
        );
    }

    #[test]
    fn rejects_a_second_selection() {
        let mut session = session(1);
        session.selected_proposition_id = Some(10);

        let other = proposition(11, 1, vec![3, 4]);
        let teams = teams_sized(11, &[5, 5]);

        assert_eq!(
            SelectionGate::authorize(&session, &other, &teams),
            Err(DomainError::AlreadySelected { session_id: 1 })
        );
    }

    #[test]
    fn rejects_a_proposition_from_another_session() {
        let session = session(1);
        let foreign = proposition(10, 2, vec![1, 2]);
        let teams = teams_sized(10, &[5, 5]);

        assert_eq!(
            SelectionGate::authorize(&session, &foreign, &teams),
            Err(DomainError::PropositionNotFound { proposition_id: 10 })
        );
    }

    #[test]
    fn decided_sessions_freeze_every_sibling() {
        let mut session = session(1);
        session.selected_proposition_id = Some(10);

        let sibling = proposition(11, 1, vec![3, 4]);

        assert_eq!(
            SelectionGate::ensure_editable(&session, &sibling),
            Err(DomainError::PropositionLocked { proposition_id: 11 })
        );
        assert_eq!(
            SelectionGate::ensure_buildable(&session),
            Err(DomainError::AlreadySelected { session_id: 1 })
        );
    }

    #[test]
    fn undecided_sessions_permit_builds_and_edits() {
        let session = session(1);
        let proposition = proposition(10, 1, vec![1, 2]);

        assert_eq!(SelectionGate::ensure_buildable(&session), Ok(()));
        assert_eq!(
            SelectionGate::ensure_editable(&session, &proposition),
            Ok(())
        );
    }
}
