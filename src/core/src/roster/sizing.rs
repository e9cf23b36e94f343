use crate::error::DomainError;
use serde::{Deserialize, Serialize};

/// Target players per team. Rosters are cut into as many 5-player teams as
/// possible, with leftovers spread across the band.
pub const MIN_TEAM_SIZE: usize = 5;

/// Two full teams is the smallest session that can run a game.
pub const MIN_ROSTER_SIZE: usize = 2 * MIN_TEAM_SIZE;

/// The size envelope every team in a session must respect. `min_size` and
/// `max_size` differ by at most one, so any split that distributes the
/// roster evenly is valid by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamBanding {
    pub team_count: usize,
    pub min_size: usize,
    pub max_size: usize,
}

impl TeamBanding {
    pub fn fits(&self, team_size: usize) -> bool {
        team_size >= self.min_size && team_size <= self.max_size
    }

    /// The per-team sizes for an evenly distributed roster: the remainder
    /// teams take `max_size`, the rest take `min_size`.
    pub fn team_sizes(&self, player_count: usize) -> Vec<usize> {
        let larger = player_count - self.min_size * self.team_count;
        (0..self.team_count)
            .map(|idx| {
                if idx < larger {
                    self.max_size
                } else {
                    self.min_size
                }
            })
            .collect()
    }
}

pub struct TeamSizer;

impl TeamSizer {
    /// Derives the banding for a roster of `player_count` players.
    ///
    /// Fewer than [`MIN_ROSTER_SIZE`] players cannot form two full teams
    /// and is rejected. Above that, the roster is cut into
    /// `player_count / 5` teams (never fewer than two), and every team
    /// must land within one player of an even split.
    pub fn size(player_count: usize) -> Result<TeamBanding, DomainError> {
        if player_count < MIN_ROSTER_SIZE {
            return Err(DomainError::InvalidRosterSize {
                players: player_count as i64,
            });
        }

        let team_count = usize::max(2, player_count / MIN_TEAM_SIZE);

        Ok(TeamBanding {
            team_count,
            min_size: player_count / team_count,
            max_size: player_count.div_ceil(team_count),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rosters_below_ten_are_rejected() {
        for player_count in [0, 1, 5, 9] {
            assert_eq!(
                TeamSizer::size(player_count),
                Err(DomainError::InvalidRosterSize {
                    players: player_count as i64
                })
            );
        }
    }

    #[test]
    fn ten_players_make_two_teams_of_five() {
        let banding = TeamSizer::size(10).unwrap();

        assert_eq!(banding.team_count, 2);
        assert_eq!(banding.min_size, 5);
        assert_eq!(banding.max_size, 5);
    }

    #[test]
    fn eleven_players_make_two_uneven_teams() {
        let banding = TeamSizer::size(11).unwrap();

        assert_eq!(banding.team_count, 2);
        assert_eq!(banding.min_size, 5);
        assert_eq!(banding.max_size, 6);
    }

    #[test]
    fn twenty_three_players_make_four_teams() {
        let banding = TeamSizer::size(23).unwrap();

        assert_eq!(banding.team_count, 4);
        assert_eq!(banding.min_size, 5);
        assert_eq!(banding.max_size, 6);
        assert_eq!(banding.team_sizes(23), vec![6, 6, 6, 5]);
    }

    #[test]
    fn banding_is_consistent_for_all_realistic_rosters() {
        for player_count in MIN_ROSTER_SIZE..=60 {
            let banding = TeamSizer::size(player_count).unwrap();

            assert!(banding.team_count >= 2);
            assert!(banding.max_size - banding.min_size <= 1);
            assert!(banding.min_size * banding.team_count <= player_count);
            assert!(banding.max_size * banding.team_count >= player_count);

            let sizes = banding.team_sizes(player_count);
            assert_eq!(sizes.len(), banding.team_count);
            assert_eq!(sizes.iter().sum::<usize>(), player_count);
            assert!(sizes.iter().all(|&size| banding.fits(size)));
        }
    }
}
