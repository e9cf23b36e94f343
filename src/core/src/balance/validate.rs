use crate::balance::contract::OraclePartition;
use crate::balance::strategy::BalanceStrategy;
use crate::error::DomainError;
use crate::roster::TeamBanding;
use std::collections::HashSet;

/// Checks an oracle answer against the roster it was asked about. The oracle
/// output is untrusted: it may drop players, invent ids, duplicate people or
/// ignore the size band, and all of that must be caught before a partition
/// becomes a proposition.
pub fn validate_partition(
    strategy: BalanceStrategy,
    roster_ids: &[u32],
    banding: &TeamBanding,
    partition: &OraclePartition,
) -> Result<(), DomainError> {
    let reject = |reason: String| DomainError::InvalidOracleResult { strategy, reason };

    if partition.teams.len() != banding.team_count {
        return Err(reject(format!(
            "expected {} teams, got {}",
            banding.team_count,
            partition.teams.len()
        )));
    }

    for (idx, team) in partition.teams.iter().enumerate() {
        if !banding.fits(team.len()) {
            return Err(reject(format!(
                "team {} has {} players, outside {}..={}",
                idx,
                team.len(),
                banding.min_size,
                banding.max_size
            )));
        }
    }

    let roster: HashSet<u32> = roster_ids.iter().copied().collect();
    let mut seen: HashSet<u32> = HashSet::with_capacity(roster.len());

    for team in &partition.teams {
        for &player_id in team {
            if !roster.contains(&player_id) {
                return Err(reject(format!("player {} is not in the roster", player_id)));
            }

            if !seen.insert(player_id) {
                return Err(reject(format!("player {} appears twice", player_id)));
            }
        }
    }

    if seen.len() != roster.len() {
        let mut missing: Vec<u32> = roster.difference(&seen).copied().collect();
        missing.sort_unstable();

        return Err(reject(format!("players {:?} were left out", missing)));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::TeamSizer;

    fn roster(n: u32) -> Vec<u32> {
        (1..=n).collect()
    }

    fn partition(teams: Vec<Vec<u32>>) -> OraclePartition {
        OraclePartition { teams }
    }

    #[test]
    fn accepts_an_exact_split() {
        let banding = TeamSizer::size(10).unwrap();
        let result = validate_partition(
            BalanceStrategy::General,
            &roster(10),
            &banding,
            &partition(vec![vec![1, 3, 5, 7, 9], vec![2, 4, 6, 8, 10]]),
        );

        assert_eq!(result, Ok(()));
    }

    #[test]
    fn rejects_wrong_team_count() {
        let banding = TeamSizer::size(10).unwrap();
        let result = validate_partition(
            BalanceStrategy::General,
            &roster(10),
            &banding,
            &partition(vec![
                vec![1, 2, 3],
                vec![4, 5, 6],
                vec![7, 8, 9, 10],
            ]),
        );

        assert!(matches!(
            result,
            Err(DomainError::InvalidOracleResult { .. })
        ));
    }

    #[test]
    fn rejects_team_outside_the_band() {
        let banding = TeamSizer::size(11).unwrap();
        let result = validate_partition(
            BalanceStrategy::SkillBalanced,
            &roster(11),
            &banding,
            &partition(vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8, 9, 10, 11]]),
        );

        assert!(matches!(
            result,
            Err(DomainError::InvalidOracleResult { .. })
        ));
    }

    #[test]
    fn rejects_invented_player() {
        let banding = TeamSizer::size(10).unwrap();
        let result = validate_partition(
            BalanceStrategy::General,
            &roster(10),
            &banding,
            &partition(vec![vec![1, 2, 3, 4, 99], vec![6, 7, 8, 9, 10]]),
        );

        assert!(matches!(
            result,
            Err(DomainError::InvalidOracleResult { reason, .. }) if reason.contains("99")
        ));
    }

    #[test]
    fn rejects_duplicated_player() {
        let banding = TeamSizer::size(10).unwrap();
        let result = validate_partition(
            BalanceStrategy::General,
            &roster(10),
            &banding,
            &partition(vec![vec![1, 2, 3, 4, 5], vec![5, 6, 7, 8, 9]]),
        );

        assert!(matches!(
            result,
            Err(DomainError::InvalidOracleResult { reason, .. }) if reason.contains("twice")
        ));
    }

    #[test]
    fn rejects_dropped_players_even_when_sizes_fit() {
        // 23 players band into 4 teams of 5..=6, so four teams sized
        // 5,5,5,6 pass the size check while leaving two people out.
        let banding = TeamSizer::size(23).unwrap();
        let result = validate_partition(
            BalanceStrategy::PositionFocused,
            &roster(23),
            &banding,
            &partition(vec![
                (1..=5).collect(),
                (6..=10).collect(),
                (11..=15).collect(),
                (16..=21).collect(),
            ]),
        );

        assert!(matches!(
            result,
            Err(DomainError::InvalidOracleResult { reason, .. })
                if reason.contains("22") && reason.contains("23")
        ));
    }
}
