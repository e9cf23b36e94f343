use crate::balance::contract::OraclePartition;
use crate::balance::strategy::BalanceStrategy;
use crate::player::{Player, PositionGroup};
use crate::roster::TeamBanding;
use log::debug;
use rand::seq::SliceRandom;
use std::cmp::Reverse;

/// Deterministic-enough lineup builder used when no external oracle is
/// configured, or when the oracle keeps answering garbage. Every strategy
/// here distributes the roster evenly, so its partitions always pass
/// validation against the banding they were built for.
pub struct HeuristicBalancer;

impl HeuristicBalancer {
    pub fn partition(
        players: &[Player],
        banding: &TeamBanding,
        strategy: BalanceStrategy,
    ) -> OraclePartition {
        let teams = match strategy {
            BalanceStrategy::SkillBalanced => Self::snake_draft(players, banding),
            BalanceStrategy::PositionFocused => Self::position_spread(players, banding),
            BalanceStrategy::General => Self::shuffled_deal(players, banding),
        };

        debug!(
            "{}: dealt {} players into {} teams",
            strategy,
            players.len(),
            banding.team_count
        );

        OraclePartition { teams }
    }

    /// Serpentine draft over the roster sorted by skill. Teams take turns
    /// picking in 1..k then k..1 order, which keeps summed points close.
    fn snake_draft(players: &[Player], banding: &TeamBanding) -> Vec<Vec<u32>> {
        let mut ordered: Vec<&Player> = players.iter().collect();
        ordered.sort_by_key(|p| (Reverse(p.tier.points()), p.id));

        let team_count = banding.team_count;
        let mut teams: Vec<Vec<u32>> = vec![Vec::new(); team_count];

        for (idx, player) in ordered.iter().enumerate() {
            let round = idx / team_count;
            let offset = idx % team_count;
            let slot = if round % 2 == 0 {
                offset
            } else {
                team_count - 1 - offset
            };

            teams[slot].push(player.id);
        }

        teams
    }

    /// Hands out guards first, then bigs, then wings, always to the open
    /// team with the fewest of that group. Capacities come from the
    /// banding, so the split stays even no matter how lopsided the roster.
    fn position_spread(players: &[Player], banding: &TeamBanding) -> Vec<Vec<u32>> {
        let capacities = banding.team_sizes(players.len());

        let mut ordered: Vec<&Player> = players.iter().collect();
        ordered.sort_by_key(|p| {
            (
                Self::group_rank(Self::primary_group(p)),
                Reverse(p.tier.points()),
                p.id,
            )
        });

        let mut teams: Vec<Vec<u32>> = vec![Vec::new(); banding.team_count];
        let mut group_counts: Vec<[usize; 3]> = vec![[0; 3]; banding.team_count];

        for player in ordered {
            let group = Self::group_rank(Self::primary_group(player));
            let slot = Self::open_team_with_fewest(&teams, &group_counts, &capacities, group);

            teams[slot].push(player.id);
            group_counts[slot][group] += 1;
        }

        teams
    }

    /// Shuffle and deal round-robin. The only promise is an even split.
    fn shuffled_deal(players: &[Player], banding: &TeamBanding) -> Vec<Vec<u32>> {
        let mut ids: Vec<u32> = players.iter().map(|p| p.id).collect();
        ids.shuffle(&mut rand::rng());

        let mut teams: Vec<Vec<u32>> = vec![Vec::new(); banding.team_count];

        for (idx, id) in ids.into_iter().enumerate() {
            teams[idx % banding.team_count].push(id);
        }

        teams
    }

    fn primary_group(player: &Player) -> PositionGroup {
        player
            .positions
            .first()
            .map(|p| p.group())
            .unwrap_or(PositionGroup::Wing)
    }

    fn group_rank(group: PositionGroup) -> usize {
        match group {
            PositionGroup::Guard => 0,
            PositionGroup::Big => 1,
            PositionGroup::Wing => 2,
        }
    }

    fn open_team_with_fewest(
        teams: &[Vec<u32>],
        group_counts: &[[usize; 3]],
        capacities: &[usize],
        group: usize,
    ) -> usize {
        let mut slot = 0;
        let mut best = (usize::MAX, usize::MAX);

        for idx in 0..teams.len() {
            if teams[idx].len() >= capacities[idx] {
                continue;
            }

            let key = (group_counts[idx][group], teams[idx].len());
            if key < best {
                best = key;
                slot = idx;
            }
        }

        slot
    }
}
