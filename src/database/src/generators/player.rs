use crate::loaders::NamePoolEntity;
use courtside_core::utils::IntegerUtils;
use courtside_core::{CourtPosition, SkillTier};

pub struct PlayerGenerator;

impl PlayerGenerator {
    pub fn name(pool: &NamePoolEntity) -> String {
        let first = &pool.first_names
            [IntegerUtils::random(0, pool.first_names.len() as i32 - 1) as usize];
        let last = &pool.last_names
            [IntegerUtils::random(0, pool.last_names.len() as i32 - 1) as usize];

        format!("{} {}", first, last)
    }

    /// Most regulars land in the middle tiers; S-tier stays rare.
    pub fn tier() -> SkillTier {
        match IntegerUtils::random(0, 99) {
            0..=7 => SkillTier::S,
            8..=27 => SkillTier::A,
            28..=62 => SkillTier::B,
            63..=87 => SkillTier::C,
            _ => SkillTier::D,
        }
    }

    /// One primary spot, and roughly a third of players cover a second.
    pub fn positions() -> Vec<CourtPosition> {
        let primary = CourtPosition::ALL[IntegerUtils::random(0, 4) as usize];

        if IntegerUtils::random(0, 2) == 0 {
            let secondary = CourtPosition::ALL[IntegerUtils::random(0, 4) as usize];
            if secondary != primary {
                return vec![primary, secondary];
            }
        }

        vec![primary]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loaders::NameLoader;

    #[test]
    fn generated_players_are_always_constructible() {
        let pool = NameLoader::load();

        for _ in 0..200 {
            let name = PlayerGenerator::name(&pool);
            let positions = PlayerGenerator::positions();

            assert!(name.contains(' '));
            assert!(!positions.is_empty() && positions.len() <= 2);
            if positions.len() == 2 {
                assert_ne!(positions[0], positions[1]);
            }
        }
    }
}
