use crate::generators::PlayerGenerator;
use crate::loaders::NameLoader;
use crate::storage::Storage;
use log::info;

/// Builds a demo data set for first runs without a snapshot on disk. Only
/// players are seeded; sessions and everything downstream of them are
/// created through the API.
pub struct SeedGenerator;

impl SeedGenerator {
    pub fn generate(player_count: u32) -> Storage {
        let pool = NameLoader::load();
        let mut storage = Storage::new();

        for _ in 0..player_count {
            // pool collisions are fine for demo data; ids keep rows apart
            storage
                .add_player(
                    PlayerGenerator::name(&pool),
                    PlayerGenerator::tier(),
                    PlayerGenerator::positions(),
                )
                .unwrap();
        }

        info!("seeded {} demo players", player_count);

        storage
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_the_requested_number_of_players() {
        let storage = SeedGenerator::generate(24);

        assert_eq!(storage.players.len(), 24);
        assert!(storage.sessions.is_empty());
        assert!(
            storage
                .players
                .players
                .iter()
                .all(|player| !player.positions.is_empty())
        );
    }
}
