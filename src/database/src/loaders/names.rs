use serde::Deserialize;

const STATIC_NAMES_JSON: &str = include_str!("../data/names.json");

#[derive(Deserialize)]
pub struct NamePoolEntity {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
}

pub struct NameLoader;

impl NameLoader {
    pub fn load() -> NamePoolEntity {
        serde_json::from_str(STATIC_NAMES_JSON).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_pool_parses_and_is_populated() {
        let pool = NameLoader::load();

        assert!(pool.first_names.len() >= 20);
        assert!(pool.last_names.len() >= 20);
        assert!(pool.first_names.iter().all(|name| !name.trim().is_empty()));
    }
}
