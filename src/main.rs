use courtside_core::utils::TimeEstimation;
use database::{SeedGenerator, SnapshotStore, Storage};
use env_logger::Env;
use log::{info, warn};
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use web::{AppData, CourtsideServer, OllamaOracle, OracleClient};

#[cfg(target_os = "linux")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() {
    color_eyre::install().unwrap();

    env_logger::Builder::from_env(Env::default()
        .default_filter_or("debug")
    ).init();

    let port = env_or("PORT", 18000u16);
    let seed_players = env_or("SEED_PLAYERS", 24u32);

    let snapshots = SnapshotStore::new(
        env::var("DATA_FILE").unwrap_or_else(|_| String::from("data/courtside.json.gz")),
    );

    let (storage, estimated) = TimeEstimation::estimate(|| load_storage(&snapshots, seed_players));

    info!("storage ready: {} ms", estimated);

    for problem in storage.verify_integrity() {
        warn!("integrity: {}", problem);
    }

    let data = AppData {
        storage: Arc::new(RwLock::new(storage)),
        oracle: Arc::new(oracle_from_env()),
        snapshots: Some(Arc::new(snapshots)),
    };

    CourtsideServer::new(data, port).run().await;
}

fn load_storage(snapshots: &SnapshotStore, seed_players: u32) -> Storage {
    if snapshots.exists() {
        match snapshots.restore() {
            Ok(storage) => return storage,
            Err(e) => warn!("snapshot restore failed, reseeding: {}", e),
        }
    }

    SeedGenerator::generate(seed_players)
}

fn oracle_from_env() -> OracleClient {
    match env::var("ORACLE_MODE").as_deref() {
        Ok("ollama") => {
            let host = env_or("ORACLE_HOST", String::from("http://localhost"));
            let port = env_or("ORACLE_PORT", 11434u16);
            let model = env_or("ORACLE_MODEL", String::from("llama3.1"));
            let timeout = Duration::from_secs(env_or("ORACLE_TIMEOUT_SECS", 30u64));

            info!("oracle: ollama at {}:{}, model {}", host, port, model);

            OracleClient::Ollama(OllamaOracle::new(host, port, model, timeout))
        }
        _ => {
            info!("oracle: built-in heuristics");

            OracleClient::Heuristic
        }
    }
}

fn env_or<T: std::str::FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}
