use crate::storage::Storage;
use flate2::Compression;
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use log::info;
use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SnapshotError {
    #[error("snapshot io failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encoding failed: {0}")]
    Encoding(#[from] serde_json::Error),
}

/// Durability for [`Storage`]: one gzipped JSON file, rewritten whole after
/// every committed mutation. The data set is a few hundred records at most,
/// so rewriting beats the bookkeeping of anything incremental.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SnapshotStore { path: path.into() }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn restore(&self) -> Result<Storage, SnapshotError> {
        let file = File::open(&self.path)?;
        let decoder = GzDecoder::new(BufReader::new(file));
        let storage = serde_json::from_reader(decoder)?;

        info!("snapshot restored from {}", self.path.display());

        Ok(storage)
    }

    /// Writes beside the target and renames over it, so a crash mid-write
    /// leaves the previous snapshot intact.
    pub fn persist(&self, storage: &Storage) -> Result<(), SnapshotError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        serde_json::to_writer(&mut encoder, storage)?;
        let bytes = encoder.finish()?;

        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &self.path)?;

        info!(
            "snapshot persisted to {} ({} bytes)",
            self.path.display(),
            bytes.len()
        );

        Ok(())
    }
}
