use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::Store;
use crate::error::Result;
use crate::types::*;

const MATCHUPS_FILE: &str = "matchups.json";
const TOURNAMENTS_FILE: &str = "tournaments.json";

/// Keeps each collection as a JSON array in its own file under a data directory.
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Result<Self> {
        let data_dir = data_dir.as_ref().to_path_buf();
        fs::create_dir_all(&data_dir)?;
        Ok(Self { data_dir })
    }

    #[must_use]
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    #[must_use]
    pub fn matchups_path(&self) -> PathBuf {
        self.data_dir.join(MATCHUPS_FILE)
    }

    #[must_use]
    pub fn tournaments_path(&self) -> PathBuf {
        self.data_dir.join(TOURNAMENTS_FILE)
    }
}

/// Where an unreadable collection file is moved aside, e.g. `matchups.json.corrupt`.
fn corrupt_path(path: &Path) -> PathBuf {
    path.with_extension("json.corrupt")
}

/// Reads a collection file. A missing file is an empty collection, and so is
/// one that no longer parses; the latter is logged and moved aside so a later
/// save cannot overwrite it.
fn read_collection<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e.into()),
    };

    if content.trim().is_empty() {
        return Ok(Vec::new());
    }

    match serde_json::from_str(&content) {
        Ok(items) => Ok(items),
        Err(e) => {
            let backup = corrupt_path(path);
            tracing::warn!(
                "Failed to parse stored data in {}, treating it as empty: {e}",
                path.display()
            );
            match fs::rename(path, &backup) {
                Ok(()) => tracing::warn!("Moved unreadable data to {}", backup.display()),
                Err(e) => tracing::warn!(
                    "Failed to move {} aside to {}: {e}",
                    path.display(),
                    backup.display()
                ),
            }
            Ok(Vec::new())
        }
    }
}

/// Replaces a collection file wholesale through a sibling temp file.
fn write_collection<T: Serialize>(path: &Path, items: &[T]) -> Result<()> {
    let content = serde_json::to_string_pretty(items)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    tracing::debug!("Saved {} records to {}", items.len(), path.display());
    Ok(())
}

impl Store for JsonStore {
    fn load_matchups(&self) -> Result<Vec<Matchup>> {
        read_collection(&self.matchups_path())
    }

    fn save_matchups(&self, matchups: &[Matchup]) -> Result<()> {
        write_collection(&self.matchups_path(), matchups)
    }

    fn load_tournaments(&self) -> Result<Vec<Tournament>> {
        read_collection(&self.tournaments_path())
    }

    fn save_tournaments(&self, tournaments: &[Tournament]) -> Result<()> {
        write_collection(&self.tournaments_path(), tournaments)
    }
}
