//! Reads a tournament from a JSON file.

use super::{PersistenceError, TournamentFile};
use crate::models::Tournament;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Reads a tournament from the file at `source`.
#[derive(Clone, Debug)]
pub struct JsonReader {
    source: PathBuf,
}

impl JsonReader {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Load a brand-new tournament from the source file.
    pub fn read(&self) -> Result<Tournament, PersistenceError> {
        let contents = std::fs::read_to_string(&self.source).map_err(|e| match e.kind() {
            ErrorKind::NotFound => PersistenceError::FileNotFound(self.source.clone()),
            _ => PersistenceError::Io(e),
        })?;
        let file: TournamentFile = serde_json::from_str(&contents)?;
        Ok(Tournament::from_players(file.players)?)
    }
}
