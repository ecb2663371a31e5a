//! Writes a tournament to a JSON file.

use super::{PersistenceError, TournamentFileRef};
use crate::models::Tournament;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Writes a tournament to the file at `destination`, replacing its contents.
#[derive(Clone, Debug)]
pub struct JsonWriter {
    destination: PathBuf,
}

impl JsonWriter {
    pub fn new(destination: impl Into<PathBuf>) -> Self {
        Self {
            destination: destination.into(),
        }
    }

    pub fn destination(&self) -> &Path {
        &self.destination
    }

    /// Create/truncate the destination and write the whole roster.
    /// The parent directory must already exist.
    pub fn write(&self, tournament: &Tournament) -> Result<(), PersistenceError> {
        let file = File::create(&self.destination)
            .map_err(|_| PersistenceError::FileNotFound(self.destination.clone()))?;
        let mut out = BufWriter::new(file);
        let doc = TournamentFileRef {
            players: tournament.players(),
        };
        serde_json::to_writer_pretty(&mut out, &doc).map_err(|e| {
            if e.is_io() {
                PersistenceError::Io(e.into())
            } else {
                PersistenceError::Parse(e)
            }
        })?;
        out.write_all(b"\n").map_err(PersistenceError::Io)?;
        out.flush().map_err(PersistenceError::Io)
    }
}
