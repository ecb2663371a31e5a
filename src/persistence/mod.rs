//! Save/load the tournament as JSON: `{ "players": [ { "name", "matchWins", "matchLosses" } ] }`.

mod reader;
mod writer;

pub use reader::JsonReader;
pub use writer::JsonWriter;

use crate::models::{Player, TournamentError};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default save file location.
pub const JSON_FILE: &str = "./data/TennisTournamentTracker.json";

/// On-disk shape when writing (borrows the roster).
#[derive(Serialize)]
struct TournamentFileRef<'a> {
    players: &'a [Player],
}

/// On-disk shape when reading.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct TournamentFile {
    players: Vec<Player>,
}

/// Errors from reading or writing the save file.
#[derive(Debug)]
pub enum PersistenceError {
    /// File missing (read) or could not be opened for writing.
    FileNotFound(PathBuf),
    /// Any other I/O failure.
    Io(std::io::Error),
    /// Content is not valid JSON of the expected shape.
    Parse(serde_json::Error),
    /// Content parsed but breaks a roster invariant (duplicate or blank name).
    Invalid(TournamentError),
}

impl std::fmt::Display for PersistenceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PersistenceError::FileNotFound(path) => write!(f, "File not found: {}", path.display()),
            PersistenceError::Io(e) => write!(f, "I/O error: {}", e),
            PersistenceError::Parse(e) => write!(f, "Failed to parse: {}", e),
            PersistenceError::Invalid(e) => write!(f, "Invalid tournament data: {}", e),
        }
    }
}

impl std::error::Error for PersistenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistenceError::FileNotFound(_) => None,
            PersistenceError::Io(e) => Some(e),
            PersistenceError::Parse(e) => Some(e),
            PersistenceError::Invalid(e) => Some(e),
        }
    }
}

impl From<serde_json::Error> for PersistenceError {
    fn from(e: serde_json::Error) -> Self {
        PersistenceError::Parse(e)
    }
}

impl From<TournamentError> for PersistenceError {
    fn from(e: TournamentError) -> Self {
        PersistenceError::Invalid(e)
    }
}
