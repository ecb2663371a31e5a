//! Tennis tournament tracker: library with models, match logic, JSON persistence and the console controller.

pub mod controller;
pub mod logic;
pub mod models;
pub mod persistence;

pub use controller::{AppState, Command, Console, TennisTournamentTracker, TrackerConfig};
pub use logic::{
    enough_players, ensure_enough_players, player_record, record_loss, record_match_result,
    record_win, MIN_PLAYERS_FOR_MATCH,
};
pub use models::{Player, PlayerRecord, Tournament, TournamentError};
pub use persistence::{JsonReader, JsonWriter, PersistenceError, JSON_FILE};
