//! Data structures for the tennis tournament: players and the roster.

mod player;
mod tournament;

pub use player::{Player, PlayerRecord};
pub use tournament::{Tournament, TournamentError};
