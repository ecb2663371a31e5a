//! Player and PlayerRecord data structures.

use crate::models::tournament::TournamentError;
use serde::{Deserialize, Serialize};

/// Win-loss view of a player (for display).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct PlayerRecord {
    pub wins: u32,
    pub losses: u32,
}

impl PlayerRecord {
    pub fn from_player(p: &Player) -> Self {
        Self {
            wins: p.match_wins,
            losses: p.match_losses,
        }
    }
}

/// A tennis player in the tournament. The name is fixed at creation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Player {
    name: String,
    match_wins: u32,
    match_losses: u32,
}

impl Player {
    /// Create a new player with the given name and a 0-0 record. Blank names are rejected.
    pub fn new(name: impl Into<String>) -> Result<Self, TournamentError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TournamentError::EmptyName);
        }
        Ok(Self {
            name,
            match_wins: 0,
            match_losses: 0,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn match_wins(&self) -> u32 {
        self.match_wins
    }

    pub fn match_losses(&self) -> u32 {
        self.match_losses
    }

    /// Current record as a separate struct.
    pub fn record(&self) -> PlayerRecord {
        PlayerRecord::from_player(self)
    }

    /// Record a match win for this player. Stops at `u32::MAX`.
    pub fn increase_match_win(&mut self) {
        self.match_wins = self.match_wins.saturating_add(1);
    }

    /// Record a match loss for this player. Stops at `u32::MAX`.
    pub fn increase_match_loss(&mut self) {
        self.match_losses = self.match_losses.saturating_add(1);
    }
}
