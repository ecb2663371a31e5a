//! Tournament and TournamentError.

use crate::models::player::Player;
use log::debug;

/// Errors that can occur during tournament operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum TournamentError {
    /// Player names must contain at least one non-whitespace character.
    EmptyName,
    /// A player with this exact name is already in the tournament (names are case-sensitive).
    DuplicatePlayerName(String),
    /// No player with this name is in the tournament.
    PlayerNotFound(String),
    /// Winner and loser of a match were the same name.
    SamePlayer,
    /// Too few players for a match (or a record lookup) to make sense.
    NotEnoughPlayers { required: usize, actual: usize },
}

impl std::fmt::Display for TournamentError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TournamentError::EmptyName => write!(f, "Player name cannot be empty"),
            TournamentError::DuplicatePlayerName(name) => {
                write!(f, "{} is already in the tournament", name)
            }
            TournamentError::PlayerNotFound(name) => write!(f, "{} is not in the tournament", name),
            TournamentError::SamePlayer => {
                write!(f, "The winner and loser of a match cannot be the same player")
            }
            TournamentError::NotEnoughPlayers { required, actual } => write!(
                f,
                "Need at least {} players for a match (have {})",
                required, actual
            ),
        }
    }
}

impl std::error::Error for TournamentError {}

/// The roster: players in insertion order, names unique.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Tournament {
    players: Vec<Player>,
}

impl Tournament {
    /// Create an empty tournament.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a tournament from already-constructed players (e.g. restored from disk).
    /// Fails if two players share a name or a name is blank.
    pub fn from_players(players: Vec<Player>) -> Result<Self, TournamentError> {
        let mut tournament = Self::new();
        for player in players {
            if player.name().trim().is_empty() {
                return Err(TournamentError::EmptyName);
            }
            if tournament.find_player(player.name()).is_some() {
                return Err(TournamentError::DuplicatePlayerName(player.name().to_string()));
            }
            tournament.players.push(player);
        }
        Ok(tournament)
    }

    /// Add a new player with a 0-0 record. The name is stored exactly as given.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<(), TournamentError> {
        let name = name.into();
        if self.find_player(&name).is_some() {
            return Err(TournamentError::DuplicatePlayerName(name));
        }
        let player = Player::new(name)?;
        debug!("Added player {:?} (roster size {})", player.name(), self.players.len() + 1);
        self.players.push(player);
        Ok(())
    }

    /// Player with this exact name, if any.
    pub fn find_player(&self, name: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.name() == name)
    }

    /// Mutable reference to the player with this exact name.
    pub fn find_player_mut(&mut self, name: &str) -> Option<&mut Player> {
        self.players.iter_mut().find(|p| p.name() == name)
    }

    /// All players in insertion order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}
