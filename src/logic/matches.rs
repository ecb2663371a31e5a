//! Match results: roster-size guard, win/loss recording, record lookup.

use crate::models::{PlayerRecord, Tournament, TournamentError};
use log::debug;

/// A match needs a winner and a distinct loser.
pub const MIN_PLAYERS_FOR_MATCH: usize = 2;

/// True if the roster is large enough to record a match or look up a record.
pub fn enough_players(tournament: &Tournament) -> bool {
    tournament.len() >= MIN_PLAYERS_FOR_MATCH
}

/// Same check as [`enough_players`], as a `NotEnoughPlayers` error.
pub fn ensure_enough_players(tournament: &Tournament) -> Result<(), TournamentError> {
    if enough_players(tournament) {
        Ok(())
    } else {
        Err(TournamentError::NotEnoughPlayers {
            required: MIN_PLAYERS_FOR_MATCH,
            actual: tournament.len(),
        })
    }
}

/// Give `winner` one match win.
pub fn record_win(tournament: &mut Tournament, winner: &str) -> Result<(), TournamentError> {
    let player = tournament
        .find_player_mut(winner)
        .ok_or_else(|| TournamentError::PlayerNotFound(winner.to_string()))?;
    player.increase_match_win();
    debug!("{} now {}-{}", winner, player.match_wins(), player.match_losses());
    Ok(())
}

/// Give `loser` one match loss. The same-player check runs before the lookup.
pub fn record_loss(
    tournament: &mut Tournament,
    winner: &str,
    loser: &str,
) -> Result<(), TournamentError> {
    if loser == winner {
        return Err(TournamentError::SamePlayer);
    }
    let player = tournament
        .find_player_mut(loser)
        .ok_or_else(|| TournamentError::PlayerNotFound(loser.to_string()))?;
    player.increase_match_loss();
    debug!("{} now {}-{}", loser, player.match_wins(), player.match_losses());
    Ok(())
}

/// Record a full match in one step, for library callers that already have both names.
/// Nothing is mutated unless both names are valid. The console prompts for winner and
/// loser separately and uses [`record_win`] / [`record_loss`] instead.
pub fn record_match_result(
    tournament: &mut Tournament,
    winner: &str,
    loser: &str,
) -> Result<(), TournamentError> {
    ensure_enough_players(tournament)?;
    if tournament.find_player(winner).is_none() {
        return Err(TournamentError::PlayerNotFound(winner.to_string()));
    }
    if loser == winner {
        return Err(TournamentError::SamePlayer);
    }
    if tournament.find_player(loser).is_none() {
        return Err(TournamentError::PlayerNotFound(loser.to_string()));
    }
    record_win(tournament, winner)?;
    record_loss(tournament, winner, loser)
}

/// Win-loss record for the named player.
pub fn player_record(tournament: &Tournament, name: &str) -> Result<PlayerRecord, TournamentError> {
    tournament
        .find_player(name)
        .map(|p| p.record())
        .ok_or_else(|| TournamentError::PlayerNotFound(name.to_string()))
}
