//! Tournament business logic: roster guard and match results.

mod matches;

pub use matches::{
    enough_players, ensure_enough_players, player_record, record_loss, record_match_result,
    record_win, MIN_PLAYERS_FOR_MATCH,
};
