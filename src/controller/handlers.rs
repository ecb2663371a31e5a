//! One handler per menu command. Each takes the application state explicitly.

use super::console::Console;
use super::AppState;
use crate::logic::{ensure_enough_players, player_record, record_loss, record_win};
use crate::models::TournamentError;
use crate::persistence::{JsonReader, JsonWriter};
use log::{info, warn};
use std::io::{self, BufRead, Write};

/// Prompt for a name and add that player.
pub fn add_player<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let name = console.prompt("Please enter the tennis player's name.")?;
    match state.tournament.add_player(name.clone()) {
        Ok(()) => console.say(format!("{} has been successfully added to the tournament!", name))?,
        Err(TournamentError::EmptyName) => console.say("The player name cannot be empty.")?,
        Err(_) => console.say("The player entered is already in the tournament.")?,
    }
    console.print_divider()
}

pub fn view_players<R: BufRead, W: Write>(
    state: &AppState,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    console.print_players(&state.tournament)
}

/// Ask for a winner, then a distinct loser, re-prompting until both are valid.
pub fn record_match<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    if ensure_enough_players(&state.tournament).is_err() {
        console.print_not_enough_players()?;
        return console.print_divider();
    }
    console.print_players(&state.tournament)?;

    let winner = loop {
        let name = console.prompt("Please enter the name of the winning player:")?;
        match record_win(&mut state.tournament, &name) {
            Ok(()) => break name,
            Err(_) => {
                console.print_player_not_in_tournament()?;
                console.print_players(&state.tournament)?;
            }
        }
    };

    loop {
        let name = console.prompt("Please enter the name of the losing player:")?;
        match record_loss(&mut state.tournament, &winner, &name) {
            Ok(()) => break,
            Err(TournamentError::SamePlayer) => {
                console.say("The winner and loser of the match cannot be the same player.")?;
            }
            Err(_) => {
                console.print_player_not_in_tournament()?;
                console.print_players(&state.tournament)?;
            }
        }
    }

    console.say("The winner and loser of the match have been successfully recorded.")?;
    console.print_divider()
}

/// Show one player's win-loss record, retrying until a listed name is entered.
pub fn view_record<R: BufRead, W: Write>(
    state: &AppState,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    loop {
        if ensure_enough_players(&state.tournament).is_err() {
            console.print_not_enough_players()?;
            return console.print_divider();
        }
        console.print_players(&state.tournament)?;
        let name = console.prompt("Please select a player from the list:")?;
        match player_record(&state.tournament, &name) {
            Ok(record) => {
                console.say(format!("{} - W-L: {}-{}", name, record.wins, record.losses))?;
                return console.print_divider();
            }
            Err(_) => console.print_player_not_in_tournament()?,
        }
    }
}

pub fn save<R: BufRead, W: Write>(
    state: &AppState,
    writer: &JsonWriter,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let path = writer.destination().display();
    match writer.write(&state.tournament) {
        Ok(()) => {
            info!("Saved {} player(s) to {}", state.tournament.len(), path);
            console.say(format!("Your Tennis Tournament Tracker has been saved to {}!", path))
        }
        Err(e) => {
            warn!("Save to {} failed: {}", path, e);
            console.say(format!(
                "Saving Tennis Tournament Tracker to {} was UNSUCCESSFUL.",
                path
            ))
        }
    }
}

/// Replace the roster with the saved one; on failure the current roster is kept.
pub fn load<R: BufRead, W: Write>(
    state: &mut AppState,
    reader: &JsonReader,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    let path = reader.source().display();
    match reader.read() {
        Ok(tournament) => {
            info!("Loaded {} player(s) from {}", tournament.len(), path);
            state.tournament = tournament;
            console.say(format!(
                "Your Tennis Tournament Tracker from {} has been successfully loaded!",
                path
            ))
        }
        Err(e) => {
            warn!("Load from {} failed: {}", path, e);
            console.say(format!(
                "Loading Tennis Tournament Tracker from {} was UNSUCCESSFUL.",
                path
            ))
        }
    }
}

pub fn quit<R: BufRead, W: Write>(
    state: &mut AppState,
    console: &mut Console<R, W>,
) -> io::Result<()> {
    console.print_divider()?;
    console.say("Game, set, match!")?;
    console.say("Thank you for using the Tennis Tournament Tracker!")?;
    state.running = false;
    Ok(())
}

pub fn invalid_option<R: BufRead, W: Write>(console: &mut Console<R, W>) -> io::Result<()> {
    console.say("Sorry, please choose a valid option from the menu.")?;
    console.print_divider()
}
