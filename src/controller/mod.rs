//! Interactive menu loop: read a command letter, dispatch to its handler, repeat until quit.

mod command;
mod console;
mod handlers;

pub use command::Command;
pub use console::Console;

use crate::models::Tournament;
use crate::persistence::{JsonReader, JsonWriter, JSON_FILE};
use log::{debug, info, warn};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Tracker settings. The binary always uses the default save file.
#[derive(Clone, Debug)]
pub struct TrackerConfig {
    pub data_file: PathBuf,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(JSON_FILE),
        }
    }
}

/// Everything a command handler may change.
#[derive(Clone, Debug)]
pub struct AppState {
    pub tournament: Tournament,
    /// False once the user quits (or input ends).
    pub running: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            tournament: Tournament::new(),
            running: true,
        }
    }
}

/// The console application: owns the state, the console, and the save-file reader/writer.
#[derive(Debug)]
pub struct TennisTournamentTracker<R, W> {
    state: AppState,
    console: Console<R, W>,
    reader: JsonReader,
    writer: JsonWriter,
}

impl<R: BufRead, W: Write> TennisTournamentTracker<R, W> {
    pub fn new(config: TrackerConfig, input: R, output: W) -> Self {
        Self {
            state: AppState::default(),
            console: Console::new(input, output),
            reader: JsonReader::new(config.data_file.clone()),
            writer: JsonWriter::new(config.data_file),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn into_output(self) -> W {
        self.console.into_output()
    }

    /// Print the welcome banner and run commands until quit. End of input also stops the loop.
    pub fn run(&mut self) -> io::Result<()> {
        info!("Tracker started (save file {})", self.writer.destination().display());
        self.console.print_welcome()?;
        while self.state.running {
            match self.step() {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                    warn!("Input closed; stopping");
                    self.state.running = false;
                }
                Err(e) => return Err(e),
            }
        }
        info!("Tracker stopped");
        Ok(())
    }

    /// One iteration: menu, read a line, dispatch.
    pub fn step(&mut self) -> io::Result<()> {
        self.console.print_menu()?;
        let line = self.console.read_line()?;
        let command = Command::parse(&line);
        debug!("Input {:?} -> {:?}", line, command);
        self.dispatch(command)
    }

    fn dispatch(&mut self, command: Option<Command>) -> io::Result<()> {
        let state = &mut self.state;
        let console = &mut self.console;
        match command {
            Some(Command::AddPlayer) => handlers::add_player(state, console),
            Some(Command::ViewPlayers) => handlers::view_players(state, console),
            Some(Command::RecordMatch) => handlers::record_match(state, console),
            Some(Command::ViewRecord) => handlers::view_record(state, console),
            Some(Command::Save) => handlers::save(state, &self.writer, console),
            Some(Command::Load) => handlers::load(state, &self.reader, console),
            Some(Command::Quit) => handlers::quit(state, console),
            None => handlers::invalid_option(console),
        }
    }
}
