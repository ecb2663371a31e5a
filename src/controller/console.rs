//! Line-based console I/O and the fixed messages the tracker prints.

use crate::models::Tournament;
use std::fmt::Display;
use std::io::{self, BufRead, Write};

const DIVIDER: &str = "=============================================";

/// Input/output pair the controller talks through (stdin/stdout in the binary).
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Next input line without its terminator. End of input is `UnexpectedEof`.
    /// Bytes that are not UTF-8 become U+FFFD instead of failing the read.
    pub fn read_line(&mut self) -> io::Result<String> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "input closed"));
        }
        if buf.last() == Some(&b'\n') {
            buf.pop();
            if buf.last() == Some(&b'\r') {
                buf.pop();
            }
        }
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }

    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.output, "{}", message)
    }

    /// Print a prompt, flush, then read the answer.
    pub fn prompt(&mut self, message: impl Display) -> io::Result<String> {
        self.say(message)?;
        self.output.flush()?;
        self.read_line()
    }

    pub fn print_divider(&mut self) -> io::Result<()> {
        self.say(DIVIDER)
    }

    pub fn print_welcome(&mut self) -> io::Result<()> {
        self.print_divider()?;
        self.say("Welcome to the Tennis Tournament Tracker!")?;
        self.print_divider()
    }

    pub fn print_menu(&mut self) -> io::Result<()> {
        self.say("Please select from the following options:\n")?;
        self.say("a: Add a new tennis player to the tournament")?;
        self.say("v: View all players in the tournament")?;
        self.say("p: Specify the winner and loser of a match")?;
        self.say("r: View players' win-loss records")?;
        self.say("s: Save Tennis Tournament Tracker to file")?;
        self.say("l: Load Tennis Tournament Tracker from file")?;
        self.say("q: Exit the application")?;
        self.output.flush()
    }

    /// Roster names between dividers, or the "no players" message.
    pub fn print_players(&mut self, tournament: &Tournament) -> io::Result<()> {
        self.print_divider()?;
        if tournament.is_empty() {
            self.say("There are no players in the tournament!")?;
        } else {
            self.say("Here is the list of players in the tournament:")?;
            for p in tournament.players() {
                self.say(p.name())?;
            }
        }
        self.print_divider()
    }

    pub fn print_player_not_in_tournament(&mut self) -> io::Result<()> {
        self.say("Sorry, the player you entered is not in the tournament.")
    }

    pub fn print_not_enough_players(&mut self) -> io::Result<()> {
        self.say("There are not enough players in the tournament for a match to be played.")
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
