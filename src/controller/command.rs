//! Menu commands.

/// One menu choice, read as a single letter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Command {
    AddPlayer,
    ViewPlayers,
    RecordMatch,
    ViewRecord,
    Save,
    Load,
    Quit,
}

impl Command {
    /// Lowercase the line and match it exactly; no trimming.
    pub fn parse(input: &str) -> Option<Command> {
        match input.to_lowercase().as_str() {
            "a" => Some(Command::AddPlayer),
            "v" => Some(Command::ViewPlayers),
            "p" => Some(Command::RecordMatch),
            "r" => Some(Command::ViewRecord),
            "s" => Some(Command::Save),
            "l" => Some(Command::Load),
            "q" => Some(Command::Quit),
            _ => None,
        }
    }
}
