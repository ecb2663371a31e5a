//! Interactive console tracker on stdin/stdout.
//! Run with: cargo run --bin tracker
//! Saves to and loads from ./data/TennisTournamentTracker.json.
//! Log verbosity via RUST_LOG (default: warn); logs go to stderr.

use tennis_tournament_tracker::{TennisTournamentTracker, TrackerConfig};

fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut tracker = TennisTournamentTracker::new(TrackerConfig::default(), stdin.lock(), stdout.lock());
    tracker.run()
}
