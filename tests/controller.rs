//! Integration tests for the interactive tracker: scripted console sessions.

use std::io::Cursor;
use std::path::PathBuf;
use tennis_tournament_tracker::{AppState, TennisTournamentTracker, TrackerConfig};

fn config(data_file: PathBuf) -> TrackerConfig {
    TrackerConfig { data_file }
}

/// Run the tracker on `script` (one input per line) and return the final state and all output.
fn run_session(config: TrackerConfig, script: &[&str]) -> (AppState, String) {
    let mut input = script.join("\n");
    input.push('\n');
    run_raw_session(config, input.into_bytes())
}

/// Like `run_session`, but with raw input bytes.
fn run_raw_session(config: TrackerConfig, input: Vec<u8>) -> (AppState, String) {
    let mut tracker = TennisTournamentTracker::new(config, Cursor::new(input), Vec::new());
    tracker.run().unwrap();
    let state = tracker.state().clone();
    let output = String::from_utf8_lossy(&tracker.into_output()).into_owned();
    (state, output)
}

fn scratch_config() -> (tempfile::TempDir, TrackerConfig) {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path().join("tracker.json"));
    (dir, cfg)
}

fn record(state: &AppState, name: &str) -> (u32, u32) {
    let p = state.tournament.find_player(name).unwrap();
    (p.match_wins(), p.match_losses())
}

#[test]
fn quit_stops_the_loop() {
    let (_dir, cfg) = scratch_config();
    let (state, out) = run_session(cfg, &["q"]);
    assert!(!state.running);
    assert!(out.contains("Welcome to the Tennis Tournament Tracker!"));
    assert!(out.contains("Game, set, match!"));
    assert!(out.contains("Thank you for using the Tennis Tournament Tracker!"));
}

#[test]
fn end_of_input_stops_without_error() {
    let (_dir, cfg) = scratch_config();
    let (state, out) = run_session(cfg, &["a", "Alice"]);
    assert!(!state.running);
    assert_eq!(state.tournament.len(), 1);
    assert!(!out.contains("Game, set, match!"));
}

#[test]
fn invalid_option_reprompts() {
    let (_dir, cfg) = scratch_config();
    let (_, out) = run_session(cfg, &["x", "", "A", "Alice", "q"]);
    assert_eq!(
        out.matches("Sorry, please choose a valid option from the menu.").count(),
        2
    );
    assert!(out.contains("Alice has been successfully added to the tournament!"));
}

#[test]
fn add_and_duplicate_add() {
    let (_dir, cfg) = scratch_config();
    let (state, out) = run_session(cfg, &["a", "Alice", "a", "Alice", "a", "", "q"]);
    assert_eq!(state.tournament.len(), 1);
    assert!(out.contains("The player entered is already in the tournament."));
    assert!(out.contains("The player name cannot be empty."));
}

#[test]
fn view_empty_roster_prints_no_players() {
    let (_dir, cfg) = scratch_config();
    let (_, out) = run_session(cfg, &["v", "q"]);
    assert!(out.contains("There are no players in the tournament!"));
    assert!(!out.contains("Here is the list of players in the tournament:"));
}

#[test]
fn view_lists_players_in_order() {
    let (_dir, cfg) = scratch_config();
    let (_, out) = run_session(cfg, &["a", "Bob", "a", "Alice", "v", "q"]);
    let list = out
        .split("Here is the list of players in the tournament:\n")
        .nth(1)
        .unwrap();
    assert!(list.starts_with("Bob\nAlice\n"));
}

#[test]
fn one_player_is_not_enough() {
    let (_dir, cfg) = scratch_config();
    let (state, out) = run_session(cfg, &["a", "Alice", "p", "r", "q"]);
    assert_eq!(
        out.matches("There are not enough players in the tournament for a match to be played.")
            .count(),
        2
    );
    assert_eq!(record(&state, "Alice"), (0, 0));
}

#[test]
fn same_player_is_rejected_as_loser() {
    let (_dir, cfg) = scratch_config();
    let (state, out) = run_session(
        cfg,
        &["a", "Alice", "a", "Bob", "p", "Alice", "Alice", "Bob", "q"],
    );
    assert!(out.contains("The winner and loser of the match cannot be the same player."));
    assert!(out.contains("The winner and loser of the match have been successfully recorded."));
    assert_eq!(record(&state, "Alice"), (1, 0));
    assert_eq!(record(&state, "Bob"), (0, 1));
}

#[test]
fn unknown_names_are_retried() {
    let (_dir, cfg) = scratch_config();
    let (state, out) = run_session(
        cfg,
        &["a", "Alice", "a", "Bob", "p", "Carol", "Bob", "Dave", "Alice", "q"],
    );
    assert_eq!(
        out.matches("Sorry, the player you entered is not in the tournament.")
            .count(),
        2
    );
    assert_eq!(record(&state, "Bob"), (1, 0));
    assert_eq!(record(&state, "Alice"), (0, 1));
}

#[test]
fn view_record_retries_until_known_name() {
    let (_dir, cfg) = scratch_config();
    let mut script = vec!["a", "Alice", "a", "Bob", "p", "Alice", "Bob", "r"];
    script.extend(std::iter::repeat("Nobody").take(50));
    script.extend(["Alice", "q"]);
    let (_, out) = run_session(cfg, &script);
    assert_eq!(
        out.matches("Please select a player from the list:").count(),
        51
    );
    assert!(out.contains("Alice - W-L: 1-0"));
}

#[test]
fn save_then_load_restores_roster() {
    let (_dir, cfg) = scratch_config();
    let (_, out) = run_session(
        cfg.clone(),
        &["a", "Alice", "a", "Bob", "p", "Alice", "Bob", "s", "q"],
    );
    assert!(out.contains("Your Tennis Tournament Tracker has been saved to"));

    let (state, out) = run_session(cfg, &["a", "Carol", "l", "q"]);
    assert!(out.contains("has been successfully loaded!"));
    assert_eq!(state.tournament.len(), 2);
    assert!(state.tournament.find_player("Carol").is_none());
    assert_eq!(record(&state, "Alice"), (1, 0));
    assert_eq!(record(&state, "Bob"), (0, 1));
}

#[test]
fn failed_load_keeps_current_roster() {
    let (_dir, cfg) = scratch_config();
    let (state, out) = run_session(cfg, &["a", "Alice", "l", "q"]);
    assert!(out.contains("was UNSUCCESSFUL."));
    assert_eq!(state.tournament.len(), 1);
    assert!(state.tournament.find_player("Alice").is_some());
}

#[test]
fn failed_save_reports_unsuccessful() {
    let dir = tempfile::tempdir().unwrap();
    let cfg = config(dir.path().join("missing").join("tracker.json"));
    let (state, out) = run_session(cfg, &["a", "Alice", "s", "q"]);
    assert!(out.contains("Saving Tennis Tournament Tracker to"));
    assert!(out.contains("was UNSUCCESSFUL."));
    assert!(!state.running);
}

#[test]
fn non_utf8_input_does_not_end_the_session() {
    let (_dir, cfg) = scratch_config();
    let (state, out) = run_raw_session(cfg, b"a\nAlice\na\nJos\xe9\nv\nq\n".to_vec());
    assert!(!state.running);
    assert!(out.contains("Game, set, match!"));
    assert_eq!(state.tournament.len(), 2);
    assert!(state.tournament.find_player("Jos\u{FFFD}").is_some());
}

#[test]
fn win_counter_stays_at_max_after_loading_max_value() {
    let (_dir, cfg) = scratch_config();
    std::fs::write(
        &cfg.data_file,
        r#"{ "players": [
            { "name": "A", "matchWins": 4294967295, "matchLosses": 0 },
            { "name": "B", "matchWins": 0, "matchLosses": 4294967295 }
        ] }"#,
    )
    .unwrap();
    let (state, out) = run_session(cfg, &["l", "p", "A", "B", "q"]);
    assert!(out.contains("The winner and loser of the match have been successfully recorded."));
    assert_eq!(record(&state, "A"), (u32::MAX, 0));
    assert_eq!(record(&state, "B"), (0, u32::MAX));
}
