//! # Play Command
//!
//! Runs a session of chat-style table commands, one per line:
//!
//! ```text
//! alice: !newgame
//! bob: !join
//! #late carol: !newgame
//! ```
//!
//! Lines come from `--script` or stdin. Every table's narrative goes to the
//! output stream, hole cards are printed as private lines after a deal, and
//! finished hands are appended to the `--history` file as JSON lines.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

use tablestakes_engine::logger::HandLogger;
use tablestakes_engine::player::UserId;
use tracing::info;

use crate::config::Config;
use crate::error::CliError;
use crate::lobby::{Lobby, DEFAULT_TABLE};
use crate::ui;
use crate::validation::{parse_session_line, parse_table_command, ParseResult};

/// Handle the play command.
///
/// `seed` overrides the configured seed. Malformed lines are reported on
/// `err` and skipped.
///
/// # Errors
///
/// Returns `CliError::Io` when the script cannot be read or the history
/// cannot be written.
pub fn handle_play_command(
    config: &Config,
    seed: Option<u64>,
    script: Option<PathBuf>,
    history: Option<PathBuf>,
    out: &mut dyn Write,
    err: &mut dyn Write,
    stdin: &mut dyn BufRead,
) -> Result<(), CliError> {
    let mut history = history.map(HandLogger::create).transpose()?;
    let mut lobby = Lobby::new(config.game_options(), seed.or(config.seed));

    match script {
        Some(path) => {
            let mut reader = BufReader::new(File::open(path)?);
            run_session(&mut lobby, &mut reader, history.as_mut(), out, err)
        }
        None => run_session(&mut lobby, stdin, history.as_mut(), out, err),
    }
}

fn run_session(
    lobby: &mut Lobby,
    input: &mut dyn BufRead,
    mut history: Option<&mut HandLogger>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let mut hands = 0usize;
    for (i, line) in input.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let Some(session) = parse_session_line(&line) else {
            ui::display_warning(
                err,
                &format!(
                    "line {}: expected '[#table] <user>: <message>', got '{}'",
                    i + 1,
                    line.trim()
                ),
            )?;
            continue;
        };
        let table = session.table.unwrap_or(DEFAULT_TABLE);
        let user = UserId::new(session.user);

        let reply = match parse_table_command(session.message) {
            ParseResult::Chat => continue,
            ParseResult::Invalid(msg) => {
                writeln!(out, "{}", ui::format_public(table, &msg))?;
                continue;
            }
            ParseResult::Command(command) => lobby.handle(table, &user, &command),
        };

        for text in &reply.public {
            writeln!(out, "{}", ui::format_public(table, text))?;
        }
        for (to, text) in &reply.private {
            writeln!(out, "{}", ui::format_private(to, text))?;
        }
        if let Some(record) = &reply.finished_hand {
            hands += 1;
            if let Some(logger) = history.as_deref_mut() {
                logger.write(record)?;
            }
        }
    }
    info!(hands, tables = lobby.table_names().count(), "session finished");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn play(script: &str) -> (String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let mut input = Cursor::new(script.as_bytes());
        handle_play_command(
            &Config::default(),
            Some(42),
            None,
            None,
            &mut out,
            &mut err,
            &mut input,
        )
        .unwrap();
        (
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn chat_is_ignored_and_bad_lines_warned() {
        let (out, err) = play("alice: hello everyone\nthis is not a command\nalice: !newgame\n");
        assert_eq!(
            out,
            "A new game has been started by alice!\nMessage !join to join the game.\n"
        );
        assert!(err.contains("WARNING: line 2"));
    }

    #[test]
    fn parse_errors_are_told_to_the_table() {
        let (out, _) = play("#side bob: !raise many\n");
        assert_eq!(
            out,
            "[#side] Please follow !raise with an integer. 'many' is not an integer.\n"
        );
    }
}
