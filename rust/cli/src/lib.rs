//! # tablestakes CLI Library
//!
//! Command-line front end for the tablestakes poker engine. It hosts any
//! number of named tables, feeds them chat-style commands and prints what the
//! tables say back.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line
//! arguments and executes the appropriate subcommand.
//!
//! ```
//! let mut out = Vec::new();
//! let mut err = Vec::new();
//! let code = tablestakes_cli::run(
//!     ["tablestakes", "eval", "As", "2d", "3h", "4s", "5c"],
//!     &mut out,
//!     &mut err,
//! );
//! assert_eq!(code, 0);
//! assert!(String::from_utf8(out).unwrap().ends_with("five-high straight\n"));
//! ```
//!
//! ## Available Subcommands
//!
//! - `play`: Run a session of table commands from a script or stdin
//! - `eval`: Describe the best hand among 5 to 7 cards
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod lobby;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, TablestakesCli};
use commands::{handle_cfg_command, handle_eval_command, handle_play_command};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "eval", "cfg"];

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for normal output (typically `stdout`)
/// * `err` - Output stream for error messages (typically `stderr`)
///
/// # Returns
///
/// Exit code: [`exit_code::SUCCESS`] or [`exit_code::ERROR`]
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match TablestakesCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Eval { cards } => handle_eval_command(&cards, out),
        Commands::Play {
            seed,
            script,
            history,
        } => match config::load_with_sources() {
            Ok(resolved) => {
                let stdin = std::io::stdin();
                let mut stdin_lock = stdin.lock();
                handle_play_command(
                    &resolved.config,
                    seed,
                    script,
                    history,
                    out,
                    err,
                    &mut stdin_lock,
                )
            }
            Err(e) => Err(e.into()),
        },
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
    use clap::error::ErrorKind;

    // Help and version should print to stdout and exit 0
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            if write!(out, "{}", e).is_err() {
                return exit_code::ERROR;
            }
            exit_code::SUCCESS
        }
        _ => {
            if writeln!(err, "{}", e).is_err()
                || writeln!(err, "Usage: tablestakes <command> [options]\n").is_err()
                || writeln!(err, "Commands:").is_err()
            {
                return exit_code::ERROR;
            }
            for c in COMMANDS {
                if writeln!(err, "  {}", c).is_err() {
                    return exit_code::ERROR;
                }
            }
            let _ = writeln!(err, "\nFor full help, run: tablestakes --help");
            exit_code::ERROR
        }
    }
}
