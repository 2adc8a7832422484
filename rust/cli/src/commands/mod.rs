//! Command handler modules for the tablestakes CLI.
//!
//! Each subcommand lives in its own module with a public
//! `handle_COMMAND_command(...) -> Result<(), CliError>` entry point. Output
//! streams are passed in as `&mut dyn Write` so tests can capture them.

mod cfg;
mod eval;
mod play;

pub use cfg::handle_cfg_command;
pub use eval::handle_eval_command;
pub use play::handle_play_command;
