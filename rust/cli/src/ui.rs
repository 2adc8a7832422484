//! UI helper functions for terminal output formatting.

use std::io::Write;

use tablestakes_engine::player::UserId;

use crate::lobby::DEFAULT_TABLE;

pub fn write_error(err: &mut dyn Write, msg: &str) -> std::io::Result<()> {
    writeln!(err, "Error: {}", msg)
}

/// Display a warning message to stderr with "WARNING:" prefix
pub fn display_warning(err: &mut dyn Write, message: &str) -> std::io::Result<()> {
    writeln!(err, "WARNING: {}", message)
}

/// A line meant for one player's eyes only, e.g. their hole cards.
pub fn format_private(user: &UserId, message: &str) -> String {
    format!("(to {}) {}", user, message)
}

/// Narrative line for a table. The default table prints bare lines.
pub fn format_public(table: &str, line: &str) -> String {
    if table == DEFAULT_TABLE {
        line.to_string()
    } else {
        format!("[#{}] {}", table, line)
    }
}
