//! Configuration command handler.
//!
//! Prints every setting with its value and where it came from:
//!
//! ```json
//! {
//!   "buy_in": {
//!     "value": 500,
//!     "source": "default"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if configuration loading fails.
/// Returns `CliError::Io` if writing to output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let resolved = config::load_with_sources()?;
    write_resolved(&resolved, out)
}

fn write_resolved(resolved: &config::ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "buy_in": {
            "value": config.buy_in,
            "source": sources.buy_in,
        },
        "starting_blind": {
            "value": config.starting_blind,
            "source": sources.starting_blind,
        },
        "raise_delay": {
            "value": config.raise_delay,
            "source": sources.raise_delay,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "odd_chip": {
            "value": config.odd_chip,
            "source": sources.odd_chip,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
