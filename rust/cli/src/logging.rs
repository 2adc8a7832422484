//! Diagnostic logging for the binary.
//!
//! Table narrative goes to stdout; `tracing` events from the engine go to
//! stderr through a fmt subscriber filtered by `RUST_LOG`.

use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_FILTER: &str = "warn,tablestakes_engine=info";

/// Installs the global subscriber. Fails if one is already installed.
pub fn init_logging() -> Result<(), SetGlobalDefaultError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
}
