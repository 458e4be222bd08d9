//! Tracing subscriber setup.

use tracing::info;
use tracing_subscriber::util::TryInitError;

use crate::structs::CommonConfig;

/// Install a global `fmt` subscriber filtered by `RUST_LOG`, falling back to
/// `level` when the variable is unset or invalid.
///
/// Returns an error if a global subscriber is already installed.
pub fn init_tracing(level: &str) -> Result<(), TryInitError> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .try_init()
}

/// Install the global subscriber at the configured `[common] log_level`.
pub fn init_tracing_from(config: &CommonConfig) -> Result<(), TryInitError> {
    init_tracing(&config.log_level)?;
    info!(log_level = %config.log_level, "Tracing initialized");
    Ok(())
}
