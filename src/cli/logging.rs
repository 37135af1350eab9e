//! Diagnostic logging for the CLI using the tracing crate.
//!
//! Events go to stderr so stdout carries only the transcription. The level
//! comes from `RUST_LOG` (default `warn`); `--verbose` forces `debug`.

use tracing_subscriber::EnvFilter;

/// Level used when `RUST_LOG` is unset and `--verbose` is off
const DEFAULT_LEVEL: &str = "warn";

/// Build the level filter for this run
pub fn env_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("debug");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
}

/// Installs the global stderr subscriber.
///
/// # Errors
/// - If a global subscriber is already installed
pub fn init_logging(verbose: bool) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .try_init()?;

    tracing::debug!(verbose, "Logging initialized");
    Ok(())
}
