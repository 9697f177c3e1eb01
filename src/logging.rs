//! Diagnostic logging to stderr

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Logs go to stderr so they never mix with
/// command output printed on stdout.
pub fn init(filter: &str, ansi: bool) -> Result<()> {
    let filter = EnvFilter::try_new(filter)
        .with_context(|| format!("Invalid log filter: {filter}"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(ansi)
        .try_init()
        .map_err(|err| anyhow!("Failed to install logger: {err}"))
}
