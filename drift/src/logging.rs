//! Tracing subscriber setup.

use anyhow::Result;
use tracing_log::LogTracer;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber.
///
/// Filters with `RUST_LOG`, defaulting to `info`. Records from the `log`
/// facade used by the library crates are forwarded into tracing.
pub fn init() -> Result<()> {
    LogTracer::init()?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;
    Ok(())
}
