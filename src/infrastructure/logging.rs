//! Tracing subscriber setup.

use color_eyre::eyre::Result;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use super::config::AppConfig;

/// Initializes the global tracing subscriber.
///
/// The `RUST_LOG` environment variable wins over the configured level.
///
/// # Errors
/// Returns an error if a global subscriber is already installed.
pub fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()?;

    Ok(())
}
