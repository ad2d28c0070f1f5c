//! Session setup and initialization

use crate::config::{Config, ConfigError};
use crate::quote_source::{FixtureQuoteSource, QuoteSource};
use crate::scheduler::RefreshConfig;
use std::sync::Arc;
use std::time::Duration;

/// Values given on the command line; each overrides the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionOverrides {
    pub refresh_secs: Option<u64>,
    pub latency_ms: Option<u64>,
}

/// Session data for both TUI and headless modes
pub struct SessionData {
    /// Source the dashboard refreshes from
    pub source: Arc<dyn QuoteSource>,
    /// Refresh timing
    pub refresh_config: RefreshConfig,
}

impl SessionData {
    pub fn symbol(&self) -> &str {
        self.source.symbol()
    }
}

/// Resolve configuration into a ready-to-run session.
///
/// Precedence is CLI flag, then config file, then built-in default.
///
/// # Errors
/// Returns `ConfigError::InvalidRefreshPeriod` if the resolved period is zero.
pub fn setup_session(
    config: Config,
    overrides: SessionOverrides,
) -> Result<SessionData, ConfigError> {
    let config = Config {
        refresh_secs: overrides.refresh_secs.unwrap_or(config.refresh_secs),
        latency_ms: overrides.latency_ms.unwrap_or(config.latency_ms),
        ..config
    };
    config.validate()?;

    let source = FixtureQuoteSource::new(config.snapshot(), config.latency());
    log::debug!(
        "Session resolved: symbol={}, refresh={}s, latency={}ms",
        source.symbol(),
        config.refresh_secs,
        config.latency_ms
    );

    Ok(SessionData {
        source: Arc::new(source),
        refresh_config: RefreshConfig::new(Duration::from_secs(config.refresh_secs)),
    })
}
