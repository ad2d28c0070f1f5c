//! Fixed-record quote source
//!
//! Serves the same snapshot on every acquisition after a simulated latency.

use super::QuoteSource;
use super::error::AcquisitionError;
use crate::quote::QuoteSnapshot;
use std::time::Duration;
use tokio::time::sleep;

/// Quote source that always returns a fixed snapshot.
#[derive(Debug, Clone)]
pub struct FixtureQuoteSource {
    snapshot: QuoteSnapshot,
    latency: Duration,
}

impl FixtureQuoteSource {
    pub fn new(snapshot: QuoteSnapshot, latency: Duration) -> Self {
        Self { snapshot, latency }
    }
}

impl Default for FixtureQuoteSource {
    fn default() -> Self {
        Self::new(
            QuoteSnapshot::nvda(),
            crate::consts::dashboard::simulated_latency(),
        )
    }
}

#[async_trait::async_trait]
impl QuoteSource for FixtureQuoteSource {
    fn symbol(&self) -> &str {
        &self.snapshot.symbol
    }

    async fn acquire(&self) -> Result<QuoteSnapshot, AcquisitionError> {
        if !self.latency.is_zero() {
            sleep(self.latency).await;
        }
        Ok(self.snapshot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::Instant;

    #[tokio::test(start_paused = true)]
    // The fixture should only answer once the simulated latency has elapsed.
    async fn test_acquire_waits_for_latency() {
        let source = FixtureQuoteSource::new(QuoteSnapshot::nvda(), Duration::from_secs(1));
        let started = Instant::now();

        let snapshot = source.acquire().await.unwrap();

        assert!(started.elapsed() >= Duration::from_secs(1));
        assert_eq!(snapshot, QuoteSnapshot::nvda());
    }

    #[tokio::test(start_paused = true)]
    async fn test_default_serves_nvda() {
        let source = FixtureQuoteSource::default();
        assert_eq!(source.symbol(), "NVDA");
        let snapshot = source.acquire().await.unwrap();
        assert_eq!(snapshot.price, 875.42);
        assert_eq!(snapshot.average_volume_20d, Some(38_500_000));
    }
}
