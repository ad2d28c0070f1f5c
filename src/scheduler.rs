//! Refresh scheduler
//!
//! Drives periodic quote acquisition for one dashboard view. Activation spawns
//! a task that acquires immediately and then once per refresh period, reporting
//! each step over a channel. The returned [`RefreshHandle`] owns the task: it is
//! cancelled explicitly via [`RefreshHandle::cancel`] or
//! [`RefreshHandle::shutdown`], and unconditionally when the handle is dropped.
//!
//! Acquisitions never overlap. A tick that comes due while an acquisition is
//! still outstanding is skipped rather than queued, so a slow source stretches
//! the cadence to the next period boundary instead of piling up requests.

use crate::quote::QuoteSnapshot;
use crate::quote_source::QuoteSource;
use crate::quote_source::error::AcquisitionError;
use chrono::{DateTime, Local};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior, interval};
use tokio_util::sync::CancellationToken;

/// Shortest period accepted by the scheduler.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Timing of the refresh cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefreshConfig {
    /// Time between scheduled acquisitions.
    pub period: Duration,
}

impl RefreshConfig {
    pub fn new(period: Duration) -> Self {
        Self { period }
    }
}

impl Default for RefreshConfig {
    fn default() -> Self {
        Self::new(crate::consts::dashboard::refresh_period())
    }
}

/// Progress of one acquisition cycle.
#[derive(Debug, Clone)]
pub enum RefreshEvent {
    /// An acquisition has been requested.
    Started,
    /// The acquisition finished, successfully or not.
    Completed {
        result: Result<QuoteSnapshot, AcquisitionError>,
        acquired_at: DateTime<Local>,
    },
}

/// Owned handle to a running refresh task.
#[derive(Debug)]
pub struct RefreshHandle {
    cancel: CancellationToken,
    task: Option<JoinHandle<()>>,
}

impl RefreshHandle {
    /// Whether the refresh task has not been cancelled yet.
    pub fn is_active(&self) -> bool {
        !self.cancel.is_cancelled()
    }

    /// Stop scheduling and abandon any in-flight acquisition.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    /// Cancel and wait for the refresh task to exit.
    pub async fn shutdown(mut self) {
        self.cancel.cancel();
        if let Some(task) = self.task.take() {
            let _ = task.await;
        }
    }
}

impl Drop for RefreshHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// Start refreshing from `source`, reporting progress on `sender`.
///
/// Must be called from within a Tokio runtime.
pub fn activate(
    source: Arc<dyn QuoteSource>,
    config: RefreshConfig,
    sender: mpsc::Sender<RefreshEvent>,
) -> RefreshHandle {
    let cancel = CancellationToken::new();
    let task = tokio::spawn(refresh_loop(source, config, sender, cancel.clone()));
    RefreshHandle {
        cancel,
        task: Some(task),
    }
}

async fn refresh_loop(
    source: Arc<dyn QuoteSource>,
    config: RefreshConfig,
    sender: mpsc::Sender<RefreshEvent>,
    cancel: CancellationToken,
) {
    // The first tick completes immediately.
    let mut ticker = interval(config.period.max(MIN_PERIOD));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut last_completed: Option<Instant> = None;

    loop {
        let scheduled = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            scheduled = ticker.tick() => scheduled,
        };

        if last_completed.is_some_and(|done| scheduled < done) {
            log::debug!("Skipping refresh tick that came due during the previous acquisition");
            continue;
        }

        if !send_unless_cancelled(&sender, &cancel, RefreshEvent::Started).await {
            break;
        }
        log::debug!("Acquiring {} quote", source.symbol());

        let result = tokio::select! {
            biased;
            _ = cancel.cancelled() => break,
            result = source.acquire() => result,
        };
        last_completed = Some(Instant::now());

        // A completion racing with deactivation is stale; drop it.
        if cancel.is_cancelled() {
            break;
        }
        if let Err(e) = &result {
            log::warn!("Quote acquisition failed: {}", e);
        }

        let event = RefreshEvent::Completed {
            result,
            acquired_at: Local::now(),
        };
        if !send_unless_cancelled(&sender, &cancel, event).await {
            break;
        }
    }

    log::debug!("Refresh task for {} stopped", source.symbol());
}

/// Returns false when the task should stop: cancelled, or nobody is listening.
async fn send_unless_cancelled(
    sender: &mpsc::Sender<RefreshEvent>,
    cancel: &CancellationToken,
    event: RefreshEvent,
) -> bool {
    tokio::select! {
        biased;
        _ = cancel.cancelled() => false,
        sent = sender.send(event) => sent.is_ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote_source::{FixtureQuoteSource, MockQuoteSource};
    use tokio::time::sleep;

    fn fixture(latency_secs: u64) -> Arc<dyn QuoteSource> {
        Arc::new(FixtureQuoteSource::new(
            QuoteSnapshot::nvda(),
            Duration::from_secs(latency_secs),
        ))
    }

    fn every(secs: u64) -> RefreshConfig {
        RefreshConfig::new(Duration::from_secs(secs))
    }

    /// Paused-clock deadlines land on millisecond ticks.
    fn assert_near(elapsed: Duration, expected: Duration) {
        assert!(
            elapsed >= expected && elapsed < expected + Duration::from_millis(5),
            "elapsed {:?}, expected {:?}",
            elapsed,
            expected
        );
    }

    #[tokio::test(start_paused = true)]
    // Activation acquires immediately, then once per period.
    async fn test_acquires_immediately_then_periodically() {
        let (sender, mut receiver) = mpsc::channel(8);
        let start = Instant::now();
        let _handle = activate(fixture(1), every(30), sender);

        assert!(matches!(receiver.recv().await, Some(RefreshEvent::Started)));
        assert_near(start.elapsed(), Duration::ZERO);

        match receiver.recv().await {
            Some(RefreshEvent::Completed { result, .. }) => {
                assert_eq!(result.unwrap(), QuoteSnapshot::nvda());
            }
            other => panic!("expected completion, got {:?}", other),
        }
        assert_near(start.elapsed(), Duration::from_secs(1));

        assert!(matches!(receiver.recv().await, Some(RefreshEvent::Started)));
        assert_near(start.elapsed(), Duration::from_secs(30));
    }

    #[tokio::test(start_paused = true)]
    // Cancelling during the simulated latency must not deliver a completion.
    async fn test_cancel_discards_in_flight_acquisition() {
        let (sender, mut receiver) = mpsc::channel(8);
        let handle = activate(fixture(1), every(30), sender);

        assert!(matches!(receiver.recv().await, Some(RefreshEvent::Started)));
        sleep(Duration::from_millis(500)).await;
        handle.cancel();
        assert!(!handle.is_active());

        sleep(Duration::from_secs(5)).await;
        assert!(receiver.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_releases_the_timer() {
        let (sender, mut receiver) = mpsc::channel(8);
        {
            let _handle = activate(fixture(0), every(30), sender);
            sleep(Duration::from_millis(10)).await;
        }

        let mut events = 0;
        while receiver.recv().await.is_some() {
            events += 1;
        }
        // One Started and one Completed before the drop, nothing after.
        assert_eq!(events, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_waits_for_task_exit() {
        let (sender, mut receiver) = mpsc::channel(8);
        let handle = activate(fixture(1), every(30), sender);
        assert!(matches!(receiver.recv().await, Some(RefreshEvent::Started)));

        handle.shutdown().await;
        assert!(receiver.recv().await.is_none());
    }

    #[tokio::test(start_paused = true)]
    // A source slower than the period must not trigger overlapping acquisitions.
    async fn test_skips_ticks_while_acquisition_outstanding() {
        let (sender, mut receiver) = mpsc::channel(8);
        let start = Instant::now();
        let _handle = activate(fixture(45), every(30), sender);

        assert!(matches!(receiver.recv().await, Some(RefreshEvent::Started)));
        assert!(matches!(
            receiver.recv().await,
            Some(RefreshEvent::Completed { .. })
        ));
        assert_near(start.elapsed(), Duration::from_secs(45));

        // The tick due at 30s was skipped; the next acquisition starts at 60s.
        assert!(matches!(receiver.recv().await, Some(RefreshEvent::Started)));
        assert_near(start.elapsed(), Duration::from_secs(60));
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_acquisition_is_reported() {
        let mut source = MockQuoteSource::new();
        source.expect_symbol().return_const("NVDA".to_string());
        source
            .expect_acquire()
            .returning(|| Err(AcquisitionError::Unavailable("offline".to_string())));

        let (sender, mut receiver) = mpsc::channel(8);
        let _handle = activate(Arc::new(source), every(30), sender);

        assert!(matches!(receiver.recv().await, Some(RefreshEvent::Started)));
        match receiver.recv().await {
            Some(RefreshEvent::Completed { result, .. }) => {
                assert_eq!(
                    result.unwrap_err(),
                    AcquisitionError::Unavailable("offline".to_string())
                );
            }
            other => panic!("expected completion, got {:?}", other),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_stops_when_receiver_dropped() {
        let (sender, receiver) = mpsc::channel(8);
        let handle = activate(fixture(0), every(30), sender);
        drop(receiver);

        // The task notices the closed channel on its first send and exits on its own.
        sleep(Duration::from_millis(10)).await;
        handle.shutdown().await;
    }
}
