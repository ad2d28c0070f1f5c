//! Dashboard state update logic
//!
//! Applies refresh results to the view state slot

use super::state::{DashboardState, ViewState};

use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::metrics::DerivedMetrics;
use crate::scheduler::RefreshEvent;

use tokio::sync::mpsc::error::TryRecvError;

impl DashboardState {
    /// Advance the animation tick and apply every refresh result received so far.
    ///
    /// Returns the activity events produced by this update.
    pub fn update(&mut self) -> Vec<Event> {
        self.tick += 1;

        let mut received = Vec::new();
        let mut lost = false;
        if let Some(receiver) = self.refresh_receiver_mut() {
            loop {
                match receiver.try_recv() {
                    Ok(event) => received.push(event),
                    Err(TryRecvError::Empty) => break,
                    Err(TryRecvError::Disconnected) => {
                        lost = true;
                        break;
                    }
                }
            }
        }

        let mut events: Vec<Event> = received
            .into_iter()
            .filter_map(|event| self.apply(event))
            .collect();

        if lost && self.is_active() {
            log::warn!("Refresh task for {} exited unexpectedly", self.symbol);
            self.mark_refresh_lost();
            let event = Event::view_with_level(
                "Refresh stopped unexpectedly".to_string(),
                EventType::Error,
                LogLevel::Error,
            );
            self.add_to_activity_log(event.clone());
            events.push(event);
        }
        events
    }

    /// Apply one refresh result to the view.
    ///
    /// Results reaching an inactive dashboard are stale and leave the state untouched.
    pub fn apply(&mut self, event: RefreshEvent) -> Option<Event> {
        if !self.is_active() {
            log::debug!("Discarding refresh result for inactive dashboard");
            return None;
        }

        let event = match event {
            RefreshEvent::Started => {
                self.set_view(ViewState::Loading);
                Event::scheduler_with_level(
                    format!("Requesting {} quote...", self.symbol),
                    EventType::Refresh,
                    LogLevel::Debug,
                )
            }
            RefreshEvent::Completed {
                result: Ok(snapshot),
                acquired_at,
            } => {
                let metrics = DerivedMetrics::from_snapshot(&snapshot);
                let msg = format!(
                    "{} {} {} ({})",
                    snapshot.symbol,
                    metrics.price_text,
                    metrics.change_text,
                    metrics.change_percent_text
                );
                self.set_view(ViewState::Ready {
                    snapshot,
                    metrics,
                    acquired_at,
                });
                Event::view_with_level(msg, EventType::Success, LogLevel::Info)
            }
            RefreshEvent::Completed { result: Err(e), .. } => {
                self.set_view(ViewState::Failed);
                Event::view_with_level(
                    format!("Failed to load stock data: {}", e),
                    EventType::Error,
                    LogLevel::Warn,
                )
            }
        };

        self.add_to_activity_log(event.clone());
        Some(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::QuoteSnapshot;
    use crate::quote_source::error::AcquisitionError;
    use crate::quote_source::{FixtureQuoteSource, MockQuoteSource, QuoteSource};
    use crate::scheduler::RefreshConfig;
    use crate::ui::app::UIConfig;
    use chrono::Local;
    use std::sync::Arc;
    use std::time::Duration;
    use tokio::time::sleep;

    fn dashboard() -> DashboardState {
        DashboardState::new(
            "NVDA".to_string(),
            RefreshConfig::new(Duration::from_secs(30)),
            UIConfig::new(false),
        )
    }

    fn fixture() -> Arc<dyn QuoteSource> {
        Arc::new(FixtureQuoteSource::new(
            QuoteSnapshot::nvda(),
            Duration::from_secs(1),
        ))
    }

    #[tokio::test(start_paused = true)]
    // Loading while the first acquisition is outstanding, Ready once it lands.
    async fn test_loading_then_ready() {
        let mut state = dashboard();
        state.activate(fixture());

        sleep(Duration::from_millis(100)).await;
        state.update();
        assert_eq!(state.view(), &ViewState::Loading);

        sleep(Duration::from_secs(1)).await;
        let events = state.update();
        match state.view() {
            ViewState::Ready {
                snapshot, metrics, ..
            } => {
                assert_eq!(snapshot, &QuoteSnapshot::nvda());
                assert_eq!(metrics.change_text, "+$12.85");
            }
            other => panic!("expected Ready, got {:?}", other),
        }
        assert!(events.iter().any(|e| e.event_type == EventType::Success));
    }

    #[tokio::test(start_paused = true)]
    // Each refresh shows Loading again, then replaces the snapshot wholesale.
    async fn test_periodic_refresh_cycles_through_loading() {
        let mut state = dashboard();
        state.activate(fixture());

        sleep(Duration::from_millis(1500)).await;
        state.update();
        assert!(matches!(state.view(), ViewState::Ready { .. }));

        sleep(Duration::from_millis(29_000)).await;
        state.update();
        assert_eq!(state.view(), &ViewState::Loading);

        sleep(Duration::from_millis(1500)).await;
        state.update();
        assert!(matches!(state.view(), ViewState::Ready { .. }));
    }

    #[tokio::test(start_paused = true)]
    // Deactivating before the simulated latency elapses leaves the state untouched.
    async fn test_deactivation_before_completion_keeps_state() {
        let mut state = dashboard();
        state.activate(fixture());

        sleep(Duration::from_millis(500)).await;
        state.update();
        let before = state.view().clone();

        assert!(state.deactivate().is_some());
        assert!(!state.is_active());

        sleep(Duration::from_secs(2)).await;
        let events = state.update();
        assert!(events.is_empty());
        assert_eq!(state.view(), &before);
    }

    #[test]
    fn test_results_for_inactive_dashboard_are_discarded() {
        let mut state = dashboard();
        let stale = RefreshEvent::Completed {
            result: Ok(QuoteSnapshot::nvda()),
            acquired_at: Local::now(),
        };

        assert!(state.apply(stale).is_none());
        assert_eq!(state.view(), &ViewState::Loading);
        assert!(state.activity_logs.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_acquisition_shows_error_state() {
        let mut source = MockQuoteSource::new();
        source.expect_symbol().return_const("NVDA".to_string());
        source
            .expect_acquire()
            .returning(|| Err(AcquisitionError::Malformed("bad price".to_string())));

        let mut state = dashboard();
        state.activate(Arc::new(source));
        sleep(Duration::from_millis(10)).await;
        let events = state.update();

        assert_eq!(state.view(), &ViewState::Failed);
        let error = events
            .iter()
            .find(|e| e.event_type == EventType::Error)
            .expect("error event");
        assert!(error.msg.contains("bad price"));
        assert!(state.is_active());
    }

    #[tokio::test(start_paused = true)]
    async fn test_activate_twice_keeps_single_refresh_task() {
        let mut state = dashboard();
        state.activate(fixture());
        state.activate(fixture());

        sleep(Duration::from_millis(1500)).await;
        let events = state.update();
        let successes = events
            .iter()
            .filter(|e| e.event_type == EventType::Success)
            .count();
        assert_eq!(successes, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_stops_refresh() {
        let mut state = dashboard();
        state.activate(fixture());
        sleep(Duration::from_millis(1500)).await;
        state.update();

        state.shutdown().await;
        assert!(!state.is_active());
        assert!(matches!(state.view(), ViewState::Ready { .. }));
        assert_eq!(
            state.activity_logs.back().map(|e| e.event_type),
            Some(EventType::Shutdown)
        );
    }
}
