//! Dashboard state management
//!
//! Contains the view state slot and the dashboard that owns it

use crate::consts::dashboard::{MAX_ACTIVITY_LOGS, REFRESH_QUEUE_SIZE};
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::metrics::DerivedMetrics;
use crate::quote::QuoteSnapshot;
use crate::quote_source::QuoteSource;
use crate::scheduler::{self, RefreshConfig, RefreshEvent, RefreshHandle};
use crate::ui::app::UIConfig;

use chrono::{DateTime, Local};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::mpsc;

/// What the dashboard is currently able to show.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// An acquisition is outstanding.
    Loading,
    /// The last acquisition produced no snapshot.
    Failed,
    /// The latest snapshot and the values derived from it.
    Ready {
        snapshot: QuoteSnapshot,
        metrics: DerivedMetrics,
        acquired_at: DateTime<Local>,
    },
}

/// The dashboard view: one state slot fed by one refresh task.
#[derive(Debug)]
pub struct DashboardState {
    /// Symbol shown while loading.
    pub symbol: String,
    /// Refresh timing, shown in the footer.
    pub refresh_config: RefreshConfig,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Whether to enable background colors
    pub with_background_color: bool,
    /// Animation tick counter
    pub tick: usize,

    view: ViewState,
    /// Cleared on deactivation; results arriving afterwards are dropped.
    active: bool,
    refresh: Option<RefreshHandle>,
    refresh_receiver: Option<mpsc::Receiver<RefreshEvent>>,
}

impl DashboardState {
    /// Creates a new, inactive dashboard.
    pub fn new(symbol: String, refresh_config: RefreshConfig, ui_config: UIConfig) -> Self {
        Self {
            symbol,
            refresh_config,
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
            tick: 0,
            view: ViewState::Loading,
            active: false,
            refresh: None,
            refresh_receiver: None,
        }
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Start the refresh cycle. Calling this on an active dashboard does nothing.
    pub fn activate(&mut self, source: Arc<dyn QuoteSource>) {
        if self.active {
            return;
        }
        let (sender, receiver) = mpsc::channel(REFRESH_QUEUE_SIZE);
        self.refresh = Some(scheduler::activate(source, self.refresh_config, sender));
        self.refresh_receiver = Some(receiver);
        self.active = true;
        self.view = ViewState::Loading;
        log::info!(
            "Dashboard activated for {} every {}s",
            self.symbol,
            self.refresh_config.period.as_secs()
        );
    }

    /// Stop the refresh cycle and release the timer.
    ///
    /// The view keeps whatever it last showed; nothing arriving later is applied.
    pub fn deactivate(&mut self) -> Option<Event> {
        if !self.active {
            return None;
        }
        self.active = false;
        self.refresh_receiver = None;
        if let Some(handle) = self.refresh.take() {
            handle.cancel();
        }
        let event = Event::view_with_level(
            "Dashboard deactivated".to_string(),
            EventType::Shutdown,
            LogLevel::Info,
        );
        self.add_to_activity_log(event.clone());
        Some(event)
    }

    /// Deactivate and wait for the refresh task to finish.
    pub async fn shutdown(&mut self) {
        let handle = self.refresh.take();
        self.deactivate();
        if let Some(handle) = handle {
            handle.shutdown().await;
        }
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    pub(super) fn set_view(&mut self, view: ViewState) {
        self.view = view;
    }

    pub(super) fn refresh_receiver_mut(&mut self) -> Option<&mut mpsc::Receiver<RefreshEvent>> {
        self.refresh_receiver.as_mut()
    }

    pub(super) fn mark_refresh_lost(&mut self) {
        self.active = false;
        self.refresh_receiver = None;
        self.refresh = None;
    }
}
