//! Headless mode execution

use super::{
    SessionData,
    messages::{print_session_exit_success, print_session_shutdown, print_session_starting},
};
use crate::consts::dashboard::UI_POLL_INTERVAL_MS;
use crate::events::EventType;
use crate::ui::UIConfig;
use crate::ui::dashboard::{DashboardState, ViewState};
use std::error::Error;
use std::time::Duration;

/// Runs the dashboard without a terminal UI
///
/// This function handles:
/// 1. Console event logging
/// 2. Ctrl+C shutdown handling
/// 3. Releasing the refresh task on exit
pub async fn run_headless_mode(session: SessionData) -> Result<(), Box<dyn Error>> {
    print_session_starting(
        "headless",
        session.symbol(),
        session.refresh_config.period.as_secs(),
    );

    let mut state = DashboardState::new(
        session.symbol().to_string(),
        session.refresh_config,
        UIConfig::new(false),
    );
    state.activate(session.source.clone());

    let mut poll = tokio::time::interval(Duration::from_millis(UI_POLL_INTERVAL_MS));
    let shutdown = tokio::signal::ctrl_c();
    tokio::pin!(shutdown);

    // Event loop: log events to console until Ctrl+C
    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = poll.tick() => {
                for event in state.update() {
                    if !event.should_display() {
                        continue;
                    }
                    println!("{}", event);
                    if event.event_type == EventType::Success {
                        print_volume_insight(state.view());
                    }
                }
            }
        }
    }

    print_session_shutdown();
    state.shutdown().await;
    print_session_exit_success();

    Ok(())
}

fn print_volume_insight(view: &ViewState) {
    if let ViewState::Ready { metrics, .. } = view {
        if let Some(insight) = metrics.volume_insight() {
            println!("    {}", insight);
        }
    }
}
