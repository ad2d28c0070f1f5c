//! Event System
//!
//! Activity records emitted by the dashboard for its refresh lifecycle

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// Part of the dashboard that produced an event.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Origin {
    /// The background task that drives acquisitions.
    Scheduler,
    /// The dashboard view applying results to its state.
    View,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Shutdown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub origin: Origin,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(origin: Origin, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            origin,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn scheduler_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Origin::Scheduler, msg, event_type, log_level)
    }

    pub fn view_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Origin::View, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} [{}] {}: {}",
            self.event_type, self.timestamp, self.origin, self.msg
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_info_and_success_events_always_display() {
        let info = Event::view_with_level("x".into(), EventType::Refresh, LogLevel::Info);
        let success = Event::view_with_level("y".into(), EventType::Success, LogLevel::Trace);
        assert!(info.should_display());
        assert!(success.should_display());
    }

    #[test]
    fn test_display_includes_origin_and_message() {
        let event = Event::scheduler_with_level(
            "Refresh requested".into(),
            EventType::Refresh,
            LogLevel::Info,
        );
        let text = event.to_string();
        assert!(text.starts_with("Refresh ["));
        assert!(text.ends_with("Scheduler: Refresh requested"));
    }
}
