//! Dashboard utility functions
//!
//! Contains helper functions used across dashboard components

use crate::events::{EventType, Origin};
use ratatui::prelude::Color;

/// Get a ratatui color for an event based on where it came from
pub fn get_origin_color(origin: &Origin) -> Color {
    match origin {
        Origin::Scheduler => Color::Cyan,
        Origin::View => Color::LightBlue,
    }
}

/// Green for gains, red for losses.
pub fn change_color(positive: bool) -> Color {
    if positive { Color::Green } else { Color::Red }
}

/// Status marker shown in front of an activity log line.
pub fn status_icon(event_type: EventType) -> &'static str {
    match event_type {
        EventType::Success => "✅",
        EventType::Error => "❌",
        EventType::Refresh => "🔄",
        EventType::Shutdown => "⏹",
    }
}

/// Format compact timestamp with date and time from full timestamp
pub fn format_compact_timestamp(timestamp: &str) -> String {
    // Extract from "YYYY-MM-DD HH:MM:SS" format
    if let Some((date_part, time_part)) = timestamp.split_once(' ') {
        if let (Some(month_day), Some(hour_min_sec)) = (date_part.get(5..10), time_part.get(0..8)) {
            return format!("{} {}", month_day, hour_min_sec);
        }
    }
    // Fallback to original timestamp if parsing fails
    timestamp.to_string()
}

/// Convert a 0..=1 ratio to a gauge percentage.
pub fn ratio_to_percent(ratio: f64) -> u16 {
    if ratio.is_finite() {
        (ratio.clamp(0.0, 1.0) * 100.0).round() as u16
    } else {
        0
    }
}
