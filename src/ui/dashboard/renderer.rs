//! Dashboard main renderer

use super::components::{footer, header, logs, price_panel, volume_chart};
use super::state::{DashboardState, ViewState};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render_dashboard(f: &mut Frame, state: &DashboardState) {
    if state.with_background_color {
        f.render_widget(
            Block::default().style(Style::default().bg(Color::Rgb(16, 20, 24))),
            f.area(),
        );
    }

    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Fill(1),
            Constraint::Percentage(30),
            Constraint::Length(2),
        ])
        .margin(1)
        .split(f.area());

    header::render_header(f, main_chunks[0], state);

    match state.view() {
        ViewState::Loading => render_notice(
            f,
            main_chunks[1],
            &format!("Loading {} stock data...", state.symbol),
            Color::LightBlue,
        ),
        ViewState::Failed => render_notice(
            f,
            main_chunks[1],
            "Failed to load stock data",
            Color::Red,
        ),
        ViewState::Ready {
            snapshot,
            metrics,
            acquired_at,
        } => {
            let content_chunks = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
                .split(main_chunks[1]);

            price_panel::render_price_panel(f, content_chunks[0], snapshot, metrics, acquired_at);
            volume_chart::render_volume_chart(f, content_chunks[1], snapshot, metrics);
        }
    }

    logs::render_logs_panel(f, main_chunks[2], state);
    footer::render_footer(f, main_chunks[3], state);
}

/// Centered single-line message for the loading and error states.
fn render_notice(f: &mut Frame, area: Rect, text: &str, color: Color) {
    let block = Block::default()
        .title("QUOTE")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::top(area.height.saturating_sub(3) / 2));

    let notice = Paragraph::new(text.to_string())
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(block);
    f.render_widget(notice, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quote::QuoteSnapshot;
    use crate::quote_source::FixtureQuoteSource;
    use crate::scheduler::RefreshConfig;
    use crate::ui::app::UIConfig;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::sync::Arc;
    use std::time::Duration;

    fn screen_text(state: &DashboardState) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render_dashboard(f, state)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn dashboard() -> DashboardState {
        DashboardState::new(
            "NVDA".to_string(),
            RefreshConfig::default(),
            UIConfig::new(true),
        )
    }

    #[test]
    fn test_renders_loading_state() {
        let text = screen_text(&dashboard());
        assert!(text.contains("Loading NVDA stock data..."));
    }

    #[tokio::test(start_paused = true)]
    async fn test_renders_populated_state() {
        let mut state = dashboard();
        state.activate(Arc::new(FixtureQuoteSource::new(
            QuoteSnapshot::nvda(),
            Duration::from_secs(1),
        )));
        tokio::time::sleep(Duration::from_millis(1500)).await;
        state.update();

        let text = screen_text(&state);
        assert!(text.contains("$875.42"));
        assert!(text.contains("+$12.85"));
        assert!(text.contains("(+1.49%)"));
        assert!(text.contains("45,230,000"));
        assert!(text.contains("45.2M"));
        assert!(text.contains("17.5% above average"));
        assert!(!text.contains("Loading NVDA"));
    }
}
