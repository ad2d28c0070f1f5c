//! Dashboard volume chart component
//!
//! Renders today's volume against the 20-day average as two bars

use super::super::utils::ratio_to_percent;
use crate::metrics::{Direction as Deviation, DerivedMetrics, format_millions, format_volume};
use crate::quote::QuoteSnapshot;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Padding, Paragraph, Wrap};

pub fn render_volume_chart(
    f: &mut Frame,
    area: Rect,
    snapshot: &QuoteSnapshot,
    metrics: &DerivedMetrics,
) {
    let block = Block::default()
        .title("VOLUME ANALYSIS")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::horizontal(1));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (Some(bars), Some(average)) = (metrics.volume_bars, snapshot.average_volume_20d) else {
        let notice = Paragraph::new("No 20-day average available")
            .style(Style::default().fg(Color::DarkGray));
        f.render_widget(notice, inner);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Today bar
            Constraint::Length(3), // Average bar
            Constraint::Fill(1),   // Insight
        ])
        .split(inner);

    let today_gauge = volume_gauge(
        format!("Today: {}", format_volume(snapshot.volume)),
        format_millions(snapshot.volume),
        ratio_to_percent(bars.today),
        Color::LightGreen,
    );
    let average_gauge = volume_gauge(
        format!("20D Avg: {}", format_volume(average)),
        format_millions(average),
        ratio_to_percent(bars.average),
        Color::LightBlue,
    );
    f.render_widget(today_gauge, chunks[0]);
    f.render_widget(average_gauge, chunks[1]);

    if let (Some(text), Some(deviation)) = (metrics.volume_insight(), metrics.deviation) {
        let color = match deviation.direction {
            Deviation::Above => Color::Green,
            Deviation::Below => Color::Red,
        };
        let insight = Paragraph::new(text)
            .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
            .wrap(Wrap { trim: true });
        f.render_widget(insight, chunks[2]);
    }
}

fn volume_gauge(title: String, label: String, percent: u16, color: Color) -> Gauge<'static> {
    Gauge::default()
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(color)),
        )
        .gauge_style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .percent(percent)
        .label(label)
}
