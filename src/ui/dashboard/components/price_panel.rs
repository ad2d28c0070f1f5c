//! Dashboard price panel component
//!
//! Renders price, signed change and session details

use super::super::utils::change_color;
use crate::metrics::DerivedMetrics;
use crate::quote::QuoteSnapshot;

use chrono::{DateTime, Local};
use ratatui::Frame;
use ratatui::prelude::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

pub fn render_price_panel(
    f: &mut Frame,
    area: ratatui::layout::Rect,
    snapshot: &QuoteSnapshot,
    metrics: &DerivedMetrics,
    acquired_at: &DateTime<Local>,
) {
    let change_style = Style::default()
        .fg(change_color(metrics.positive))
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(
            metrics.price_text.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(vec![
            Span::styled(metrics.change_text.clone(), change_style),
            Span::raw(" "),
            Span::styled(format!("({})", metrics.change_percent_text), change_style),
        ]),
        Line::from(""),
    ];

    let details = [
        ("High:", format!("${:.2}", snapshot.high)),
        ("Low:", format!("${:.2}", snapshot.low)),
        ("Volume:", metrics.volume_text.clone()),
        ("Market Cap:", format!("${}", snapshot.market_cap)),
    ];
    for (label, value) in details {
        lines.push(Line::from(vec![
            Span::styled(format!("{:<12}", label), Style::default().fg(Color::Gray)),
            Span::styled(value, Style::default().fg(Color::LightCyan)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Last updated: {}", acquired_at.format("%H:%M:%S")),
        Style::default().fg(Color::DarkGray),
    )));

    let block = Block::default()
        .title(snapshot.symbol.clone())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan))
        .padding(Padding::uniform(1));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}
