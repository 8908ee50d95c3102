//! Summary table rendering.

use pigdice::simulator::SessionSummary;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the labeled results table for a completed session.
pub fn draw_summary(frame: &mut Frame, area: Rect, summary: &SessionSummary) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Session Summary");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines: Vec<Line> = summary
        .rows()
        .into_iter()
        .map(|(label, value)| {
            Line::from(vec![
                Span::styled(
                    format!("{:<26}", label),
                    Style::default().fg(Color::Cyan),
                ),
                Span::styled(
                    format!("{:>8}", value),
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
