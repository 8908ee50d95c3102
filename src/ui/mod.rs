//! Terminal UI for the interactive simulator.
//!
//! Not part of the library as it's tightly coupled to the terminal.

pub mod summary_panel;

use pigdice::input::GameCountInput;
use pigdice::simulator::SessionSummary;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draws the single app screen: title, entry field, controls, and the
/// summary table once a batch has been played.
pub fn draw(frame: &mut Frame, input: &GameCountInput, summary: Option<&SessionSummary>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(3),  // Entry field
            Constraint::Length(1),  // Controls
            Constraint::Length(11), // Summary table
            Constraint::Min(0),     // Filler
        ])
        .split(frame.size());

    let title = Paragraph::new("Pig Dice")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, chunks[0]);

    let entry = Paragraph::new(format!("{}_", input.text()))
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Number of Games"),
        );
    frame.render_widget(entry, chunks[1]);

    let controls = Paragraph::new("[Enter] Play    [Esc] Quit")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    frame.render_widget(controls, chunks[2]);

    if let Some(summary) = summary {
        summary_panel::draw_summary(frame, chunks[3], summary);
    }
}
