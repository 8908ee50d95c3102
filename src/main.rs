//! Pig Dice - interactive batch simulator.
//!
//! A single-screen terminal app: type the number of games to play, press
//! Enter to run the batch, read the summary table.

mod ui;

use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use pigdice::input::GameCountInput;
use pigdice::simulator::{run_simulation, summarize, SessionSummary, SimConfig};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;

fn main() -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut input = GameCountInput::new();
    let mut summary: Option<SessionSummary> = None;

    // Main loop
    loop {
        terminal.draw(|frame| {
            ui::draw(frame, &input, summary.as_ref());
        })?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key_event) = event::read()? {
                match key_event.code {
                    KeyCode::Esc | KeyCode::Char('q') => break,
                    KeyCode::Enter => {
                        // game_count() never returns 0, so neither the
                        // simulation nor the summary can reject the request.
                        let config = SimConfig {
                            num_games: input.game_count(),
                            seed: None,
                        };
                        summary = run_simulation(&config)
                            .ok()
                            .and_then(|session| summarize(&session).ok());
                    }
                    KeyCode::Backspace => input.backspace(),
                    KeyCode::Char(c) => input.push_char(c),
                    _ => {}
                }
            }
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    Ok(())
}
