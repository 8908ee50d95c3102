//! Session summary statistics.
//!
//! Derives the aggregate record from a completed session: extremes,
//! truncated averages, and the most/least common scoring face. Pure reads
//! of the session snapshot; recomputed on demand.

use super::session::Session;
use serde::Serialize;
use std::fmt;

/// Raised when asked to summarize a session with no completed games.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EmptySessionError;

impl fmt::Display for EmptySessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot summarize a session with no completed games")
    }
}

impl std::error::Error for EmptySessionError {}

/// Aggregate statistics for a completed session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSummary {
    /// Best single-game score
    pub high_score: u32,
    /// Rolls across all games, terminating 1s included
    pub total_rolls: u32,
    /// Longest game in rolls
    pub most_rolls_in_game: u32,
    /// Average rolls per game, truncated toward zero
    pub average_rolls: u32,
    /// Average score per game, truncated toward zero
    pub average_score: u32,
    /// Most frequently rolled scoring face (2-6); ties go to the lowest face
    pub most_common_face: u8,
    /// Least frequently rolled scoring face (2-6); ties go to the lowest face
    pub least_common_face: u8,
}

/// Derives the summary statistics from a session snapshot.
pub fn summarize(session: &Session) -> Result<SessionSummary, EmptySessionError> {
    if session.games.is_empty() {
        return Err(EmptySessionError);
    }

    let num_games = session.games.len() as u32;
    let most_rolls_in_game = session.games.iter().map(|g| g.rolls).max().unwrap_or(0);
    let score_sum: u32 = session.games.iter().map(|g| g.score).sum();

    // Only the scoring faces compete for most/least common. Scanning in
    // ascending face order keeps the lowest face on ties.
    let mut most_common_face = 2u8;
    let mut least_common_face = 2u8;
    for face in 3..=6u8 {
        if session.face_count(face) > session.face_count(most_common_face) {
            most_common_face = face;
        }
        if session.face_count(face) < session.face_count(least_common_face) {
            least_common_face = face;
        }
    }

    Ok(SessionSummary {
        high_score: session.high_score,
        total_rolls: session.total_rolls,
        most_rolls_in_game,
        average_rolls: session.total_rolls / num_games,
        average_score: score_sum / num_games,
        most_common_face,
        least_common_face,
    })
}

impl SessionSummary {
    /// Label/value pairs in display order, shared by the terminal table and
    /// the text report.
    pub fn rows(&self) -> Vec<(&'static str, String)> {
        vec![
            ("High Score", self.high_score.to_string()),
            ("Number of Rolls", self.total_rolls.to_string()),
            ("Most Rolls in a Game", self.most_rolls_in_game.to_string()),
            ("Average Number of Rolls", self.average_rolls.to_string()),
            ("Average Score", self.average_score.to_string()),
            ("Most Common Roll", self.most_common_face.to_string()),
            ("Least Common Roll", self.least_common_face.to_string()),
        ]
    }

    /// Generate a text report.
    pub fn to_text(&self) -> String {
        let mut report = String::new();

        report.push_str("═══════════════════════════════════════\n");
        report.push_str("            SESSION SUMMARY\n");
        report.push_str("═══════════════════════════════════════\n\n");

        for (label, value) in self.rows() {
            report.push_str(&format!("  {:<26} {:>8}\n", label, value));
        }

        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}
