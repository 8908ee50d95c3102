//! Session accumulation types.
//!
//! A `Session` owns the games played so far plus the running counters the
//! summary statistics are derived from. The runner feeds it one die face at
//! a time; nothing else mutates it.

use serde::Serialize;

/// Number of faces on the die.
pub const DIE_FACES: usize = 6;

/// One playthrough: roll until a 1 appears.
///
/// `score` is the sum of every non-1 face rolled; `rolls` counts every roll
/// including the terminating 1. Immutable once the game is complete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Game {
    pub score: u32,
    pub rolls: u32,
}

/// Result of simulating a batch of games.
///
/// Completed games are kept in play order. The running counters always agree
/// with the game list: `total_rolls` equals the sum of per-game roll counts
/// and the sum of all six face counts, and `face_count(1)` equals the number
/// of completed games since every game ends on exactly one 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Session {
    pub games: Vec<Game>,
    pub total_rolls: u32,
    pub high_score: u32,
    face_counts: [u32; DIE_FACES],
}

impl Session {
    pub fn new() -> Self {
        Self {
            games: Vec::new(),
            total_rolls: 0,
            high_score: 0,
            face_counts: [0; DIE_FACES],
        }
    }

    pub fn with_capacity(num_games: usize) -> Self {
        Self {
            games: Vec::with_capacity(num_games),
            ..Self::new()
        }
    }

    /// How many times `face` (1-6) has been rolled across all games.
    pub fn face_count(&self, face: u8) -> u32 {
        self.face_counts[face as usize - 1]
    }

    /// Applies one die roll to the game in progress.
    ///
    /// A non-1 face adds to the game's score; a 1 completes the game and
    /// folds it into the session totals. Returns true when the game is
    /// complete.
    pub fn record_roll(&mut self, game: &mut Game, face: u8) -> bool {
        debug_assert!(
            (1..=DIE_FACES as u8).contains(&face),
            "die face out of range: {}",
            face
        );

        self.total_rolls += 1;
        game.rolls += 1;
        self.face_counts[face as usize - 1] += 1;

        if face == 1 {
            if game.score > self.high_score {
                self.high_score = game.score;
            }
            self.games.push(*game);
            true
        } else {
            game.score += u32::from(face);
            false
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
