//! Simulation runner.
//!
//! Plays batches of games against an injected random source. Statistics are
//! accumulated in the `Session` as each roll lands, so a finished run needs
//! no second pass over the games.

use super::config::SimConfig;
use super::session::{Game, Session, DIE_FACES};
use log::{debug, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use std::fmt;

/// Rejected simulation requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimulationError {
    /// A batch of zero games was requested.
    InvalidGameCount,
}

impl fmt::Display for SimulationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimulationError::InvalidGameCount => {
                write!(f, "number of games must be at least 1")
            }
        }
    }
}

impl std::error::Error for SimulationError {}

/// Runs the configured simulation and returns the completed session.
///
/// The RNG is seeded from `config.seed` when set, so seeded runs are fully
/// reproducible.
pub fn run_simulation(config: &SimConfig) -> Result<Session, SimulationError> {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    simulate(config.num_games, &mut rng)
}

/// Plays `num_games` independent games and returns the session.
///
/// Each game rolls a fair six-sided die until a 1 appears. Fails with
/// `InvalidGameCount` when `num_games` is zero; callers at the input
/// boundary are expected to coerce invalid counts to 1 before calling.
pub fn simulate(num_games: u32, rng: &mut impl Rng) -> Result<Session, SimulationError> {
    if num_games == 0 {
        return Err(SimulationError::InvalidGameCount);
    }

    let mut session = Session::with_capacity(num_games as usize);

    for game_idx in 0..num_games {
        let game = play_game(&mut session, rng);
        debug!(
            "game {}/{}: score {}, rolls {}",
            game_idx + 1,
            num_games,
            game.score,
            game.rolls
        );
    }

    Ok(session)
}

/// Plays a single game to completion, accumulating into the session.
fn play_game(session: &mut Session, rng: &mut impl Rng) -> Game {
    let mut game = Game::default();

    loop {
        let face = roll_die(rng);
        trace!("rolled {}", face);
        if session.record_roll(&mut game, face) {
            return game;
        }
    }
}

/// One fair die roll.
fn roll_die(rng: &mut impl Rng) -> u8 {
    rng.gen_range(1..=DIE_FACES as u8)
}
