//! Pig dice session simulator.
//!
//! Plays batches of single-player "roll until you roll a 1" games and
//! accumulates per-face and per-game statistics across the whole session:
//! - Per game: score (sum of the non-1 faces) and roll count
//! - Per session: total rolls, best game score, per-face frequencies
//!
//! The roll loop takes any `impl Rng`, so batch runs can be seeded for
//! reproducible results.

mod config;
mod report;
mod runner;
mod session;

pub use config::SimConfig;
pub use report::{summarize, EmptySessionError, SessionSummary};
pub use runner::{run_simulation, simulate, SimulationError};
pub use session::{Game, Session, DIE_FACES};
