//! Pig Dice - Single-Player Dice Simulation Library
//!
//! This module exposes the simulation engine and summary statistics for
//! testing and for the two binaries (interactive screen and batch CLI).

pub mod input;
pub mod simulator;
