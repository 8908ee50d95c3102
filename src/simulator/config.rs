//! Simulation configuration.

/// Configuration for a batch simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of games to play
    pub num_games: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_games: 1000,
            seed: None,
        }
    }
}
