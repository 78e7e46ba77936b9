//! Simulation configuration.

use crate::constants::{MAX_STEPS_PER_WALK, WALKS_PER_CELL};

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of walks started from every walkable cell
    pub walks_per_cell: u32,

    /// Moves a single walk may take before it is abandoned as anomalous
    pub max_steps: u64,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per cell).
    /// The logger's own level filter still applies: the summary logs at
    /// `info`, per-cell lines at `debug`.
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            walks_per_cell: WALKS_PER_CELL,
            max_steps: MAX_STEPS_PER_WALK,
            seed: None,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Default run with a fixed seed
    pub fn seeded(seed: u64) -> Self {
        Self {
            seed: Some(seed),
            ..Default::default()
        }
    }

    /// Quiet config with fewer walks, for tests and quick looks
    pub fn quick(walks_per_cell: u32) -> Self {
        Self {
            walks_per_cell,
            verbosity: 0,
            ..Default::default()
        }
    }
}
