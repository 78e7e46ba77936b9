//! Monte Carlo aggregation over every walkable starting cell.
//!
//! Each walkable cell gets the same number of independent walks. Only
//! escapes feed the path-length statistics; failures and walks that hit
//! the step cap still count toward the probability denominator.

use super::config::SimConfig;
use super::report::ExplorerResult;
use super::walk::{random_walk, DirectionSource};
use crate::island::{Cell, IslandMap, WalkOutcome};
use log::{debug, info, warn};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Escape statistics for one starting cell.
#[derive(Debug, Clone, PartialEq)]
pub struct CellStats {
    pub walks: u32,
    /// Step counts of the walks that escaped
    pub escape_steps: Vec<u64>,
    pub anomalous: u32,
}

impl CellStats {
    pub fn escaped(&self) -> usize {
        self.escape_steps.len()
    }

    /// Percentage of walks that escaped.
    pub fn probability(&self) -> f64 {
        if self.walks == 0 {
            return 0.0;
        }
        100.0 * self.escaped() as f64 / self.walks as f64
    }

    /// Mean escape path length, 0.0 when nothing escaped.
    pub fn mean_path(&self) -> f64 {
        if self.escape_steps.is_empty() {
            return 0.0;
        }
        self.escape_steps.iter().sum::<u64>() as f64 / self.escaped() as f64
    }

    pub fn standard_deviation(&self) -> f64 {
        population_std_dev(self.mean_path(), &self.escape_steps)
    }
}

/// Population standard deviation of `values` around `mean` (divisor n).
pub fn population_std_dev(mean: f64, values: &[u64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let total_deviation: f64 = values
        .iter()
        .map(|&v| {
            let d = v as f64 - mean;
            d * d
        })
        .sum();
    (total_deviation / values.len() as f64).sqrt()
}

/// Run the configured number of walks from a single cell.
pub fn explore_cell<S: DirectionSource + ?Sized>(
    map: &IslandMap,
    start: Cell,
    config: &SimConfig,
    source: &mut S,
) -> CellStats {
    let mut stats = CellStats {
        walks: config.walks_per_cell,
        escape_steps: Vec::with_capacity(config.walks_per_cell as usize),
        anomalous: 0,
    };

    for _ in 0..config.walks_per_cell {
        let walk = random_walk(map, start, config.max_steps, source);
        match walk.outcome {
            WalkOutcome::Escaped => stats.escape_steps.push(walk.steps),
            WalkOutcome::Failed => {}
            WalkOutcome::Ongoing => {
                warn!(
                    "Still walking after {} steps, starting cell is {}",
                    config.max_steps, start
                );
                stats.anomalous += 1;
            }
        }
    }

    stats
}

/// Run the full simulation over `map` with an explicit direction source.
pub fn run_simulation<S: DirectionSource + ?Sized>(
    map: &IslandMap,
    config: &SimConfig,
    source: &mut S,
) -> ExplorerResult {
    let mut result = ExplorerResult::new(map.rows(), map.columns(), config.walks_per_cell);

    for start in map.walkable_cells() {
        let stats = explore_cell(map, start, config, source);
        result.cells_simulated += 1;
        result.anomalous_walks += stats.anomalous as u64;

        if config.verbosity >= 2 {
            debug!(
                "Cell {} - {}/{} escaped, {} anomalous",
                start,
                stats.escaped(),
                stats.walks,
                stats.anomalous
            );
        }

        if stats.escaped() > 0 {
            result.record(start, &stats);
        }
    }

    if config.verbosity >= 1 {
        info!(
            "Simulated {} cells x {} walks, {} anomalous walks",
            result.cells_simulated, config.walks_per_cell, result.anomalous_walks
        );
    }

    result
}

/// Run the simulation with a generator built from `config.seed`.
pub fn simulate(map: &IslandMap, config: &SimConfig) -> ExplorerResult {
    let mut rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    run_simulation(map, config, &mut rng)
}
