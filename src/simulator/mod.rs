//! Monte Carlo escape simulator.
//!
//! Starts many random walks from every walkable cell of an island and
//! aggregates, per cell:
//! - Percentage of walks that escape off the map
//! - Mean number of steps of the escaping walks
//! - Population standard deviation of those step counts
//!
//! Walks draw their moves from an explicit [`DirectionSource`], so a seeded
//! generator or a fixed stub gives reproducible results.

mod config;
mod report;
mod runner;
mod walk;

pub use config::SimConfig;
pub use report::{format_grid, ExplorerResult};
pub use runner::{explore_cell, population_std_dev, run_simulation, simulate, CellStats};
pub use walk::{random_walk, Direction, DirectionSource, WalkResult};
