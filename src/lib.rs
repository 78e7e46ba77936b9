//! Island Escape - Monte Carlo random-walk simulator.
//!
//! Estimates, for every walkable cell of an island map, how likely an
//! explorer wandering at random is to get off the island and how long
//! that takes.

pub mod constants;
pub mod island;
pub mod simulator;

pub use island::{jurassic_island, Cell, IslandMap, MapError, Terrain, WalkOutcome};
pub use simulator::{ExplorerResult, SimConfig};
