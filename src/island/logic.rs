//! The shipped island layout.

use super::types::{IslandMap, Terrain};
use crate::constants::{GRID_COLUMNS, GRID_ROWS};

use super::types::Terrain::{Beach as B, Danger as D, Land as L, Void as V, Water as W};

/// Jurassic Island, row 0 at the top.
pub const JURASSIC_ISLAND: [[Terrain; GRID_COLUMNS]; GRID_ROWS] = [
    [B, W, W, B, B, W, B, W, W],
    [B, L, L, V, L, L, L, L, B],
    [W, L, L, L, L, D, L, L, B],
    [B, L, L, D, L, L, L, L, W],
    [B, L, D, L, L, L, L, L, W],
    [W, L, L, L, L, L, V, L, B],
    [W, V, L, L, L, L, L, L, W],
    [W, L, L, L, D, L, L, L, W],
    [B, B, W, B, W, B, B, W, B],
];

pub fn jurassic_island() -> IslandMap {
    IslandMap::from_grid(JURASSIC_ISLAND.as_slice())
}
