//! Island data structures and terrain definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Terrain code of a single map cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Terrain {
    Land,
    Beach,
    Water,
    Danger,
    Void,
}

impl Terrain {
    /// All terrain codes in layout order
    pub const ALL: [Terrain; 5] = [
        Terrain::Land,
        Terrain::Beach,
        Terrain::Water,
        Terrain::Danger,
        Terrain::Void,
    ];

    /// Only land and beach can be stepped on.
    pub fn is_walkable(&self) -> bool {
        matches!(self, Terrain::Land | Terrain::Beach)
    }

    /// Character used in text layouts
    pub fn symbol(&self) -> char {
        match self {
            Terrain::Land => 'L',
            Terrain::Beach => 'B',
            Terrain::Water => 'W',
            Terrain::Danger => 'D',
            Terrain::Void => 'V',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.symbol() == symbol)
    }
}

/// A (row, column) position. Signed because walks step off the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Cell shifted by a (row, column) offset
    pub fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self::new(self.row + d_row, self.col + d_col)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// Where a position leaves a walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WalkOutcome {
    /// Left the map bounds
    Escaped,
    /// Stepped onto non-walkable terrain inside the map
    Failed,
    /// Still on walkable terrain
    Ongoing,
}

impl WalkOutcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, WalkOutcome::Ongoing)
    }
}

/// Errors from parsing a text island layout
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MapError {
    #[error("island layout has no rows")]
    Empty,
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("unknown terrain '{symbol}' at ({row},{col})")]
    UnknownTerrain { row: usize, col: usize, symbol: char },
}

/// Immutable rectangle of terrain, stored row-major.
///
/// Serialized as its text layout, one string per row; deserializing goes
/// through [`IslandMap::from_rows`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct IslandMap {
    rows: usize,
    columns: usize,
    cells: Vec<Terrain>,
}

impl IslandMap {
    /// Map of the given size filled with one terrain code.
    pub fn filled(rows: usize, columns: usize, terrain: Terrain) -> Self {
        Self {
            rows,
            columns,
            cells: vec![terrain; rows * columns],
        }
    }

    /// Map from a fixed-size terrain table.
    pub fn from_grid<const C: usize>(grid: &[[Terrain; C]]) -> Self {
        Self {
            rows: grid.len(),
            columns: C,
            cells: grid.iter().flatten().copied().collect(),
        }
    }

    /// Parse a layout of one string per row, one terrain symbol per column.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, MapError> {
        let columns = match rows.first() {
            Some(first) => first.as_ref().chars().count(),
            None => return Err(MapError::Empty),
        };
        if columns == 0 {
            return Err(MapError::Empty);
        }

        let mut cells = Vec::with_capacity(rows.len() * columns);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let found = line.chars().count();
            if found != columns {
                return Err(MapError::RaggedRow {
                    row,
                    expected: columns,
                    found,
                });
            }
            for (col, symbol) in line.chars().enumerate() {
                let terrain = Terrain::from_symbol(symbol)
                    .ok_or(MapError::UnknownTerrain { row, col, symbol })?;
                cells.push(terrain);
            }
        }

        Ok(Self {
            rows: rows.len(),
            columns,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        cell.row >= 0
            && (cell.row as usize) < self.rows
            && cell.col >= 0
            && (cell.col as usize) < self.columns
    }

    /// Terrain at `cell`, or `None` off the map.
    pub fn terrain_at(&self, cell: Cell) -> Option<Terrain> {
        if self.in_bounds(cell) {
            Some(self.cells[cell.row as usize * self.columns + cell.col as usize])
        } else {
            None
        }
    }

    pub fn is_walkable(&self, cell: Cell) -> bool {
        self.terrain_at(cell).is_some_and(|t| t.is_walkable())
    }

    /// Classify the position a walk has just moved to.
    pub fn classify(&self, cell: Cell) -> WalkOutcome {
        match self.terrain_at(cell) {
            None => WalkOutcome::Escaped,
            Some(terrain) if terrain.is_walkable() => WalkOutcome::Ongoing,
            Some(_) => WalkOutcome::Failed,
        }
    }

    /// Every cell of the map in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.columns).map(move |col| Cell::new(row as i32, col as i32)))
    }

    /// Walkable cells in row-major order.
    pub fn walkable_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells().filter(move |&cell| self.is_walkable(cell))
    }
}

impl FromStr for IslandMap {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        Self::from_rows(&rows)
    }
}

impl TryFrom<Vec<String>> for IslandMap {
    type Error = MapError;

    fn try_from(rows: Vec<String>) -> Result<Self, Self::Error> {
        Self::from_rows(rows.as_slice())
    }
}

impl From<IslandMap> for Vec<String> {
    fn from(map: IslandMap) -> Self {
        map.cells
            .chunks(map.columns.max(1))
            .map(|row| row.iter().map(Terrain::symbol).collect())
            .collect()
    }
}

impl fmt::Display for IslandMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.columns.max(1)) {
            let line: String = row.iter().map(Terrain::symbol).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
