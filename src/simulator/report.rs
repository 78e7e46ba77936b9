//! Simulation results and their text/JSON reports.

use super::runner::CellStats;
use crate::constants::{MEAN_PATH_HEADER, PROBABILITY_HEADER, STD_DEV_HEADER};
use crate::island::Cell;
use serde::Serialize;

/// Per-cell escape statistics, indexed like the island map.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExplorerResult {
    pub walks_per_cell: u32,
    pub cells_simulated: u32,
    pub anomalous_walks: u64,

    /// Escape percentage (0-100)
    pub probability: Vec<Vec<f64>>,
    /// Mean step count of escaping walks
    pub mean_path: Vec<Vec<f64>>,
    /// Population standard deviation of escaping step counts
    pub standard_deviation: Vec<Vec<f64>>,
}

impl ExplorerResult {
    /// All-zero result for a map of the given size.
    pub fn new(rows: usize, columns: usize, walks_per_cell: u32) -> Self {
        Self {
            walks_per_cell,
            cells_simulated: 0,
            anomalous_walks: 0,
            probability: vec![vec![0.0; columns]; rows],
            mean_path: vec![vec![0.0; columns]; rows],
            standard_deviation: vec![vec![0.0; columns]; rows],
        }
    }

    /// Store the statistics of one starting cell. Off-map cells are ignored.
    pub fn record(&mut self, cell: Cell, stats: &CellStats) {
        if cell.row < 0 || cell.col < 0 {
            return;
        }
        let (row, col) = (cell.row as usize, cell.col as usize);
        if row >= self.probability.len() || col >= self.probability[row].len() {
            return;
        }

        self.probability[row][col] = stats.probability();
        self.mean_path[row][col] = stats.mean_path();
        self.standard_deviation[row][col] = stats.standard_deviation();
    }

    /// (probability, mean path, standard deviation) at `row`, `col`, or
    /// `None` outside the grid.
    pub fn at(&self, row: usize, col: usize) -> Option<(f64, f64, f64)> {
        Some((
            *self.probability.get(row)?.get(col)?,
            *self.mean_path.get(row)?.get(col)?,
            *self.standard_deviation.get(row)?.get(col)?,
        ))
    }

    /// Generate a text report of all three grids.
    pub fn to_text(&self) -> String {
        let mut report = String::new();
        report.push_str(&format_grid(PROBABILITY_HEADER, &self.probability));
        report.push_str(&format_grid(MEAN_PATH_HEADER, &self.mean_path));
        report.push_str(&format_grid(STD_DEV_HEADER, &self.standard_deviation));
        report
    }

    /// Generate a JSON report for further analysis.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// A blank line, the header, then one line per row of tab-separated values.
pub fn format_grid(header: &str, grid: &[Vec<f64>]) -> String {
    let mut out = format!("\n{}\n", header);
    for row in grid {
        for value in row {
            out.push_str(&format!("{:<5.2}\t", value));
        }
        out.push('\n');
    }
    out
}
