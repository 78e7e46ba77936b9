// Island dimensions
pub const GRID_ROWS: usize = 9;
pub const GRID_COLUMNS: usize = 9;

// Simulation constants
pub const WALKS_PER_CELL: u32 = 1000;
pub const MAX_STEPS_PER_WALK: u64 = 1_000_000;

// Report headers
pub const PROBABILITY_HEADER: &str = "Percentage (probability) of getting off Jurassic Island";
pub const MEAN_PATH_HEADER: &str = "Mean path length when escaping";
pub const STD_DEV_HEADER: &str = "Standard deviation of path length when escaping";

// Logging
pub const DEFAULT_LOG_FILTER: &str = "info";
