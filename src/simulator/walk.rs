//! Single random walk across the island.

use crate::island::{Cell, IslandMap, WalkOutcome};
use rand::Rng;

/// One of the eight Moore-neighborhood moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    /// All directions, clockwise from north
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// (row, column) offset; row 0 is the top of the map.
    pub fn offset(&self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }
}

/// Supplies the direction of each step.
///
/// Any [`Rng`] is a source that picks uniformly among [`Direction::ALL`].
pub trait DirectionSource {
    fn next_direction(&mut self) -> Direction;
}

impl<R: Rng> DirectionSource for R {
    fn next_direction(&mut self) -> Direction {
        Direction::ALL[self.gen_range(0..Direction::ALL.len())]
    }
}

/// How one walk ended and how many moves it took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WalkResult {
    pub outcome: WalkOutcome,
    pub steps: u64,
}

impl WalkResult {
    /// True when the walk hit the step cap without escaping or failing.
    pub fn is_anomalous(&self) -> bool {
        !self.outcome.is_terminal()
    }
}

/// Walk from `start` until the explorer escapes, fails, or makes `max_steps` moves.
///
/// A walk still on walkable terrain after `max_steps` moves reports
/// [`WalkOutcome::Ongoing`] with `steps == max_steps`.
pub fn random_walk<S: DirectionSource + ?Sized>(
    map: &IslandMap,
    start: Cell,
    max_steps: u64,
    source: &mut S,
) -> WalkResult {
    let mut current = start;
    let mut steps = 0;

    while steps < max_steps {
        let (d_row, d_col) = source.next_direction().offset();
        current = current.offset(d_row, d_col);
        steps += 1;

        let outcome = map.classify(current);
        if outcome.is_terminal() {
            return WalkResult { outcome, steps };
        }
    }

    WalkResult {
        outcome: WalkOutcome::Ongoing,
        steps,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::island::{jurassic_island, Terrain};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    /// Always steps the same way
    struct Always(Direction);

    impl DirectionSource for Always {
        fn next_direction(&mut self) -> Direction {
            self.0
        }
    }

    /// Cycles through a fixed list of directions
    struct Sequence {
        moves: Vec<Direction>,
        next: usize,
    }

    impl DirectionSource for Sequence {
        fn next_direction(&mut self) -> Direction {
            let direction = self.moves[self.next % self.moves.len()];
            self.next += 1;
            direction
        }
    }

    #[test]
    fn test_offsets_cover_moore_neighborhood() {
        let mut offsets: Vec<(i32, i32)> = Direction::ALL.iter().map(|d| d.offset()).collect();
        offsets.sort();
        offsets.dedup();
        assert_eq!(offsets.len(), 8);
        assert!(!offsets.contains(&(0, 0)));
        for (d_row, d_col) in offsets {
            assert!(d_row.abs() <= 1 && d_col.abs() <= 1);
        }
    }

    #[test]
    fn test_constant_direction_is_deterministic() {
        let map = IslandMap::filled(5, 5, Terrain::Land);
        let start = Cell::new(2, 2);

        let first = random_walk(&map, start, 100, &mut Always(Direction::East));
        let second = random_walk(&map, start, 100, &mut Always(Direction::East));

        assert_eq!(first, second);
        assert_eq!(first.outcome, WalkOutcome::Escaped);
        // (2,3), (2,4), then off the map at (2,5)
        assert_eq!(first.steps, 3);
    }

    #[test]
    fn test_walk_fails_on_water() {
        let map = IslandMap::from_rows(&["LLW"]).unwrap();
        let result = random_walk(&map, Cell::new(0, 0), 100, &mut Always(Direction::East));
        assert_eq!(
            result,
            WalkResult {
                outcome: WalkOutcome::Failed,
                steps: 2
            }
        );
    }

    #[test]
    fn test_single_step_escape() {
        let map = jurassic_island();
        let result = random_walk(&map, Cell::new(0, 0), 100, &mut Always(Direction::North));
        assert_eq!(result.outcome, WalkOutcome::Escaped);
        assert_eq!(result.steps, 1);
    }

    #[test]
    fn test_step_cap_reports_anomaly() {
        let map = IslandMap::filled(3, 3, Terrain::Land);
        let mut pacing = Sequence {
            moves: vec![Direction::East, Direction::West],
            next: 0,
        };

        let result = random_walk(&map, Cell::new(1, 1), 50, &mut pacing);

        assert!(result.is_anomalous());
        assert_eq!(result.outcome, WalkOutcome::Ongoing);
        assert_eq!(result.steps, 50);
    }

    #[test]
    fn test_failure_on_last_allowed_step_is_not_anomalous() {
        let map = IslandMap::from_rows(&["LLW"]).unwrap();
        let result = random_walk(&map, Cell::new(0, 0), 2, &mut Always(Direction::East));
        assert_eq!(
            result,
            WalkResult {
                outcome: WalkOutcome::Failed,
                steps: 2
            }
        );
        assert!(!result.is_anomalous());
    }

    #[test]
    fn test_escape_on_last_allowed_step_is_not_anomalous() {
        let map = IslandMap::from_rows(&["LL"]).unwrap();
        let result = random_walk(&map, Cell::new(0, 0), 2, &mut Always(Direction::East));
        assert_eq!(
            result,
            WalkResult {
                outcome: WalkOutcome::Escaped,
                steps: 2
            }
        );
        assert!(!result.is_anomalous());

        // One move short of the edge is anomalous
        let result = random_walk(&map, Cell::new(0, 0), 1, &mut Always(Direction::East));
        assert!(result.is_anomalous());
        assert_eq!(result.steps, 1);
    }

    #[test]
    fn test_zero_step_cap() {
        let map = IslandMap::filled(3, 3, Terrain::Land);
        let result = random_walk(&map, Cell::new(1, 1), 0, &mut Always(Direction::North));
        assert!(result.is_anomalous());
        assert_eq!(result.steps, 0);
    }

    #[test]
    fn test_seeded_walks_reproduce() {
        let map = jurassic_island();
        let start = Cell::new(4, 4);

        let mut rng_a = ChaCha8Rng::seed_from_u64(12345);
        let mut rng_b = ChaCha8Rng::seed_from_u64(12345);

        for _ in 0..100 {
            let a = random_walk(&map, start, 1_000, &mut rng_a);
            let b = random_walk(&map, start, 1_000, &mut rng_b);
            assert_eq!(a, b);
            assert!(a.steps >= 1);
        }
    }

    #[test]
    fn test_rng_directions_are_roughly_uniform() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let mut counts = [0u32; 8];
        for _ in 0..80_000 {
            let direction = rng.next_direction();
            let idx = Direction::ALL.iter().position(|d| *d == direction).unwrap();
            counts[idx] += 1;
        }
        // Expected 10_000 each
        for count in counts {
            assert!((9_000..11_000).contains(&count), "count {}", count);
        }
    }
}
