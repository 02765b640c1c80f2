//! Unique Paths with Obstacles: lattice-path counting where blocked cells
//! cannot be entered. A blocked start or goal means zero paths.

use crate::exercise::Exercise;
use crate::rng::Lcg32;

/// Row-major obstacle grid; `true` marks a blocked cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObstacleGrid {
    pub rows: usize,
    pub cols: usize,
    blocked: Vec<bool>,
}

impl ObstacleGrid {
    /// Build from row-major cells.
    ///
    /// # Panics
    /// Panics if `blocked.len() != rows * cols` or either dimension is zero.
    pub fn new(rows: usize, cols: usize, blocked: Vec<bool>) -> Self {
        assert!(rows > 0 && cols > 0, "grid must be non-empty");
        assert_eq!(blocked.len(), rows * cols, "cell count mismatch");
        Self {
            rows,
            cols,
            blocked,
        }
    }

    /// Convenience constructor from the 0/1 encoding used in the statements.
    pub fn from_cells(rows: usize, cols: usize, cells: &[u8]) -> Self {
        Self::new(rows, cols, cells.iter().map(|&c| c != 0).collect())
    }

    pub fn is_blocked(&self, r: usize, c: usize) -> bool {
        self.blocked[r * self.cols + c]
    }
}

/// Count right/down paths avoiding blocked cells.
pub fn solve(grid: &ObstacleGrid) -> u64 {
    let (rows, cols) = (grid.rows, grid.cols);
    let mut dp = vec![0u64; rows * cols];
    dp[0] = u64::from(!grid.is_blocked(0, 0));
    for r in 0..rows {
        for c in 0..cols {
            if grid.is_blocked(r, c) {
                dp[r * cols + c] = 0;
                continue;
            }
            if r == 0 && c == 0 {
                continue;
            }
            let top = if r > 0 { dp[(r - 1) * cols + c] } else { 0 };
            let left = if c > 0 { dp[r * cols + c - 1] } else { 0 };
            dp[r * cols + c] = top + left;
        }
    }
    dp[rows * cols - 1]
}

/// Walk every path; path count is tiny at the 6x6 suite bound.
fn count_walks(grid: &ObstacleGrid, r: usize, c: usize) -> u64 {
    if grid.is_blocked(r, c) {
        return 0;
    }
    if r == grid.rows - 1 && c == grid.cols - 1 {
        return 1;
    }
    let mut total = 0;
    if r + 1 < grid.rows {
        total += count_walks(grid, r + 1, c);
    }
    if c + 1 < grid.cols {
        total += count_walks(grid, r, c + 1);
    }
    total
}

pub struct UniquePathsObstacles;

impl Exercise for UniquePathsObstacles {
    type Input = ObstacleGrid;
    type Output = u64;

    fn name(&self) -> &'static str {
        "unique_paths_obstacles"
    }

    fn solve(&self, input: &ObstacleGrid) -> u64 {
        solve(input)
    }

    fn oracle(&self, input: &ObstacleGrid) -> u64 {
        count_walks(input, 0, 0)
    }

    fn deterministic_cases(&self) -> Vec<(ObstacleGrid, u64)> {
        vec![
            (ObstacleGrid::from_cells(3, 3, &[0, 0, 0, 0, 1, 0, 0, 0, 0]), 2),
            (ObstacleGrid::from_cells(2, 2, &[0, 1, 0, 0]), 1),
            (ObstacleGrid::from_cells(1, 1, &[0]), 1),
            (ObstacleGrid::from_cells(1, 1, &[1]), 0),
            (ObstacleGrid::from_cells(2, 2, &[0, 0, 1, 0]), 1),
            (ObstacleGrid::from_cells(2, 2, &[0, 0, 0, 0]), 2),
        ]
    }

    fn random_input(&self, rng: &mut Lcg32) -> ObstacleGrid {
        let rows = rng.int_in(1, 6) as usize;
        let cols = rng.int_in(1, 6) as usize;
        // Roughly one cell in five is an obstacle.
        let blocked = (0..rows * cols).map(|_| rng.int_in(0, 9) < 2).collect();
        ObstacleGrid::new(rows, cols, blocked)
    }

    fn random_trials(&self) -> usize {
        25
    }
}
