//! Minimum Path Sum: cheapest top-left to bottom-right walk over a grid of
//! non-negative cell costs, moving only right or down.

use crate::exercise::Exercise;
use crate::rng::Lcg32;

/// Row-major grid of non-negative cell costs.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CostGrid {
    pub rows: usize,
    pub cols: usize,
    cells: Vec<u32>,
}

impl CostGrid {
    /// # Panics
    /// Panics if `cells.len() != rows * cols` or either dimension is zero.
    pub fn new(rows: usize, cols: usize, cells: Vec<u32>) -> Self {
        assert!(rows > 0 && cols > 0, "grid must be non-empty");
        assert_eq!(cells.len(), rows * cols, "cell count mismatch");
        Self { rows, cols, cells }
    }

    pub fn at(&self, r: usize, c: usize) -> u32 {
        self.cells[r * self.cols + c]
    }
}

/// Minimum path sum from the top-left to the bottom-right.
pub fn solve(grid: &CostGrid) -> u64 {
    let (rows, cols) = (grid.rows, grid.cols);
    let mut dp = vec![0u64; rows * cols];
    dp[0] = grid.at(0, 0) as u64;
    for r in 0..rows {
        for c in 0..cols {
            if r == 0 && c == 0 {
                continue;
            }
            let top = if r > 0 { dp[(r - 1) * cols + c] } else { u64::MAX };
            let left = if c > 0 { dp[r * cols + c - 1] } else { u64::MAX };
            dp[r * cols + c] = grid.at(r, c) as u64 + top.min(left);
        }
    }
    dp[rows * cols - 1]
}

/// Minimum over every explicit walk.
fn cheapest_walk(grid: &CostGrid, r: usize, c: usize) -> u64 {
    let here = grid.at(r, c) as u64;
    if r == grid.rows - 1 && c == grid.cols - 1 {
        return here;
    }
    let mut best = u64::MAX;
    if r + 1 < grid.rows {
        best = best.min(cheapest_walk(grid, r + 1, c));
    }
    if c + 1 < grid.cols {
        best = best.min(cheapest_walk(grid, r, c + 1));
    }
    here + best
}

pub struct MinPathSum;

impl Exercise for MinPathSum {
    type Input = CostGrid;
    type Output = u64;

    fn name(&self) -> &'static str {
        "min_path_sum"
    }

    fn solve(&self, input: &CostGrid) -> u64 {
        solve(input)
    }

    fn oracle(&self, input: &CostGrid) -> u64 {
        cheapest_walk(input, 0, 0)
    }

    fn deterministic_cases(&self) -> Vec<(CostGrid, u64)> {
        vec![
            (CostGrid::new(3, 3, vec![1, 3, 1, 1, 5, 1, 4, 2, 1]), 7),
            (CostGrid::new(2, 3, vec![1, 2, 3, 4, 5, 6]), 12),
            (CostGrid::new(1, 1, vec![5]), 5),
            (CostGrid::new(2, 2, vec![1, 2, 1, 1]), 3),
            (CostGrid::new(3, 3, vec![1, 4, 2, 2, 1, 5, 3, 2, 1]), 7),
            (CostGrid::new(2, 2, vec![0, 0, 0, 0]), 0),
        ]
    }

    fn random_input(&self, rng: &mut Lcg32) -> CostGrid {
        let rows = rng.int_in(1, 6) as usize;
        let cols = rng.int_in(1, 6) as usize;
        let cells = (0..rows * cols).map(|_| rng.int_in(0, 9) as u32).collect();
        CostGrid::new(rows, cols, cells)
    }

    fn random_trials(&self) -> usize {
        25
    }
}
