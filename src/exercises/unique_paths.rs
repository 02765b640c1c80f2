//! Unique Paths: count monotone lattice paths across an `m x n` grid moving
//! only right or down.

use crate::exercise::Exercise;
use crate::rng::Lcg32;

/// Number of right/down paths from the top-left to the bottom-right of an
/// `m x n` grid. Single-row DP over columns.
pub fn solve(m: u32, n: u32) -> u64 {
    let n = n as usize;
    let mut row = vec![1u64; n];
    for _ in 1..m {
        for c in 1..n {
            row[c] += row[c - 1];
        }
    }
    row[n - 1]
}

/// Plain branching recursion; at the suite bound of 8x8 this is a few
/// thousand calls.
fn count_paths(m: u32, n: u32) -> u64 {
    if m == 1 || n == 1 {
        return 1;
    }
    count_paths(m - 1, n) + count_paths(m, n - 1)
}

pub struct UniquePaths;

impl Exercise for UniquePaths {
    type Input = (u32, u32);
    type Output = u64;

    fn name(&self) -> &'static str {
        "unique_paths"
    }

    fn solve(&self, &(m, n): &(u32, u32)) -> u64 {
        solve(m, n)
    }

    fn oracle(&self, &(m, n): &(u32, u32)) -> u64 {
        count_paths(m, n)
    }

    fn deterministic_cases(&self) -> Vec<((u32, u32), u64)> {
        vec![
            ((3, 7), 28),
            ((3, 2), 3),
            ((3, 3), 6),
            ((1, 5), 1),
            ((2, 2), 2),
            ((2, 3), 3),
        ]
    }

    fn random_input(&self, rng: &mut Lcg32) -> (u32, u32) {
        let m = rng.int_in(1, 8) as u32;
        let n = rng.int_in(1, 8) as u32;
        (m, n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_examples() {
        assert_eq!(solve(3, 7), 28);
        assert_eq!(solve(3, 2), 3);
        assert_eq!(solve(3, 3), 6);
    }

    #[test]
    fn degenerate_single_row_or_column() {
        assert_eq!(solve(1, 1), 1);
        assert_eq!(solve(1, 9), 1);
        assert_eq!(solve(9, 1), 1);
    }

    #[test]
    fn matches_binomial_at_bound() {
        // C(18, 9) for a 10x10 grid.
        assert_eq!(solve(10, 10), 48_620);
    }
}
