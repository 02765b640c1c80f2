//! Min Cost Climbing Stairs: `cost[i]` is paid when stepping off step `i`;
//! start at step 0 or 1 and climb 1 or 2 steps until past the last index.

use crate::exercise::Exercise;
use crate::rng::Lcg32;

/// Minimum total cost to reach the landing beyond the last step.
///
/// Rolling two-variable DP: `dp[i]` is the cheapest way to stand on step `i`
/// without having paid for it yet.
pub fn solve(cost: &[i32]) -> i32 {
    debug_assert!(cost.len() >= 2);
    let mut dp0 = 0;
    let mut dp1 = 0;
    for i in 2..=cost.len() {
        let via_prev = dp1 + cost[i - 1];
        let via_prev2 = dp0 + cost[i - 2];
        let next = via_prev.min(via_prev2);
        dp0 = dp1;
        dp1 = next;
    }
    dp1
}

/// Top-down recursion from each allowed start; exponential but the suites
/// never exceed length 10.
fn cheapest_from(cost: &[i32], i: usize) -> i32 {
    if i >= cost.len() {
        return 0;
    }
    let one = cheapest_from(cost, i + 1);
    let two = cheapest_from(cost, i + 2);
    cost[i] + one.min(two)
}

pub struct MinCostClimbing;

impl Exercise for MinCostClimbing {
    type Input = Vec<i32>;
    type Output = i32;

    fn name(&self) -> &'static str {
        "min_cost_climbing"
    }

    fn solve(&self, input: &Vec<i32>) -> i32 {
        solve(input)
    }

    fn oracle(&self, input: &Vec<i32>) -> i32 {
        cheapest_from(input, 0).min(cheapest_from(input, 1))
    }

    fn deterministic_cases(&self) -> Vec<(Vec<i32>, i32)> {
        vec![
            (vec![10, 15, 20], 15),
            (vec![1, 100, 1, 1, 1, 100, 1, 1, 100, 1], 6),
            (vec![5, 5], 5),
            (vec![0, 2, 2, 1], 2),
            (vec![3, 4, 5, 6], 8),
            (vec![1, 2], 1),
        ]
    }

    fn random_input(&self, rng: &mut Lcg32) -> Vec<i32> {
        let len = rng.int_in(2, 8) as usize;
        (0..len).map(|_| rng.int_in(0, 9)).collect()
    }
}
