//! Climbing Stairs: count the distinct ways to reach step `n` taking one or
//! two steps at a time.
//!
//! Constraints: `1 <= n <= 30`, so the answer fits comfortably in `u64`
//! (it is the Fibonacci sequence shifted by one).

use crate::exercise::Exercise;
use crate::rng::Lcg32;

/// Number of distinct ways to climb `n` steps, taking 1 or 2 at a time.
pub fn solve(n: u32) -> u64 {
    if n <= 1 {
        return 1;
    }
    let mut a = 1u64;
    let mut b = 1u64;
    for _ in 2..=n {
        let next = a + b;
        a = b;
        b = next;
    }
    b
}

/// Exhaustive recursion; trusted by inspection, fine up to n = 30.
fn count_by_recursion(n: u32) -> u64 {
    match n {
        0 | 1 => 1,
        _ => count_by_recursion(n - 1) + count_by_recursion(n - 2),
    }
}

pub struct ClimbingStairs;

impl Exercise for ClimbingStairs {
    type Input = u32;
    type Output = u64;

    fn name(&self) -> &'static str {
        "climbing_stairs"
    }

    fn solve(&self, input: &u32) -> u64 {
        solve(*input)
    }

    fn oracle(&self, input: &u32) -> u64 {
        count_by_recursion(*input)
    }

    fn deterministic_cases(&self) -> Vec<(u32, u64)> {
        vec![(1, 1), (2, 2), (3, 3), (4, 5), (5, 8), (10, 89)]
    }

    fn random_input(&self, rng: &mut Lcg32) -> u32 {
        rng.int_in(1, 20) as u32
    }
}
