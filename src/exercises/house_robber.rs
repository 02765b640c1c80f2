//! House Robber: maximum sum over a subset of `nums` with no two adjacent
//! elements chosen.

use crate::exercise::Exercise;
use crate::rng::Lcg32;

/// Maximum loot with no two adjacent houses robbed.
pub fn solve(nums: &[i32]) -> i32 {
    let mut prev2 = 0;
    let mut prev1 = 0;
    for &x in nums {
        let next = prev1.max(prev2 + x);
        prev2 = prev1;
        prev1 = next;
    }
    prev1
}

/// Enumerate every independent subset; suites stay at length <= 10.
fn best_subset(nums: &[i32], i: usize) -> i32 {
    if i >= nums.len() {
        return 0;
    }
    let skip = best_subset(nums, i + 1);
    let take = nums[i] + best_subset(nums, i + 2);
    skip.max(take)
}

pub struct HouseRobber;

impl Exercise for HouseRobber {
    type Input = Vec<i32>;
    type Output = i32;

    fn name(&self) -> &'static str {
        "house_robber"
    }

    fn solve(&self, input: &Vec<i32>) -> i32 {
        solve(input)
    }

    fn oracle(&self, input: &Vec<i32>) -> i32 {
        best_subset(input, 0)
    }

    fn deterministic_cases(&self) -> Vec<(Vec<i32>, i32)> {
        vec![
            (vec![1, 2, 3, 1], 4),
            (vec![2, 7, 9, 3, 1], 12),
            (vec![2, 1, 1, 2], 4),
            (vec![5], 5),
            (vec![4, 10, 3, 1, 5], 15),
            (vec![2, 1], 2),
        ]
    }

    fn random_input(&self, rng: &mut Lcg32) -> Vec<i32> {
        let len = rng.int_in(1, 10) as usize;
        (0..len).map(|_| rng.int_in(0, 20)).collect()
    }
}
