//! Target Sum: count the ways of assigning `+` or `-` to every element so
//! the expression evaluates to `target`.

use crate::exercise::Exercise;
use crate::rng::Lcg32;

/// Number of sign assignments over `nums` that evaluate to `target`.
///
/// Counting DP over shifted sums: with every element in 0..=9 and length at
/// most 20 the reachable sums fit in a window of `2 * total + 1`.
pub fn solve(nums: &[i32], target: i32) -> u64 {
    let total: i32 = nums.iter().sum();
    if target.abs() > total {
        // Not representable even with all signs pointing one way.
        return 0;
    }
    let width = (2 * total + 1) as usize;
    let offset = total;
    let mut counts = vec![0u64; width];
    counts[offset as usize] = 1;
    for &x in nums {
        let mut next = vec![0u64; width];
        for (s, &ways) in counts.iter().enumerate() {
            if ways == 0 {
                continue;
            }
            let s = s as i32 - offset;
            for signed in [s + x, s - x] {
                if signed.abs() <= total {
                    next[(signed + offset) as usize] += ways;
                }
            }
        }
        counts = next;
    }
    counts[(target + offset) as usize]
}

/// Branch on the sign of every element.
fn count_signings(nums: &[i32], idx: usize, sum: i32, target: i32) -> u64 {
    if idx == nums.len() {
        return u64::from(sum == target);
    }
    count_signings(nums, idx + 1, sum + nums[idx], target)
        + count_signings(nums, idx + 1, sum - nums[idx], target)
}

pub struct TargetSum;

impl Exercise for TargetSum {
    type Input = (Vec<i32>, i32);
    type Output = u64;

    fn name(&self) -> &'static str {
        "target_sum"
    }

    fn solve(&self, (nums, target): &(Vec<i32>, i32)) -> u64 {
        solve(nums, *target)
    }

    fn oracle(&self, (nums, target): &(Vec<i32>, i32)) -> u64 {
        count_signings(nums, 0, 0, *target)
    }

    fn deterministic_cases(&self) -> Vec<((Vec<i32>, i32), u64)> {
        vec![
            ((vec![1, 1, 1, 1, 1], 3), 5),
            ((vec![1], 1), 1),
            ((vec![1], 2), 0),
            ((vec![2, 3, 5], 0), 2),
            ((vec![0, 0, 0, 0, 1], 1), 16),
            ((vec![2, 2], 0), 2),
        ]
    }

    fn random_input(&self, rng: &mut Lcg32) -> (Vec<i32>, i32) {
        let len = rng.int_in(1, 10) as usize;
        let nums = (0..len).map(|_| rng.int_in(0, 5)).collect();
        let target = rng.int_in(-10, 10);
        (nums, target)
    }

    fn random_trials(&self) -> usize {
        20
    }
}
