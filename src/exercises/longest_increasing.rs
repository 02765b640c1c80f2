//! Longest Increasing Subsequence: length of the longest strictly increasing
//! subsequence of `nums`.

use crate::exercise::Exercise;
use crate::rng::Lcg32;

/// LIS length via patience sorting: `tails[k]` holds the smallest possible
/// tail of an increasing subsequence of length `k + 1`.
pub fn solve(nums: &[i32]) -> usize {
    let mut tails: Vec<i32> = Vec::with_capacity(nums.len());
    for &x in nums {
        match tails.binary_search(&x) {
            // Strictly increasing: an equal tail is replaced, not extended.
            Ok(pos) | Err(pos) => {
                if pos == tails.len() {
                    tails.push(x);
                } else {
                    tails[pos] = x;
                }
            }
        }
    }
    tails.len()
}

/// Enumerate every subsequence, tracking the last element taken.
fn longest_from(nums: &[i32], idx: usize, last: Option<i32>) -> usize {
    if idx == nums.len() {
        return 0;
    }
    let skip = longest_from(nums, idx + 1, last);
    let take = if last.map_or(true, |l| nums[idx] > l) {
        1 + longest_from(nums, idx + 1, Some(nums[idx]))
    } else {
        0
    };
    skip.max(take)
}

pub struct LongestIncreasing;

impl Exercise for LongestIncreasing {
    type Input = Vec<i32>;
    type Output = usize;

    fn name(&self) -> &'static str {
        "longest_increasing"
    }

    fn solve(&self, input: &Vec<i32>) -> usize {
        solve(input)
    }

    fn oracle(&self, input: &Vec<i32>) -> usize {
        longest_from(input, 0, None)
    }

    fn deterministic_cases(&self) -> Vec<(Vec<i32>, usize)> {
        vec![
            (vec![10, 9, 2, 5, 3, 7, 101, 18], 4),
            (vec![0, 1, 0, 3, 2, 3], 4),
            (vec![7, 7, 7, 7], 1),
            (vec![1, 2, 3, 4, 5], 5),
            (vec![4, 10, 4, 3, 8, 9], 3),
            (vec![5], 1),
        ]
    }

    fn random_input(&self, rng: &mut Lcg32) -> Vec<i32> {
        let len = rng.int_in(1, 9) as usize;
        (0..len).map(|_| rng.int_in(-5, 9)).collect()
    }

    fn random_trials(&self) -> usize {
        20
    }
}
