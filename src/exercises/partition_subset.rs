//! Partition Equal Subset Sum: can the array be split into two subsets with
//! equal sums?

use crate::exercise::Exercise;
use crate::rng::Lcg32;

/// True iff `nums` can be partitioned into two equal-sum subsets.
pub fn solve(nums: &[u32]) -> bool {
    let sum: u32 = nums.iter().sum();
    if sum % 2 != 0 {
        return false;
    }
    let target = (sum / 2) as usize;
    let mut reachable = vec![false; target + 1];
    reachable[0] = true;
    for &num in nums {
        let num = num as usize;
        // Descending sweep keeps each element 0/1.
        for s in (num..=target).rev() {
            if reachable[s - num] {
                reachable[s] = true;
            }
        }
    }
    reachable[target]
}

/// Try all 2^n subsets; suites stay at length <= 12.
fn any_subset_hits(nums: &[u32], i: usize, remaining: i64) -> bool {
    if remaining == 0 {
        return true;
    }
    if i >= nums.len() || remaining < 0 {
        return false;
    }
    any_subset_hits(nums, i + 1, remaining - nums[i] as i64)
        || any_subset_hits(nums, i + 1, remaining)
}

pub struct PartitionEqualSubset;

impl Exercise for PartitionEqualSubset {
    type Input = Vec<u32>;
    type Output = bool;

    fn name(&self) -> &'static str {
        "partition_equal_subset"
    }

    fn solve(&self, input: &Vec<u32>) -> bool {
        solve(input)
    }

    fn oracle(&self, input: &Vec<u32>) -> bool {
        let sum: u32 = input.iter().sum();
        sum % 2 == 0 && any_subset_hits(input, 0, (sum / 2) as i64)
    }

    fn deterministic_cases(&self) -> Vec<(Vec<u32>, bool)> {
        vec![
            (vec![1, 5, 11, 5], true),
            (vec![1, 2, 3, 5], false),
            (vec![3, 3, 3, 4, 5], true),
            (vec![1], false),
            (vec![2, 2, 3, 5], false),
            (vec![1, 1, 1, 1, 1, 1], true),
        ]
    }

    fn random_input(&self, rng: &mut Lcg32) -> Vec<u32> {
        let len = rng.int_in(1, 12) as usize;
        (0..len).map(|_| rng.int_in(1, 10) as u32).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_examples() {
        assert!(solve(&[1, 5, 11, 5]));
        assert!(!solve(&[1, 2, 3, 5]));
        assert!(solve(&[3, 3, 3, 4, 5]));
    }

    #[test]
    fn odd_total_and_single_element() {
        assert!(!solve(&[1]));
        assert!(!solve(&[3, 4]));
        assert!(solve(&[2, 2]));
    }
}
