//! 0/1 Knapsack: maximum total value selecting each item at most once within
//! a weight capacity.

use crate::exercise::Exercise;
use crate::rng::Lcg32;

/// One knapsack instance. `weights` and `values` are parallel arrays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KnapsackInput {
    pub weights: Vec<u32>,
    pub values: Vec<u32>,
    pub capacity: u32,
}

/// Maximum value within `capacity`, each item used at most once.
///
/// 1D table swept downward over capacities so each item is considered once.
pub fn solve(weights: &[u32], values: &[u32], capacity: u32) -> u64 {
    debug_assert_eq!(weights.len(), values.len());
    let capacity = capacity as usize;
    let mut dp = vec![0u64; capacity + 1];
    for (&w, &v) in weights.iter().zip(values) {
        let w = w as usize;
        for cap in (w..=capacity).rev() {
            dp[cap] = dp[cap].max(dp[cap - w] + v as u64);
        }
    }
    dp[capacity]
}

/// Try all 2^n selections.
fn best_selection(weights: &[u32], values: &[u32], i: usize, room: u32) -> u64 {
    if i >= weights.len() {
        return 0;
    }
    let skip = best_selection(weights, values, i + 1, room);
    if weights[i] <= room {
        let take =
            values[i] as u64 + best_selection(weights, values, i + 1, room - weights[i]);
        skip.max(take)
    } else {
        skip
    }
}

pub struct Knapsack01;

impl Exercise for Knapsack01 {
    type Input = KnapsackInput;
    type Output = u64;

    fn name(&self) -> &'static str {
        "knapsack_01"
    }

    fn solve(&self, input: &KnapsackInput) -> u64 {
        solve(&input.weights, &input.values, input.capacity)
    }

    fn oracle(&self, input: &KnapsackInput) -> u64 {
        best_selection(&input.weights, &input.values, 0, input.capacity)
    }

    fn deterministic_cases(&self) -> Vec<(KnapsackInput, u64)> {
        let case = |weights: &[u32], values: &[u32], capacity, expected| {
            (
                KnapsackInput {
                    weights: weights.to_vec(),
                    values: values.to_vec(),
                    capacity,
                },
                expected,
            )
        };
        vec![
            case(&[1, 3, 4, 5], &[1, 4, 5, 7], 7, 9),
            case(&[2, 3, 4], &[4, 5, 6], 5, 9),
            case(&[1], &[10], 0, 0),
            case(&[5, 4, 6, 3], &[10, 40, 30, 50], 10, 90),
            case(&[2, 2, 6], &[6, 10, 12], 7, 16),
            case(&[3], &[4], 6, 4),
        ]
    }

    fn random_input(&self, rng: &mut Lcg32) -> KnapsackInput {
        let n = rng.int_in(1, 8) as usize;
        let mut weights = Vec::with_capacity(n);
        let mut values = Vec::with_capacity(n);
        for _ in 0..n {
            weights.push(rng.int_in(1, 6) as u32);
            values.push(rng.int_in(1, 10) as u32);
        }
        let capacity = rng.int_in(0, 12) as u32;
        KnapsackInput {
            weights,
            values,
            capacity,
        }
    }

    fn random_trials(&self) -> usize {
        25
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_examples() {
        assert_eq!(solve(&[1, 3, 4, 5], &[1, 4, 5, 7], 7), 9);
        assert_eq!(solve(&[2, 3, 4], &[4, 5, 6], 5), 9);
    }

    #[test]
    fn zero_capacity_takes_nothing() {
        assert_eq!(solve(&[1], &[10], 0), 0);
        assert_eq!(best_selection(&[1], &[10], 0, 0), 0);
    }

    #[test]
    fn single_item_fits_or_not() {
        assert_eq!(solve(&[3], &[4], 6), 4);
        assert_eq!(solve(&[3], &[4], 2), 0);
    }
}
