//! Property tests pitting each drill's solution against its oracle on
//! proptest-generated inputs. Inputs stay small because the oracles are
//! deliberately brute force.

use dp_drills::exercise::Exercise;
use dp_drills::exercises::{
    climbing_stairs::ClimbingStairs,
    coin_change::{CoinChange, CoinChangeInput},
    decode_ways::DecodeWays,
    edit_distance::EditDistance,
    house_robber::HouseRobber,
    knapsack::{Knapsack01, KnapsackInput},
    longest_common_subsequence::LongestCommonSubsequence,
    longest_increasing::LongestIncreasing,
    min_cost_climbing::MinCostClimbing,
    min_path_sum::{CostGrid, MinPathSum},
    partition_subset::PartitionEqualSubset,
    target_sum::TargetSum,
    unique_paths::UniquePaths,
    unique_paths_obstacles::{ObstacleGrid, UniquePathsObstacles},
    word_break::WordBreak,
};
use proptest::collection::vec;
use proptest::prelude::*;
use proptest::test_runner::TestCaseError;

fn agrees<E: Exercise>(ex: &E, input: E::Input) -> Result<(), TestCaseError> {
    let got = ex.solve(&input);
    let want = ex.oracle(&input);
    prop_assert_eq!(got, want, "{} diverged on {:?}", ex.name(), input);
    Ok(())
}

fn obstacle_grid() -> impl Strategy<Value = ObstacleGrid> {
    (1usize..=5, 1usize..=5).prop_flat_map(|(rows, cols)| {
        vec(prop::bool::weighted(0.2), rows * cols)
            .prop_map(move |blocked| ObstacleGrid::new(rows, cols, blocked))
    })
}

fn cost_grid() -> impl Strategy<Value = CostGrid> {
    (1usize..=5, 1usize..=5).prop_flat_map(|(rows, cols)| {
        vec(0u32..10, rows * cols).prop_map(move |cells| CostGrid::new(rows, cols, cells))
    })
}

proptest! {
    #[test]
    fn climbing_stairs_matches(n in 1u32..=25) {
        agrees(&ClimbingStairs, n)?;
    }

    #[test]
    fn min_cost_climbing_matches(cost in vec(0i32..100, 2..=10)) {
        agrees(&MinCostClimbing, cost)?;
    }

    #[test]
    fn house_robber_matches(nums in vec(0i32..100, 1..=12)) {
        agrees(&HouseRobber, nums)?;
    }

    #[test]
    fn coin_change_matches(coins in vec(1u32..=8, 1..=4), amount in 0u32..=25) {
        agrees(&CoinChange, CoinChangeInput { coins, amount })?;
    }

    #[test]
    fn partition_matches(nums in vec(1u32..=12, 1..=12)) {
        agrees(&PartitionEqualSubset, nums)?;
    }

    #[test]
    fn unique_paths_matches(m in 1u32..=8, n in 1u32..=8) {
        agrees(&UniquePaths, (m, n))?;
    }

    #[test]
    fn unique_paths_obstacles_matches(grid in obstacle_grid()) {
        agrees(&UniquePathsObstacles, grid)?;
    }

    #[test]
    fn min_path_sum_matches(grid in cost_grid()) {
        agrees(&MinPathSum, grid)?;
    }

    #[test]
    fn longest_increasing_matches(nums in vec(-10i32..10, 1..=10)) {
        agrees(&LongestIncreasing, nums)?;
    }

    #[test]
    fn lcs_matches(a in "[abc]{0,7}", b in "[abc]{0,7}") {
        agrees(&LongestCommonSubsequence, (a, b))?;
    }

    #[test]
    fn edit_distance_matches(a in "[abc]{0,6}", b in "[abc]{0,6}") {
        agrees(&EditDistance, (a, b))?;
    }

    #[test]
    fn knapsack_matches(
        items in vec((1u32..=8, 1u32..=15), 1..=9),
        capacity in 0u32..=16,
    ) {
        let (weights, values) = items.into_iter().unzip();
        agrees(&Knapsack01, KnapsackInput { weights, values, capacity })?;
    }

    #[test]
    fn target_sum_matches(nums in vec(0i32..=6, 1..=10), target in -12i32..=12) {
        agrees(&TargetSum, (nums, target))?;
    }

    #[test]
    fn decode_ways_matches(s in "[0-4]{0,9}") {
        agrees(&DecodeWays, s)?;
    }

    #[test]
    fn word_break_matches(
        s in "[ab]{0,8}",
        dict in vec("[ab]{1,3}", 1..=5),
    ) {
        agrees(&WordBreak, (s, dict))?;
    }
}
