//! Built-in exercise implementations.
//!
//! Each module implements [`Exercise`](crate::exercise::Exercise) for one
//! classic dynamic-programming drill. They are both usable and serve as
//! templates: the solution under test, the oracle, the deterministic case
//! table, and the randomized input generator all live side by side, exactly
//! the shape a new drill should take.
//!
//! Oracles favor brute force wherever input sizes allow; the point of the
//! differential suite is that the two sides are unlikely to share a bug.

pub mod climbing_stairs;
pub mod coin_change;
pub mod decode_ways;
pub mod edit_distance;
pub mod house_robber;
pub mod knapsack;
pub mod longest_common_subsequence;
pub mod longest_increasing;
pub mod min_cost_climbing;
pub mod min_path_sum;
pub mod partition_subset;
pub mod target_sum;
pub mod unique_paths;
pub mod unique_paths_obstacles;
pub mod word_break;
