//! Coin Change: fewest coins summing to `amount`, or `None` when the amount
//! is unreachable.
//!
//! The classic statement uses a `-1` sentinel for unreachable amounts; here
//! the result is an `Option` and the case table maps `-1` to `None`.

use crate::exercise::Exercise;
use crate::rng::Lcg32;

/// Input: coin denominations and the target amount.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoinChangeInput {
    pub coins: Vec<u32>,
    pub amount: u32,
}

/// Fewest coins needed to make `amount`, `None` if impossible.
///
/// Complete-knapsack order: for each coin, sweep amounts upward so a coin may
/// be reused any number of times.
pub fn solve(coins: &[u32], amount: u32) -> Option<u32> {
    let amount = amount as usize;
    let mut dp: Vec<Option<u32>> = vec![None; amount + 1];
    dp[0] = Some(0);
    for &coin in coins {
        let coin = coin as usize;
        if coin == 0 {
            continue;
        }
        for a in coin..=amount {
            if let Some(prev) = dp[a - coin] {
                let cand = prev + 1;
                dp[a] = Some(dp[a].map_or(cand, |cur| cur.min(cand)));
            }
        }
    }
    dp[amount]
}

/// Amount-major DP, the textbook formulation, kept as the oracle so the two
/// sides iterate in different orders.
fn fewest_by_amount(coins: &[u32], amount: u32) -> Option<u32> {
    const UNREACHED: u32 = u32::MAX / 2;
    let amount = amount as usize;
    let mut dp = vec![UNREACHED; amount + 1];
    dp[0] = 0;
    for a in 1..=amount {
        for &coin in coins {
            let coin = coin as usize;
            if coin != 0 && coin <= a && dp[a - coin] + 1 < dp[a] {
                dp[a] = dp[a - coin] + 1;
            }
        }
    }
    (dp[amount] < UNREACHED).then_some(dp[amount])
}

pub struct CoinChange;

impl Exercise for CoinChange {
    type Input = CoinChangeInput;
    type Output = Option<u32>;

    fn name(&self) -> &'static str {
        "coin_change"
    }

    fn solve(&self, input: &CoinChangeInput) -> Option<u32> {
        solve(&input.coins, input.amount)
    }

    fn oracle(&self, input: &CoinChangeInput) -> Option<u32> {
        fewest_by_amount(&input.coins, input.amount)
    }

    fn deterministic_cases(&self) -> Vec<(CoinChangeInput, Option<u32>)> {
        let case = |coins: &[u32], amount, expected| {
            (
                CoinChangeInput {
                    coins: coins.to_vec(),
                    amount,
                },
                expected,
            )
        };
        vec![
            case(&[1, 2, 5], 11, Some(3)),
            case(&[2], 3, None),
            case(&[1], 0, Some(0)),
            case(&[1, 3, 4], 6, Some(2)),
            case(&[2, 5, 10], 3, None),
            case(&[1, 2], 4, Some(2)),
        ]
    }

    fn random_input(&self, rng: &mut Lcg32) -> CoinChangeInput {
        let len = rng.int_in(1, 4) as usize;
        let coins = (0..len).map(|_| rng.int_in(1, 6) as u32).collect();
        let amount = rng.int_in(0, 20) as u32;
        CoinChangeInput { coins, amount }
    }
}
