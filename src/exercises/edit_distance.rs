//! Edit Distance: minimum number of single-character insertions, deletions,
//! or replacements converting one string into another.

use crate::exercise::Exercise;
use crate::rng::Lcg32;

/// Levenshtein distance with a two-row rolling table.
pub fn solve(a: &str, b: &str) -> usize {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let n = b.len();
    let mut prev: Vec<usize> = (0..=n).collect();
    let mut curr = vec![0usize; n + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for j in 1..=n {
            curr[j] = if b[j - 1] == ca {
                prev[j - 1]
            } else {
                1 + prev[j].min(curr[j - 1]).min(prev[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[n]
}

/// Memoized prefix recursion; a different traversal of the same recurrence.
fn distance_memo(a: &[u8], b: &[u8], i: usize, j: usize, memo: &mut [Option<usize>], stride: usize) -> usize {
    if i == 0 {
        return j;
    }
    if j == 0 {
        return i;
    }
    if let Some(v) = memo[i * stride + j] {
        return v;
    }
    let v = if a[i - 1] == b[j - 1] {
        distance_memo(a, b, i - 1, j - 1, memo, stride)
    } else {
        let delete = distance_memo(a, b, i - 1, j, memo, stride);
        let insert = distance_memo(a, b, i, j - 1, memo, stride);
        let replace = distance_memo(a, b, i - 1, j - 1, memo, stride);
        1 + delete.min(insert).min(replace)
    };
    memo[i * stride + j] = Some(v);
    v
}

fn distance_top_down(a: &str, b: &str) -> usize {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let stride = b.len() + 1;
    let mut memo = vec![None; (a.len() + 1) * stride];
    distance_memo(a, b, a.len(), b.len(), &mut memo, stride)
}

pub struct EditDistance;

impl Exercise for EditDistance {
    type Input = (String, String);
    type Output = usize;

    fn name(&self) -> &'static str {
        "edit_distance"
    }

    fn solve(&self, (a, b): &(String, String)) -> usize {
        solve(a, b)
    }

    fn oracle(&self, (a, b): &(String, String)) -> usize {
        distance_top_down(a, b)
    }

    fn deterministic_cases(&self) -> Vec<((String, String), usize)> {
        let case = |a: &str, b: &str, d| ((a.to_owned(), b.to_owned()), d);
        vec![
            case("horse", "ros", 3),
            case("intention", "execution", 5),
            case("", "a", 1),
            case("ab", "ab", 0),
            case("kitten", "sitting", 3),
            case("a", "", 1),
        ]
    }

    fn random_input(&self, rng: &mut Lcg32) -> (String, String) {
        let len1 = rng.int_in(0, 6) as usize;
        let len2 = rng.int_in(0, 6) as usize;
        let a = rng.string_from(b"abc", len1);
        let b = rng.string_from(b"abc", len2);
        (a, b)
    }

    fn random_trials(&self) -> usize {
        20
    }
}
