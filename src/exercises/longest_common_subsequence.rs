//! Longest Common Subsequence: length of the longest (not necessarily
//! contiguous) subsequence shared by two strings.

use crate::exercise::Exercise;
use crate::rng::Lcg32;

/// LCS length with a two-row rolling table.
pub fn solve(a: &str, b: &str) -> usize {
    let a = a.as_bytes();
    let b = b.as_bytes();
    let m = b.len();
    let mut prev = vec![0usize; m + 1];
    let mut curr = vec![0usize; m + 1];
    for &ca in a {
        for j in 1..=m {
            curr[j] = if b[j - 1] == ca {
                prev[j - 1] + 1
            } else {
                prev[j].max(curr[j - 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[m]
}

/// Suffix recursion straight off the recurrence; suite strings are short
/// enough that the exponential blowup never bites.
fn lcs_recursive(a: &[u8], b: &[u8]) -> usize {
    match (a.split_last(), b.split_last()) {
        (Some((&x, ra)), Some((&y, rb))) if x == y => 1 + lcs_recursive(ra, rb),
        (Some((_, ra)), Some((_, rb))) => lcs_recursive(ra, b).max(lcs_recursive(a, rb)),
        _ => 0,
    }
}

pub struct LongestCommonSubsequence;

impl Exercise for LongestCommonSubsequence {
    type Input = (String, String);
    type Output = usize;

    fn name(&self) -> &'static str {
        "longest_common_subsequence"
    }

    fn solve(&self, (a, b): &(String, String)) -> usize {
        solve(a, b)
    }

    fn oracle(&self, (a, b): &(String, String)) -> usize {
        lcs_recursive(a.as_bytes(), b.as_bytes())
    }

    fn deterministic_cases(&self) -> Vec<((String, String), usize)> {
        let case = |a: &str, b: &str, len| ((a.to_owned(), b.to_owned()), len);
        vec![
            case("abcde", "ace", 3),
            case("abc", "abc", 3),
            case("abc", "def", 0),
            case("aggtab", "gxtxayb", 4),
            case("aaaa", "aa", 2),
            case("ab", "ba", 1),
        ]
    }

    fn random_input(&self, rng: &mut Lcg32) -> (String, String) {
        let len1 = rng.int_in(1, 6) as usize;
        let len2 = rng.int_in(1, 6) as usize;
        let a = rng.string_from(b"abc", len1);
        let b = rng.string_from(b"abc", len2);
        (a, b)
    }

    fn random_trials(&self) -> usize {
        20
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documented_examples() {
        assert_eq!(solve("abcde", "ace"), 3);
        assert_eq!(solve("abc", "abc"), 3);
        assert_eq!(solve("abc", "def"), 0);
        assert_eq!(solve("aggtab", "gxtxayb"), 4);
    }

    #[test]
    fn empty_operands() {
        assert_eq!(solve("", ""), 0);
        assert_eq!(solve("abc", ""), 0);
        assert_eq!(solve("", "abc"), 0);
    }

    #[test]
    fn symmetric_in_its_arguments() {
        assert_eq!(solve("aaaa", "aa"), solve("aa", "aaaa"));
        assert_eq!(solve("ab", "ba"), 1);
    }
}
