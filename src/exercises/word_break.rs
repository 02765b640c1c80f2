//! Word Break: can `s` be segmented into a sequence of dictionary words?

use crate::exercise::Exercise;
use crate::rng::Lcg32;

/// True iff `s` splits entirely into words from `dict` (reuse allowed).
pub fn solve(s: &str, dict: &[String]) -> bool {
    let s = s.as_bytes();
    let n = s.len();
    let mut splittable = vec![false; n + 1];
    splittable[0] = true;
    for i in 1..=n {
        for j in 0..i {
            if splittable[j] && dict.iter().any(|w| w.as_bytes() == &s[j..i]) {
                splittable[i] = true;
                break;
            }
        }
    }
    splittable[n]
}

/// Peel every matching prefix word and recurse on the rest.
fn segments(s: &str, dict: &[String]) -> bool {
    if s.is_empty() {
        return true;
    }
    dict.iter()
        .any(|w| s.strip_prefix(w.as_str()).is_some_and(|rest| segments(rest, dict)))
}

pub struct WordBreak;

impl Exercise for WordBreak {
    type Input = (String, Vec<String>);
    type Output = bool;

    fn name(&self) -> &'static str {
        "word_break"
    }

    fn solve(&self, (s, dict): &(String, Vec<String>)) -> bool {
        solve(s, dict)
    }

    fn oracle(&self, (s, dict): &(String, Vec<String>)) -> bool {
        segments(s, dict)
    }

    fn deterministic_cases(&self) -> Vec<((String, Vec<String>), bool)> {
        let case = |s: &str, dict: &[&str], expected| {
            (
                (
                    s.to_owned(),
                    dict.iter().map(|w| (*w).to_owned()).collect(),
                ),
                expected,
            )
        };
        vec![
            case("leetcode", &["leet", "code"], true),
            case("applepenapple", &["apple", "pen"], true),
            case("catsandog", &["cats", "dog", "sand", "and", "cat"], false),
            case("cars", &["car", "ca", "rs"], true),
            case("aaaaaaa", &["aaaa", "aaa"], true),
            case("a", &["b"], false),
        ]
    }

    fn random_input(&self, rng: &mut Lcg32) -> (String, Vec<String>) {
        let dict_size = rng.int_in(1, 6) as usize;
        let dict = (0..dict_size)
            .map(|_| {
                let len = rng.int_in(1, 4) as usize;
                rng.string_from(b"abc", len)
            })
            .collect();
        let s_len = rng.int_in(1, 8) as usize;
        let s = rng.string_from(b"abc", s_len);
        (s, dict)
    }

    fn random_trials(&self) -> usize {
        20
    }
}
