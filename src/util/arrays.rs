//! Array helpers: sorted dedup and diff, half-interleaving, palindrome check.

use crate::util::UtilError;

/// Remove consecutive duplicates from an ascending-sorted vector in place.
///
/// `[1, 1, 2, 3, 3, 3, 4]` becomes `[1, 2, 3, 4]`. Idempotent: a second
/// application is a no-op. Input must already be sorted for the result to be
/// the set of distinct elements.
pub fn dedup_sorted(xs: &mut Vec<i32>) {
    if xs.len() < 2 {
        return;
    }
    let mut write = 0;
    for read in 1..xs.len() {
        if xs[read] != xs[write] {
            write += 1;
            xs[write] = xs[read];
        }
    }
    xs.truncate(write + 1);
}

/// Elements of `source` absent from the ascending-sorted `sorted_lookup`,
/// in source order. Binary search per element: O(n log m).
pub fn diff_sorted(source: &[i32], sorted_lookup: &[i32]) -> Vec<i32> {
    source
        .iter()
        .copied()
        .filter(|x| sorted_lookup.binary_search(x).is_err())
        .collect()
}

/// Interleave the two halves of `src`: `[x1..xn, y1..yn]` becomes
/// `[x1, y1, x2, y2, ..]`. Odd-length input is an error.
pub fn interleave_halves(src: &[i32]) -> Result<Vec<i32>, UtilError> {
    if src.len() % 2 != 0 {
        return Err(UtilError::OddLength(src.len()));
    }
    let n = src.len() / 2;
    let (xs, ys) = src.split_at(n);
    let mut out = Vec::with_capacity(src.len());
    for (x, y) in xs.iter().zip(ys) {
        out.push(*x);
        out.push(*y);
    }
    Ok(out)
}

/// True iff the slice reads the same forwards and backwards. Empty and
/// single-element slices are palindromes.
pub fn is_palindrome<T: PartialEq>(xs: &[T]) -> bool {
    let n = xs.len();
    (0..n / 2).all(|i| xs[i] == xs[n - 1 - i])
}
