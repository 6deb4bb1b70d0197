//! Linear-space score rows and the Hirschberg split.
//!
//! [`score_last_row`] evaluates the Needleman–Wunsch recurrence keeping only
//! two rows and returns the last one. Running it once forward on the upper
//! half of `x` and once on the reversed lower half against reversed `y` yields
//! the prefix and suffix scores that [`partition`] combines into a split column.

use crate::error::{AlignError, Result};
use crate::matrix::check_capacity;
use crate::params::ScoreParams;
use crate::traits::{Score, ScoringFunction};

/// Last row of the Needleman–Wunsch matrix of `x` against `y`.
///
/// Returns a vector of length `|y| + 1` where `row[j]` is the optimal score of
/// aligning all of `x` with `y[..j]`. O(|x|·|y|) time, O(|y|) space.
pub fn score_last_row<T, S, F>(
    x: &[T],
    y: &[T],
    scoring: &F,
    params: &ScoreParams<S>,
) -> Result<Vec<S>>
where
    S: Score,
    F: ScoringFunction<T, S> + ?Sized,
{
    check_capacity(x.len(), y.len(), params)?;

    let id = params.gap_penalty;
    let n = y.len();
    let mut top = Vec::with_capacity(n + 1);
    let mut bottom = vec![S::zero(); n + 1];

    // row 0
    top.push(S::zero());
    for j in 1..=n {
        top.push(top[j - 1] + id);
    }

    for a in x {
        bottom[0] = top[0] + id;
        for (j, b) in y.iter().enumerate().map(|(j, b)| (j + 1, b)) {
            let sub = top[j - 1] + scoring.score(a, b);
            let del = top[j] + id;
            let ins = bottom[j - 1] + id;
            bottom[j] = sub.max(del).max(ins);
        }
        std::mem::swap(&mut top, &mut bottom);
    }

    Ok(top)
}

/// Column at which an optimal alignment crosses the split row.
///
/// `left` is the forward row (prefix scores) and `right` the backward row
/// (suffix scores, computed on reversed inputs), both of length `k + 1`.
/// Returns the smallest `i` in `0..=k` maximising `left[i] + right[k - i]`.
pub fn partition<S: Score>(left: &[S], right: &[S]) -> Result<usize> {
    if left.len() != right.len() {
        return Err(AlignError::RowLengthMismatch {
            left: left.len(),
            right: right.len(),
        });
    }
    let Some(k) = left.len().checked_sub(1) else {
        return Err(AlignError::EmptyRow);
    };

    let mut best_i = 0;
    let mut best_sum = left[0] + right[k];
    for (i, (&l, &r)) in left.iter().zip(right.iter().rev()).enumerate().skip(1) {
        let sum = l + r;
        // strict: an equal sum further right never replaces the first maximum
        if sum > best_sum {
            best_sum = sum;
            best_i = i;
        }
    }
    Ok(best_i)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::score_matrix;
    use crate::scoring::plus_minus_one;

    fn pm1(x: &[u8], y: &[u8]) -> Vec<i32> {
        score_last_row(x, y, &plus_minus_one::<u8, i32>, &ScoreParams::default()).unwrap()
    }

    #[test]
    fn last_row_small_cases() {
        assert_eq!(pm1(b"", b""), vec![0]);
        assert_eq!(pm1(b"A", b""), vec![-1]);
        assert_eq!(pm1(b"", b"AB"), vec![0, -1, -2]);
        assert_eq!(pm1(b"A", b"A"), vec![-1, 1]);
    }

    #[test]
    fn last_row_of_wikipedia_example() {
        assert_eq!(pm1(b"GATTACA", b"GCATGCU"), vec![-7, -5, -3, -1, -2, -2, 0, 0]);
    }

    #[test]
    fn last_row_matches_full_matrix() {
        let x = b"AGTACGCA";
        let y = b"TATGC";
        let p = ScoreParams::new(-2i64);
        let f = |a: &u8, b: &u8| if a == b { 3i64 } else { -1 };
        let grid = score_matrix(x, y, &f, &p).unwrap();
        let row = score_last_row(x, y, &f, &p).unwrap();
        assert_eq!(row.as_slice(), grid.row(x.len()));
    }

    #[test]
    fn partition_keeps_first_maximum() {
        // sums: 1, 3, 3, 2
        assert_eq!(partition(&[0, 2, 1, 1], &[1, 2, 1, 1]), Ok(1));
        // all equal
        assert_eq!(partition(&[0, 0, 0], &[0, 0, 0]), Ok(0));
        assert_eq!(partition(&[5], &[-5]), Ok(0));
        assert_eq!(partition(&[-3, -2, 4], &[0, 0, 0]), Ok(2));
    }

    #[test]
    fn partition_rejects_malformed_rows() {
        assert_eq!(
            partition(&[0, 1], &[0]),
            Err(AlignError::RowLengthMismatch { left: 2, right: 1 })
        );
        assert_eq!(partition::<i32>(&[], &[]), Err(AlignError::EmptyRow));
    }
}
