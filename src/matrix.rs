//! Full Needleman–Wunsch score matrix.
//!
//! Cell `[i][j]` holds the optimal score of aligning `x[..i]` with `y[..j]`:
//! - `grid[0][j] = j * ID`, `grid[i][0] = i * ID`,
//! - `grid[i][j] = max(grid[i-1][j-1] + score(x[i-1], y[j-1]),
//!                     grid[i-1][j] + ID,
//!                     grid[i][j-1] + ID)`.
//!
//! This is the quadratic-space half of the engine; the linear-space row scorer
//! in [`crate::row`] evaluates the same recurrence keeping only two rows.

use std::ops::Index;

use num_traits::NumCast;

use crate::error::{AlignError, Result};
use crate::params::ScoreParams;
use crate::traits::{Score, ScoringFunction};
use crate::utils::checked_abs;

/// Dense `(|x|+1) × (|y|+1)` score grid, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScoreMatrix<S> {
    rows: usize,
    cols: usize,
    cells: Vec<S>,
}

impl<S: Score> ScoreMatrix<S> {
    /// Number of rows, `|x| + 1`.
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns, `|y| + 1`.
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<S> {
        if i < self.rows && j < self.cols {
            Some(self.cells[i * self.cols + j])
        } else {
            None
        }
    }

    /// Row `i` of the grid.
    #[inline]
    pub fn row(&self, i: usize) -> &[S] {
        &self.cells[i * self.cols..(i + 1) * self.cols]
    }

    /// Optimal global alignment score, `grid[|x|][|y|]`.
    #[inline]
    pub fn optimal_score(&self) -> S {
        self.cells[self.cells.len() - 1]
    }

    /// Copy of the grid as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<S>> {
        self.cells.chunks(self.cols).map(<[S]>::to_vec).collect()
    }
}

impl<S> Index<(usize, usize)> for ScoreMatrix<S> {
    type Output = S;

    #[inline(always)]
    fn index(&self, (i, j): (usize, usize)) -> &S {
        &self.cells[i * self.cols + j]
    }
}

/// Check that the worst-case score of aligning sequences of lengths `m` and `n`
/// under `params` fits into `S`.
///
/// No alignment column contributes more than `max(|bound|, |gap_penalty|)` in
/// magnitude and an alignment has at most `m + n` columns, so every cell of the
/// matrix lies within `(m+n)` times that magnitude. No configured bound skips
/// the check. A bound or gap penalty of `S::min_value()` has no representable
/// magnitude and is rejected.
pub fn check_capacity<S: Score>(m: usize, n: usize, params: &ScoreParams<S>) -> Result<()> {
    let Some(bound) = params.score_bound else {
        return Ok(());
    };
    let len = m.saturating_add(n);
    let magnitude = checked_abs(bound)
        .zip(checked_abs(params.gap_penalty))
        .map(|(b, g)| b.max(g));
    let fits = magnitude.and_then(|magnitude| {
        <S as NumCast>::from(len).and_then(|columns| columns.checked_mul(&magnitude))
    });
    if fits.is_none() {
        #[cfg(feature = "tracing")]
        tracing::debug!(m, n, ?bound, gap = ?params.gap_penalty, "score type capacity check failed");
        return Err(AlignError::Overflow {
            score_type: std::any::type_name::<S>(),
            len,
            bound: format!("{:?}", magnitude.unwrap_or(bound)),
        });
    }
    Ok(())
}

/// Build the full score matrix for `x` against `y`.
///
/// O(|x|·|y|) time and space. Fails only when a capacity bound is configured
/// and exceeded, before any cell is computed.
pub fn score_matrix<T, S, F>(
    x: &[T],
    y: &[T],
    scoring: &F,
    params: &ScoreParams<S>,
) -> Result<ScoreMatrix<S>>
where
    S: Score,
    F: ScoringFunction<T, S> + ?Sized,
{
    let m = x.len();
    let n = y.len();
    check_capacity(m, n, params)?;

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("score_matrix", m, n);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let id = params.gap_penalty;
    let cols = n + 1;
    let mut cells = vec![S::zero(); (m + 1) * cols];

    for j in 1..=n {
        cells[j] = cells[j - 1] + id;
    }

    for (i, a) in x.iter().enumerate().map(|(i, a)| (i + 1, a)) {
        let (prev, cur) = cells[(i - 1) * cols..(i + 1) * cols].split_at_mut(cols);
        cur[0] = prev[0] + id;
        for (j, b) in y.iter().enumerate().map(|(j, b)| (j + 1, b)) {
            let sub = prev[j - 1] + scoring.score(a, b);
            let del = prev[j] + id;
            let ins = cur[j - 1] + id;
            cur[j] = sub.max(del).max(ins);
        }
    }

    Ok(ScoreMatrix {
        rows: m + 1,
        cols,
        cells,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::plus_minus_one;

    #[test]
    fn wikipedia_example_grid() {
        let x = b"GATTACA";
        let y = b"GCATGCU";
        let grid = score_matrix(x, y, &plus_minus_one::<u8, i16>, &ScoreParams::default()).unwrap();
        let expected: Vec<Vec<i16>> = vec![
            vec![0, -1, -2, -3, -4, -5, -6, -7],
            vec![-1, 1, 0, -1, -2, -3, -4, -5],
            vec![-2, 0, 0, 1, 0, -1, -2, -3],
            vec![-3, -1, -1, 0, 2, 1, 0, -1],
            vec![-4, -2, -2, -1, 1, 1, 0, -1],
            vec![-5, -3, -3, -1, 0, 0, 0, -1],
            vec![-6, -4, -2, -2, -1, -1, 1, 0],
            vec![-7, -5, -3, -1, -2, -2, 0, 0],
        ];
        assert_eq!(grid.to_rows(), expected);
        assert_eq!(grid.row(0), &[0, -1, -2, -3, -4, -5, -6, -7]);
        assert_eq!(grid.optimal_score(), 0);
        assert_eq!(grid[(7, 7)], 0);
        assert_eq!(grid.get(8, 0), None);
    }

    #[test]
    fn empty_inputs_give_gap_borders() {
        let p = ScoreParams::new(-2i32);
        let grid = score_matrix(b"", b"ABC", &plus_minus_one::<u8, i32>, &p).unwrap();
        assert_eq!((grid.rows(), grid.cols()), (1, 4));
        assert_eq!(grid.row(0), &[0, -2, -4, -6]);

        let grid = score_matrix(b"AB", b"", &plus_minus_one::<u8, i32>, &p).unwrap();
        assert_eq!(grid.to_rows(), vec![vec![0], vec![-2], vec![-4]]);
    }

    #[test]
    fn capacity_check_rejects_narrow_types() {
        let unit = ScoreParams::new(-1i8).with_score_bound(1);
        assert!(check_capacity(60, 60, &unit).is_ok());
        assert!(check_capacity(100, 100, &unit).is_err());
        assert!(check_capacity(10, 10, &ScoreParams::new(-1i8).with_score_bound(7)).is_err());
        assert!(check_capacity(1000, 1000, &ScoreParams::new(-1i8)).is_ok());

        let x = vec![b'A'; 200];
        let p = ScoreParams::new(-1i8).with_score_bound(1);
        let err = score_matrix(&x, &x, &plus_minus_one::<u8, i8>, &p).unwrap_err();
        assert!(matches!(err, AlignError::Overflow { len: 400, .. }));
    }

    #[test]
    fn capacity_check_includes_gap_penalty() {
        let p = ScoreParams::new(-100i8).with_score_bound(1);
        assert_eq!(
            check_capacity(3, 1, &p),
            Err(AlignError::Overflow {
                score_type: "i8",
                len: 4,
                bound: "100".to_string(),
            })
        );
        let err = score_matrix(b"AAA", b"T", &plus_minus_one::<u8, i8>, &p).unwrap_err();
        assert!(matches!(err, AlignError::Overflow { len: 4, .. }));
        assert!(check_capacity(1, 0, &p).is_ok());
    }

    #[test]
    fn capacity_check_rejects_min_value_magnitudes() {
        let bound_min = ScoreParams::new(-1i8).with_score_bound(i8::MIN);
        assert!(matches!(
            check_capacity(1, 1, &bound_min),
            Err(AlignError::Overflow { .. })
        ));
        let gap_min = ScoreParams::new(i8::MIN).with_score_bound(1);
        assert!(check_capacity(0, 1, &gap_min).is_err());
    }
}
