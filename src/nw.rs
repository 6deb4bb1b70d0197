//! Needleman–Wunsch global alignment with full backtrace.
//!
//! Builds the whole score matrix (see [`crate::matrix`]) and walks it from
//! `(|x|, |y|)` back to the origin. Ties are broken in a fixed order so the
//! emitted alignment is reproducible:
//! 1. diagonal (match / substitution),
//! 2. up (element of `x` against a gap),
//! 3. left (gap against an element of `y`).

use std::iter;

use crate::alignment::Alignment;
use crate::error::Result;
use crate::matrix::{check_capacity, score_matrix};
use crate::params::ScoreParams;
use crate::traits::{Score, ScoringFunction};

/// Align `x` against `y` in quadratic space, appending the aligned rows to
/// `w` (for `x`) and `z` (for `y`).
///
/// Empty inputs short-circuit to "all gaps on one side" without building a
/// matrix.
pub fn needleman_wunsch<T, S, F, W, Z>(
    x: &[T],
    y: &[T],
    scoring: &F,
    params: &ScoreParams<S>,
    gap_marker: &T,
    w: &mut W,
    z: &mut Z,
) -> Result<()>
where
    T: Clone,
    S: Score,
    F: ScoringFunction<T, S> + ?Sized,
    W: Extend<T>,
    Z: Extend<T>,
{
    check_capacity(x.len(), y.len(), params)?;

    if x.is_empty() || y.is_empty() {
        w.extend(x.iter().cloned());
        w.extend(iter::repeat(gap_marker.clone()).take(y.len()));
        z.extend(iter::repeat(gap_marker.clone()).take(x.len()));
        z.extend(y.iter().cloned());
        return Ok(());
    }

    let grid = score_matrix(x, y, scoring, params)?;
    let id = params.gap_penalty;

    let (mut i, mut j) = (x.len(), y.len());
    let mut rev_w = Vec::with_capacity(i + j);
    let mut rev_z = Vec::with_capacity(i + j);

    while i > 0 || j > 0 {
        if i > 0
            && j > 0
            && grid[(i, j)] == grid[(i - 1, j - 1)] + scoring.score(&x[i - 1], &y[j - 1])
        {
            rev_w.push(x[i - 1].clone());
            rev_z.push(y[j - 1].clone());
            i -= 1;
            j -= 1;
        } else if i > 0 && grid[(i, j)] == grid[(i - 1, j)] + id {
            rev_w.push(x[i - 1].clone());
            rev_z.push(gap_marker.clone());
            i -= 1;
        } else {
            // Column 0 is always reached from above, so j > 0 here.
            rev_w.push(gap_marker.clone());
            rev_z.push(y[j - 1].clone());
            j -= 1;
        }
    }

    w.extend(rev_w.into_iter().rev());
    z.extend(rev_z.into_iter().rev());
    Ok(())
}

/// Quadratic-space global alignment returning an owned [`Alignment`].
///
/// ```
/// use lsalign::{align_quadratic, scoring::plus_minus_one};
///
/// let a = align_quadratic(b"GATTACA", b"GCATGCU", &plus_minus_one::<u8, i16>, -1, b'-').unwrap();
/// assert_eq!(a.aligned_x, b"G-ATTACA");
/// assert_eq!(a.aligned_y, b"GCA-TGCU");
/// ```
pub fn align_quadratic<T, S, F>(
    x: &[T],
    y: &[T],
    scoring: &F,
    gap_penalty: S,
    gap_marker: T,
) -> Result<Alignment<T>>
where
    T: Clone,
    S: Score,
    F: ScoringFunction<T, S> + ?Sized,
{
    let mut out = Alignment::new();
    needleman_wunsch(
        x,
        y,
        scoring,
        &ScoreParams::new(gap_penalty),
        &gap_marker,
        &mut out.aligned_x,
        &mut out.aligned_y,
    )?;
    Ok(out)
}
