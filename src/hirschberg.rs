//! Hirschberg's divide-and-conquer global alignment.
//!
//! Reaches the same optimal score as [`crate::nw::needleman_wunsch`] in
//! O(|x|·|y|) time but only O(|y|) auxiliary space per level:
//!
//! - empty `x`: all of `y` against gaps,
//! - empty `y`: all of `x` against gaps,
//! - `|x| == 1` or `|y| == 1`: plain Needleman–Wunsch,
//! - otherwise split `x` at `|x| / 2`, score the upper half forward and the
//!   lower half backward (on reversed copies), pick the split column of `y`
//!   with [`partition`] and recurse left then right.
//!
//! The left sub-problem is fully emitted before the right one starts, so the
//! sinks receive columns in final left-to-right order.
//!
//! When several alignments are optimal the split column is the leftmost one,
//! which can select a different (equally scored) alignment than the
//! quadratic backtrace: `AB` vs `BA` gives `AB-`/`-BA` here and `-AB`/`BA-`
//! there.

use std::iter;

use crate::alignment::Alignment;
use crate::error::Result;
use crate::matrix::check_capacity;
use crate::nw::needleman_wunsch;
use crate::params::ScoreParams;
use crate::row::{partition, score_last_row};
use crate::traits::{MaybeSync, Score, ScoringFunction};
use crate::utils::reversed;
#[cfg(feature = "parallel")]
use rayon::join;

/// Align `x` against `y` in linear space, appending the aligned rows to `w`
/// (for `x`) and `z` (for `y`).
///
/// Any error (capacity overflow) aborts the whole alignment; nothing is
/// retried.
pub fn hirschberg<T, S, F, W, Z>(
    x: &[T],
    y: &[T],
    scoring: &F,
    params: &ScoreParams<S>,
    gap_marker: &T,
    w: &mut W,
    z: &mut Z,
) -> Result<()>
where
    T: Clone + MaybeSync,
    S: Score,
    F: ScoringFunction<T, S> + MaybeSync + ?Sized,
    W: Extend<T>,
    Z: Extend<T>,
{
    check_capacity(x.len(), y.len(), params)?;

    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("hirschberg", m = x.len(), n = y.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    recurse(x, y, scoring, params, gap_marker, w, z, 0)
}

#[allow(clippy::too_many_arguments)]
fn recurse<T, S, F, W, Z>(
    x: &[T],
    y: &[T],
    scoring: &F,
    params: &ScoreParams<S>,
    gap_marker: &T,
    w: &mut W,
    z: &mut Z,
    depth: usize,
) -> Result<()>
where
    T: Clone + MaybeSync,
    S: Score,
    F: ScoringFunction<T, S> + MaybeSync + ?Sized,
    W: Extend<T>,
    Z: Extend<T>,
{
    if x.is_empty() {
        w.extend(iter::repeat(gap_marker.clone()).take(y.len()));
        z.extend(y.iter().cloned());
        return Ok(());
    }
    if y.is_empty() {
        w.extend(x.iter().cloned());
        z.extend(iter::repeat(gap_marker.clone()).take(x.len()));
        return Ok(());
    }
    if x.len() == 1 || y.len() == 1 {
        return needleman_wunsch(x, y, scoring, params, gap_marker, w, z);
    }

    #[cfg(feature = "tracing")]
    let span = tracing::trace_span!("hirschberg_split", depth, m = x.len(), n = y.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let (x_upper, x_lower) = x.split_at(x.len() / 2);
    let (forward, backward) = score_rows_pair(x_upper, x_lower, y, scoring, params)?;
    let y_mid = partition(&forward, &backward)?;
    drop((forward, backward));

    let (y_left, y_right) = y.split_at(y_mid);
    recurse(x_upper, y_left, scoring, params, gap_marker, w, z, depth + 1)?;
    recurse(x_lower, y_right, scoring, params, gap_marker, w, z, depth + 1)
}

/// Forward row of `x_upper` against `y` and backward row of `x_lower`
/// against `y`, computed concurrently.
#[cfg(feature = "parallel")]
fn score_rows_pair<T, S, F>(
    x_upper: &[T],
    x_lower: &[T],
    y: &[T],
    scoring: &F,
    params: &ScoreParams<S>,
) -> Result<(Vec<S>, Vec<S>)>
where
    T: Clone + MaybeSync,
    S: Score,
    F: ScoringFunction<T, S> + MaybeSync + ?Sized,
{
    let (forward, backward) = join(
        || score_last_row(x_upper, y, scoring, params),
        || score_last_row(&reversed(x_lower), &reversed(y), scoring, params),
    );
    Ok((forward?, backward?))
}

/// Forward row of `x_upper` against `y` and backward row of `x_lower`
/// against `y`.
#[cfg(not(feature = "parallel"))]
fn score_rows_pair<T, S, F>(
    x_upper: &[T],
    x_lower: &[T],
    y: &[T],
    scoring: &F,
    params: &ScoreParams<S>,
) -> Result<(Vec<S>, Vec<S>)>
where
    T: Clone + MaybeSync,
    S: Score,
    F: ScoringFunction<T, S> + MaybeSync + ?Sized,
{
    let forward = score_last_row(x_upper, y, scoring, params)?;
    let backward = score_last_row(&reversed(x_lower), &reversed(y), scoring, params)?;
    Ok((forward, backward))
}

/// Linear-space global alignment returning an owned [`Alignment`].
///
/// Same optimal score as [`crate::nw::align_quadratic`] for every input.
///
/// ```
/// use lsalign::{align_linear_space, scoring::plus_minus_one};
///
/// let a = align_linear_space(b"AGTACGCA", b"TATGC", &plus_minus_one::<u8, i32>, b'-', -1).unwrap();
/// assert_eq!(a.aligned_x, b"AGTACGCA");
/// assert_eq!(a.aligned_y, b"--TATGC-");
/// ```
pub fn align_linear_space<T, S, F>(
    x: &[T],
    y: &[T],
    scoring: &F,
    gap_marker: T,
    gap_penalty: S,
) -> Result<Alignment<T>>
where
    T: Clone + MaybeSync,
    S: Score,
    F: ScoringFunction<T, S> + MaybeSync + ?Sized,
{
    let mut out = Alignment::new();
    hirschberg(
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alignment::FnSink;
    use crate::nw::align_quadratic;
    use crate::scoring::plus_minus_one;

    fn run(x: &[u8], y: &[u8]) -> (String, String) {
        align_linear_space(x, y, &plus_minus_one::<u8, i32>, b'-', -1)
            .unwrap()
            .to_strings()
    }

    #[test]
    fn wikipedia_example() {
        assert_eq!(
            run(b"GATTACA", b"GCATGCU"),
            ("G-ATTACA".into(), "GCA-TGCU".into())
        );
    }

    #[test]
    fn second_reference_example() {
        assert_eq!(
            run(b"AGTACGCA", b"TATGC"),
            ("AGTACGCA".into(), "--TATGC-".into())
        );
    }

    #[test]
    fn terminal_cases() {
        assert_eq!(run(b"", b"ACG"), ("---".into(), "ACG".into()));
        assert_eq!(run(b"ACG", b""), ("ACG".into(), "---".into()));
        assert_eq!(run(b"", b""), (String::new(), String::new()));
        assert_eq!(run(b"C", b"ACG"), run_quadratic(b"C", b"ACG"));
        assert_eq!(run(b"ACG", b"G"), run_quadratic(b"ACG", b"G"));
    }

    fn run_quadratic(x: &[u8], y: &[u8]) -> (String, String) {
        align_quadratic(x, y, &plus_minus_one::<u8, i32>, -1, b'-')
            .unwrap()
            .to_strings()
    }

    #[test]
    fn same_score_as_quadratic_on_longer_input() {
        let x = b"ACCGGTCGAGTGCGCGGAAGCCGGCCGAA";
        let y = b"GTCGTTCGGAATGCCGTTGCTCTGTAAA";
        let f = plus_minus_one::<u8, i32>;
        for (a, b) in [(&x[..], &y[..]), (&y[..], &x[..])] {
            let linear = align_linear_space(a, b, &f, b'-', -1).unwrap();
            let quadratic = align_quadratic(a, b, &f, -1, b'-').unwrap();
            assert_eq!(linear.aligned_x.iter().filter(|&&c| c != b'-').count(), a.len());
            assert_eq!(linear.aligned_y.iter().filter(|&&c| c != b'-').count(), b.len());
            assert_eq!(linear.score(&f, -1, &b'-'), quadratic.score(&f, -1, &b'-'));
        }
    }

    #[test]
    fn ties_resolve_to_leftmost_split() {
        assert_eq!(run(b"AB", b"BA"), ("AB-".into(), "-BA".into()));
        assert_eq!(run_quadratic(b"AB", b"BA"), ("-AB".into(), "BA-".into()));
    }

    #[test]
    fn emits_through_callback_sinks_in_order() {
        let mut columns = Vec::new();
        let mut w = Vec::new();
        hirschberg(
            b"GATTACA",
            b"GCATGCU",
            &plus_minus_one::<u8, i32>,
            &ScoreParams::default(),
            &b'-',
            &mut w,
            &mut FnSink(|c: u8| columns.push(c)),
        )
        .unwrap();
        assert_eq!(w, b"G-ATTACA");
        assert_eq!(columns, b"GCA-TGCU");
    }
}
