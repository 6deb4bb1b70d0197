//! Configured aligner.
//!
//! [`Aligner`] bundles a scoring function, a gap penalty, a gap marker and the
//! strategy used to compute the alignment, so repeated alignments do not have
//! to thread the same arguments through every call. Each call is independent:
//! the aligner holds no state between alignments.

use std::ops::Range;

use crate::alignment::Alignment;
use crate::error::Result;
use crate::hirschberg::hirschberg;
use crate::nw::needleman_wunsch;
use crate::params::ScoreParams;
use crate::traits::{MaybeSync, Score, ScoringFunction};
use crate::utils::validate_range;

/// How an [`Aligner`] computes its alignments.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Full score matrix plus backtrace, O(|x|·|y|) space.
    Quadratic,
    /// Hirschberg divide-and-conquer, O(|y|) auxiliary space.
    #[default]
    LinearSpace,
}

/// Global pairwise aligner for sequences of `T` scored in `S`.
///
/// Typical usage:
/// ```
/// use lsalign::{Aligner, scoring::plus_minus_one};
///
/// let aligner = Aligner::new(plus_minus_one::<u8, i32>, b'-');
/// let alignment = aligner.align(b"GATTACA", b"GCATGCU").unwrap();
/// assert_eq!(alignment.to_strings(), ("G-ATTACA".into(), "GCA-TGCU".into()));
/// assert_eq!(aligner.score_of(&alignment), 0);
/// ```
#[derive(Clone, Debug)]
pub struct Aligner<T, S, F> {
    scoring: F,
    params: ScoreParams<S>,
    gap_marker: T,
    strategy: Strategy,
}

impl<T, S, F> Aligner<T, S, F>
where
    T: Clone + MaybeSync,
    S: Score,
    F: ScoringFunction<T, S> + MaybeSync,
{
    /// Aligner with gap penalty `-1`, no capacity bound and the linear-space strategy.
    pub fn new(scoring: F, gap_marker: T) -> Self {
        Self::with_params(scoring, gap_marker, ScoreParams::default(), Strategy::default())
    }

    pub fn with_params(
        scoring: F,
        gap_marker: T,
        params: ScoreParams<S>,
        strategy: Strategy,
    ) -> Self {
        Self {
            scoring,
            params,
            gap_marker,
            strategy,
        }
    }

    pub fn scoring(&self) -> &F {
        &self.scoring
    }

    pub fn params(&self) -> &ScoreParams<S> {
        &self.params
    }

    pub fn gap_marker(&self) -> &T {
        &self.gap_marker
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Align `x` against `y`, appending aligned `x` to `w` and aligned `y` to `z`.
    pub fn align_into<W, Z>(&self, x: &[T], y: &[T], w: &mut W, z: &mut Z) -> Result<()>
    where
        W: Extend<T>,
        Z: Extend<T>,
    {
        match self.strategy {
            Strategy::Quadratic => {
                needleman_wunsch(x, y, &self.scoring, &self.params, &self.gap_marker, w, z)
            }
            Strategy::LinearSpace => {
                hirschberg(x, y, &self.scoring, &self.params, &self.gap_marker, w, z)
            }
        }
    }

    /// Align the sub-ranges `x[x_range]` and `y[y_range]`.
    ///
    /// Fails with [`AlignError::InvalidRange`](crate::error::AlignError::InvalidRange)
    /// before emitting anything if either range does not fit its sequence.
    pub fn align_range_into<W, Z>(
        &self,
        x: &[T],
        x_range: Range<usize>,
        y: &[T],
        y_range: Range<usize>,
        w: &mut W,
        z: &mut Z,
    ) -> Result<()>
    where
        W: Extend<T>,
        Z: Extend<T>,
    {
        validate_range('x', &x_range, x.len())?;
        validate_range('y', &y_range, y.len())?;
        self.align_into(&x[x_range], &y[y_range], w, z)
    }

    /// Align `x` against `y` into a freshly allocated [`Alignment`].
    pub fn align(&self, x: &[T], y: &[T]) -> Result<Alignment<T>> {
        let mut out = Alignment::new();
        self.align_into(x, y, &mut out.aligned_x, &mut out.aligned_y)?;
        Ok(out)
    }
}

impl<T, S, F> Aligner<T, S, F>
where
    T: PartialEq,
    S: Score,
    F: ScoringFunction<T, S>,
{
    /// Total score of `alignment` under this aligner's scoring function and gap penalty.
    pub fn score_of(&self, alignment: &Alignment<T>) -> S {
        alignment.score(&self.scoring, self.params.gap_penalty, &self.gap_marker)
    }
}
