//! Scoring parameters shared by the matrix builder, the row scorer and the
//! aligners built on top of them.

use crate::traits::Score;

/// Linear gap penalty plus an optional capacity bound.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreParams<S> {
    /// Score charged for aligning an element against a gap (`ID`, conventionally negative).
    pub gap_penalty: S,
    /// Largest magnitude the scoring function can produce.
    ///
    /// When set, every computation first checks that the worst-case alignment
    /// score, using the larger of this bound and `|gap_penalty|` per column, is
    /// representable in `S` and fails with
    /// [`AlignError::Overflow`](crate::error::AlignError::Overflow) otherwise.
    pub score_bound: Option<S>,
}

impl<S: Score> ScoreParams<S> {
    pub fn new(gap_penalty: S) -> Self {
        Self {
            gap_penalty,
            score_bound: None,
        }
    }

    pub fn with_score_bound(mut self, bound: S) -> Self {
        self.score_bound = Some(bound);
        self
    }
}

impl<S: Score> Default for ScoreParams<S> {
    fn default() -> Self {
        Self::new(-S::one())
    }
}
