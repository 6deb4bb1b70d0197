//! Assorted helpers.

use std::ops::Range;

use crate::error::{AlignError, Result};
use crate::traits::Score;

/// Check that `range` addresses a slice of a sequence of length `len`.
///
/// `sequence` is only used to label the error (`'x'` or `'y'`).
#[inline]
pub fn validate_range(sequence: char, range: &Range<usize>, len: usize) -> Result<()> {
    if range.start > range.end || range.end > len {
        return Err(AlignError::InvalidRange {
            sequence,
            start: range.start,
            end: range.end,
            len,
        });
    }
    Ok(())
}

/// Owned reversed copy of `s`.
#[inline]
pub fn reversed<T: Clone>(s: &[T]) -> Vec<T> {
    s.iter().rev().cloned().collect()
}

/// `|v|`, or `None` for `S::min_value()` whose magnitude does not fit in `S`.
#[inline]
pub fn checked_abs<S: Score>(v: S) -> Option<S> {
    if v == S::min_value() {
        None
    } else {
        Some(v.abs())
    }
}
