//! Ready-made scoring functions.
//!
//! Any `Fn(&T, &T) -> S` works as a scoring function; these cover the common
//! cases and double as examples of the closure-free (functor) representation.

use crate::traits::{Score, ScoringFunction};
use crate::utils::checked_abs;

/// +1 for equal elements, -1 otherwise.
#[inline]
pub fn plus_minus_one<T: PartialEq, S: Score>(a: &T, b: &T) -> S {
    if a == b {
        S::one()
    } else {
        -S::one()
    }
}

/// 1 for equal elements, 0 otherwise. Used by the LCS extractor.
#[inline]
pub fn zero_one<T: PartialEq, S: Score>(a: &T, b: &T) -> S {
    if a == b {
        S::one()
    } else {
        S::zero()
    }
}

/// Fixed match / mismatch scores.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MatchMismatch<S> {
    pub matched: S,
    pub mismatched: S,
}

impl<S: Score> MatchMismatch<S> {
    pub fn new(matched: S, mismatched: S) -> Self {
        Self {
            matched,
            mismatched,
        }
    }

    /// Largest magnitude this function can return, handy as a capacity bound.
    ///
    /// `None` when either score is `S::min_value()`.
    pub fn max_magnitude(&self) -> Option<S> {
        Some(checked_abs(self.matched)?.max(checked_abs(self.mismatched)?))
    }
}

impl<T: PartialEq, S: Score> ScoringFunction<T, S> for MatchMismatch<S> {
    #[inline(always)]
    fn score(&self, a: &T, b: &T) -> S {
        if a == b {
            self.matched
        } else {
            self.mismatched
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        assert_eq!(plus_minus_one::<u8, i16>(&b'A', &b'A'), 1);
        assert_eq!(plus_minus_one::<u8, i16>(&b'A', &b'G'), -1);
        assert_eq!(zero_one::<char, i32>(&'x', &'x'), 1);
        assert_eq!(zero_one::<char, i32>(&'x', &'y'), 0);
    }

    #[test]
    fn functor_matches_preset() {
        let f = MatchMismatch::new(1i32, -1);
        for (a, b) in [(b'A', b'A'), (b'C', b'T')] {
            assert_eq!(f.score(&a, &b), plus_minus_one::<u8, i32>(&a, &b));
        }
        assert_eq!(MatchMismatch::new(2i64, -7).max_magnitude(), Some(7));
        assert_eq!(MatchMismatch::new(1i8, i8::MIN).max_magnitude(), None);
    }
}
