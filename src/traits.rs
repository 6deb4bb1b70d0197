//! Core capabilities shared by every aligner in this crate.
//!
//! Two abstractions drive the whole engine:
//! - [`Score`]: the numeric type the dynamic program is computed in. It is an
//!   explicit type parameter chosen by the caller, independent of the element
//!   type of the sequences.
//! - [`ScoringFunction`]: a pure callable mapping a pair of elements to a score.
//!
//! Every representation of a scoring callable (closure, fn pointer, boxed
//! `dyn Fn`, functor struct) satisfies [`ScoringFunction`] and behaves the same.

use std::fmt::Debug;

use num_traits::{Bounded, CheckedMul, NumCast, Signed};

/// Signed numeric type a score matrix is computed in.
///
/// Must be wide enough to hold the worst-case alignment score for the inputs
/// being aligned; see [`crate::matrix::check_capacity`].
pub trait Score: Copy + Ord + Debug + Signed + Bounded + CheckedMul + NumCast + Send + Sync {}

impl<S> Score for S where
    S: Copy + Ord + Debug + Signed + Bounded + CheckedMul + NumCast + Send + Sync
{
}

/// Pure mapping `(element, element) -> score`.
///
/// Implementations must be stateless from the engine's point of view: the
/// engine calls `score` repeatedly, in no guaranteed order, and relies on the
/// same inputs always producing the same output.
pub trait ScoringFunction<T, S> {
    /// Score of aligning `a` (from the first sequence) against `b` (from the second).
    fn score(&self, a: &T, b: &T) -> S;
}

impl<T, S, F> ScoringFunction<T, S> for F
where
    F: Fn(&T, &T) -> S,
{
    #[inline(always)]
    fn score(&self, a: &T, b: &T) -> S {
        self(a, b)
    }
}

/// `Sync` when the `parallel` feature is enabled, a no-op bound otherwise.
///
/// Lets the divide-and-conquer aligner share its inputs across rayon tasks
/// without imposing thread-safety on single-threaded builds.
#[cfg(feature = "parallel")]
pub trait MaybeSync: Sync {}

#[cfg(feature = "parallel")]
impl<T: Sync + ?Sized> MaybeSync for T {}

/// `Sync` when the `parallel` feature is enabled, a no-op bound otherwise.
#[cfg(not(feature = "parallel"))]
pub trait MaybeSync {}

#[cfg(not(feature = "parallel"))]
impl<T: ?Sized> MaybeSync for T {}
