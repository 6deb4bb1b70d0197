//! Longest Common Subsequence (LCS) on top of the linear-space aligner.
//!
//! Runs [`hirschberg`] with a 0/1 match score and a zero gap penalty: the
//! optimal alignment score is then exactly the LCS length, and the columns
//! where both sides hold the same (non-gap) element spell out one LCS. This
//! needs O(|y|) space instead of the full LCS table.

use crate::alignment::Alignment;
use crate::error::Result;
use crate::hirschberg::hirschberg;
use crate::params::ScoreParams;
use crate::scoring::zero_one;
use crate::traits::MaybeSync;

/// Append one longest common subsequence of `x` and `y` to `out`.
///
/// `gap_marker` is only used internally as the alignment sentinel; columns
/// holding it on either side never contribute to the subsequence.
pub fn lcs_into<T, O>(x: &[T], y: &[T], gap_marker: &T, out: &mut O) -> Result<()>
where
    T: Clone + PartialEq + MaybeSync,
    O: Extend<T>,
{
    #[cfg(feature = "tracing")]
    let span = tracing::info_span!("lcs", m = x.len(), n = y.len());
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut aligned = Alignment::new();
    hirschberg(
        x,
        y,
        &zero_one::<T, i64>,
        &ScoreParams::new(0),
        gap_marker,
        &mut aligned.aligned_x,
        &mut aligned.aligned_y,
    )?;

    let (w, z) = aligned.into_parts();
    out.extend(
        w.into_iter()
            .zip(z)
            .filter(|(a, b)| a == b && a != gap_marker)
            .map(|(a, _)| a),
    );
    Ok(())
}

/// One longest common subsequence of `x` and `y`.
///
/// ```
/// use lsalign::longest_common_subsequence;
///
/// let lcs = longest_common_subsequence(b"XMJYAUZ", b"MZJAWXU", b'-').unwrap();
/// assert_eq!(lcs, b"MJAU");
/// ```
pub fn longest_common_subsequence<T>(x: &[T], y: &[T], gap_marker: T) -> Result<Vec<T>>
where
    T: Clone + PartialEq + MaybeSync,
{
    let mut out = Vec::new();
    lcs_into(x, y, &gap_marker, &mut out)?;
    Ok(out)
}
