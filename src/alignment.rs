//! Alignment results and output sinks.
//!
//! The aligners never allocate the final result themselves: they append the
//! aligned columns, left to right, to two caller-owned sinks. Any
//! [`Extend<T>`] works as a sink (`Vec<T>`, `String` for `char` elements, ...);
//! [`FnSink`] turns a closure into one. [`Alignment`] is the convenience
//! container used by the `align*` wrappers.

use crate::traits::{Score, ScoringFunction};

/// Sink that forwards every appended element to a closure.
///
/// ```
/// use lsalign::alignment::FnSink;
///
/// let mut seen = Vec::new();
/// let mut sink = FnSink(|c: u8| seen.push(c));
/// sink.extend(*b"AC");
/// drop(sink);
/// assert_eq!(seen, b"AC");
/// ```
pub struct FnSink<F>(pub F);

impl<T, F: FnMut(T)> Extend<T> for FnSink<F> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        iter.into_iter().for_each(&mut self.0);
    }
}

/// Pair of equal-length aligned sequences.
///
/// `aligned_x` is the first input with gap markers inserted, `aligned_y` the
/// second one.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Alignment<T> {
    pub aligned_x: Vec<T>,
    pub aligned_y: Vec<T>,
}

impl<T> Default for Alignment<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Alignment<T> {
    pub fn new() -> Self {
        Self {
            aligned_x: Vec::new(),
            aligned_y: Vec::new(),
        }
    }

    /// Number of alignment columns.
    #[inline]
    pub fn len(&self) -> usize {
        self.aligned_x.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.aligned_x.is_empty()
    }

    /// Columns of the alignment, left to right.
    pub fn columns(&self) -> impl Iterator<Item = (&T, &T)> + '_ {
        self.aligned_x.iter().zip(self.aligned_y.iter())
    }

    /// Split into `(aligned_x, aligned_y)`.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.aligned_x, self.aligned_y)
    }
}

impl<T: PartialEq> Alignment<T> {
    /// Number of gap markers on either side.
    pub fn gap_count(&self, gap_marker: &T) -> usize {
        self.aligned_x
            .iter()
            .chain(self.aligned_y.iter())
            .filter(|e| *e == gap_marker)
            .count()
    }

    /// Total score of the alignment: `scoring` for every column without a gap,
    /// `gap_penalty` for every column with one.
    pub fn score<S, F>(&self, scoring: &F, gap_penalty: S, gap_marker: &T) -> S
    where
        S: Score,
        F: ScoringFunction<T, S> + ?Sized,
    {
        self.columns().fold(S::zero(), |acc, (a, b)| {
            if a == gap_marker || b == gap_marker {
                acc + gap_penalty
            } else {
                acc + scoring.score(a, b)
            }
        })
    }
}

impl Alignment<u8> {
    /// Render both rows as text, replacing invalid UTF-8.
    pub fn to_strings(&self) -> (String, String) {
        (
            String::from_utf8_lossy(&self.aligned_x).into_owned(),
            String::from_utf8_lossy(&self.aligned_y).into_owned(),
        )
    }
}

impl Alignment<char> {
    pub fn to_strings(&self) -> (String, String) {
        (
            self.aligned_x.iter().collect(),
            self.aligned_y.iter().collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::plus_minus_one;

    fn wiki() -> Alignment<u8> {
        Alignment {
            aligned_x: b"G-ATTACA".to_vec(),
            aligned_y: b"GCA-TGCU".to_vec(),
        }
    }

    #[test]
    fn len_and_gaps() {
        let a = wiki();
        assert_eq!(a.len(), 8);
        assert!(!a.is_empty());
        assert_eq!(a.gap_count(&b'-'), 2);
        assert!(Alignment::<u8>::new().is_empty());
    }

    #[test]
    fn score_sums_columns() {
        // G/G +1, -/C -1, A/A +1, T/- -1, T/T +1, A/G -1, C/C +1, A/U -1
        let a = wiki();
        assert_eq!(a.score(&plus_minus_one::<u8, i32>, -1, &b'-'), 0);
    }

    #[test]
    fn string_rendering() {
        assert_eq!(
            wiki().to_strings(),
            ("G-ATTACA".to_string(), "GCA-TGCU".to_string())
        );
        let chars = Alignment {
            aligned_x: vec!['a', '-'],
            aligned_y: vec!['a', 'b'],
        };
        assert_eq!(chars.to_strings(), ("a-".to_string(), "ab".to_string()));
    }

    #[test]
    fn fn_sink_forwards_in_order() {
        let mut out = String::new();
        {
            let mut sink = FnSink(|c: char| out.push(c));
            sink.extend("ab".chars());
            sink.extend(['c']);
        }
        assert_eq!(out, "abc");
    }
}
