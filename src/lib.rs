//! Linear-space optimal pairwise alignment (`lsalign`)
//!
//! This crate computes optimal global alignments of two sequences under a
//! caller-supplied scoring function and a linear gap penalty, and derives a
//! longest common subsequence from such an alignment.
//!
//! ## Core idea
//! 1. Score every pair of prefixes with the Needleman–Wunsch recurrence.
//! 2. Either keep the full matrix and backtrace it ([`nw`]), or
//! 3. keep only one score row at a time and recursively split the problem at
//!    the column where an optimal alignment crosses the middle row of `x`
//!    ([`hirschberg`]), which needs linear instead of quadratic space.
//!
//! Both aligners share one scoring abstraction ([`ScoringFunction`]) and one
//! output contract: aligned columns are appended left to right to two
//! caller-owned sinks (any [`Extend`]), with a caller-chosen gap marker
//! standing in for "no element".
//!
//! ## Quick start
//! ```
//! use lsalign::{align_linear_space, longest_common_subsequence, scoring::plus_minus_one};
//!
//! let a = align_linear_space(b"GATTACA", b"GCATGCU", &plus_minus_one::<u8, i32>, b'-', -1).unwrap();
//! assert_eq!(a.to_strings(), ("G-ATTACA".into(), "GCA-TGCU".into()));
//!
//! let lcs = longest_common_subsequence(b"XMJYAUZ", b"MZJAWXU", b'-').unwrap();
//! assert_eq!(lcs, b"MJAU");
//! ```
//!
//! ## Features
//! - `parallel`: score the forward and backward rows of every split concurrently (rayon).
//! - `tracing`: emit spans for matrix building and each recursion level.

pub mod alignment;
pub mod builder;
pub mod engine;
pub mod error;
pub mod hirschberg;
pub mod lcs;
pub mod matrix;
pub mod nw;
pub mod params;
pub mod row;
pub mod scoring;
pub mod traits;
pub mod utils;

pub use crate::alignment::{Alignment, FnSink};
pub use crate::builder::AlignerBuilder;
pub use crate::engine::{Aligner, Strategy};
pub use crate::error::{AlignError, Result};
pub use crate::hirschberg::align_linear_space;
pub use crate::lcs::longest_common_subsequence;
pub use crate::nw::align_quadratic;
pub use crate::params::ScoreParams;
pub use crate::traits::{Score, ScoringFunction};
