use thiserror::Error;

pub type Result<T> = std::result::Result<T, AlignError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlignError {
    #[error(
        "The score type {score_type} cannot represent the worst-case score of aligning {len} elements at magnitude {bound}."
    )]
    Overflow {
        score_type: &'static str,
        len: usize,
        bound: String,
    },

    #[error("The range {start}..{end} is not valid for sequence {sequence} of length {len}.")]
    InvalidRange {
        sequence: char,
        start: usize,
        end: usize,
        len: usize,
    },

    #[error("Cannot partition a forward row of length {left} against a backward row of length {right}.")]
    RowLengthMismatch { left: usize, right: usize },

    #[error("Cannot partition empty score rows.")]
    EmptyRow,
}
