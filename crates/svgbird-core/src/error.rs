//! Error types for reading point values.

use thiserror::Error;

use crate::point_value::PointKind;

/// Errors produced when a point value is read back incorrectly.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PointValueError {
    /// The slot holds a different interpretation than the one requested.
    #[error("{}expected {expected} but found {found}", index_prefix(.index))]
    KindMismatch {
        /// Position in the owning sequence, if any
        index: Option<usize>,
        expected: PointKind,
        found: PointKind,
    },

    #[error("index {index} out of bounds for {len} point values")]
    OutOfBounds { index: usize, len: usize },

    #[error("{cells} cells but {kinds} kinds were provided")]
    LengthMismatch { cells: usize, kinds: usize },
}

impl PointValueError {
    /// Attach a sequence index to a kind mismatch.
    ///
    /// Other variants are returned unchanged.
    pub fn at_index(self, at: usize) -> Self {
        match self {
            Self::KindMismatch {
                expected, found, ..
            } => Self::KindMismatch {
                index: Some(at),
                expected,
                found,
            },
            other => other,
        }
    }
}

fn index_prefix(index: &Option<usize>) -> String {
    index
        .map(|i| format!("point value {i}: "))
        .unwrap_or_default()
}
