//! Error types for lazymat.

use crate::dimension::Dimension;
use thiserror::Error;

/// Errors that can occur when building, evaluating or comparing matrices.
///
/// Every variant is raised at the point of violation: when a combinator is
/// built, when an assignment or comparison is requested, or when a checked
/// accessor is called. None of them are deferred to element access.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// Two operands, or an assignment target and its source, disagree on shape.
    #[error("cannot perform {op} on matrices with different dimensions: {left} and {right}")]
    DimensionMismatch {
        op: &'static str,
        left: Dimension,
        right: Dimension,
    },

    /// Matrix product whose inner dimensions disagree.
    #[error("dot product is not defined for dimensions {left} and {right}")]
    IncompatibleShape { left: Dimension, right: Dimension },

    /// Flat index beyond the element count.
    #[error("index {index} is out of range for {count} elements")]
    IndexOutOfRange { index: usize, count: usize },

    /// Logical (row, col) position outside the matrix.
    #[error("cell ({row}, {col}) is out of range for dimension {dimension}")]
    CellOutOfRange {
        row: usize,
        col: usize,
        dimension: Dimension,
    },

    /// Nested input where one row's width differs from the first row's.
    #[error("row {row} has {actual} elements, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Flat input whose length doesn't match rows * cols.
    #[error("data length mismatch: expected {expected} elements, got {actual}")]
    DataLengthMismatch { expected: usize, actual: usize },

    /// Unparsable configuration value.
    #[error("invalid value {value:?} for configuration key {key}")]
    InvalidConfig { key: &'static str, value: String },
}
