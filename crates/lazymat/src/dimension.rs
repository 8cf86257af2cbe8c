//! Matrix shape descriptor.

use crate::error::MatrixError;
use std::fmt;

/// Immutable (rows, cols) pair describing a matrix shape.
///
/// Equality is structural. Display renders the diagnostic form `[rows,cols]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dimension {
    rows: usize,
    cols: usize,
}

impl Dimension {
    /// Create a dimension.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazymat::Dimension;
    ///
    /// let d = Dimension::new(2, 3);
    /// assert_eq!(d.count(), 6);
    /// assert_eq!(d.to_string(), "[2,3]");
    /// ```
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Number of rows.
    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells, rows * cols.
    #[inline]
    pub const fn count(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether the shape holds no cells.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Whether the logical position (row, col) lies inside this shape.
    #[inline]
    pub const fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Fail with `DimensionMismatch` unless `other` equals `self`.
    ///
    /// `op` names the operation in the error message.
    pub fn ensure_same(&self, other: &Dimension, op: &'static str) -> Result<(), MatrixError> {
        if self != other {
            return Err(MatrixError::DimensionMismatch {
                op,
                left: *self,
                right: *other,
            });
        }
        Ok(())
    }
}

impl From<(usize, usize)> for Dimension {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.rows, self.cols)
    }
}
