//! Storage ordering policies.
//!
//! A policy maps a logical (row, col) position to a physical offset in a flat
//! backing array. Two policies exist:
//!
//! ```text
//! RowMajor:    offset(i, j) = i * cols + j    (rows outer, columns inner)
//! ColumnMajor: offset(i, j) = j * rows + i    (columns outer, rows inner)
//! ```
//!
//! Policies are zero-sized types; the layout tag of an expression is a
//! compile-time constant (`OrderingPolicy::LAYOUT`). Mixing layouts inside one
//! expression is handled by [`translate`], which converts a flat index under
//! one policy into the flat index of the same cell under another.

use crate::dimension::Dimension;
use std::fmt;

/// Runtime tag identifying an ordering policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layout {
    RowMajor,
    ColumnMajor,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Layout::RowMajor => f.write_str("row-major"),
            Layout::ColumnMajor => f.write_str("column-major"),
        }
    }
}

/// Pure index arithmetic for one physical layout.
///
/// None of these functions check bounds; callers validate positions against
/// the `Dimension` first.
pub trait OrderingPolicy: Copy + Default + fmt::Debug + Send + Sync + 'static {
    /// The tag of this policy.
    const LAYOUT: Layout;

    /// Physical offset of the logical cell (row, col).
    fn offset(row: usize, col: usize, dim: Dimension) -> usize;

    /// Logical (row, col) addressed by a physical offset.
    fn cell(index: usize, dim: Dimension) -> (usize, usize);

    /// Convert a flat index valid under this layout into the flat index of the
    /// same logical cell under the other layout.
    fn to_other(index: usize, dim: Dimension) -> usize;

    /// Flatten nested row input into this layout's physical order.
    ///
    /// Every row must already have `dim.cols()` elements.
    fn fill<T: Copy, R: AsRef<[T]>>(rows: &[R], dim: Dimension) -> Vec<T>;
}

/// Row-major (C) ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct RowMajor;

/// Column-major (Fortran) ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ColumnMajor;

impl OrderingPolicy for RowMajor {
    const LAYOUT: Layout = Layout::RowMajor;

    #[inline]
    fn offset(row: usize, col: usize, dim: Dimension) -> usize {
        row * dim.cols() + col
    }

    #[inline]
    fn cell(index: usize, dim: Dimension) -> (usize, usize) {
        (index / dim.cols(), index % dim.cols())
    }

    #[inline]
    fn to_other(index: usize, dim: Dimension) -> usize {
        let (row, col) = Self::cell(index, dim);
        ColumnMajor::offset(row, col, dim)
    }

    fn fill<T: Copy, R: AsRef<[T]>>(rows: &[R], dim: Dimension) -> Vec<T> {
        let mut data = Vec::with_capacity(dim.count());
        for row in rows {
            data.extend_from_slice(row.as_ref());
        }
        data
    }
}

impl OrderingPolicy for ColumnMajor {
    const LAYOUT: Layout = Layout::ColumnMajor;

    #[inline]
    fn offset(row: usize, col: usize, dim: Dimension) -> usize {
        col * dim.rows() + row
    }

    #[inline]
    fn cell(index: usize, dim: Dimension) -> (usize, usize) {
        (index % dim.rows(), index / dim.rows())
    }

    #[inline]
    fn to_other(index: usize, dim: Dimension) -> usize {
        let (row, col) = Self::cell(index, dim);
        RowMajor::offset(row, col, dim)
    }

    fn fill<T: Copy, R: AsRef<[T]>>(rows: &[R], dim: Dimension) -> Vec<T> {
        let mut data = Vec::with_capacity(dim.count());
        for col in 0..dim.cols() {
            for row in rows {
                data.push(row.as_ref()[col]);
            }
        }
        data
    }
}

/// Translate a flat index valid under `From` into the flat index addressing
/// the same logical cell under `To`.
///
/// When both policies share a layout the index is returned untouched; the
/// comparison is between constants, so that path carries no remap cost.
///
/// # Examples
///
/// ```
/// use lazymat::Dimension;
/// use lazymat::layout::{translate, ColumnMajor, RowMajor};
///
/// let dim = Dimension::new(2, 3);
/// // Row-major index 1 is cell (0, 1), which is column-major index 2.
/// assert_eq!(translate::<RowMajor, ColumnMajor>(1, dim), 2);
/// assert_eq!(translate::<RowMajor, RowMajor>(1, dim), 1);
/// ```
#[inline]
pub fn translate<From: OrderingPolicy, To: OrderingPolicy>(index: usize, dim: Dimension) -> usize {
    if From::LAYOUT == To::LAYOUT {
        index
    } else {
        From::to_other(index, dim)
    }
}
