//! Flat element store behind every leaf matrix.

use crate::scalar::Scalar;

/// `rows * cols` elements in whatever physical order the owning matrix's
/// policy dictates. The length is fixed once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Dense<T: Scalar> {
    cells: Vec<T>,
}

impl<T: Scalar> Dense<T> {
    pub fn zeros(len: usize) -> Self {
        Self::filled(len, T::zero())
    }

    pub fn filled(len: usize, value: T) -> Self {
        Self {
            cells: vec![value; len],
        }
    }

    /// Adopt `cells` as-is; no reordering happens here.
    pub fn from_vec(cells: Vec<T>) -> Self {
        Self { cells }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.cells
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.cells
    }

    pub fn into_vec(self) -> Vec<T> {
        self.cells
    }
}

impl<T: Scalar> std::ops::Index<usize> for Dense<T> {
    type Output = T;

    #[inline]
    fn index(&self, offset: usize) -> &T {
        &self.cells[offset]
    }
}

impl<T: Scalar> std::ops::IndexMut<usize> for Dense<T> {
    #[inline]
    fn index_mut(&mut self, offset: usize) -> &mut T {
        &mut self.cells[offset]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dimension::Dimension;
    use crate::layout::{ColumnMajor, OrderingPolicy, RowMajor};

    #[test]
    fn test_policy_offsets_address_store() {
        let dim = Dimension::new(2, 3);
        let rows = [[1, 2, 3], [4, 5, 6]];
        let by_row = Dense::from_vec(RowMajor::fill(&rows, dim));
        let by_col = Dense::from_vec(ColumnMajor::fill(&rows, dim));
        assert_eq!(by_row.len(), dim.count());
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                assert_eq!(by_row[RowMajor::offset(r, c, dim)], value);
                assert_eq!(by_col[ColumnMajor::offset(r, c, dim)], value);
            }
        }
    }

    #[test]
    fn test_write_through_offset() {
        let dim = Dimension::new(3, 2);
        let mut store: Dense<f64> = Dense::zeros(dim.count());
        store[ColumnMajor::offset(2, 1, dim)] = 5.0;
        assert_eq!(store.into_vec(), vec![0.0, 0.0, 0.0, 0.0, 0.0, 5.0]);
    }

    #[test]
    fn test_empty_store() {
        let store: Dense<i64> = Dense::zeros(Dimension::new(0, 4).count());
        assert!(store.is_empty());
        assert_eq!(store, Dense::from_vec(Vec::new()));
    }
}
