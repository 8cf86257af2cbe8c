//! Leaf matrix: the only owning, mutable node of an expression tree.
//!
//! ```text
//! Matrix<T, P = RowMajor>
//! ├── Dense<T>   - flat backing store, rows * cols elements
//! ├── Dimension  - fixed for the matrix's lifetime
//! └── P          - ordering policy, fixed at the type level
//! ```

use crate::backend::Execution;
use crate::dimension::Dimension;
use crate::error::MatrixError;
use crate::expression::Expression;
use crate::layout::{OrderingPolicy, RowMajor, translate};
use crate::scalar::Scalar;
use crate::storage::Dense;
use log::debug;
use std::marker::PhantomData;
use std::ops::{Index, IndexMut};

/// A dense matrix stored in the physical order chosen by `P`.
///
/// Matrices are the leaves of expression trees. Combining them with
/// `+ - * /` builds lazy views; constructing a matrix from such a view
/// (`Matrix::from_expr`, `Expression::eval`) or assigning it
/// (`Matrix::assign`) is the point where elements are actually computed.
///
/// `Matrix` deliberately has no `PartialEq`: comparing matrices of different
/// shape is an error, see [`Expression::equals`].
#[derive(Debug, Clone)]
pub struct Matrix<T: Scalar, P: OrderingPolicy = RowMajor> {
    storage: Dense<T>,
    dimension: Dimension,
    _order: PhantomData<P>,
}

impl<T: Scalar, P: OrderingPolicy> Matrix<T, P> {
    /// Create a zero-initialized matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazymat::{Expression, Matrix};
    ///
    /// let m: Matrix<f64> = Matrix::zeros(2, 3);
    /// assert_eq!(m.dimension().count(), 6);
    /// assert_eq!(m.get_at(1, 2), 0.0);
    /// ```
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::zero())
    }

    /// Create a matrix with every element set to `value`.
    pub fn filled(rows: usize, cols: usize, value: T) -> Self {
        let dimension = Dimension::new(rows, cols);
        Self {
            storage: Dense::filled(dimension.count(), value),
            dimension,
            _order: PhantomData,
        }
    }

    /// Create a matrix filled with ones.
    pub fn ones(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, T::one())
    }

    /// Create a matrix from a flat vector already in `P`'s physical order.
    ///
    /// # Errors
    ///
    /// Returns `MatrixError::DataLengthMismatch` if `data.len() != rows * cols`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazymat::{ColumnMajor, Expression, Matrix};
    ///
    /// let m: Matrix<i32, ColumnMajor> = Matrix::from_vec(vec![1, 2, 3, 4, 5, 6], 2, 3).unwrap();
    /// assert_eq!(m.get_at(1, 0), 2); // column-major: [1,0] is the second element
    /// assert_eq!(m.get_at(0, 1), 3);
    /// ```
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self, MatrixError> {
        let dimension = Dimension::new(rows, cols);
        if data.len() != dimension.count() {
            return Err(MatrixError::DataLengthMismatch {
                expected: dimension.count(),
                actual: data.len(),
            });
        }
        Ok(Self {
            storage: Dense::from_vec(data),
            dimension,
            _order: PhantomData,
        })
    }

    /// Create a matrix from nested rows, in logical (row, col) order.
    ///
    /// The physical order is produced by `P::fill`. An empty slice gives a
    /// 0x0 matrix.
    ///
    /// # Errors
    ///
    /// Returns `MatrixError::RaggedRows` if any row's width differs from the
    /// first row's.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazymat::{Expression, Matrix, MatrixError};
    ///
    /// let m: Matrix<i32> = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
    /// assert_eq!(m.get_at(1, 0), 4);
    ///
    /// let ragged = Matrix::<i32>::from_rows(&[vec![1, 2], vec![3]]);
    /// assert!(matches!(ragged, Err(MatrixError::RaggedRows { row: 1, .. })));
    /// ```
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self, MatrixError> {
        let cols = rows.first().map_or(0, |row| row.as_ref().len());
        for (row, values) in rows.iter().enumerate() {
            let actual = values.as_ref().len();
            if actual != cols {
                return Err(MatrixError::RaggedRows {
                    row,
                    expected: cols,
                    actual,
                });
            }
        }
        let dimension = Dimension::new(rows.len(), cols);
        Ok(Self {
            storage: Dense::from_vec(P::fill(rows, dimension)),
            dimension,
            _order: PhantomData,
        })
    }

    /// Materialize an expression into a new matrix (serial evaluation).
    ///
    /// Every element of `expr` is computed exactly once. `expr` may follow a
    /// different ordering policy than `P`; indices are translated while
    /// copying. Pass `&expr` to keep the expression, or the expression itself
    /// to consume it.
    ///
    /// # Examples
    ///
    /// ```
    /// use lazymat::{ColumnMajor, Expression, Matrix};
    ///
    /// let a: Matrix<i32> = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    /// let b: Matrix<i32> = Matrix::from_rows(&[[10, 20], [30, 40]]).unwrap();
    ///
    /// let c: Matrix<i32, ColumnMajor> = Matrix::from_expr(&a + &b);
    /// assert_eq!(c.to_rows(), vec![vec![11, 22], vec![33, 44]]);
    /// ```
    pub fn from_expr<E: Expression<Elem = T>>(expr: E) -> Self {
        Self::from_expr_with(expr, Execution::Serial)
    }

    /// Materialize an expression using the given execution mode.
    pub fn from_expr_with<E: Expression<Elem = T>>(expr: E, execution: Execution) -> Self {
        let dimension = expr.dimension();
        let mut storage = Dense::zeros(dimension.count());
        debug!(
            "materializing {} {} expression into {} matrix ({} evaluation, translated: {})",
            dimension,
            E::Order::LAYOUT,
            P::LAYOUT,
            execution,
            P::LAYOUT != E::Order::LAYOUT
        );
        execution.write_each(storage.as_mut_slice(), |i, cell| {
            *cell = expr.get(translate::<P, E::Order>(i, dimension));
        });
        Self {
            storage,
            dimension,
            _order: PhantomData,
        }
    }

    /// Number of rows.
    #[inline]
    pub fn rows(&self) -> usize {
        self.dimension.rows()
    }

    /// Number of columns.
    #[inline]
    pub fn cols(&self) -> usize {
        self.dimension.cols()
    }

    /// Total number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        self.storage.len()
    }

    /// Check if the matrix has zero elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.storage.is_empty()
    }

    /// Underlying data in physical order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.storage.as_slice()
    }

    /// Underlying data in physical order, mutable.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.storage.as_mut_slice()
    }

    /// Consume the matrix, returning the data in physical order.
    pub fn into_vec(self) -> Vec<T> {
        self.storage.into_vec()
    }

    /// Copy out the elements as nested rows, in logical order.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.rows())
            .map(|i| (0..self.cols()).map(|j| self.get_at(i, j)).collect())
            .collect()
    }

    /// Mutable element by flat index.
    ///
    /// # Errors
    ///
    /// Returns `MatrixError::IndexOutOfRange` if `index >= len()`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, MatrixError> {
        let count = self.len();
        self.storage
            .as_mut_slice()
            .get_mut(index)
            .ok_or(MatrixError::IndexOutOfRange { index, count })
    }

    /// Mutable element by logical position.
    ///
    /// # Errors
    ///
    /// Returns `MatrixError::CellOutOfRange` if (row, col) is outside the matrix.
    pub fn get_at_mut(&mut self, row: usize, col: usize) -> Result<&mut T, MatrixError> {
        let dimension = self.dimension;
        if !dimension.contains(row, col) {
            return Err(MatrixError::CellOutOfRange {
                row,
                col,
                dimension,
            });
        }
        Ok(&mut self.storage[P::offset(row, col, dimension)])
    }

    /// Set element by logical position.
    ///
    /// # Errors
    ///
    /// Returns `MatrixError::CellOutOfRange` if (row, col) is outside the matrix.
    pub fn set(&mut self, row: usize, col: usize, value: T) -> Result<(), MatrixError> {
        *self.get_at_mut(row, col)? = value;
        Ok(())
    }

    /// Fill all elements with a value.
    pub fn fill(&mut self, value: T) {
        for x in self.storage.as_mut_slice() {
            *x = value;
        }
    }
}

impl<T: Scalar, P: OrderingPolicy> Expression for Matrix<T, P> {
    type Elem = T;
    type Order = P;

    #[inline]
    fn get(&self, index: usize) -> T {
        self.storage[index]
    }

    #[inline]
    fn dimension(&self) -> Dimension {
        self.dimension
    }
}

impl<T: Scalar, P: OrderingPolicy> Index<usize> for Matrix<T, P> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        &self.storage[index]
    }
}

impl<T: Scalar, P: OrderingPolicy> IndexMut<usize> for Matrix<T, P> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.storage[index]
    }
}

impl<T: Scalar, P: OrderingPolicy> Index<(usize, usize)> for Matrix<T, P> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if (row, col) is outside the matrix.
    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            self.dimension.contains(row, col),
            "cell ({row}, {col}) is out of range for dimension {}",
            self.dimension
        );
        &self.storage[P::offset(row, col, self.dimension)]
    }
}

impl<T: Scalar, P: OrderingPolicy> IndexMut<(usize, usize)> for Matrix<T, P> {
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        assert!(
            self.dimension.contains(row, col),
            "cell ({row}, {col}) is out of range for dimension {}",
            self.dimension
        );
        &mut self.storage[P::offset(row, col, self.dimension)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::ColumnMajor;
    use crate::scalar::c64;

    fn test_zeros_generic<T: Scalar>() {
        let m: Matrix<T> = Matrix::zeros(2, 3);
        assert_eq!(m.dimension(), Dimension::new(2, 3));
        assert_eq!(m.len(), 6);
        for i in 0..6 {
            assert_eq!(m.get(i), T::zero());
        }
    }

    #[test]
    fn test_zeros_i32() {
        test_zeros_generic::<i32>();
    }

    #[test]
    fn test_zeros_f64() {
        test_zeros_generic::<f64>();
    }

    #[test]
    fn test_zeros_c64() {
        test_zeros_generic::<c64>();
    }

    #[test]
    fn test_from_rows_row_major_storage() {
        let m: Matrix<i32, RowMajor> = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(m.as_slice(), &[1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_from_rows_column_major_storage() {
        let m: Matrix<i32, ColumnMajor> = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
        assert_eq!(m.as_slice(), &[1, 4, 2, 5, 3, 6]);
        assert_eq!(m.to_rows(), vec![vec![1, 2, 3], vec![4, 5, 6]]);
    }

    #[test]
    fn test_from_rows_ragged() {
        let rows = vec![vec![1.0, 2.0], vec![3.0, 4.0], vec![5.0]];
        let err = Matrix::<f64>::from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            MatrixError::RaggedRows {
                row: 2,
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn test_from_rows_empty() {
        let rows: Vec<Vec<i32>> = Vec::new();
        let m: Matrix<i32> = Matrix::from_rows(&rows).unwrap();
        assert_eq!(m.dimension(), Dimension::new(0, 0));
        assert!(m.is_empty());
    }

    #[test]
    fn test_from_vec_length_mismatch() {
        let result = Matrix::<f64>::from_vec(vec![1.0, 2.0, 3.0], 2, 2);
        assert_eq!(
            result.unwrap_err(),
            MatrixError::DataLengthMismatch {
                expected: 4,
                actual: 3,
            }
        );
    }

    #[test]
    fn test_from_expr_copies_leaf() {
        let a: Matrix<i32> = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
        let b = Matrix::<i32, RowMajor>::from_expr(&a);
        assert_eq!(b.as_slice(), a.as_slice());
    }

    #[test]
    fn test_from_expr_changes_layout() {
        let a: Matrix<i32> = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
        let b = Matrix::<i32, ColumnMajor>::from_expr(&a);
        assert_eq!(b.as_slice(), &[1, 4, 2, 5, 3, 6]);
        assert_eq!(b.to_rows(), a.to_rows());
    }

    #[test]
    fn test_from_expr_parallel_matches_serial() {
        let a: Matrix<i64, ColumnMajor> =
            Matrix::from_vec((0..5000).collect(), 50, 100).unwrap();
        let serial = Matrix::<i64>::from_expr_with(&a, Execution::Serial);
        let parallel = Matrix::<i64>::from_expr_with(&a, Execution::Parallel);
        assert_eq!(serial.as_slice(), parallel.as_slice());
    }

    #[test]
    fn test_set_and_index() {
        let mut m: Matrix<f64, ColumnMajor> = Matrix::zeros(2, 3);
        m.set(1, 2, 42.0).unwrap();
        assert_eq!(m[(1, 2)], 42.0);
        assert_eq!(m[5], 42.0);
        m[(0, 1)] = 7.0;
        assert_eq!(m.get_at(0, 1), 7.0);
        assert!(matches!(
            m.set(2, 0, 1.0),
            Err(MatrixError::CellOutOfRange { row: 2, col: 0, .. })
        ));
    }

    #[test]
    fn test_get_mut_out_of_range() {
        let mut m: Matrix<i32> = Matrix::zeros(2, 2);
        *m.get_mut(3).unwrap() = 9;
        assert_eq!(m.get(3), 9);
        assert_eq!(
            m.get_mut(4).unwrap_err(),
            MatrixError::IndexOutOfRange { index: 4, count: 4 }
        );
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_index_tuple_out_of_range_panics() {
        let m: Matrix<i32> = Matrix::zeros(2, 2);
        let _ = m[(0, 2)];
    }

    #[test]
    fn test_fill_and_ones() {
        let mut m: Matrix<i32> = Matrix::ones(2, 2);
        assert_eq!(m.as_slice(), &[1, 1, 1, 1]);
        m.fill(5);
        assert_eq!(m.into_vec(), vec![5, 5, 5, 5]);
    }
}
