//! The expression capability shared by leaves and combinators.
//!
//! Any node that can answer "what is element `i`", "what shape are you" and
//! "which layout do your flat indices follow" is an [`Expression`]. Leaves
//! ([`Matrix`]) and combinators ([`BinaryExpr`](crate::operations::BinaryExpr))
//! both implement it, so new operators compose without touching existing
//! nodes and everything stays statically dispatched.

use crate::config::ViewLimits;
use crate::dimension::Dimension;
use crate::error::MatrixError;
use crate::layout::{Layout, OrderingPolicy, translate};
use crate::matrix::Matrix;
use crate::scalar::Scalar;
use std::fmt::Display;
use std::io;

/// A read-only, lazily evaluated matrix-valued node.
///
/// Nodes must be `Sync`: parallel evaluation reads one node from every worker.
pub trait Expression: Sync {
    /// Element type produced by this node.
    type Elem: Scalar;

    /// Ordering policy the flat indices of this node follow.
    type Order: OrderingPolicy;

    /// Element at flat index `index`, interpreted under `Self::Order`.
    ///
    /// Bounds are not checked beyond what the underlying storage does; use
    /// [`try_get`](Expression::try_get) for a checked read.
    fn get(&self, index: usize) -> Self::Elem;

    /// Shape of the node.
    fn dimension(&self) -> Dimension;

    /// Runtime tag of `Self::Order`.
    #[inline]
    fn layout(&self) -> Layout {
        Self::Order::LAYOUT
    }

    /// Element at the logical position (row, col).
    ///
    /// # Panics
    ///
    /// Panics if (row, col) is outside the dimension; use
    /// [`try_get_at`](Expression::try_get_at) for a fallible read.
    #[inline]
    fn get_at(&self, row: usize, col: usize) -> Self::Elem {
        let dimension = self.dimension();
        assert!(
            dimension.contains(row, col),
            "cell ({row}, {col}) is out of range for dimension {dimension}"
        );
        self.get(Self::Order::offset(row, col, dimension))
    }

    /// Checked read by flat index.
    fn try_get(&self, index: usize) -> Result<Self::Elem, MatrixError> {
        let count = self.dimension().count();
        if index >= count {
            return Err(MatrixError::IndexOutOfRange { index, count });
        }
        Ok(self.get(index))
    }

    /// Checked read by logical position.
    fn try_get_at(&self, row: usize, col: usize) -> Result<Self::Elem, MatrixError> {
        let dimension = self.dimension();
        if !dimension.contains(row, col) {
            return Err(MatrixError::CellOutOfRange {
                row,
                col,
                dimension,
            });
        }
        Ok(self.get_at(row, col))
    }

    /// Materialize this expression into a new matrix with the same layout.
    ///
    /// # Example
    ///
    /// ```
    /// use lazymat::{Expression, Matrix};
    ///
    /// let a: Matrix<i32> = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    /// let sum = (&a + &a).eval();
    /// assert_eq!(sum.to_rows(), vec![vec![2, 4], vec![6, 8]]);
    /// ```
    fn eval(&self) -> Matrix<Self::Elem, Self::Order> {
        Matrix::from_expr(self)
    }

    /// Dimension-checked element-wise comparison.
    ///
    /// Comparing expressions of different shape is an error, not `false`.
    ///
    /// # Errors
    ///
    /// Returns `MatrixError::DimensionMismatch` if the shapes differ.
    fn equals<R>(&self, other: R) -> Result<bool, MatrixError>
    where
        R: Expression<Elem = Self::Elem>,
    {
        let dim = self.dimension();
        dim.ensure_same(&other.dimension(), "comparison")?;
        Ok((0..dim.count())
            .all(|i| self.get(i) == other.get(translate::<Self::Order, R::Order>(i, dim))))
    }

    /// Write a bounded preview of the expression to `out`.
    ///
    /// At most `limits.rows` rows and `limits.cols` columns are printed;
    /// anything past the limits is replaced with `...`. Elements are read
    /// lazily, so previewing a combinator evaluates only the shown cells.
    fn view<W: io::Write>(&self, out: &mut W, limits: ViewLimits) -> io::Result<()>
    where
        Self::Elem: Display,
    {
        let mut text = String::new();
        crate::view::render(self, &mut text, limits)
            .map_err(|_| io::Error::other("formatting matrix preview failed"))?;
        out.write_all(text.as_bytes())
    }
}

impl<E: Expression + ?Sized> Expression for &E {
    type Elem = E::Elem;
    type Order = E::Order;

    #[inline]
    fn get(&self, index: usize) -> Self::Elem {
        (**self).get(index)
    }

    #[inline]
    fn dimension(&self) -> Dimension {
        (**self).dimension()
    }
}
