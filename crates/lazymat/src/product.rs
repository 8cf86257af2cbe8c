//! Matrix (dot) product.
//!
//! Unlike the element-wise combinators, the product is eager: it reads each
//! operand element many times, so it materializes its result immediately
//! instead of returning a lazy node. Operands may be any expression; a lazy
//! operand is re-evaluated on every read, so materialize it first with
//! [`Expression::eval`] when it is expensive.

use crate::backend::Execution;
use crate::dimension::Dimension;
use crate::error::MatrixError;
use crate::expression::Expression;
use crate::layout::OrderingPolicy;
use crate::matrix::Matrix;
use crate::scalar::Scalar;
use log::debug;
use num_traits::Zero;

/// Compute the matrix product `lhs · rhs`.
///
/// The result has dimension `[lhs.rows, rhs.cols]` and the layout of `lhs`.
///
/// # Errors
///
/// Returns `MatrixError::IncompatibleShape` if `lhs.cols != rhs.rows`.
///
/// # Example
///
/// ```
/// use lazymat::{Matrix, ColumnMajor, dot};
///
/// let a: Matrix<i32> = Matrix::from_rows(&[[1, 2, 3], [4, 5, 6]]).unwrap();
/// let b: Matrix<i32, ColumnMajor> = Matrix::from_rows(&[[7, 8], [9, 10], [11, 12]]).unwrap();
/// let c = dot(&a, &b).unwrap();
/// assert_eq!(c.to_rows(), vec![vec![58, 64], vec![139, 154]]);
///
/// assert!(dot(&a, &a).is_err());
/// ```
pub fn dot<L, R>(lhs: L, rhs: R) -> Result<Matrix<L::Elem, L::Order>, MatrixError>
where
    L: Expression,
    R: Expression<Elem = L::Elem>,
{
    dot_with(lhs, rhs, Execution::Serial)
}

/// [`dot`] with an explicit execution mode.
///
/// With [`Execution::Parallel`] the output cells are partitioned across
/// worker threads; every cell is still an independent inner product, so the
/// result is identical to the serial one.
pub fn dot_with<L, R>(
    lhs: L,
    rhs: R,
    execution: Execution,
) -> Result<Matrix<L::Elem, L::Order>, MatrixError>
where
    L: Expression,
    R: Expression<Elem = L::Elem>,
{
    let (ldim, rdim) = (lhs.dimension(), rhs.dimension());
    if ldim.cols() != rdim.rows() {
        return Err(MatrixError::IncompatibleShape {
            left: ldim,
            right: rdim,
        });
    }

    let dim = Dimension::new(ldim.rows(), rdim.cols());
    let inner = ldim.cols();
    debug!(
        "dot product {} x {} -> {} ({}, {} evaluation)",
        ldim,
        rdim,
        dim,
        L::Order::LAYOUT,
        execution
    );

    let mut result = Matrix::<L::Elem, L::Order>::zeros(dim.rows(), dim.cols());
    execution.write_each(result.as_mut_slice(), |index, cell| {
        let (i, j) = L::Order::cell(index, dim);
        let mut sum = L::Elem::zero();
        for k in 0..inner {
            sum += lhs.get_at(i, k) * rhs.get_at(k, j);
        }
        *cell = sum;
    });
    Ok(result)
}

impl<T: Scalar, P: OrderingPolicy> Matrix<T, P> {
    /// Matrix product with another expression; see [`dot`].
    pub fn dot<R: Expression<Elem = T>>(&self, rhs: R) -> Result<Self, MatrixError> {
        dot(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{ColumnMajor, RowMajor};
    use crate::scalar::c64;
    use approx::assert_relative_eq;

    fn left<P: OrderingPolicy>() -> Matrix<f64, P> {
        Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]).unwrap()
    }

    fn right<P: OrderingPolicy>() -> Matrix<f64, P> {
        Matrix::from_rows(&[[7.0, 8.0], [9.0, 10.0], [11.0, 12.0]]).unwrap()
    }

    const EXPECTED: [[f64; 2]; 2] = [[58.0, 64.0], [139.0, 154.0]];

    fn check<P: OrderingPolicy>(c: &Matrix<f64, P>) {
        assert_eq!(c.dimension(), Dimension::new(2, 2));
        for (i, row) in EXPECTED.iter().enumerate() {
            for (j, &value) in row.iter().enumerate() {
                assert_relative_eq!(c.get_at(i, j), value);
            }
        }
    }

    #[test]
    fn test_dot_all_layout_pairs() {
        check(&dot(&left::<RowMajor>(), &right::<RowMajor>()).unwrap());
        check(&dot(&left::<RowMajor>(), &right::<ColumnMajor>()).unwrap());
        check(&dot(&left::<ColumnMajor>(), &right::<RowMajor>()).unwrap());
        check(&dot(&left::<ColumnMajor>(), &right::<ColumnMajor>()).unwrap());
    }

    #[test]
    fn test_dot_result_takes_left_layout() {
        let c = dot(&left::<ColumnMajor>(), &right::<RowMajor>()).unwrap();
        assert_eq!(c.layout(), crate::layout::Layout::ColumnMajor);
        assert_eq!(c.as_slice(), &[58.0, 139.0, 64.0, 154.0]);
    }

    #[test]
    fn test_dot_incompatible_shape() {
        let a = left::<RowMajor>();
        let err = dot(&a, &a).unwrap_err();
        assert_eq!(
            err,
            MatrixError::IncompatibleShape {
                left: Dimension::new(2, 3),
                right: Dimension::new(2, 3),
            }
        );
    }

    #[test]
    fn test_dot_identity() {
        let a = left::<ColumnMajor>();
        let mut id: Matrix<f64> = Matrix::zeros(3, 3);
        for k in 0..3 {
            id.set(k, k, 1.0).unwrap();
        }
        let c = a.dot(&id).unwrap();
        assert_eq!(c.to_rows(), a.to_rows());
    }

    #[test]
    fn test_dot_of_lazy_operand() {
        let a = left::<RowMajor>();
        let b = right::<ColumnMajor>();
        let doubled = dot(&a + &a, &b).unwrap();
        assert_relative_eq!(doubled.get_at(1, 1), 308.0);
    }

    #[test]
    fn test_dot_empty_inner_dimension() {
        let a: Matrix<i32> = Matrix::zeros(2, 0);
        let b: Matrix<i32> = Matrix::zeros(0, 3);
        let c = dot(&a, &b).unwrap();
        assert_eq!(c.dimension(), Dimension::new(2, 3));
        assert!(c.as_slice().iter().all(|&x| x == 0));
    }

    #[test]
    fn test_dot_complex() {
        let i = c64::new(0.0, 1.0);
        let a: Matrix<c64> = Matrix::from_rows(&[[i, c64::new(1.0, 0.0)]]).unwrap();
        let b: Matrix<c64> = Matrix::from_rows(&[[i], [c64::new(2.0, 0.0)]]).unwrap();
        let c = dot(&a, &b).unwrap();
        assert_eq!(c.as_slice(), &[c64::new(1.0, 0.0)]);
    }

    #[test]
    fn test_dot_parallel_matches_serial() {
        let a: Matrix<i64> = Matrix::from_vec((0..64 * 96).collect(), 64, 96).unwrap();
        let b: Matrix<i64, ColumnMajor> =
            Matrix::from_vec((0..96 * 80).map(|x| x % 7).collect(), 96, 80).unwrap();
        let serial = dot_with(&a, &b, Execution::Serial).unwrap();
        let parallel = dot_with(&a, &b, Execution::Parallel).unwrap();
        assert_eq!(serial.as_slice(), parallel.as_slice());
    }
}
