//! Whole-matrix assignment from expressions.
//!
//! Assignment is a materialization point: the source expression is evaluated
//! element by element straight into the target's existing storage, with index
//! translation when the layouts differ. The target is borrowed mutably for
//! the duration, so a source expression can never read the matrix being
//! overwritten; evaluate it into a temporary first if that is what you need.

use crate::backend::Execution;
use crate::error::MatrixError;
use crate::expression::Expression;
use crate::layout::{OrderingPolicy, translate};
use crate::matrix::Matrix;
use crate::operations::binary::{AddOp, BinaryOp, DivOp, MulOp, SubOp};
use crate::scalar::Scalar;
use log::debug;

impl<T: Scalar, P: OrderingPolicy> Matrix<T, P> {
    /// Overwrite every element with the value of `expr`.
    ///
    /// # Errors
    ///
    /// Returns `MatrixError::DimensionMismatch` if `expr` has a different
    /// dimension; the matrix is left untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use lazymat::Matrix;
    ///
    /// let a: Matrix<i32> = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
    /// let b: Matrix<i32> = Matrix::ones(2, 2);
    /// let mut target: Matrix<i32> = Matrix::zeros(2, 2);
    /// target.assign(&a + &b).unwrap();
    /// assert_eq!(target.as_slice(), &[2, 3, 4, 5]);
    ///
    /// let mut small: Matrix<i32> = Matrix::zeros(1, 2);
    /// assert!(small.assign(&a).is_err());
    /// ```
    pub fn assign<E: Expression<Elem = T>>(&mut self, expr: E) -> Result<(), MatrixError> {
        self.assign_with(expr, Execution::Serial)
    }

    /// [`assign`](Matrix::assign) with an explicit execution mode.
    pub fn assign_with<E: Expression<Elem = T>>(
        &mut self,
        expr: E,
        execution: Execution,
    ) -> Result<(), MatrixError> {
        self.combine_from(expr, "assignment", execution, |_, value| value)
    }

    /// `self[i] += expr[i]` for every element.
    pub fn assign_add<E: Expression<Elem = T>>(&mut self, expr: E) -> Result<(), MatrixError> {
        self.assign_add_with(expr, Execution::Serial)
    }

    pub fn assign_add_with<E: Expression<Elem = T>>(
        &mut self,
        expr: E,
        execution: Execution,
    ) -> Result<(), MatrixError> {
        self.combine_from(expr, "add-assignment", execution, AddOp::apply)
    }

    /// `self[i] -= expr[i]` for every element.
    pub fn assign_sub<E: Expression<Elem = T>>(&mut self, expr: E) -> Result<(), MatrixError> {
        self.assign_sub_with(expr, Execution::Serial)
    }

    pub fn assign_sub_with<E: Expression<Elem = T>>(
        &mut self,
        expr: E,
        execution: Execution,
    ) -> Result<(), MatrixError> {
        self.combine_from(expr, "subtract-assignment", execution, SubOp::apply)
    }

    /// `self[i] *= expr[i]` for every element.
    pub fn assign_mul<E: Expression<Elem = T>>(&mut self, expr: E) -> Result<(), MatrixError> {
        self.assign_mul_with(expr, Execution::Serial)
    }

    pub fn assign_mul_with<E: Expression<Elem = T>>(
        &mut self,
        expr: E,
        execution: Execution,
    ) -> Result<(), MatrixError> {
        self.combine_from(expr, "multiply-assignment", execution, MulOp::apply)
    }

    /// `self[i] /= expr[i]` for every element.
    pub fn assign_div<E: Expression<Elem = T>>(&mut self, expr: E) -> Result<(), MatrixError> {
        self.assign_div_with(expr, Execution::Serial)
    }

    pub fn assign_div_with<E: Expression<Elem = T>>(
        &mut self,
        expr: E,
        execution: Execution,
    ) -> Result<(), MatrixError> {
        self.combine_from(expr, "divide-assignment", execution, DivOp::apply)
    }

    fn combine_from<E, F>(
        &mut self,
        expr: E,
        op: &'static str,
        execution: Execution,
        combine: F,
    ) -> Result<(), MatrixError>
    where
        E: Expression<Elem = T>,
        F: Fn(T, T) -> T + Sync + Send,
    {
        let dimension = self.dimension();
        dimension.ensure_same(&expr.dimension(), op)?;
        debug!(
            "{} of {} {} expression into {} matrix ({} evaluation, translated: {})",
            op,
            dimension,
            E::Order::LAYOUT,
            P::LAYOUT,
            execution,
            P::LAYOUT != E::Order::LAYOUT
        );
        execution.write_each(self.as_mut_slice(), |i, cell| {
            *cell = combine(*cell, expr.get(translate::<P, E::Order>(i, dimension)));
        });
        Ok(())
    }
}

// Compound-assignment operator sugar; panics where `assign_*` would return an error.
macro_rules! impl_assign_operator {
    ($trait:ident, $method:ident, $checked:ident) => {
        impl<T, P, E> std::ops::$trait<E> for Matrix<T, P>
        where
            T: Scalar,
            P: OrderingPolicy,
            E: Expression<Elem = T>,
        {
            /// # Panics
            ///
            /// Panics if `rhs` has a different dimension.
            fn $method(&mut self, rhs: E) {
                if let Err(err) = self.$checked(rhs) {
                    panic!("{err}");
                }
            }
        }
    };
}

impl_assign_operator!(AddAssign, add_assign, assign_add);
impl_assign_operator!(SubAssign, sub_assign, assign_sub);
impl_assign_operator!(MulAssign, mul_assign, assign_mul);
impl_assign_operator!(DivAssign, div_assign, assign_div);
