//! Lazy element-wise binary combinators.
//!
//! A `BinaryExpr` is a read-only view over two operand expressions. Building
//! one validates that both operands have the same dimension; reading element
//! `i` computes `op(lhs[i], rhs[i'])` on demand, where `i'` is `i` translated
//! into the right operand's layout.
//!
//! # Layout propagation
//!
//! A combinator's flat indices follow its **left** operand's ordering policy
//! (`BinaryExpr::Order = L::Order`), at every node of a tree. A tree whose
//! leaves all share one layout therefore never translates an index; mixed
//! trees translate only at the nodes whose right operand disagrees with the
//! left.

use crate::dimension::Dimension;
use crate::error::MatrixError;
use crate::expression::Expression;
use crate::layout::{OrderingPolicy, translate};
use crate::matrix::Matrix;
use crate::scalar::Scalar;
use log::trace;
use std::fmt::Debug;
use std::marker::PhantomData;

/// An element-wise binary operation.
pub trait BinaryOp: Copy + Default + Debug + Send + Sync + 'static {
    /// Human-readable operation name used in error messages.
    const NAME: &'static str;

    fn apply<T: Scalar>(lhs: T, rhs: T) -> T;
}

/// Element-wise addition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AddOp;

/// Element-wise subtraction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubOp;

/// Element-wise (Hadamard) multiplication.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MulOp;

/// Element-wise division.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DivOp;

impl BinaryOp for AddOp {
    const NAME: &'static str = "addition";

    #[inline]
    fn apply<T: Scalar>(lhs: T, rhs: T) -> T {
        lhs + rhs
    }
}

impl BinaryOp for SubOp {
    const NAME: &'static str = "subtraction";

    #[inline]
    fn apply<T: Scalar>(lhs: T, rhs: T) -> T {
        lhs - rhs
    }
}

impl BinaryOp for MulOp {
    const NAME: &'static str = "element-wise multiplication";

    #[inline]
    fn apply<T: Scalar>(lhs: T, rhs: T) -> T {
        lhs * rhs
    }
}

impl BinaryOp for DivOp {
    const NAME: &'static str = "element-wise division";

    #[inline]
    fn apply<T: Scalar>(lhs: T, rhs: T) -> T {
        lhs / rhs
    }
}

/// Lazy view combining two expressions element by element.
#[derive(Debug, Clone, Copy)]
pub struct BinaryExpr<Op, L, R> {
    lhs: L,
    rhs: R,
    dimension: Dimension,
    _op: PhantomData<Op>,
}

pub type AddExpr<L, R> = BinaryExpr<AddOp, L, R>;
pub type SubExpr<L, R> = BinaryExpr<SubOp, L, R>;
pub type MulExpr<L, R> = BinaryExpr<MulOp, L, R>;
pub type DivExpr<L, R> = BinaryExpr<DivOp, L, R>;

impl<Op, L, R> BinaryExpr<Op, L, R>
where
    Op: BinaryOp,
    L: Expression,
    R: Expression<Elem = L::Elem>,
{
    /// Build the combinator, checking dimensions before anything is read.
    ///
    /// # Errors
    ///
    /// Returns `MatrixError::DimensionMismatch` naming both dimensions if the
    /// operands disagree on shape.
    pub fn try_new(lhs: L, rhs: R) -> Result<Self, MatrixError> {
        let dimension = lhs.dimension();
        dimension.ensure_same(&rhs.dimension(), Op::NAME)?;
        trace!(
            "{} node {} ({} <- {})",
            Op::NAME,
            dimension,
            L::Order::LAYOUT,
            R::Order::LAYOUT
        );
        Ok(Self {
            lhs,
            rhs,
            dimension,
            _op: PhantomData,
        })
    }

    /// Left operand.
    pub fn lhs(&self) -> &L {
        &self.lhs
    }

    /// Right operand.
    pub fn rhs(&self) -> &R {
        &self.rhs
    }

    /// Whether reads of the right operand go through index translation.
    pub fn translates_rhs(&self) -> bool {
        L::Order::LAYOUT != R::Order::LAYOUT
    }
}

impl<Op, L, R> Expression for BinaryExpr<Op, L, R>
where
    Op: BinaryOp,
    L: Expression,
    R: Expression<Elem = L::Elem>,
{
    type Elem = L::Elem;
    type Order = L::Order;

    #[inline]
    fn get(&self, index: usize) -> Self::Elem {
        let rhs_index = translate::<L::Order, R::Order>(index, self.dimension);
        Op::apply(self.lhs.get(index), self.rhs.get(rhs_index))
    }

    #[inline]
    fn dimension(&self) -> Dimension {
        self.dimension
    }
}

/// Lazy element-wise sum.
///
/// # Example
///
/// ```
/// use lazymat::{Expression, Matrix};
/// use lazymat::operations::add;
///
/// let a: Matrix<i32> = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
/// let b: Matrix<i32> = Matrix::ones(2, 2);
/// let sum = add(&a, &b).unwrap();
/// assert_eq!(sum.get_at(1, 1), 5);
///
/// let wrong: Matrix<i32> = Matrix::ones(2, 3);
/// assert!(add(&a, &wrong).is_err());
/// ```
pub fn add<L, R>(lhs: L, rhs: R) -> Result<AddExpr<L, R>, MatrixError>
where
    L: Expression,
    R: Expression<Elem = L::Elem>,
{
    BinaryExpr::try_new(lhs, rhs)
}

/// Lazy element-wise difference.
pub fn sub<L, R>(lhs: L, rhs: R) -> Result<SubExpr<L, R>, MatrixError>
where
    L: Expression,
    R: Expression<Elem = L::Elem>,
{
    BinaryExpr::try_new(lhs, rhs)
}

/// Lazy element-wise product.
pub fn mul<L, R>(lhs: L, rhs: R) -> Result<MulExpr<L, R>, MatrixError>
where
    L: Expression,
    R: Expression<Elem = L::Elem>,
{
    BinaryExpr::try_new(lhs, rhs)
}

/// Lazy element-wise quotient.
pub fn div<L, R>(lhs: L, rhs: R) -> Result<DivExpr<L, R>, MatrixError>
where
    L: Expression,
    R: Expression<Elem = L::Elem>,
{
    BinaryExpr::try_new(lhs, rhs)
}

fn build_or_panic<Op, L, R>(lhs: L, rhs: R) -> BinaryExpr<Op, L, R>
where
    Op: BinaryOp,
    L: Expression,
    R: Expression<Elem = L::Elem>,
{
    match BinaryExpr::try_new(lhs, rhs) {
        Ok(node) => node,
        Err(err) => panic!("{err}"),
    }
}

// Operator sugar. `std::ops` cannot return `Result`, so a dimension mismatch
// panics here; use `add`/`sub`/`mul`/`div` to handle it.
macro_rules! impl_binary_operator {
    ($trait:ident, $method:ident, $op:ty) => {
        impl<'a, T, P, Rhs> std::ops::$trait<Rhs> for &'a Matrix<T, P>
        where
            T: Scalar,
            P: OrderingPolicy,
            Rhs: Expression<Elem = T>,
        {
            type Output = BinaryExpr<$op, &'a Matrix<T, P>, Rhs>;

            /// # Panics
            ///
            /// Panics if the operands have different dimensions.
            fn $method(self, rhs: Rhs) -> Self::Output {
                build_or_panic(self, rhs)
            }
        }

        impl<Op, L, R, Rhs> std::ops::$trait<Rhs> for BinaryExpr<Op, L, R>
        where
            Op: BinaryOp,
            L: Expression,
            R: Expression<Elem = L::Elem>,
            Rhs: Expression<Elem = L::Elem>,
        {
            type Output = BinaryExpr<$op, BinaryExpr<Op, L, R>, Rhs>;

            fn $method(self, rhs: Rhs) -> Self::Output {
                build_or_panic(self, rhs)
            }
        }

        impl<'a, Op, L, R, Rhs> std::ops::$trait<Rhs> for &'a BinaryExpr<Op, L, R>
        where
            Op: BinaryOp,
            L: Expression,
            R: Expression<Elem = L::Elem>,
            Rhs: Expression<Elem = L::Elem>,
        {
            type Output = BinaryExpr<$op, &'a BinaryExpr<Op, L, R>, Rhs>;

            fn $method(self, rhs: Rhs) -> Self::Output {
                build_or_panic(self, rhs)
            }
        }
    };
}

impl_binary_operator!(Add, add, AddOp);
impl_binary_operator!(Sub, sub, SubOp);
impl_binary_operator!(Mul, mul, MulOp);
impl_binary_operator!(Div, div, DivOp);
