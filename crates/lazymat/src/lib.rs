//! lazymat - lazy matrix expressions over row-major and column-major storage
//!
//! Arithmetic on matrices builds a tree of lightweight nodes instead of
//! computing intermediates. Nothing is evaluated until the tree is
//! materialized into a [`Matrix`], at which point every element is computed
//! once, in a single pass, with no temporary matrices.
//!
//! # Architecture
//!
//! ```text
//! Expressions (expression module)
//!     → Matrix (leaf, owns storage)
//!     → BinaryExpr<AddOp|SubOp|MulOp|DivOp, L, R> (lazy, owns nothing)
//!
//! Materialization (matrix, operations, product modules)
//!     → Matrix::from_expr, assign, assign_add/sub/mul/div, dot
//!
//! Evaluation backends (backend module)
//!     → SerialBackend (plain loop)
//!     → RayonBackend (data-parallel over disjoint cells)
//! ```
//!
//! Each matrix carries its storage order in its type. Operands of different
//! orders may be mixed freely; the right operand's flat index is translated
//! to the left operand's order, and every node takes the layout of its left
//! operand.
//!
//! # Example
//!
//! ```
//! use lazymat::{ColumnMajor, Expression, Matrix, MatrixDouble};
//!
//! let a: MatrixDouble = Matrix::from_rows(&[[1.0, 2.0], [3.0, 4.0]]).unwrap();
//! let b: Matrix<f64, ColumnMajor> = Matrix::from_rows(&[[10.0, 20.0], [30.0, 40.0]]).unwrap();
//!
//! // Builds a tree; no element is computed yet.
//! let expr = (&a + &b) * &a;
//! assert_eq!(expr.get_at(1, 0), 99.0);
//!
//! // Evaluates every element once.
//! let c: MatrixDouble = Matrix::from_expr(&expr);
//! assert_eq!(c.to_rows(), vec![vec![11.0, 44.0], vec![99.0, 176.0]]);
//!
//! // Shapes are checked when the node is built.
//! let tall: MatrixDouble = Matrix::zeros(3, 2);
//! assert!(lazymat::add(&a, &tall).is_err());
//! ```

pub mod backend;
pub mod config;
pub mod dimension;
pub mod error;
pub mod expression;
pub mod layout;
pub mod matrix;
pub mod operations;
pub mod product;
pub mod random;
pub mod scalar;
pub mod storage;
mod view;

pub use backend::Execution;
pub use config::{Config, ViewLimits};
pub use dimension::Dimension;
pub use error::MatrixError;
pub use expression::Expression;
pub use layout::{ColumnMajor, Layout, OrderingPolicy, RowMajor};
pub use matrix::Matrix;
pub use operations::{
    AddExpr, AddOp, BinaryExpr, BinaryOp, DivExpr, DivOp, MulExpr, MulOp, SubExpr, SubOp, add,
    div, mul, sub,
};
pub use product::{dot, dot_with};
pub use random::RandomUniform;
pub use scalar::{Scalar, c32, c64};
pub use storage::Dense;

// Element-type aliases. Each defaults to row-major storage; pass
// `ColumnMajor` to pick the other order, e.g. `MatrixDouble<ColumnMajor>`.

/// Matrix of `i32`.
pub type MatrixInt<P = RowMajor> = Matrix<i32, P>;
/// Matrix of `i64`.
pub type MatrixLong<P = RowMajor> = Matrix<i64, P>;
/// Matrix of `f32`.
pub type MatrixFloat<P = RowMajor> = Matrix<f32, P>;
/// Matrix of `f64`.
pub type MatrixDouble<P = RowMajor> = Matrix<f64, P>;
/// Matrix of Gaussian integers with `i64` parts.
pub type MatrixComplexLong<P = RowMajor> = Matrix<num_complex::Complex<i64>, P>;
/// Matrix of single-precision complex numbers.
pub type MatrixComplexFloat<P = RowMajor> = Matrix<c32, P>;
/// Matrix of double-precision complex numbers.
pub type MatrixComplexDouble<P = RowMajor> = Matrix<c64, P>;
