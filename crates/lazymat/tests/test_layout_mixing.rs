//! Tests for mixing row-major and column-major operands.

use lazymat::{
    ColumnMajor, Execution, Expression, Layout, Matrix, MatrixError, OrderingPolicy, RowMajor,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn logical_rows() -> Vec<Vec<i32>> {
    vec![vec![1, 2, 3, 4], vec![5, 6, 7, 8], vec![9, 10, 11, 12]]
}

fn leaf<P: OrderingPolicy>() -> Matrix<i32, P> {
    Matrix::from_rows(&logical_rows()).unwrap()
}

#[test]
fn test_storage_order_differs_but_logical_content_matches() {
    let r = leaf::<RowMajor>();
    let c = leaf::<ColumnMajor>();
    assert_eq!(r.as_slice(), &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]);
    assert_eq!(c.as_slice(), &[1, 5, 9, 2, 6, 10, 3, 7, 11, 4, 8, 12]);
    assert_eq!(r.to_rows(), c.to_rows());
    assert!(r.equals(&c).unwrap());
}

/// Adding a row-major and a column-major leaf gives the same logical result
/// as adding two row-major leaves.
#[test]
fn test_mixed_addition_matches_uniform_addition() {
    init_logging();
    let r = leaf::<RowMajor>();
    let c = leaf::<ColumnMajor>();
    let uniform = (&r + &r).eval();
    let mixed = (&r + &c).eval();
    let mixed_flipped = (&c + &r).eval();
    assert_eq!(mixed.to_rows(), uniform.to_rows());
    assert_eq!(mixed_flipped.to_rows(), uniform.to_rows());
}

#[test]
fn test_left_operand_layout_wins_through_chains() {
    let r = leaf::<RowMajor>();
    let c = leaf::<ColumnMajor>();

    let left_row = (&r + &c) * (&c - &r);
    let left_col = (&c + &r) * (&r - &c);
    assert_eq!(left_row.layout(), Layout::RowMajor);
    assert_eq!(left_col.layout(), Layout::ColumnMajor);

    // Both subtrees are all zeros after the subtraction.
    assert!(left_row.eval().as_slice().iter().all(|&x| x == 0));
    assert_eq!(left_col.eval().layout(), Layout::ColumnMajor);
}

#[test]
fn test_nested_combinators_with_different_layouts() {
    let r = leaf::<RowMajor>();
    let c = leaf::<ColumnMajor>();
    // left subtree row-major, right subtree column-major
    let expr = (&r + &r) - (&c + &c + &c);
    let out = expr.eval();
    let expected: Vec<Vec<i32>> = logical_rows()
        .into_iter()
        .map(|row| row.into_iter().map(|x| -x).collect())
        .collect();
    assert_eq!(out.to_rows(), expected);
}

#[test]
fn test_materialize_into_other_layout() {
    init_logging();
    let r = leaf::<RowMajor>();
    let c = leaf::<ColumnMajor>();
    let into_col: Matrix<i32, ColumnMajor> = Matrix::from_expr(&r + &c);
    let into_row: Matrix<i32, RowMajor> = Matrix::from_expr(&c + &r);
    assert_eq!(into_col.to_rows(), into_row.to_rows());
    assert_eq!(into_col.as_slice(), &[2, 10, 18, 4, 12, 20, 6, 14, 22, 8, 16, 24]);
}

#[test]
fn test_assign_across_layouts() {
    let c = leaf::<ColumnMajor>();
    let mut target: Matrix<i32, RowMajor> = Matrix::zeros(3, 4);
    target.assign(&c).unwrap();
    assert_eq!(target.to_rows(), logical_rows());

    let mut wrong: Matrix<i32, RowMajor> = Matrix::zeros(4, 3);
    assert!(matches!(
        wrong.assign(&c),
        Err(MatrixError::DimensionMismatch { op: "assignment", .. })
    ));
}

#[test]
fn test_parallel_materialization_matches_serial() {
    init_logging();
    let rows = 97;
    let cols = 131;
    let a: Matrix<f64, RowMajor> =
        Matrix::from_vec((0..rows * cols).map(|x| x as f64).collect(), rows, cols).unwrap();
    let b: Matrix<f64, ColumnMajor> =
        Matrix::from_vec((0..rows * cols).map(|x| (x % 13) as f64).collect(), rows, cols)
            .unwrap();
    let expr = (&a - &b) * &b + &a;
    let serial: Matrix<f64> = Matrix::from_expr_with(&expr, Execution::Serial);
    let parallel: Matrix<f64> = Matrix::from_expr_with(&expr, Execution::Parallel);
    assert_eq!(serial.as_slice(), parallel.as_slice());
}
