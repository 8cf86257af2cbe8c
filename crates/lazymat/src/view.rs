//! Bounded text previews of expressions.

use crate::config::ViewLimits;
use crate::expression::Expression;
use crate::layout::OrderingPolicy;
use crate::matrix::Matrix;
use crate::operations::{BinaryExpr, BinaryOp};
use crate::scalar::Scalar;
use std::fmt::{self, Display, Write};

/// Render at most `limits.rows` x `limits.cols` cells of `expr`.
///
/// Cells in a row are separated by a single space. A row with hidden columns
/// ends in ` ...`, and hidden rows are summarized by a final `...` line.
pub(crate) fn render<E, W>(expr: &E, out: &mut W, limits: ViewLimits) -> fmt::Result
where
    E: Expression + ?Sized,
    E::Elem: Display,
    W: Write,
{
    let dim = expr.dimension();
    let shown_rows = dim.rows().min(limits.rows);
    let shown_cols = dim.cols().min(limits.cols);

    for row in 0..shown_rows {
        for col in 0..shown_cols {
            if col > 0 {
                out.write_char(' ')?;
            }
            write!(out, "{}", expr.get_at(row, col))?;
        }
        if shown_cols < dim.cols() {
            if shown_cols > 0 {
                out.write_char(' ')?;
            }
            out.write_str("...")?;
        }
        out.write_char('\n')?;
    }
    if shown_rows < dim.rows() {
        out.write_str("...\n")?;
    }
    Ok(())
}

/// Preview at the default [`ViewLimits`]; see
/// [`Config::preview`](crate::config::Config::preview) for configured limits.
impl<T, P> Display for Matrix<T, P>
where
    T: Scalar + Display,
    P: OrderingPolicy,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f, ViewLimits::default())
    }
}

impl<Op, L, R> Display for BinaryExpr<Op, L, R>
where
    Op: BinaryOp,
    L: Expression,
    R: Expression<Elem = L::Elem>,
    L::Elem: Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f, ViewLimits::default())
    }
}
