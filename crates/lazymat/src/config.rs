//! Runtime configuration.
//!
//! Defaults can be overridden from the process environment:
//!
//! | Variable            | Meaning                          | Default  |
//! |---------------------|----------------------------------|----------|
//! | `LAZYMAT_VIEW_ROWS` | rows shown by previews           | 10       |
//! | `LAZYMAT_VIEW_COLS` | columns shown by previews        | 10       |
//! | `LAZYMAT_EXECUTION` | `serial` or `parallel`           | `serial` |

use crate::backend::Execution;
use crate::error::MatrixError;
use crate::expression::Expression;
use crate::layout::OrderingPolicy;
use crate::matrix::Matrix;
use crate::product;
use crate::scalar::Scalar;
use std::fmt::Display;
use std::str::FromStr;

pub const DEFAULT_VIEW_ROWS: usize = 10;
pub const DEFAULT_VIEW_COLS: usize = 10;

pub const VIEW_ROWS_VAR: &str = "LAZYMAT_VIEW_ROWS";
pub const VIEW_COLS_VAR: &str = "LAZYMAT_VIEW_COLS";
pub const EXECUTION_VAR: &str = "LAZYMAT_EXECUTION";

/// How much of a matrix a preview prints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewLimits {
    pub rows: usize,
    pub cols: usize,
}

impl ViewLimits {
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }
}

impl Default for ViewLimits {
    fn default() -> Self {
        Self::new(DEFAULT_VIEW_ROWS, DEFAULT_VIEW_COLS)
    }
}

/// Library-wide settings a caller may thread through evaluation and previews.
///
/// The plain entry points (`Matrix::from_expr`, `Matrix::assign`, `dot`,
/// `Display`) always use the defaults. Go through the methods here, or pass
/// `view` and `execution` to the `_with` variants, to apply a loaded config.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub view: ViewLimits,
    pub execution: Execution,
}

impl Config {
    /// Read overrides from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `MatrixError::InvalidConfig` if a variable is set to a value
    /// that cannot be parsed.
    pub fn from_env() -> Result<Self, MatrixError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through an arbitrary key lookup.
    ///
    /// # Example
    ///
    /// ```
    /// use lazymat::{Config, Execution};
    ///
    /// let config = Config::from_lookup(|key| match key {
    ///     "LAZYMAT_EXECUTION" => Some("parallel".to_string()),
    ///     _ => None,
    /// })
    /// .unwrap();
    /// assert_eq!(config.execution, Execution::Parallel);
    /// assert_eq!(config.view.rows, 10);
    /// ```
    pub fn from_lookup<F>(lookup: F) -> Result<Self, MatrixError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        if let Some(rows) = parse_var::<usize, _>(&lookup, VIEW_ROWS_VAR)? {
            config.view.rows = rows;
        }
        if let Some(cols) = parse_var::<usize, _>(&lookup, VIEW_COLS_VAR)? {
            config.view.cols = cols;
        }
        if let Some(value) = lookup(EXECUTION_VAR) {
            config.execution =
                Execution::from_name(value.trim()).ok_or(MatrixError::InvalidConfig {
                    key: EXECUTION_VAR,
                    value,
                })?;
        }
        Ok(config)
    }

    /// Materialize `expr` with the configured execution mode.
    pub fn eval<E: Expression>(&self, expr: E) -> Matrix<E::Elem, E::Order> {
        Matrix::from_expr_with(expr, self.execution)
    }

    /// Assign `expr` into `target` with the configured execution mode.
    ///
    /// # Errors
    ///
    /// Returns `MatrixError::DimensionMismatch` if the shapes differ.
    pub fn assign<T, P, E>(&self, target: &mut Matrix<T, P>, expr: E) -> Result<(), MatrixError>
    where
        T: Scalar,
        P: OrderingPolicy,
        E: Expression<Elem = T>,
    {
        target.assign_with(expr, self.execution)
    }

    /// Matrix product with the configured execution mode.
    ///
    /// # Errors
    ///
    /// Returns `MatrixError::IncompatibleShape` if `lhs.cols != rhs.rows`.
    pub fn dot<L, R>(&self, lhs: L, rhs: R) -> Result<Matrix<L::Elem, L::Order>, MatrixError>
    where
        L: Expression,
        R: Expression<Elem = L::Elem>,
    {
        product::dot_with(lhs, rhs, self.execution)
    }

    /// Preview of `expr` truncated at the configured view limits.
    pub fn preview<E>(&self, expr: &E) -> String
    where
        E: Expression + ?Sized,
        E::Elem: Display,
    {
        let mut text = String::new();
        // Writing into a String cannot fail.
        let _ = crate::view::render(expr, &mut text, self.view);
        text
    }
}

fn parse_var<V, F>(lookup: &F, key: &'static str) -> Result<Option<V>, MatrixError>
where
    V: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| MatrixError::InvalidConfig { key, value }),
    }
}
