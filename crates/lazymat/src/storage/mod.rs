//! Backing stores for leaf matrices.
//!
//! Storage is always a flat vector; shape and ordering come from the
//! `Matrix` wrapper.

mod dense;

pub use dense::Dense;
