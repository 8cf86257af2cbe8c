//! Scalar trait for matrix element types.

use num_traits::{Num, NumAssignOps};
use std::fmt::Debug;

pub use num_complex::{Complex32 as c32, Complex64 as c64};

/// Trait for element types supported by lazymat.
///
/// Anything numeric that is `Copy` and thread-safe qualifies: the primitive
/// integers and floats as well as `num_complex` values. `Num` supplies the
/// zero value used to initialize storage and product accumulators.
pub trait Scalar: Num + NumAssignOps + Copy + Debug + Send + Sync + 'static {}

impl<T> Scalar for T where T: Num + NumAssignOps + Copy + Debug + Send + Sync + 'static {}
