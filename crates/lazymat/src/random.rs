//! Random matrix construction.

use rand::Rng;
use rand::distr::StandardUniform;

use crate::layout::OrderingPolicy;
use crate::matrix::Matrix;
use crate::scalar::{Scalar, c32, c64};

/// Scalars that can be drawn uniformly from [0, 1).
///
/// Complex values draw both parts independently.
pub trait RandomUniform: Scalar {
    fn sample_uniform<R: Rng + ?Sized>(rng: &mut R) -> Self;
}

impl RandomUniform for f32 {
    fn sample_uniform<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.sample(StandardUniform)
    }
}

impl RandomUniform for f64 {
    fn sample_uniform<R: Rng + ?Sized>(rng: &mut R) -> Self {
        rng.sample(StandardUniform)
    }
}

impl RandomUniform for c32 {
    fn sample_uniform<R: Rng + ?Sized>(rng: &mut R) -> Self {
        c32::new(rng.sample(StandardUniform), rng.sample(StandardUniform))
    }
}

impl RandomUniform for c64 {
    fn sample_uniform<R: Rng + ?Sized>(rng: &mut R) -> Self {
        c64::new(rng.sample(StandardUniform), rng.sample(StandardUniform))
    }
}

impl<T: RandomUniform, P: OrderingPolicy> Matrix<T, P> {
    /// Create a matrix with uniform random values in [0, 1).
    ///
    /// # Example
    ///
    /// ```
    /// use lazymat::Matrix;
    ///
    /// let m: Matrix<f64> = Matrix::random(3, 4);
    /// assert_eq!(m.len(), 12);
    /// assert!(m.as_slice().iter().all(|&x| (0.0..1.0).contains(&x)));
    /// ```
    pub fn random(rows: usize, cols: usize) -> Self {
        Self::random_with_rng(rows, cols, &mut rand::rng())
    }

    /// Create a matrix with uniform random values from a caller-supplied RNG.
    ///
    /// # Example
    ///
    /// ```
    /// use lazymat::Matrix;
    /// use rand::SeedableRng;
    /// use rand::rngs::StdRng;
    ///
    /// let a: Matrix<f64> = Matrix::random_with_rng(2, 2, &mut StdRng::seed_from_u64(7));
    /// let b: Matrix<f64> = Matrix::random_with_rng(2, 2, &mut StdRng::seed_from_u64(7));
    /// assert_eq!(a.as_slice(), b.as_slice());
    /// ```
    pub fn random_with_rng<R: Rng + ?Sized>(rows: usize, cols: usize, rng: &mut R) -> Self {
        let mut m = Self::zeros(rows, cols);
        for x in m.as_mut_slice() {
            *x = T::sample_uniform(rng);
        }
        m
    }
}
