//! In-place scalar operations on leaf matrices.

use crate::layout::OrderingPolicy;
use crate::matrix::Matrix;
use crate::scalar::Scalar;

impl<T: Scalar, P: OrderingPolicy> Matrix<T, P> {
    /// Add `value` to every element.
    ///
    /// # Example
    ///
    /// ```
    /// use lazymat::Matrix;
    ///
    /// let mut m: Matrix<i32> = Matrix::zeros(2, 2);
    /// m.scalar_add(3);
    /// assert_eq!(m.as_slice(), &[3, 3, 3, 3]);
    /// ```
    pub fn scalar_add(&mut self, value: T) {
        self.apply_inplace(|x| x + value);
    }

    /// Subtract `value` from every element.
    pub fn scalar_sub(&mut self, value: T) {
        self.apply_inplace(|x| x - value);
    }

    /// Multiply every element by `value`.
    pub fn scalar_mul(&mut self, value: T) {
        self.apply_inplace(|x| x * value);
    }

    /// Divide every element by `value`.
    pub fn scalar_div(&mut self, value: T) {
        self.apply_inplace(|x| x / value);
    }

    /// Apply a function to each element in place.
    ///
    /// # Example
    ///
    /// ```
    /// use lazymat::Matrix;
    ///
    /// let mut m: Matrix<f64> = Matrix::from_rows(&[[1.0, 4.0], [9.0, 16.0]]).unwrap();
    /// m.apply_inplace(f64::sqrt);
    /// assert_eq!(m.as_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    pub fn apply_inplace<F: Fn(T) -> T>(&mut self, f: F) {
        for x in self.as_mut_slice() {
            *x = f(*x);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::layout::ColumnMajor;
    use crate::matrix::Matrix;
    use crate::scalar::c64;
    use approx::assert_relative_eq;

    #[test]
    fn test_scalar_mul_constant() {
        let mut m: Matrix<i64> = Matrix::filled(3, 4, 7);
        m.scalar_mul(6);
        assert!(m.as_slice().iter().all(|&x| x == 42));
    }

    #[test]
    fn test_scalar_mul_identity() {
        let mut m: Matrix<f64, ColumnMajor> =
            Matrix::from_rows(&[[1.5, -2.0], [0.25, 8.0]]).unwrap();
        let before = m.clone();
        m.scalar_mul(1.0);
        assert_eq!(m.as_slice(), before.as_slice());
    }

    #[test]
    fn test_scalar_add_sub() {
        let mut m: Matrix<i32> = Matrix::from_rows(&[[1, 2], [3, 4]]).unwrap();
        m.scalar_add(10);
        assert_eq!(m.as_slice(), &[11, 12, 13, 14]);
        m.scalar_sub(1);
        assert_eq!(m.as_slice(), &[10, 11, 12, 13]);
    }

    #[test]
    fn test_scalar_div_f64() {
        let mut m: Matrix<f64> = Matrix::filled(2, 2, 3.0);
        m.scalar_div(4.0);
        for &x in m.as_slice() {
            assert_relative_eq!(x, 0.75);
        }
    }

    #[test]
    fn test_scalar_mul_c64() {
        let mut m: Matrix<c64> = Matrix::filled(1, 2, c64::new(1.0, 1.0));
        m.scalar_mul(c64::new(0.0, 1.0));
        assert_eq!(m.as_slice(), &[c64::new(-1.0, 1.0), c64::new(-1.0, 1.0)]);
    }
}
