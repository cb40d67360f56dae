use crate::errors::{MatrixError, MatrixResult};
use crate::matrix::Matrix;
pub use num_complex::Complex64 as Complex;

/// Complex zero.
pub const ZERO: Complex = Complex::new(0.0, 0.0);
/// Complex one.
pub const ONE: Complex = Complex::new(1.0, 0.0);

/// Check that the real and imaginary parts of `a` and `b` are each within `accuracy`.
///
/// # Example
/// ```
/// use qsim::complex::{is_equal, Complex};
///
/// assert!(is_equal(Complex::new(1.0, 0.0), Complex::new(1.0005, -0.0005), 0.001));
/// assert!(!is_equal(Complex::new(1.0, 0.0), Complex::new(1.0, 0.01), 0.001));
/// ```
#[inline]
pub fn is_equal(a: Complex, b: Complex, accuracy: f64) -> bool {
    (a.re - b.re).abs() <= accuracy && (a.im - b.im).abs() <= accuracy
}

/// Read the only element of a 1x1 matrix.
pub fn complex_from_matrix(matrix: &Matrix) -> MatrixResult<Complex> {
    if matrix.row_count() == 1 && matrix.column_count() == 1 {
        Ok(matrix.first())
    } else {
        Err(MatrixError::NotOneByOne(
            matrix.row_count(),
            matrix.column_count(),
        ))
    }
}

/// Make a vector of complex numbers whose reals are given by `data`
pub fn from_reals(data: &[f64]) -> Vec<Complex> {
    data.iter().map(|x| Complex::new(*x, 0.0)).collect()
}

/// Make a vector of complex numbers whose reals are given by the first tuple entry in `data` and
/// whose imaginaries are from the second.
pub fn from_tuples(data: &[(f64, f64)]) -> Vec<Complex> {
    data.iter().map(|(re, im)| Complex::new(*re, *im)).collect()
}
