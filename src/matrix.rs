//! Dense complex matrices stored column-major.
//!
//! Products are delegated to `ndarray`, every other operation works directly on the flat
//! column-major store.

use crate::complex::{self, Complex, ONE, ZERO};
use crate::errors::{MatrixError, MatrixResult};
use crate::vector::Vector;
use ndarray::{Array1, Array2};
use qsim_iterators::utils::{checked_pow2, exact_log2};
use std::mem::size_of;
use std::ops::Index;

/// Most complex elements a single `Vec` can hold.
pub(crate) const MAX_ELEMENTS: usize = isize::MAX as usize / size_of::<Complex>();

/// Side of the square operator over `qubit_count` qubits, if one can be allocated.
pub(crate) fn operator_side(qubit_count: usize) -> MatrixResult<usize> {
    checked_pow2(qubit_count)
        .filter(|side| side.checked_mul(*side).map_or(false, |len| len <= MAX_ELEMENTS))
        .ok_or(MatrixError::RegisterTooLarge(qubit_count))
}

/// Transformation applied to the left operand of [`Matrix::product`].
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
pub enum Transformation {
    /// Use the operand as is.
    None,
    /// Use the conjugate transpose of the operand.
    Adjointed,
}

/// An immutable dense complex matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    row_count: usize,
    column_count: usize,
    values: Vec<Complex>,
}

impl Matrix {
    /// Build a matrix from a list of rows.
    ///
    /// # Example
    /// ```
    /// use qsim::prelude::*;
    ///
    /// let m = Matrix::new(vec![
    ///     vec![Complex::new(1.0, 0.0), Complex::new(2.0, 0.0)],
    ///     vec![Complex::new(3.0, 0.0), Complex::new(4.0, 0.0)],
    /// ]).unwrap();
    /// assert_eq!(m[(1, 0)], Complex::new(3.0, 0.0));
    /// assert_eq!(Matrix::new(vec![]), Err(MatrixError::EmptyInput));
    /// ```
    pub fn new(rows: Vec<Vec<Complex>>) -> MatrixResult<Self> {
        let column_count = rows.first().ok_or(MatrixError::EmptyInput)?.len();
        if column_count == 0 {
            return Err(MatrixError::EmptyRow(0));
        }
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|(_, len)| *len != column_count)
        {
            return Err(if found == 0 {
                MatrixError::EmptyRow(row)
            } else {
                MatrixError::RowSizeMismatch {
                    row,
                    expected: column_count,
                    found,
                }
            });
        }

        let row_count = rows.len();
        Self::make_matrix(row_count, column_count, |row, col| rows[row][col])
    }

    /// Build a `row_count` by `column_count` matrix from a function of `(row, column)`.
    pub fn make_matrix<F>(row_count: usize, column_count: usize, value: F) -> MatrixResult<Self>
    where
        F: Fn(usize, usize) -> Complex,
    {
        if row_count == 0 || column_count == 0 {
            return Err(MatrixError::EmptyInput);
        }
        match row_count.checked_mul(column_count) {
            Some(len) if len <= MAX_ELEMENTS => Ok(Self::from_fn(row_count, column_count, value)),
            _ => Err(MatrixError::TooLarge {
                row_count,
                column_count,
            }),
        }
    }

    /// Same as `make_matrix` for sizes known to be nonzero.
    pub(crate) fn from_fn<F>(row_count: usize, column_count: usize, value: F) -> Self
    where
        F: Fn(usize, usize) -> Complex,
    {
        debug_assert!(row_count > 0 && column_count > 0);
        let values = (0..row_count * column_count)
            .map(|i| value(i % row_count, i / row_count))
            .collect();
        Self {
            row_count,
            column_count,
            values,
        }
    }

    /// The `count` by `count` identity.
    pub fn identity(count: usize) -> MatrixResult<Self> {
        Self::make_matrix(count, count, |row, col| if row == col { ONE } else { ZERO })
    }

    /// Permutation matrix with a one at `(row, permutation[row])` for each row, so that
    /// multiplying a vector `v` gives `w[row] = v[permutation[row]]`.
    pub fn permutation(permutation: &[usize]) -> MatrixResult<Self> {
        let count = permutation.len();
        if count == 0 {
            return Err(MatrixError::EmptyPermutation);
        }
        let mut seen = vec![false; count];
        for index in permutation {
            match seen.get_mut(*index) {
                None => {
                    return Err(MatrixError::IndexOutOfRange {
                        index: *index,
                        count,
                    })
                }
                Some(true) => return Err(MatrixError::RepeatedPermutationIndex(*index)),
                Some(flag) => *flag = true,
            }
        }

        Self::make_matrix(count, count, |row, col| {
            if col == permutation[row] {
                ONE
            } else {
                ZERO
            }
        })
    }

    /// Kronecker product with `lhs` acting on the most significant factor.
    pub fn tensor_product(lhs: &Matrix, rhs: &Matrix) -> Matrix {
        let row_count = lhs.row_count * rhs.row_count;
        let column_count = lhs.column_count * rhs.column_count;
        let values = (0..row_count * column_count)
            .map(|i| {
                let (row, col) = (i % row_count, i / row_count);
                let a = lhs[(row / rhs.row_count, col / rhs.column_count)];
                let b = rhs[(row % rhs.row_count, col % rhs.column_count)];
                a * b
            })
            .collect();
        Self {
            row_count,
            column_count,
            values,
        }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.column_count
    }

    /// Whether the matrix has as many rows as columns.
    pub fn is_square(&self) -> bool {
        self.row_count == self.column_count
    }

    /// Number of qubits the rows span, if the row count is a power of two.
    pub fn qubit_count(&self) -> Option<usize> {
        exact_log2(self.row_count)
    }

    /// First element of the first row.
    pub fn first(&self) -> Complex {
        self.values[0]
    }

    /// Iterate over the elements column by column.
    pub fn iter(&self) -> std::slice::Iter<'_, Complex> {
        self.values.iter()
    }

    /// Column-major backing store.
    pub fn as_slice(&self) -> &[Complex] {
        &self.values
    }

    /// Copy out the elements as a list of rows.
    pub fn rows(&self) -> Vec<Vec<Complex>> {
        (0..self.row_count)
            .map(|row| (0..self.column_count).map(|col| self[(row, col)]).collect())
            .collect()
    }

    /// Conjugate transpose.
    pub fn adjoint(&self) -> Matrix {
        let row_count = self.column_count;
        let column_count = self.row_count;
        let values = (0..row_count * column_count)
            .map(|i| self[(i / row_count, i % row_count)].conj())
            .collect();
        Self {
            row_count,
            column_count,
            values,
        }
    }

    /// Element-wise sum.
    pub fn add(&self, rhs: &Matrix) -> MatrixResult<Matrix> {
        self.zip_with(rhs, |a, b| a + b)
    }

    /// Element-wise difference.
    pub fn sub(&self, rhs: &Matrix) -> MatrixResult<Matrix> {
        self.zip_with(rhs, |a, b| a - b)
    }

    /// Multiply every element by `scalar`.
    pub fn scale(&self, scalar: Complex) -> Matrix {
        Self {
            row_count: self.row_count,
            column_count: self.column_count,
            values: self.values.iter().map(|v| scalar * v).collect(),
        }
    }

    /// Matrix product `self * rhs`.
    pub fn multiply(&self, rhs: &Matrix) -> MatrixResult<Matrix> {
        Self::product(self, Transformation::None, rhs)
    }

    /// Matrix product of `lhs`, transformed as requested, by `rhs`.
    ///
    /// # Example
    /// ```
    /// use qsim::prelude::*;
    ///
    /// let h = qsim::gate_matrices::make_hadamard();
    /// let hh = Matrix::product(&h, Transformation::Adjointed, &h).unwrap();
    /// assert!(hh.is_equal(&Matrix::identity(2).unwrap(), 1e-9));
    /// ```
    pub fn product(
        lhs: &Matrix,
        transformation: Transformation,
        rhs: &Matrix,
    ) -> MatrixResult<Matrix> {
        let (lhs_rows, lhs_columns) = match transformation {
            Transformation::None => (lhs.row_count, lhs.column_count),
            Transformation::Adjointed => (lhs.column_count, lhs.row_count),
        };
        if lhs_columns != rhs.row_count {
            return Err(MatrixError::DimensionMismatch {
                lhs_rows,
                lhs_columns,
                rhs_rows: rhs.row_count,
                rhs_columns: rhs.column_count,
            });
        }

        let result = lhs
            .to_array(transformation)
            .dot(&rhs.to_array(Transformation::None));
        Ok(Self::from_array(&result))
    }

    /// Matrix-vector product `self * vector`.
    pub fn multiply_vector(&self, vector: &Vector) -> MatrixResult<Vector> {
        if self.column_count != vector.count() {
            return Err(MatrixError::DimensionMismatch {
                lhs_rows: self.row_count,
                lhs_columns: self.column_count,
                rhs_rows: vector.count(),
                rhs_columns: 1,
            });
        }
        let vector = Array1::from(vector.as_slice().to_vec());
        let result = self.to_array(Transformation::None).dot(&vector);
        Vector::new(result.to_vec())
    }

    /// Compare dimensions exactly and values within `accuracy` on each real and imaginary part.
    pub fn is_equal(&self, other: &Matrix, accuracy: f64) -> bool {
        self.row_count == other.row_count
            && self.column_count == other.column_count
            && self
                .values
                .iter()
                .zip(other.values.iter())
                .all(|(a, b)| complex::is_equal(*a, *b, accuracy))
    }

    /// Check `M M† = I` and `M† M = I` within `accuracy`.
    pub fn is_unitary(&self, accuracy: f64) -> bool {
        if !self.is_square() {
            return false;
        }
        let identity = match Self::identity(self.row_count) {
            Ok(identity) => identity,
            Err(_) => return false,
        };

        let checks = [
            self.multiply(&self.adjoint()),
            Self::product(self, Transformation::Adjointed, self),
        ];
        checks.iter().all(|check| match check {
            Ok(m) => m.is_equal(&identity, accuracy),
            Err(_) => false,
        })
    }

    fn zip_with<F>(&self, rhs: &Matrix, f: F) -> MatrixResult<Matrix>
    where
        F: Fn(Complex, Complex) -> Complex,
    {
        if self.row_count != rhs.row_count || self.column_count != rhs.column_count {
            return Err(MatrixError::AdditionDimensionMismatch(
                self.row_count,
                self.column_count,
                rhs.row_count,
                rhs.column_count,
            ));
        }
        Ok(Self {
            row_count: self.row_count,
            column_count: self.column_count,
            values: self
                .values
                .iter()
                .zip(rhs.values.iter())
                .map(|(a, b)| f(*a, *b))
                .collect(),
        })
    }

    fn to_array(&self, transformation: Transformation) -> Array2<Complex> {
        match transformation {
            Transformation::None => {
                Array2::from_shape_fn((self.row_count, self.column_count), |(r, c)| self[(r, c)])
            }
            Transformation::Adjointed => {
                Array2::from_shape_fn((self.column_count, self.row_count), |(r, c)| {
                    self[(c, r)].conj()
                })
            }
        }
    }

    fn from_array(array: &Array2<Complex>) -> Self {
        let (row_count, column_count) = array.dim();
        // Iterating the transposed view walks the original column by column.
        let values = array.t().iter().copied().collect();
        Self {
            row_count,
            column_count,
            values,
        }
    }
}

impl Index<(usize, usize)> for Matrix {
    type Output = Complex;

    fn index(&self, (row, col): (usize, usize)) -> &Self::Output {
        &self.values[(col * self.row_count) + row]
    }
}

impl<'a> IntoIterator for &'a Matrix {
    type Item = &'a Complex;
    type IntoIter = std::slice::Iter<'a, Complex>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl From<Vector> for Matrix {
    fn from(vector: Vector) -> Self {
        let values = vector.into_vec();
        Self {
            row_count: values.len(),
            column_count: 1,
            values,
        }
    }
}

impl TryFrom<Matrix> for Vector {
    type Error = MatrixError;

    fn try_from(matrix: Matrix) -> Result<Self, Self::Error> {
        if matrix.column_count != 1 {
            Err(MatrixError::NotAColumn(matrix.column_count))
        } else {
            Vector::new(matrix.values)
        }
    }
}
