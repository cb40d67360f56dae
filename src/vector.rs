use crate::complex::{self, Complex, ONE, ZERO};
use crate::errors::{MatrixError, MatrixResult};
use crate::matrix::MAX_ELEMENTS;
use qsim_iterators::chunks;
use std::ops::Index;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Amplitudes summed sequentially before partial sums are combined in order.
const SUM_CHUNK: usize = 1 << 12;

/// A column of complex amplitudes.
#[derive(Clone, Debug, PartialEq)]
pub struct Vector {
    values: Vec<Complex>,
}

impl Vector {
    /// Build a vector, `values` can not be empty.
    pub fn new(values: Vec<Complex>) -> MatrixResult<Self> {
        if values.is_empty() {
            Err(MatrixError::EmptyInput)
        } else {
            Ok(Self { values })
        }
    }

    /// Vector of `count` elements which is one at `index` and zero elsewhere.
    pub fn one_hot(count: usize, index: usize) -> MatrixResult<Self> {
        if index >= count {
            return Err(MatrixError::IndexOutOfRange { index, count });
        }
        if count > MAX_ELEMENTS {
            return Err(MatrixError::TooLarge {
                row_count: count,
                column_count: 1,
            });
        }
        let values = (0..count)
            .map(|i| if i == index { ONE } else { ZERO })
            .collect();
        Ok(Self { values })
    }

    /// Number of elements.
    pub fn count(&self) -> usize {
        self.values.len()
    }

    /// Elements in order.
    pub fn as_slice(&self) -> &[Complex] {
        &self.values
    }

    /// Iterate over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, Complex> {
        self.values.iter()
    }

    /// Take the elements.
    pub fn into_vec(self) -> Vec<Complex> {
        self.values
    }

    /// Sum of the squared moduli of all elements.
    ///
    /// The additions happen in the same order on every run, with or without the `parallel`
    /// feature.
    pub fn squared_modulus_sum(&self) -> f64 {
        let partial: Vec<f64> = chunks!(self.values, SUM_CHUNK)
            .map(|chunk| chunk.iter().map(|c| c.norm_sqr()).sum::<f64>())
            .collect();
        partial.iter().sum()
    }

    /// Whether the squared moduli add up to one within `accuracy`.
    pub fn is_normalized(&self, accuracy: f64) -> bool {
        (self.squared_modulus_sum() - 1.0).abs() <= accuracy
    }

    /// Compare lengths exactly and values within `accuracy`.
    pub fn is_equal(&self, other: &Vector, accuracy: f64) -> bool {
        self.count() == other.count()
            && self
                .values
                .iter()
                .zip(other.values.iter())
                .all(|(a, b)| complex::is_equal(*a, *b, accuracy))
    }
}

impl Index<usize> for Vector {
    type Output = Complex;

    fn index(&self, index: usize) -> &Self::Output {
        &self.values[index]
    }
}

impl<'a> IntoIterator for &'a Vector {
    type Item = &'a Complex;
    type IntoIter = std::slice::Iter<'a, Complex>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
