use num_traits::Zero;
use std::fmt;

use crate::utils::{checked_pow2, get_flat_index};

/// A dense operator acting on the qubits listed in `indices`.
///
/// `data` is column-major with side `2^indices.len()`.
#[derive(Clone)]
pub struct MatrixOp<P> {
    indices: Vec<usize>,
    data: Vec<P>,
}

impl<P> MatrixOp<P> {
    /// Make a new dense operator. Returns `None` if `data` does not have `4^indices.len()` entries.
    ///
    /// With no indices the operator is a single scalar scaling every amplitude.
    pub fn new<Indx, Dat>(indices: Indx, data: Dat) -> Option<Self>
    where
        Indx: Into<Vec<usize>>,
        Dat: Into<Vec<P>>,
    {
        let indices = indices.into();
        let data = data.into();
        if checked_pow2(2 * indices.len()) != Some(data.len()) {
            None
        } else {
            Some(Self { indices, data })
        }
    }

    /// Get the number of qubits the operator acts on.
    pub fn num_indices(&self) -> usize {
        self.indices.len()
    }

    /// Get the qubits acted on by this op, in operator bit order.
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }
}

impl<P> MatrixOp<P>
where
    P: Clone + Zero,
{
    /// Iterate over the nonzero `(column, value)` pairs of `row`.
    pub fn nonzero_columns(&self, row: usize) -> NonzeroColumnIterator<'_, P> {
        NonzeroColumnIterator::new(row, self.num_indices(), &self.data)
    }
}

impl<P> fmt::Debug for MatrixOp<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MatrixOp[{:?}]", self.indices)
    }
}

/// Iterator which provides the indices of nonzero columns for a given row of a column-major
/// operator.
#[derive(Debug)]
pub struct NonzeroColumnIterator<'a, P>
where
    P: Clone + Zero,
{
    row: usize,
    n: usize,
    data: &'a [P],
    next_col: usize,
}

impl<'a, P> NonzeroColumnIterator<'a, P>
where
    P: Clone + Zero,
{
    /// Build a new iterator using the row index, the number of qubits in the matrix, and the
    /// column-major values of the matrix.
    pub fn new(row: usize, n: usize, data: &'a [P]) -> Self {
        Self {
            row,
            n,
            data,
            next_col: 0,
        }
    }
}

impl<'a, P> Iterator for NonzeroColumnIterator<'a, P>
where
    P: Clone + Zero,
{
    type Item = (usize, P);

    fn next(&mut self) -> Option<Self::Item> {
        while self.next_col < (1 << self.n) {
            let col = self.next_col;
            self.next_col += 1;
            let val = &self.data[get_flat_index(self.n, self.row, col)];
            if !val.is_zero() {
                return Some((col, val.clone()));
            }
        }
        None
    }
}
