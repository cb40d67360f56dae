use crate::iterators::MatrixOp;
use crate::iter_mut;
use crate::utils::{get_bit, set_bit};
use num_traits::Zero;
use std::iter::Sum;
use std::ops::Mul;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Get the index for a submatrix indexed by `mat_indices` given the `full_index` for the larger
/// 2^n by 2^n matrix.
///
/// # Example
/// ```
/// use qsim_iterators::matrix_ops::full_to_sub;
///
/// // Qubit 2 is the lowest bit of a 3 qubit index, qubit 0 the highest.
/// assert_eq!(full_to_sub(3, &[2, 0], 0b001), 0b10);
/// assert_eq!(full_to_sub(3, &[2, 0], 0b100), 0b01);
/// ```
pub fn full_to_sub(n: usize, mat_indices: &[usize], full_index: usize) -> usize {
    let nindices = mat_indices.len();
    mat_indices
        .iter()
        .enumerate()
        .fold(0, |acc, (j, indx)| -> usize {
            let bit = get_bit(full_index, n - 1 - *indx);
            set_bit(acc, nindices - 1 - j, bit)
        })
}

/// Given the `sub_index` for the submatrix, and a base to overwrite values, get the full index
/// for the 2^n by 2^n matrix.
///
/// # Example
/// ```
/// use qsim_iterators::matrix_ops::sub_to_full;
///
/// assert_eq!(sub_to_full(3, &[2, 0], 0b10, 0b000), 0b001);
/// assert_eq!(sub_to_full(3, &[2, 0], 0b00, 0b111), 0b010);
/// ```
pub fn sub_to_full(n: usize, mat_indices: &[usize], sub_index: usize, base: usize) -> usize {
    let nindices = mat_indices.len();
    mat_indices.iter().enumerate().fold(base, |acc, (j, indx)| {
        let bit = get_bit(sub_index, nindices - 1 - j);
        set_bit(acc, n - 1 - *indx, bit)
    })
}

/// Order of qubits after moving `mat_indices` to the most significant positions: first
/// `mat_indices` in the given order, then every other qubit of the `n` in ascending order.
///
/// # Example
/// ```
/// use qsim_iterators::matrix_ops::qubit_order;
///
/// assert_eq!(qubit_order(4, &[2, 0]), vec![2, 0, 1, 3]);
/// ```
pub fn qubit_order(n: usize, mat_indices: &[usize]) -> Vec<usize> {
    let mut order = mat_indices.to_vec();
    order.extend((0..n).filter(|q| !mat_indices.contains(q)));
    order
}

/// Permutation of the `2^n` index space that brings `mat_indices` to the most significant bits.
///
/// Entry `r` of the result is the original index whose amplitude lands at position `r` once the
/// qubits are reordered as in [`qubit_order`].
///
/// # Example
/// ```
/// use qsim_iterators::matrix_ops::make_permutation;
///
/// // Swapping the two qubits of a 2 qubit register.
/// assert_eq!(make_permutation(2, &[1]), vec![0b00, 0b10, 0b01, 0b11]);
/// ```
pub fn make_permutation(n: usize, mat_indices: &[usize]) -> Vec<usize> {
    let order = qubit_order(n, mat_indices);
    (0..1 << n)
        .map(|permuted| sub_to_full(n, &order, permuted, 0))
        .collect()
}

/// Apply `op` to the `input` amplitudes of an `n` qubit register, storing the results in
/// `output`. Qubits not in `op.indices()` are left untouched.
///
/// Each output amplitude only reads the `2^k` input amplitudes which share its bits outside of
/// the operator's qubits, so the cost is `O(2^n 2^k)` instead of a full `4^n` product.
pub fn apply_op<P>(n: usize, op: &MatrixOp<P>, input: &[P], output: &mut [P])
where
    P: Clone + Zero + Sum + Mul<Output = P> + Send + Sync,
{
    debug_assert_eq!(input.len(), 1 << n);
    debug_assert_eq!(output.len(), 1 << n);
    let mat_indices = op.indices();

    let row_fn = |(row, outputloc): (usize, &mut P)| {
        let matrow = full_to_sub(n, mat_indices, row);
        *outputloc = op
            .nonzero_columns(matrow)
            .map(|(col, val)| {
                let vecrow = sub_to_full(n, mat_indices, col, row);
                val * input[vecrow].clone()
            })
            .sum();
    };

    iter_mut!(output).enumerate().for_each(row_fn);
}
