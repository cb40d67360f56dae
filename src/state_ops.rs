//! Embedding of a small gate matrix into the operator acting on a whole register.
//!
//! Conceptually the embedded operator is `Pᵀ (M ⊗ I) P`, where `P` reorders the register so that
//! the gate inputs become the most significant qubits. [`embed_operator`] builds exactly that
//! product, [`apply_embedded`] gets the same effect on a statevector through index arithmetic
//! without ever forming a `2^n` by `2^n` matrix.

use crate::errors::{GateError, GateResult};
use crate::matrix::{operator_side, Matrix, Transformation};
use crate::vector::Vector;
use log::trace;
use qsim_iterators::iterators::MatrixOp;
use qsim_iterators::matrix_ops::{apply_op, make_permutation};
use qsim_iterators::utils::exact_log2;
use std::collections::HashSet;

/// Check that `matrix` acts on exactly `inputs` and that they fit in `qubit_count` qubits.
/// Returns the number of qubits of `matrix`.
fn check_embedding(matrix: &Matrix, inputs: &[usize], qubit_count: usize) -> GateResult<usize> {
    if inputs.iter().collect::<HashSet<_>>().len() != inputs.len() {
        return Err(GateError::DuplicateInputs(inputs.to_vec()));
    }
    let matrix_qubits = matrix
        .qubit_count()
        .filter(|_| matrix.is_square())
        .ok_or_else(|| GateError::MatrixRowCountNotPowerOfTwo(matrix.row_count()))?;
    if matrix_qubits != inputs.len() {
        return Err(GateError::InputCountMismatch {
            inputs: inputs.len(),
            matrix_qubits,
        });
    }
    if qubit_count == 0 {
        return Err(GateError::QubitCountMustBePositive);
    }
    if matrix_qubits > qubit_count {
        return Err(GateError::MatrixExceedsRegister {
            matrix_qubits,
            qubit_count,
        });
    }
    if inputs.iter().any(|input| *input >= qubit_count) {
        return Err(GateError::InputsOutOfBounds {
            inputs: inputs.to_vec(),
            qubit_count,
        });
    }
    Ok(matrix_qubits)
}

/// Build the `2^qubit_count` square operator applying `matrix` to `inputs` and leaving every other
/// qubit untouched.
///
/// Cost grows as `8^qubit_count`, prefer [`apply_embedded`] when only a statevector is needed.
/// A matrix with no inputs is a global phase and scales the whole register.
pub fn embed_operator(matrix: &Matrix, inputs: &[usize], qubit_count: usize) -> GateResult<Matrix> {
    check_embedding(matrix, inputs, qubit_count)?;
    let side = operator_side(qubit_count)?;
    trace!(
        "Embedding {}x{} matrix on {:?} into {} qubits",
        matrix.row_count(),
        matrix.column_count(),
        inputs,
        qubit_count
    );

    let rest = side >> inputs.len();
    let permutation = Matrix::permutation(&make_permutation(qubit_count, inputs))?;
    let block = Matrix::tensor_product(matrix, &Matrix::identity(rest)?);

    let permuted = block.multiply(&permutation)?;
    let embedded = Matrix::product(&permutation, Transformation::Adjointed, &permuted)?;
    Ok(embedded)
}

/// Apply `matrix` to the `inputs` qubits of the register held by `vector`.
///
/// # Example
/// ```
/// use qsim::prelude::*;
/// use qsim::gate_matrices::make_not;
///
/// // |00> with a bit flip on qubit 1 becomes |01>.
/// let v = Vector::one_hot(4, 0).unwrap();
/// let w = apply_embedded(&make_not(), &[1], &v).unwrap();
/// assert_eq!(w, Vector::one_hot(4, 1).unwrap());
/// ```
pub fn apply_embedded(matrix: &Matrix, inputs: &[usize], vector: &Vector) -> GateResult<Vector> {
    let qubit_count = exact_log2(vector.count())
        .ok_or_else(|| GateError::MatrixRowCountNotPowerOfTwo(vector.count()))?;
    let matrix_qubits = check_embedding(matrix, inputs, qubit_count)?;

    let op = MatrixOp::new(inputs, matrix.as_slice()).ok_or(GateError::InputCountMismatch {
        inputs: inputs.len(),
        matrix_qubits,
    })?;
    let mut output = vector.as_slice().to_vec();
    apply_op(qubit_count, &op, vector.as_slice(), &mut output);
    Ok(Vector::new(output)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::{from_reals, Complex};
    use crate::errors::MatrixError;
    use crate::gate_matrices::*;

    fn basis(qubit_count: usize, index: usize) -> Vector {
        Vector::one_hot(1 << qubit_count, index).unwrap()
    }

    #[test]
    fn test_embed_single_qubit_on_top() {
        let embedded = embed_operator(&make_not(), &[0], 2).unwrap();
        let expected = Matrix::tensor_product(&make_not(), &Matrix::identity(2).unwrap());
        assert!(embedded.is_equal(&expected, 1e-12));
    }

    #[test]
    fn test_embed_single_qubit_on_bottom() {
        let embedded = embed_operator(&make_not(), &[1], 2).unwrap();
        let expected = Matrix::tensor_product(&Matrix::identity(2).unwrap(), &make_not());
        assert!(embedded.is_equal(&expected, 1e-12));
    }

    #[test]
    fn test_embed_reversed_cnot() {
        // Control on qubit 1, target on qubit 0.
        let embedded = embed_operator(&make_controlled_not(), &[1, 0], 2).unwrap();
        let expected = Matrix::new(vec![
            from_reals(&[1.0, 0.0, 0.0, 0.0]),
            from_reals(&[0.0, 0.0, 0.0, 1.0]),
            from_reals(&[0.0, 0.0, 1.0, 0.0]),
            from_reals(&[0.0, 1.0, 0.0, 0.0]),
        ])
        .unwrap();
        assert!(embedded.is_equal(&expected, 1e-12));
    }

    #[test]
    fn test_apply_non_contiguous_inputs() {
        // Control on qubit 0 and target on qubit 2 of |100> gives |101>.
        let v = basis(3, 0b100);
        let w = apply_embedded(&make_controlled_not(), &[0, 2], &v).unwrap();
        assert_eq!(w, basis(3, 0b101));

        // Control on qubit 2 which is |0>: nothing happens.
        let w = apply_embedded(&make_controlled_not(), &[2, 0], &v).unwrap();
        assert_eq!(w, v);
    }

    #[test]
    fn test_streaming_agrees_with_dense() {
        let matrix = Matrix::new(vec![
            vec![Complex::new(0.5, 0.5), Complex::new(0.5, -0.5)],
            vec![Complex::new(0.5, -0.5), Complex::new(0.5, 0.5)],
        ])
        .unwrap();
        let gate = make_controlled_matrix(&matrix);
        let amplitude = Complex::new((1.0f64 / 8.0).sqrt(), 0.0);
        let v = Vector::new(vec![amplitude; 8]).unwrap();

        for inputs in [[0, 1], [2, 0], [1, 2]] {
            let dense = embed_operator(&gate, &inputs, 3).unwrap();
            let expected = dense.multiply_vector(&v).unwrap();
            let streamed = apply_embedded(&gate, &inputs, &v).unwrap();
            assert!(streamed.is_equal(&expected, 1e-12));
        }
    }

    #[test]
    fn test_scalar_gate_agrees() {
        let i = Complex::new(0.0, 1.0);
        let phase = Matrix::new(vec![vec![i]]).unwrap();
        let v = Vector::new(from_reals(&[0.6, 0.0, 0.0, 0.8])).unwrap();

        let dense = embed_operator(&phase, &[], 2).unwrap();
        assert!(dense.is_equal(&Matrix::identity(4).unwrap().scale(i), 1e-12));
        let expected = dense.multiply_vector(&v).unwrap();
        let streamed = apply_embedded(&phase, &[], &v).unwrap();
        assert!(streamed.is_equal(&expected, 1e-12));
        assert_eq!(streamed[3], Complex::new(0.0, 0.8));
    }

    #[test]
    fn test_register_too_large() {
        assert_eq!(
            embed_operator(&make_not(), &[0], 40),
            Err(GateError::Matrix(MatrixError::RegisterTooLarge(40)))
        );
        assert_eq!(
            embed_operator(&make_not(), &[63], 64),
            Err(GateError::Matrix(MatrixError::RegisterTooLarge(64)))
        );
    }

    #[test]
    fn test_embedding_errors() {
        assert_eq!(
            embed_operator(&make_not(), &[0, 1], 2),
            Err(GateError::InputCountMismatch {
                inputs: 2,
                matrix_qubits: 1
            })
        );
        assert_eq!(
            embed_operator(&make_not(), &[2], 2),
            Err(GateError::InputsOutOfBounds {
                inputs: vec![2],
                qubit_count: 2
            })
        );
        assert_eq!(
            embed_operator(&make_controlled_not(), &[0, 1], 1),
            Err(GateError::MatrixExceedsRegister {
                matrix_qubits: 2,
                qubit_count: 1
            })
        );
        assert_eq!(
            embed_operator(&make_controlled_not(), &[1, 1], 2),
            Err(GateError::DuplicateInputs(vec![1, 1]))
        );
        let v = Vector::new(from_reals(&[1.0, 0.0, 0.0])).unwrap();
        assert_eq!(
            apply_embedded(&make_not(), &[0], &v),
            Err(GateError::MatrixRowCountNotPowerOfTwo(3))
        );
    }
}
