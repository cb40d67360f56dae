//! Checks a gate against a register and produces the matrix and qubit list used for embedding.

use crate::config::SimulatorConfig;
use crate::errors::{GateError, GateResult};
use crate::gate_matrices::*;
use crate::gates::{Gate, Inputs};
use crate::matrix::Matrix;
use std::collections::HashSet;

/// A validated gate: a unitary over `inputs.len()` qubits and the register qubits it acts on, in
/// matrix bit order.
#[derive(Clone, Debug, PartialEq)]
pub struct GateComponents {
    /// Unitary with `2^inputs.len()` rows.
    pub matrix: Matrix,
    /// Register qubits, the first being the most significant matrix bit.
    pub inputs: Inputs,
}

/// Validate `gate` for a register of `qubit_count` qubits with the default accuracy.
///
/// # Example
/// ```
/// use qsim::prelude::*;
///
/// let components = validate_gate(&Gate::ControlledNot { target: 0, control: 1 }, 2).unwrap();
/// assert_eq!(components.inputs.as_slice(), &[1, 0]);
///
/// let err = validate_gate(&Gate::ControlledNot { target: 1, control: 1 }, 2);
/// assert_eq!(err, Err(GateError::DuplicateInputs(vec![1, 1])));
/// ```
pub fn validate_gate(gate: &Gate, qubit_count: usize) -> GateResult<GateComponents> {
    validate_gate_with(gate, qubit_count, &SimulatorConfig::default())
}

/// Validate `gate` for a register of `qubit_count` qubits.
pub fn validate_gate_with(
    gate: &Gate,
    qubit_count: usize,
    config: &SimulatorConfig,
) -> GateResult<GateComponents> {
    let inputs = gate.inputs();
    if !are_inputs_unique(&inputs) {
        return Err(GateError::DuplicateInputs(inputs.to_vec()));
    }

    let matrix = extract_matrix(gate, qubit_count, config)?;
    let matrix_qubits = matrix
        .qubit_count()
        .ok_or_else(|| GateError::MatrixRowCountNotPowerOfTwo(matrix.row_count()))?;
    if inputs.len() != matrix_qubits {
        return Err(GateError::InputCountMismatch {
            inputs: inputs.len(),
            matrix_qubits,
        });
    }

    check_register(matrix_qubits, qubit_count)?;
    if inputs.iter().any(|input| *input >= qubit_count) {
        return Err(GateError::InputsOutOfBounds {
            inputs: inputs.to_vec(),
            qubit_count,
        });
    }

    Ok(GateComponents { matrix, inputs })
}

fn check_register(matrix_qubits: usize, qubit_count: usize) -> GateResult<()> {
    if qubit_count == 0 {
        return Err(GateError::QubitCountMustBePositive);
    }
    if matrix_qubits > qubit_count {
        return Err(GateError::MatrixExceedsRegister {
            matrix_qubits,
            qubit_count,
        });
    }
    Ok(())
}

fn are_inputs_unique(inputs: &[usize]) -> bool {
    let unique: HashSet<_> = inputs.iter().collect();
    unique.len() == inputs.len()
}

/// Square, power of two sized and unitary. Checked before any expansion of the matrix.
fn check_caller_matrix(matrix: &Matrix, config: &SimulatorConfig) -> GateResult<()> {
    if !matrix.is_square() {
        return Err(GateError::MatrixNotSquare(
            matrix.row_count(),
            matrix.column_count(),
        ));
    }
    if !matrix.row_count().is_power_of_two() {
        return Err(GateError::MatrixRowCountNotPowerOfTwo(matrix.row_count()));
    }
    if !matrix.is_unitary(config.unitary_accuracy) {
        return Err(GateError::MatrixNotUnitary);
    }
    Ok(())
}

fn extract_matrix(
    gate: &Gate,
    qubit_count: usize,
    config: &SimulatorConfig,
) -> GateResult<Matrix> {
    match gate {
        Gate::Not { .. } => Ok(make_not()),
        Gate::Hadamard { .. } => Ok(make_hadamard()),
        Gate::PhaseShift { radians, .. } => Ok(make_phase_shift(*radians)),
        Gate::ControlledNot { .. } => Ok(make_controlled_not()),
        Gate::Matrix { matrix, .. } => {
            check_caller_matrix(matrix, config)?;
            Ok(matrix.clone())
        }
        Gate::ControlledMatrix { matrix, .. } => {
            check_caller_matrix(matrix, config)?;
            Ok(make_controlled_matrix(matrix))
        }
        Gate::Oracle {
            truth_table,
            controls,
            ..
        } => {
            // The oracle grows with its controls, so size it against the register first.
            if !controls.is_empty() {
                check_register(controls.len() + 1, qubit_count)?;
            }
            make_oracle(truth_table, controls.len())
        }
    }
}
