use crate::complex::{Complex, ONE, ZERO};
use crate::errors::{GateError, GateResult};
use crate::matrix::{operator_side, Matrix};
use crate::utils::parse_bits;
use std::collections::HashSet;
use std::f64::consts::FRAC_1_SQRT_2;

fn make_fixed(rows: &[&[f64]]) -> Matrix {
    let side = rows.len();
    Matrix::from_fn(side, side, |row, col| Complex::new(rows[row][col], 0.0))
}

/// Bit flip.
pub fn make_not() -> Matrix {
    make_fixed(&[&[0.0, 1.0], &[1.0, 0.0]])
}

/// Hadamard.
pub fn make_hadamard() -> Matrix {
    make_fixed(&[
        &[FRAC_1_SQRT_2, FRAC_1_SQRT_2],
        &[FRAC_1_SQRT_2, -FRAC_1_SQRT_2],
    ])
}

/// Bit flip on the second qubit conditioned on the first.
pub fn make_controlled_not() -> Matrix {
    make_fixed(&[
        &[1.0, 0.0, 0.0, 0.0],
        &[0.0, 1.0, 0.0, 0.0],
        &[0.0, 0.0, 0.0, 1.0],
        &[0.0, 0.0, 1.0, 0.0],
    ])
}

/// `diag(1, e^{i radians})`
pub fn make_phase_shift(radians: f64) -> Matrix {
    let phase = Complex::from_polar(1.0, radians);
    diagonal(&[ONE, phase])
}

/// Block diagonal `I ⊕ matrix`: applies `matrix` to the lower qubits when the top qubit is set.
pub fn make_controlled_matrix(matrix: &Matrix) -> Matrix {
    let count = matrix.row_count();
    let side = count * 2;
    Matrix::from_fn(side, side, |row, col| match (row < count, col < count) {
        (true, true) if row == col => ONE,
        (false, false) => matrix[(row - count, col - count)],
        _ => ZERO,
    })
}

/// Oracle over `control_count` controls followed by one target qubit.
///
/// The target is flipped for each control assignment listed in `truth_table`, where the first
/// character of an entry is the first control. Entries shorter than `control_count` are read as
/// if padded with leading zeros. Fails with [`RegisterTooLarge`] when the oracle
/// matrix can not be allocated.
///
/// [`RegisterTooLarge`]: crate::errors::MatrixError::RegisterTooLarge
///
/// # Example
/// ```
/// use qsim::gate_matrices::{make_controlled_not, make_oracle};
///
/// let oracle = make_oracle(&["1".to_string()], 1).unwrap();
/// assert_eq!(oracle, make_controlled_not());
/// ```
pub fn make_oracle(truth_table: &[String], control_count: usize) -> GateResult<Matrix> {
    if control_count == 0 {
        return Err(GateError::EmptyControlList);
    }
    let activated = truth_table
        .iter()
        .map(|entry| match parse_bits(entry) {
            Some(value) if entry.len() <= control_count => Ok(value),
            _ => Err(GateError::InvalidTruthTable(entry.clone())),
        })
        .collect::<GateResult<HashSet<usize>>>()?;

    let side = operator_side(control_count.saturating_add(1))?;
    Ok(Matrix::make_matrix(side, side, |row, col| {
        let controls = col >> 1;
        let target = if activated.contains(&controls) {
            col ^ 1
        } else {
            col
        };
        if row == target {
            ONE
        } else {
            ZERO
        }
    })?)
}

fn diagonal(values: &[Complex]) -> Matrix {
    let side = values.len();
    Matrix::from_fn(side, side, |row, col| if row == col { values[row] } else { ZERO })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_ACCURACY;
    use crate::errors::MatrixError;

    #[test]
    fn test_fixed_gates_are_unitary() {
        assert!(make_not().is_unitary(DEFAULT_ACCURACY));
        assert!(make_hadamard().is_unitary(DEFAULT_ACCURACY));
        assert!(make_controlled_not().is_unitary(DEFAULT_ACCURACY));
        assert!(make_phase_shift(0.3).is_unitary(DEFAULT_ACCURACY));
    }

    #[test]
    fn test_phase_shift() {
        let m = make_phase_shift(std::f64::consts::PI);
        assert_eq!(m[(0, 0)], ONE);
        assert!(crate::complex::is_equal(m[(1, 1)], -ONE, 1e-12));
        assert_eq!(m[(0, 1)], ZERO);
    }

    #[test]
    fn test_controlled_matrix_of_not_is_cnot() {
        assert_eq!(make_controlled_matrix(&make_not()), make_controlled_not());
    }

    #[test]
    fn test_controlled_matrix_keeps_unitarity() {
        let m = make_controlled_matrix(&make_controlled_not());
        assert_eq!(m.row_count(), 8);
        assert!(m.is_unitary(DEFAULT_ACCURACY));
        assert_eq!(m[(7, 6)], ONE);
        assert_eq!(m[(2, 2)], ONE);
    }

    #[test]
    fn test_oracle_flips_listed_controls() {
        let oracle = make_oracle(&["01".to_string(), "10".to_string()], 2).unwrap();
        assert_eq!(oracle.row_count(), 8);
        assert!(oracle.is_unitary(DEFAULT_ACCURACY));
        // Controls 00 and 11 leave the target alone.
        assert_eq!(oracle[(0b000, 0b000)], ONE);
        assert_eq!(oracle[(0b111, 0b111)], ONE);
        // Controls 01 and 10 flip it.
        assert_eq!(oracle[(0b011, 0b010)], ONE);
        assert_eq!(oracle[(0b100, 0b101)], ONE);
        assert_eq!(oracle[(0b010, 0b010)], ZERO);
    }

    #[test]
    fn test_oracle_errors() {
        assert_eq!(make_oracle(&[], 0), Err(GateError::EmptyControlList));
        assert_eq!(
            make_oracle(&["2".to_string()], 1),
            Err(GateError::InvalidTruthTable("2".to_string()))
        );
        assert_eq!(
            make_oracle(&["101".to_string()], 2),
            Err(GateError::InvalidTruthTable("101".to_string()))
        );
        assert_eq!(
            make_oracle(&["00".to_string()], 64),
            Err(GateError::Matrix(MatrixError::RegisterTooLarge(65)))
        );
        assert_eq!(
            make_oracle(&[], 40),
            Err(GateError::Matrix(MatrixError::RegisterTooLarge(41)))
        );
    }

    #[test]
    fn test_empty_truth_table_is_identity() {
        let oracle = make_oracle(&[], 1).unwrap();
        assert_eq!(oracle, Matrix::identity(4).unwrap());
    }
}
