use thiserror::Error;

/// Errors from building or combining matrices and vectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MatrixError {
    /// No element was provided.
    #[error("Matrix data can not be empty")]
    EmptyInput,
    /// A row was empty.
    #[error("Row {0} of the matrix is empty")]
    EmptyRow(usize),
    /// A row does not have the same length as the first one.
    #[error("Row {row} has {found} elements, expected {expected}")]
    RowSizeMismatch {
        /// Offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },
    /// Inner dimensions of a product do not agree.
    #[error("Can not multiply a {lhs_rows}x{lhs_columns} matrix by a {rhs_rows}x{rhs_columns} one")]
    DimensionMismatch {
        /// Rows of the (possibly adjointed) left operand.
        lhs_rows: usize,
        /// Columns of the (possibly adjointed) left operand.
        lhs_columns: usize,
        /// Rows of the right operand.
        rhs_rows: usize,
        /// Columns of the right operand.
        rhs_columns: usize,
    },
    /// Outer dimensions of an addition do not agree.
    #[error("Can not add a {0}x{1} matrix to a {2}x{3} one")]
    AdditionDimensionMismatch(usize, usize, usize, usize),
    /// A permutation needs at least one index.
    #[error("Permutation can not be empty")]
    EmptyPermutation,
    /// A permutation listed the same index twice.
    #[error("Index {0} is repeated in the permutation")]
    RepeatedPermutationIndex(usize),
    /// An index is not smaller than the number of elements it selects from.
    #[error("Index {index} is out of range for {count} elements")]
    IndexOutOfRange {
        /// Offending index.
        index: usize,
        /// Number of elements.
        count: usize,
    },
    /// Only 1x1 matrices can be read as a single complex number.
    #[error("Expected a 1x1 matrix, found {0}x{1}")]
    NotOneByOne(usize, usize),
    /// A vector was expected but the matrix has more than one column.
    #[error("Expected a single column, found {0}")]
    NotAColumn(usize),
    /// The elements would not fit in memory addressable by a `Vec`.
    #[error("A {row_count}x{column_count} matrix is too large to allocate")]
    TooLarge {
        /// Requested rows.
        row_count: usize,
        /// Requested columns.
        column_count: usize,
    },
    /// An operator over this many qubits can not be represented.
    #[error("An operator over {0} qubits is too large to allocate")]
    RegisterTooLarge(usize),
}

/// Errors from validating a gate against a register.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GateError {
    /// The gate references the same qubit more than once.
    #[error("Gate inputs {0:?} are not unique")]
    DuplicateInputs(Vec<usize>),
    /// A caller supplied matrix is not square.
    #[error("Gate matrix is {0}x{1}, it has to be square")]
    MatrixNotSquare(usize, usize),
    /// A caller supplied matrix is not sized for a whole number of qubits.
    #[error("Gate matrix row count {0} is not a power of two")]
    MatrixRowCountNotPowerOfTwo(usize),
    /// A caller supplied matrix is not unitary within the configured accuracy.
    #[error("Gate matrix is not unitary")]
    MatrixNotUnitary,
    /// Oracle gates need at least one control.
    #[error("Oracle controls can not be an empty list")]
    EmptyControlList,
    /// Oracle truth table entry is not a valid control assignment.
    #[error("Truth table entry {0:?} is not a string of '0'/'1' fitting the controls")]
    InvalidTruthTable(String),
    /// Number of inputs does not match the qubits the matrix acts on.
    #[error("Gate has {inputs} inputs but its matrix acts on {matrix_qubits} qubits")]
    InputCountMismatch {
        /// Number of qubit inputs.
        inputs: usize,
        /// log2 of the matrix side.
        matrix_qubits: usize,
    },
    /// The register has no qubits.
    #[error("Register qubit count has to be bigger than zero")]
    QubitCountMustBePositive,
    /// The matrix acts on more qubits than the register holds.
    #[error("Gate matrix acts on {matrix_qubits} qubits, register only has {qubit_count}")]
    MatrixExceedsRegister {
        /// Qubits handled by the gate matrix.
        matrix_qubits: usize,
        /// Qubits in the register.
        qubit_count: usize,
    },
    /// An input is not a qubit of the register.
    #[error("Gate inputs {inputs:?} are not all in 0..{qubit_count}")]
    InputsOutOfBounds {
        /// Gate inputs.
        inputs: Vec<usize>,
        /// Qubits in the register.
        qubit_count: usize,
    },
    /// Building the gate matrix failed.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// Errors from simulating a circuit on a statevector.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StatevectorError {
    /// Basis state strings may only contain '0' and '1'.
    #[error("Input bits {0:?} are not a string composed only of '0' and '1'")]
    InvalidBitString(String),
    /// The initial state does not have `2^n` amplitudes for some positive `n`.
    #[error("State has {0} amplitudes, expected a power of two bigger than one")]
    StateCountNotPowerOfTwo(usize),
    /// The squared moduli of the initial state do not add up to one.
    #[error("Initial state is not a probability distribution (squared modulus sum {0})")]
    NotAProbabilityDistribution(f64),
    /// A gate failed validation.
    #[error("Gate {index} failed: {error}")]
    GateFailed {
        /// Position of the gate in the circuit.
        index: usize,
        /// Validation error.
        error: GateError,
    },
    /// The basis state can not be allocated.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
    /// Applying a gate left a state whose squared moduli do not add up to one.
    #[error("State is not normalized after gate {index} (squared modulus sum {sum})")]
    NormalizationViolatedAfterGate {
        /// Position of the gate in the circuit.
        index: usize,
        /// Squared modulus sum found.
        sum: f64,
    },
}

/// Errors from composing a circuit into a single unitary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UnitaryError {
    /// There are no gates to infer a qubit count from.
    #[error("Circuit can not be an empty list of gates")]
    EmptyCircuit,
    /// A gate failed validation or embedding.
    #[error("Gate {index} failed: {error}")]
    GateFailed {
        /// Position of the gate in the circuit.
        index: usize,
        /// Validation error.
        error: GateError,
    },
    /// Accumulating the operator failed.
    #[error(transparent)]
    Matrix(#[from] MatrixError),
}

/// A result which may contain a matrix error.
pub type MatrixResult<T> = Result<T, MatrixError>;
/// A result which may contain a gate error.
pub type GateResult<T> = Result<T, GateError>;
/// A result which may contain a statevector error.
pub type StatevectorResult<T> = Result<T, StatevectorError>;
/// A result which may contain a unitary error.
pub type UnitaryResult<T> = Result<T, UnitaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_failed_names_index() {
        let err = StatevectorError::GateFailed {
            index: 3,
            error: GateError::MatrixNotUnitary,
        };
        let msg = format!("{}", err);
        assert!(msg.contains('3'));
        assert!(msg.contains("not unitary"));
    }

    #[test]
    fn test_matrix_error_converts_into_gate_error() {
        let err: GateError = MatrixError::EmptyInput.into();
        assert_eq!(err, GateError::Matrix(MatrixError::EmptyInput));
    }
}
