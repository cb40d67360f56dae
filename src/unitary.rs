use crate::circuit::Circuit;
use crate::config::SimulatorConfig;
use crate::errors::{GateError, UnitaryError, UnitaryResult};
use crate::matrix::{operator_side, Matrix};
use crate::state_ops::embed_operator;
use crate::validation::{validate_gate_with, GateComponents};
use log::{debug, trace};

/// Folds a circuit into the single operator it implements.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct UnitarySimulator {
    config: SimulatorConfig,
}

impl UnitarySimulator {
    /// Make a simulator with the given tolerances.
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Tolerances in use.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Operator of `circuit` over as many qubits as its highest index needs.
    ///
    /// Fails with [`UnitaryError::EmptyCircuit`] only when there are no gates. Gates that touch no
    /// qubit at all leave a register of zero qubits, which fails validation of the first gate.
    ///
    /// # Example
    /// ```
    /// use qsim::prelude::*;
    /// use qsim::gate_matrices::make_hadamard;
    ///
    /// let circuit = Circuit::new(vec![Gate::Hadamard { target: 0 }]);
    /// let u = UnitarySimulator::default().run(&circuit).unwrap();
    /// assert!(u.is_equal(&make_hadamard(), 0.001));
    /// ```
    pub fn run(&self, circuit: &Circuit) -> UnitaryResult<Matrix> {
        self.run_with_qubit_count(circuit, circuit.qubit_count())
    }

    /// Operator of `circuit` over a register of `qubit_count` qubits.
    ///
    /// Gate `i` is left-multiplied onto the product of gates `0..i`, so the result applied to a
    /// state runs the gates in circuit order.
    pub fn run_with_qubit_count(
        &self,
        circuit: &Circuit,
        qubit_count: usize,
    ) -> UnitaryResult<Matrix> {
        if circuit.gates().is_empty() {
            return Err(UnitaryError::EmptyCircuit);
        }
        debug!(
            "Building the unitary of {} gates over {} qubits",
            circuit.gates().len(),
            qubit_count
        );

        let identity = Matrix::identity(operator_side(qubit_count)?)?;
        circuit
            .gates()
            .iter()
            .enumerate()
            .try_fold(identity, |acc, (index, gate)| {
                let GateComponents { matrix, inputs } =
                    validate_gate_with(gate, qubit_count, &self.config)
                        .map_err(gate_failed(index))?;
                trace!("Accumulating gate {} on {:?}", index, inputs);

                let embedded =
                    embed_operator(&matrix, &inputs, qubit_count).map_err(gate_failed(index))?;
                Ok(embedded.multiply(&acc)?)
            })
    }
}

fn gate_failed(index: usize) -> impl Fn(GateError) -> UnitaryError {
    move |error| UnitaryError::GateFailed { index, error }
}

/// Operator of `circuit` with default tolerances.
pub fn simulate_unitary(circuit: &Circuit) -> UnitaryResult<Matrix> {
    UnitarySimulator::default().run(circuit)
}
