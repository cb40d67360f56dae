use crate::errors::{StatevectorResult, UnitaryResult};
use crate::gates::Gate;
use crate::matrix::Matrix;
use crate::statevector::StatevectorSimulator;
use crate::unitary::UnitarySimulator;
use crate::vector::Vector;

/// An ordered list of gates. Gate 0 is applied first.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Circuit {
    gates: Vec<Gate>,
}

impl Circuit {
    /// Make a circuit out of `gates`.
    pub fn new(gates: Vec<Gate>) -> Self {
        Self { gates }
    }

    /// Gates in application order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Append a gate at the end of the circuit.
    pub fn push(&mut self, gate: Gate) {
        self.gates.push(gate)
    }

    /// One more than the highest qubit index used by any gate, zero for an empty circuit.
    ///
    /// # Example
    /// ```
    /// use qsim::prelude::*;
    ///
    /// let circuit = Circuit::new(vec![Gate::Not { target: 0 }, Gate::Hadamard { target: 4 }]);
    /// assert_eq!(circuit.qubit_count(), 5);
    /// ```
    pub fn qubit_count(&self) -> usize {
        self.gates
            .iter()
            .filter_map(Gate::max_qubit)
            .max()
            .map_or(0, |max| max.saturating_add(1))
    }

    /// Run the circuit from the basis state `bits` with default tolerances.
    pub fn statevector(&self, bits: &str) -> StatevectorResult<Vector> {
        StatevectorSimulator::default().run_bits(self, bits)
    }

    /// Run the circuit from `initial` with default tolerances.
    pub fn statevector_from(&self, initial: &Vector) -> StatevectorResult<Vector> {
        StatevectorSimulator::default().run(self, initial)
    }

    /// Operator of the circuit with default tolerances.
    pub fn unitary(&self) -> UnitaryResult<Matrix> {
        UnitarySimulator::default().run(self)
    }

    /// Operator of the circuit over `qubit_count` qubits with default tolerances.
    pub fn unitary_with_qubit_count(&self, qubit_count: usize) -> UnitaryResult<Matrix> {
        UnitarySimulator::default().run_with_qubit_count(self, qubit_count)
    }
}

impl From<Vec<Gate>> for Circuit {
    fn from(gates: Vec<Gate>) -> Self {
        Self::new(gates)
    }
}

impl FromIterator<Gate> for Circuit {
    fn from_iter<I: IntoIterator<Item = Gate>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Extend<Gate> for Circuit {
    fn extend<I: IntoIterator<Item = Gate>>(&mut self, iter: I) {
        self.gates.extend(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate_matrices::make_not;

    #[test]
    fn test_qubit_count() {
        assert_eq!(Circuit::default().qubit_count(), 0);

        let mut circuit: Circuit = Gate::hadamard_range(0..2).into_iter().collect();
        assert_eq!(circuit.qubit_count(), 2);
        circuit.push(Gate::ControlledNot {
            target: 1,
            control: 6,
        });
        assert_eq!(circuit.qubit_count(), 7);

        // A gate without inputs does not count towards the register.
        let circuit = Circuit::from(vec![Gate::Matrix {
            matrix: make_not(),
            inputs: vec![],
        }]);
        assert_eq!(circuit.qubit_count(), 0);

        let circuit = Circuit::from(vec![Gate::Not {
            target: usize::MAX,
        }]);
        assert_eq!(circuit.qubit_count(), usize::MAX);
    }

    #[test]
    fn test_extend_keeps_order() {
        let mut circuit = Circuit::new(Gate::not_range([0]));
        circuit.extend(Gate::hadamard_range([3, 1]));
        assert_eq!(
            circuit.gates(),
            &[
                Gate::Not { target: 0 },
                Gate::Hadamard { target: 3 },
                Gate::Hadamard { target: 1 }
            ]
        );
    }

    #[test]
    fn test_conveniences_match_simulators() {
        let circuit = Circuit::new(vec![
            Gate::Hadamard { target: 0 },
            Gate::ControlledNot {
                target: 1,
                control: 0,
            },
        ]);
        let state = circuit.statevector("00").unwrap();
        let u = circuit.unitary().unwrap();
        let from_u = u.multiply_vector(&Vector::one_hot(4, 0).unwrap()).unwrap();
        assert!(state.is_equal(&from_u, 1e-12));
        assert_eq!(circuit.unitary_with_qubit_count(2), Ok(u));
        assert_eq!(
            circuit.statevector_from(&Vector::one_hot(4, 0).unwrap()),
            Ok(state)
        );
    }
}
