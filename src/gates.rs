use crate::matrix::Matrix;
use smallvec::{smallvec, SmallVec};

/// Qubit indices a gate acts on. Most gates touch very few qubits.
pub type Inputs = SmallVec<[usize; 4]>;

/// A quantum gate with its target (and control) qubits.
#[derive(Clone, Debug, PartialEq)]
pub enum Gate {
    /// Bit flip on `target`.
    Not {
        /// Target qubit.
        target: usize,
    },
    /// Hadamard on `target`.
    Hadamard {
        /// Target qubit.
        target: usize,
    },
    /// `diag(1, e^{i radians})` on `target`.
    PhaseShift {
        /// Phase angle.
        radians: f64,
        /// Target qubit.
        target: usize,
    },
    /// Arbitrary unitary over `inputs`, the first input being the most significant matrix bit.
    Matrix {
        /// Unitary with `2^inputs.len()` rows.
        matrix: Matrix,
        /// Target qubits.
        inputs: Vec<usize>,
    },
    /// `matrix` over `inputs` applied only when `control` is set.
    ControlledMatrix {
        /// Unitary with `2^inputs.len()` rows.
        matrix: Matrix,
        /// Target qubits.
        inputs: Vec<usize>,
        /// Control qubit.
        control: usize,
    },
    /// Bit flip on `target` applied only when `control` is set.
    ControlledNot {
        /// Target qubit.
        target: usize,
        /// Control qubit.
        control: usize,
    },
    /// Flips `target` whenever `controls` match an entry of `truth_table`.
    Oracle {
        /// Control assignments, written with the first control as the first character.
        truth_table: Vec<String>,
        /// Target qubit.
        target: usize,
        /// Control qubits.
        controls: Vec<usize>,
    },
}

impl Gate {
    /// One `Hadamard` per index in `targets`.
    ///
    /// # Example
    /// ```
    /// use qsim::prelude::*;
    ///
    /// let gates = Gate::hadamard_range(0..3);
    /// assert_eq!(gates.len(), 3);
    /// assert_eq!(gates[2], Gate::Hadamard { target: 2 });
    /// ```
    pub fn hadamard_range<I>(targets: I) -> Vec<Gate>
    where
        I: IntoIterator<Item = usize>,
    {
        targets
            .into_iter()
            .map(|target| Gate::Hadamard { target })
            .collect()
    }

    /// One `Not` per index in `targets`.
    pub fn not_range<I>(targets: I) -> Vec<Gate>
    where
        I: IntoIterator<Item = usize>,
    {
        targets
            .into_iter()
            .map(|target| Gate::Not { target })
            .collect()
    }

    /// Qubits touched by the gate in matrix bit order: controls first, then targets.
    pub fn inputs(&self) -> Inputs {
        match self {
            Gate::Not { target } | Gate::Hadamard { target } | Gate::PhaseShift { target, .. } => {
                smallvec![*target]
            }
            Gate::Matrix { inputs, .. } => inputs.iter().copied().collect(),
            Gate::ControlledMatrix {
                inputs, control, ..
            } => std::iter::once(*control)
                .chain(inputs.iter().copied())
                .collect(),
            Gate::ControlledNot { target, control } => smallvec![*control, *target],
            Gate::Oracle {
                target, controls, ..
            } => controls
                .iter()
                .copied()
                .chain(std::iter::once(*target))
                .collect(),
        }
    }

    /// Highest qubit index the gate touches, `None` if it lists no qubits.
    pub fn max_qubit(&self) -> Option<usize> {
        self.inputs().into_iter().max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gate_matrices::make_not;

    #[test]
    fn test_inputs_put_controls_first() {
        let gate = Gate::ControlledNot {
            target: 0,
            control: 3,
        };
        assert_eq!(gate.inputs().as_slice(), &[3, 0]);

        let gate = Gate::ControlledMatrix {
            matrix: make_not(),
            inputs: vec![1],
            control: 2,
        };
        assert_eq!(gate.inputs().as_slice(), &[2, 1]);

        let gate = Gate::Oracle {
            truth_table: vec!["11".to_string()],
            target: 0,
            controls: vec![4, 2],
        };
        assert_eq!(gate.inputs().as_slice(), &[4, 2, 0]);
    }

    #[test]
    fn test_max_qubit() {
        assert_eq!(Gate::Not { target: 5 }.max_qubit(), Some(5));
        let gate = Gate::Matrix {
            matrix: make_not(),
            inputs: vec![],
        };
        assert_eq!(gate.max_qubit(), None);
    }

    #[test]
    fn test_not_range() {
        assert_eq!(
            Gate::not_range([4, 1]),
            vec![Gate::Not { target: 4 }, Gate::Not { target: 1 }]
        );
    }
}
