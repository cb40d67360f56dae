use crate::circuit::Circuit;
use crate::config::SimulatorConfig;
use crate::errors::{MatrixError, StatevectorError, StatevectorResult};
use crate::state_ops::apply_embedded;
use crate::utils::parse_bits;
use crate::validation::{validate_gate_with, GateComponents};
use crate::vector::Vector;
use log::{debug, trace, warn};
use qsim_iterators::utils::{checked_pow2, exact_log2};

/// Runs circuits gate by gate on a statevector, checking that the state stays normalized.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct StatevectorSimulator {
    config: SimulatorConfig,
}

impl StatevectorSimulator {
    /// Make a simulator with the given tolerances.
    pub fn new(config: SimulatorConfig) -> Self {
        Self { config }
    }

    /// Tolerances in use.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Apply every gate of `circuit`, in order, to `initial`.
    ///
    /// The register size is taken from `initial`, which must hold `2^n` amplitudes with `n > 0`
    /// and be normalized. Stops at the first gate that fails validation or leaves the state
    /// unnormalized.
    pub fn run(&self, circuit: &Circuit, initial: &Vector) -> StatevectorResult<Vector> {
        let qubit_count = exact_log2(initial.count())
            .filter(|n| *n > 0)
            .ok_or_else(|| StatevectorError::StateCountNotPowerOfTwo(initial.count()))?;
        let sum = initial.squared_modulus_sum();
        if !self.is_normalized(sum) {
            return Err(StatevectorError::NotAProbabilityDistribution(sum));
        }

        debug!(
            "Running {} gates on a {} qubit statevector",
            circuit.gates().len(),
            qubit_count
        );
        circuit
            .gates()
            .iter()
            .enumerate()
            .try_fold(initial.clone(), |state, (index, gate)| {
                let gate_failed = |error| StatevectorError::GateFailed { index, error };
                let GateComponents { matrix, inputs } =
                    validate_gate_with(gate, qubit_count, &self.config).map_err(gate_failed)?;
                trace!("Applying gate {} on {:?}", index, inputs);

                let state = apply_embedded(&matrix, &inputs, &state).map_err(gate_failed)?;
                let sum = state.squared_modulus_sum();
                if self.is_normalized(sum) {
                    Ok(state)
                } else {
                    warn!("Gate {} left squared modulus sum {}", index, sum);
                    Err(StatevectorError::NormalizationViolatedAfterGate { index, sum })
                }
            })
    }

    /// Same as [`StatevectorSimulator::run`] starting from the basis state written in `bits`,
    /// where the first character is qubit 0 (the most significant).
    ///
    /// # Example
    /// ```
    /// use qsim::prelude::*;
    ///
    /// let circuit = Circuit::new(vec![Gate::ControlledNot { target: 1, control: 0 }]);
    /// let state = StatevectorSimulator::default().run_bits(&circuit, "10").unwrap();
    /// assert!(state.is_equal(&basis_vector("11").unwrap(), 0.001));
    /// ```
    pub fn run_bits(&self, circuit: &Circuit, bits: &str) -> StatevectorResult<Vector> {
        let initial = basis_vector(bits)?;
        self.run(circuit, &initial)
    }

    fn is_normalized(&self, sum: f64) -> bool {
        (sum - 1.0).abs() <= self.config.normalization_accuracy
    }
}

/// One-hot vector of `2^bits.len()` amplitudes for the basis state written in `bits`.
pub fn basis_vector(bits: &str) -> StatevectorResult<Vector> {
    let invalid = || StatevectorError::InvalidBitString(bits.to_string());
    let index = parse_bits(bits).ok_or_else(invalid)?;
    let count = checked_pow2(bits.len()).ok_or(MatrixError::RegisterTooLarge(bits.len()))?;
    Ok(Vector::one_hot(count, index)?)
}

/// Run `circuit` from the basis state `bits` with default tolerances.
pub fn simulate_statevector(circuit: &Circuit, bits: &str) -> StatevectorResult<Vector> {
    StatevectorSimulator::default().run_bits(circuit, bits)
}
