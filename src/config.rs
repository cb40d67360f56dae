/// Accuracy used for unitarity and normalization checks unless configured otherwise.
pub const DEFAULT_ACCURACY: f64 = 0.001;

/// Numerical tolerances used while validating gates and running simulations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulatorConfig {
    /// Maximum per-component deviation from the identity allowed when checking `M†M` and `MM†`.
    pub unitary_accuracy: f64,
    /// Maximum deviation from one allowed for the squared modulus sum of a state.
    pub normalization_accuracy: f64,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            unitary_accuracy: DEFAULT_ACCURACY,
            normalization_accuracy: DEFAULT_ACCURACY,
        }
    }
}

impl SimulatorConfig {
    /// Replace the accuracy used to check gate matrices for unitarity.
    pub fn with_unitary_accuracy(mut self, accuracy: f64) -> Self {
        self.unitary_accuracy = accuracy;
        self
    }

    /// Replace the accuracy used to check that states stay normalized.
    pub fn with_normalization_accuracy(mut self, accuracy: f64) -> Self {
        self.normalization_accuracy = accuracy;
        self
    }
}
