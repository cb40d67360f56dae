#![forbid(unsafe_code)]
#![deny(
    unreachable_pub,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces,
    unused_qualifications,
    missing_docs
)]

//! Gate model quantum circuit simulation with dense complex matrices.
//!
//! A [`Circuit`](circuit::Circuit) is an ordered list of [`Gate`](gates::Gate)s acting on
//! numbered qubits. Qubit 0 is the most significant bit of a basis state index, so the bit string
//! `"10"` names the basis state `|10>` with qubit 0 set. Every gate is validated against the
//! register before it is used, then either applied to a statevector or folded into the unitary
//! of the whole circuit.
//!
//! # Example (Bell state)
//! ```
//! use qsim::prelude::*;
//!
//! # fn main() -> StatevectorResult<()> {
//! let circuit = Circuit::new(vec![
//!     Gate::Hadamard { target: 0 },
//!     Gate::ControlledNot { target: 1, control: 0 },
//! ]);
//! let state = StatevectorSimulator::default().run_bits(&circuit, "00")?;
//!
//! let half = std::f64::consts::FRAC_1_SQRT_2;
//! let expected = Vector::new(from_reals(&[half, 0.0, 0.0, half])).unwrap();
//! assert!(state.is_equal(&expected, 0.001));
//! # Ok(())
//! # }
//! ```
//!
//! # Example (unitary of a circuit)
//! ```
//! use qsim::prelude::*;
//!
//! # fn main() -> UnitaryResult<()> {
//! let circuit: Circuit = Gate::hadamard_range(0..2).into_iter().collect();
//! let u = UnitarySimulator::default().run(&circuit)?;
//! assert_eq!(u.row_count(), 4);
//! assert!(u.is_unitary(0.001));
//! # Ok(())
//! # }
//! ```

/// Ordered gate lists and their simulation shortcuts.
pub mod circuit;
/// Complex number helpers.
pub mod complex;
/// Numerical tolerances.
pub mod config;
/// Error types for every stage of a simulation.
pub mod errors;
/// Evaluation of two circuits side by side.
pub mod fanout;
/// Matrices of the built-in gates.
pub mod gate_matrices;
/// Gate descriptions.
pub mod gates;
/// Dense column-major complex matrices.
pub mod matrix;
/// Placement of gate matrices into a full register.
pub mod state_ops;
/// Statevector simulation.
pub mod statevector;
/// Unitary simulation.
pub mod unitary;
/// Utility functions for bit strings.
pub mod utils;
/// Gate validation.
pub mod validation;
/// Complex column vectors.
pub mod vector;

pub use num_complex;

/// Commonly used types and functions.
/// ```
/// use qsim::prelude::*;
/// ```
pub mod prelude {
    pub use crate::circuit::Circuit;
    pub use crate::complex::{from_reals, from_tuples, Complex};
    pub use crate::config::{SimulatorConfig, DEFAULT_ACCURACY};
    pub use crate::errors::*;
    pub use crate::gates::Gate;
    pub use crate::matrix::{Matrix, Transformation};
    pub use crate::state_ops::{apply_embedded, embed_operator};
    pub use crate::statevector::{basis_vector, simulate_statevector, StatevectorSimulator};
    pub use crate::unitary::{simulate_unitary, UnitarySimulator};
    pub use crate::validation::{validate_gate, validate_gate_with, GateComponents};
    pub use crate::vector::Vector;
}
