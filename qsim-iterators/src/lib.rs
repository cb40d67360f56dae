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

//! Index arithmetic for qubit-structured operators.
//!
//! A register of `n` qubits is stored as `2^n` amplitudes. Qubit `0` is the most significant bit
//! of an amplitude index, qubit `n - 1` the least significant. An operator over `k` qubits is
//! stored as a column-major `2^k` by `2^k` array whose `j`th index bit (counting from the most
//! significant) corresponds to the `j`th entry of its qubit index list.

/// Iterators over nonzero elements of small operators.
pub mod iterators;
/// Helper functions for applying operators to full registers.
pub mod matrix_ops;
/// Helpers for converting from synchronous to parallel iterators.
pub mod rayon_helper;
/// Utilities related to bit manipulation of register indices.
pub mod utils;
