//! Evaluation of two independent circuits side by side.
//!
//! With the `parallel` feature both branches run on the rayon pool, otherwise one after the
//! other. Either way both branches always run to completion before any error is returned.

use crate::circuit::Circuit;
use crate::errors::StatevectorResult;
use crate::statevector::StatevectorSimulator;
use crate::vector::Vector;
use log::debug;
use qsim_iterators::join;

/// Run `first` and `second`, wait for both, then return both values or the first error.
///
/// When both branches fail the error of `first` is returned.
///
/// # Example
/// ```
/// use qsim::fanout::evaluate_pair;
///
/// let both = evaluate_pair(|| Ok::<_, String>(1), || Ok(2));
/// assert_eq!(both, Ok((1, 2)));
///
/// let failed = evaluate_pair(|| Err::<i32, _>("first"), || Err::<i32, _>("second"));
/// assert_eq!(failed, Err("first"));
/// ```
pub fn evaluate_pair<A, B, T, U, E>(first: A, second: B) -> Result<(T, U), E>
where
    A: FnOnce() -> Result<T, E> + Send,
    B: FnOnce() -> Result<U, E> + Send,
    T: Send,
    U: Send,
    E: Send,
{
    let (first, second) = join!(first, second);
    Ok((first?, second?))
}

/// Run both circuits from the basis state `bits` with `simulator`.
pub fn statevector_pair(
    simulator: &StatevectorSimulator,
    circuits: (&Circuit, &Circuit),
    bits: &str,
) -> StatevectorResult<(Vector, Vector)> {
    let (a, b) = circuits;
    debug!(
        "Evaluating a pair of circuits with {} and {} gates",
        a.gates().len(),
        b.gates().len()
    );
    evaluate_pair(
        || simulator.run_bits(a, bits),
        || simulator.run_bits(b, bits),
    )
}
