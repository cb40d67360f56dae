use proptest::prelude::*;
use qsim::gate_matrices::*;
use qsim::prelude::*;

const EPS: f64 = 1e-9;

fn complex_strategy() -> impl Strategy<Value = Complex> {
    (-2.0f64..2.0, -2.0f64..2.0).prop_map(|(re, im)| Complex::new(re, im))
}

fn matrix_strategy(rows: usize, columns: usize) -> impl Strategy<Value = Matrix> {
    prop::collection::vec(prop::collection::vec(complex_strategy(), columns), rows)
        .prop_map(|rows| Matrix::new(rows).unwrap())
}

/// A pair of matrices with the same dimensions.
fn matrix_pair_strategy() -> impl Strategy<Value = (Matrix, Matrix)> {
    (1usize..5, 1usize..5).prop_flat_map(|(r, c)| (matrix_strategy(r, c), matrix_strategy(r, c)))
}

/// Register size, distinct target qubits and a square matrix over them.
fn embedding_strategy() -> impl Strategy<Value = (usize, Vec<usize>, Matrix)> {
    (1usize..5)
        .prop_flat_map(|n| (Just(n), 0..=n.min(2)))
        .prop_flat_map(|(n, k)| {
            let inputs = Just((0..n).collect::<Vec<_>>())
                .prop_shuffle()
                .prop_map(move |all| all[..k].to_vec());
            (Just(n), inputs, matrix_strategy(1 << k, 1 << k))
        })
}

fn normalized_vector_strategy(qubit_count: usize) -> impl Strategy<Value = Vector> {
    prop::collection::vec(complex_strategy(), 1 << qubit_count).prop_map(|mut values| {
        values[0] += Complex::new(3.0, 0.0);
        let norm = values.iter().map(|c| c.norm_sqr()).sum::<f64>().sqrt();
        Vector::new(values.into_iter().map(|c| c / norm).collect()).unwrap()
    })
}

/// Distinct `(target, control)` qubits.
fn qubit_pair_strategy(qubit_count: usize) -> impl Strategy<Value = (usize, usize)> {
    (0..qubit_count, 1..qubit_count)
        .prop_map(move |(target, offset)| (target, (target + offset) % qubit_count))
}

fn unitary_gate_strategy(qubit_count: usize) -> impl Strategy<Value = Gate> {
    let target = 0..qubit_count;
    prop_oneof![
        target.clone().prop_map(|target| Gate::Not { target }),
        target.clone().prop_map(|target| Gate::Hadamard { target }),
        (-3.2f64..3.2, target).prop_map(|(radians, target)| Gate::PhaseShift { radians, target }),
        qubit_pair_strategy(qubit_count)
            .prop_map(|(target, control)| Gate::ControlledNot { target, control }),
        (qubit_pair_strategy(qubit_count), -3.2f64..3.2).prop_map(
            |((target, control), radians)| Gate::ControlledMatrix {
                matrix: make_phase_shift(radians),
                inputs: vec![target],
                control,
            }
        ),
    ]
}

fn circuit_strategy() -> impl Strategy<Value = (usize, Circuit)> {
    (2usize..5).prop_flat_map(|n| {
        (
            Just(n),
            prop::collection::vec(unitary_gate_strategy(n), 0..8).prop_map(Circuit::new),
        )
    })
}

proptest! {
    #[test]
    fn add_then_sub_is_identity((a, b) in matrix_pair_strategy()) {
        let round_trip = a.add(&b).unwrap().sub(&b).unwrap();
        prop_assert!(round_trip.is_equal(&a, EPS));
    }

    #[test]
    fn multiply_by_identity((r, c) in (1usize..5, 1usize..5), seed in any::<u64>()) {
        let a = Matrix::make_matrix(r, c, |row, column| {
            let x = (seed as f64 + (row * c + column) as f64).sin();
            Complex::new(x, -x / 2.0)
        }).unwrap();
        let product = a.multiply(&Matrix::identity(c).unwrap()).unwrap();
        prop_assert!(product.is_equal(&a, EPS));
    }

    #[test]
    fn embedding_agreement((n, inputs, matrix) in embedding_strategy(), seed in 0usize..64) {
        let v = Vector::new(
            (0..1usize << n)
                .map(|i| Complex::new(((i + seed) as f64).cos(), (i as f64).sin()))
                .collect(),
        ).unwrap();
        let dense = embed_operator(&matrix, &inputs, n).unwrap();
        let expected = dense.multiply_vector(&v).unwrap();
        let streamed = apply_embedded(&matrix, &inputs, &v).unwrap();
        prop_assert!(streamed.is_equal(&expected, EPS));
    }

    #[test]
    fn validation_is_idempotent(gate in unitary_gate_strategy(5), n in 0usize..6) {
        prop_assert_eq!(validate_gate(&gate, n), validate_gate(&gate, n));
    }

    #[test]
    fn unitary_circuits_preserve_normalization(
        (n, circuit, initial) in circuit_strategy()
            .prop_flat_map(|(n, circuit)| (Just(n), Just(circuit), normalized_vector_strategy(n)))
    ) {
        let state = StatevectorSimulator::default().run(&circuit, &initial).unwrap();
        prop_assert_eq!(state.count(), 1 << n);
        prop_assert!(state.is_normalized(DEFAULT_ACCURACY));
    }

    #[test]
    fn composition_law((n, circuit) in circuit_strategy(), index in any::<prop::sample::Index>()) {
        prop_assume!(!circuit.gates().is_empty());
        let u = circuit.unitary_with_qubit_count(n).unwrap();
        let v = Vector::one_hot(1 << n, index.index(1 << n)).unwrap();
        let from_u = u.multiply_vector(&v).unwrap();
        let state = StatevectorSimulator::default().run(&circuit, &v).unwrap();
        prop_assert!(from_u.is_equal(&state, DEFAULT_ACCURACY));
    }
}

#[test]
fn fixed_gates_are_unitary() {
    let fixed = vec![
        Matrix::identity(1).unwrap(),
        Matrix::identity(8).unwrap(),
        make_not(),
        make_hadamard(),
        make_controlled_not(),
        make_phase_shift(1.3),
        make_controlled_matrix(&make_hadamard()),
    ];
    for matrix in fixed {
        assert!(matrix.is_unitary(DEFAULT_ACCURACY), "{:?}", matrix);
    }
}
