//! Integration tests for gate application and sampling.

use std::f64::consts::FRAC_1_SQRT_2;

use num_complex::Complex64;
use qrows_adapter_sim::{Sampler, SimError, SimulatorBackend, Statevector};
use qrows_ir::{Circuit, QubitId};
use rand::SeedableRng;
use rand::rngs::StdRng;

const EPS: f64 = 1e-10;

/// Load `value` into qubits 0..3, then add one with a Toffoli ripple.
fn increment_from(value: usize) -> Statevector {
    let mut sv = Statevector::basis(3, value).unwrap();
    sv.apply_ccx(0, 1, 2).unwrap();
    sv.apply_cx(0, 1).unwrap();
    sv.apply_x(0).unwrap();
    sv
}

#[test]
fn test_increment_basis_state() {
    for value in 0..8 {
        let sv = increment_from(value);
        let expected = (value + 1) % 8;
        // Permutation gates move the amplitude without touching its phase.
        assert_eq!(sv, Statevector::basis(3, expected).unwrap(), "{value} + 1");
        assert_eq!(sv.amplitude(expected), Some(Complex64::new(1.0, 0.0)));
    }

    let sv = increment_from(2);
    assert_eq!(sv.outcome_to_bitstring(3), "011");
}

#[test]
fn test_increment_superposition() {
    // (|0⟩ + |4⟩)/√2 with the three-qubit increment becomes (|1⟩ + |5⟩)/√2.
    let mut sv = Statevector::new(3).unwrap();
    sv.apply_h(2).unwrap();
    sv.apply_ccx(0, 1, 2).unwrap();
    sv.apply_cx(0, 1).unwrap();
    sv.apply_x(0).unwrap();

    for (row, amp) in sv.amplitudes().iter().enumerate() {
        let expected = if row == 1 || row == 5 { FRAC_1_SQRT_2 } else { 0.0 };
        assert!((amp.re - expected).abs() < EPS, "row {row}: {amp}");
        assert!(amp.im.abs() < EPS, "row {row}: {amp}");
    }
}

#[test]
fn test_uniform_sampling_chi_square() {
    let mut circuit = Circuit::with_size("uniform", 3);
    for q in 0..3 {
        circuit.h(QubitId(q)).unwrap();
    }

    let backend = SimulatorBackend::new();
    let sv = backend.statevector(&circuit).unwrap();
    let shots = 8000;
    let counts = Sampler::new().sample_seeded(&sv, shots, 1234).unwrap();
    assert_eq!(counts.total(), u64::from(shots));

    let expected = f64::from(shots) / 8.0;
    let chi2: f64 = (0..8)
        .map(|row| {
            let diff = counts.get(row) as f64 - expected;
            diff * diff / expected
        })
        .sum();
    // 7 degrees of freedom; 24.3 is the 0.999 quantile.
    assert!(chi2 < 24.3, "chi-square {chi2} too large: {counts:?}");
}

/// A three-qubit state with a distinct amplitude in every row.
fn distinct_rows() -> Statevector {
    let raw: Vec<_> = (0..8)
        .map(|k| Complex64::new(k as f64 + 1.0, 0.5 * k as f64))
        .collect();
    let norm = raw.iter().map(Complex64::norm_sqr).sum::<f64>().sqrt();
    Statevector::from_amplitudes(raw.into_iter().map(|a| a / norm).collect()).unwrap()
}

#[test]
fn test_controlled_gates_skip_unset_controls() {
    let mut sv = Statevector::new(3).unwrap();
    sv.apply_h(1).unwrap();
    let before = sv.clone();

    // Qubit 0 is clear in every row with weight.
    sv.apply_cx(0, 2).unwrap();
    sv.apply_ccx(0, 1, 2).unwrap();
    assert_eq!(sv, before);
}

#[test]
fn test_cx_swaps_only_rows_with_control_set() {
    let before = distinct_rows();
    let mut sv = before.clone();
    sv.apply_cx(0, 2).unwrap();

    let (old, new) = (before.amplitudes(), sv.amplitudes());
    for row in [0b000, 0b010, 0b100, 0b110] {
        assert_eq!(new[row], old[row], "row {row:03b} moved");
    }
    for (a, b) in [(0b001, 0b101), (0b011, 0b111)] {
        assert_eq!(new[a], old[b]);
        assert_eq!(new[b], old[a]);
    }
}

#[test]
fn test_ccx_swaps_only_rows_with_both_controls_set() {
    let before = distinct_rows();
    let mut sv = before.clone();
    sv.apply_ccx(0, 1, 2).unwrap();

    let (old, new) = (before.amplitudes(), sv.amplitudes());
    for row in [0b000, 0b001, 0b010, 0b100, 0b101, 0b110] {
        assert_eq!(new[row], old[row], "row {row:03b} moved");
    }
    assert_eq!(new[0b011], old[0b111]);
    assert_eq!(new[0b111], old[0b011]);
}

#[test]
fn test_thirds_via_rotations() {
    // RY(2·acos(1/√3)) on q0, then a controlled split onto q1.
    let theta = 2.0 * (1.0f64 / 3.0f64.sqrt()).acos();
    let mut circuit = Circuit::with_size("thirds", 2);
    circuit
        .ry(theta, QubitId(0))
        .unwrap()
        .ry(std::f64::consts::FRAC_PI_4, QubitId(1))
        .unwrap()
        .cx(QubitId(0), QubitId(1))
        .unwrap()
        .ry(-std::f64::consts::FRAC_PI_4, QubitId(1))
        .unwrap()
        .cx(QubitId(0), QubitId(1))
        .unwrap();

    let sv = SimulatorBackend::new().statevector(&circuit).unwrap();
    let probs = sv.probabilities();
    assert!((probs[0] - 1.0 / 3.0).abs() < 1e-9);
    assert!((probs[1] - 1.0 / 3.0).abs() < 1e-9);
    assert!((probs[3] - 1.0 / 3.0).abs() < 1e-9);
    assert!(probs[2] < 1e-9);
}

#[test]
fn test_out_of_range_qubit() {
    let mut sv = Statevector::new(2).unwrap();
    assert!(matches!(
        sv.apply_h(2),
        Err(SimError::OutOfRange {
            qubit: 2,
            num_qubits: 2
        })
    ));
    assert!(matches!(
        sv.apply_ccx(0, 1, 5),
        Err(SimError::OutOfRange { qubit: 5, .. })
    ));
}

#[test]
fn test_unnormalized_amplitudes_rejected() {
    let result = Statevector::from_amplitudes(vec![
        Complex64::new(1.0, 0.0),
        Complex64::new(1.0, 0.0),
    ]);
    assert!(matches!(result, Err(SimError::InvalidState { .. })));
}

#[test]
fn test_shots_independent_of_rng_draw_order() {
    let mut circuit = Circuit::with_size("bell", 2);
    circuit
        .h(QubitId(0))
        .unwrap()
        .cx(QubitId(0), QubitId(1))
        .unwrap()
        .measure_all()
        .unwrap();

    let backend = SimulatorBackend::new();
    let mut rng = StdRng::seed_from_u64(99);
    let first = backend.run_with_rng(&circuit, 500, &mut rng).unwrap();
    let second = backend.run_with_rng(&circuit, 500, &mut rng).unwrap();

    for result in [first, second] {
        assert_eq!(result.counts.total(), 500);
        assert!(result.counts.get(0b00) > 150);
        assert!(result.counts.get(0b11) > 150);
    }
}
