//! Integration tests for the tutorial suite.
//!
//! These run each tutorial circuit on the local simulator and check the
//! resulting distributions, using seeded sampling for reproducible counts.

use std::f64::consts::FRAC_1_SQRT_2;

use qrows_adapter_sim::{SimulatorBackend, SimulatorConfig};
use qrows_demos::tutorials::{
    Tutorial, add_amplify, add_ccz, add_increment, add_prepare, add_reverse, add_verify_with_h,
    bell, grover, increment, thirds, uniform_random,
};
use qrows_ir::{Circuit, QubitId};

const EPS: f64 = 1e-9;

fn seeded_backend(seed: u64) -> SimulatorBackend {
    SimulatorBackend::from_config(SimulatorConfig {
        seed: Some(seed),
        ..SimulatorConfig::default()
    })
}

/// Test the uniform tutorial state and its rough histogram.
#[test]
fn test_uniform_random() {
    let backend = seeded_backend(1);
    let circuit = uniform_random(3).unwrap();

    let sv = backend.statevector(&circuit).unwrap();
    let amp = 1.0 / 8f64.sqrt();
    for a in sv.amplitudes() {
        assert!((a.re - amp).abs() < EPS && a.im.abs() < EPS);
    }

    let result = backend.run(&circuit, 4000).unwrap();
    assert_eq!(result.counts.len(), 8);
    for (_, count) in result.counts.iter() {
        assert!((350..650).contains(&count), "count {count} far from 500");
    }
}

/// Test that the Bell pair only yields correlated outcomes.
#[test]
fn test_bell_counts() {
    let result = seeded_backend(2).run(&bell().unwrap(), 1000).unwrap();
    let strings: Vec<_> = result.counts.bitstrings().into_iter().map(|(s, _)| s).collect();
    assert_eq!(strings, ["00", "11"]);
}

/// Test the three-way split.
#[test]
fn test_thirds_distribution() {
    let backend = SimulatorBackend::new();
    let probs = backend.statevector(&thirds().unwrap()).unwrap().probabilities();
    for row in 0..3 {
        assert!((probs[row] - 1.0 / 3.0).abs() < EPS, "row {row}: {}", probs[row]);
    }
    assert!(probs[3] < EPS);

    let result = seeded_backend(3).run(&thirds().unwrap(), 3000).unwrap();
    assert_eq!(result.counts.get(0b11), 0);
}

/// Test the increment walkthrough: 2 → 3 → 4.
#[test]
fn test_increment_steps() {
    let backend = SimulatorBackend::new();
    let mut circuit = Circuit::with_size("increment", 3);
    circuit.x(QubitId(1)).unwrap();

    for expected in [3, 4] {
        add_increment(&mut circuit).unwrap();
        let sv = backend.statevector(&circuit).unwrap();
        for (row, amp) in sv.amplitudes().iter().enumerate() {
            let want = if row == expected { 1.0 } else { 0.0 };
            assert_eq!((amp.re, amp.im), (want, 0.0), "row {row} after step to {expected}");
        }
    }

    let result = seeded_backend(4).run(&increment(2, 2).unwrap(), 100).unwrap();
    assert_eq!(result.counts.bitstrings(), vec![("100".to_string(), 100)]);
}

/// Test increment of a superposition: {0, 4} → {1, 5}.
#[test]
fn test_increment_superposition() {
    let mut circuit = Circuit::with_size("increment", 3);
    circuit.h(QubitId(2)).unwrap();
    add_increment(&mut circuit).unwrap();

    let sv = SimulatorBackend::new().statevector(&circuit).unwrap();
    for (row, amp) in sv.amplitudes().iter().enumerate() {
        let want = if row == 1 || row == 5 { FRAC_1_SQRT_2 } else { 0.0 };
        assert!((amp.re - want).abs() < EPS, "row {row}: {amp}");
        assert!(amp.im.abs() < EPS, "row {row}: {amp}");
    }
}

/// Test that verify-with-H negates only the answer row with qubit 2 set.
#[test]
fn test_verify_with_h_marks_answer() {
    let mut circuit = Circuit::with_size("mark", 3);
    add_prepare(&mut circuit).unwrap();
    add_verify_with_h(&mut circuit).unwrap();

    let sv = SimulatorBackend::new().statevector(&circuit).unwrap();
    let reals = sv.real_parts(EPS).unwrap();
    let amp = 1.0 / 8f64.sqrt();
    for (row, re) in reals.iter().enumerate() {
        // Qubit 2 ends in |−⟩ for the answer q0 = 1, q1 = 0.
        let expected = if row == 0b101 { -amp } else { amp };
        assert!((re - expected).abs() < EPS, "row {row}: {re}");
    }
}

/// Test that a Toffoli on |3⟩ sets the scratch qubit, giving |7⟩.
#[test]
fn test_toffoli_sets_scratch_qubit() {
    let mut circuit = Circuit::with_size("toffoli", 3);
    circuit.x(QubitId(0)).unwrap().x(QubitId(1)).unwrap();
    circuit
        .ccx(QubitId(0), QubitId(1), QubitId(2))
        .unwrap();

    let sv = SimulatorBackend::new().statevector(&circuit).unwrap();
    assert_eq!(sv.real_parts(EPS).unwrap()[7], 1.0);
    assert!((sv.probabilities()[7] - 1.0).abs() < EPS);
}

/// Test the amplify steps one at a time: reverse, CCZ, reverse leaves row 0
/// at -3/4 and every other row at ±1/4, and the final prepare amplifies.
#[test]
fn test_amplify_walkthrough_states() {
    let backend = SimulatorBackend::new();
    let mut circuit = Circuit::with_size("grover-steps", 3);
    add_prepare(&mut circuit).unwrap();
    add_verify_with_h(&mut circuit).unwrap();
    add_prepare(&mut circuit).unwrap();
    add_reverse(&mut circuit).unwrap();
    add_ccz(&mut circuit).unwrap();
    add_reverse(&mut circuit).unwrap();

    let reals = backend.statevector(&circuit).unwrap().real_parts(EPS).unwrap();
    for (row, re) in reals.iter().enumerate() {
        let expected = if row == 0 {
            -0.75
        } else if (row & 0b101).count_ones() % 2 == 0 {
            -0.25
        } else {
            0.25
        };
        assert!((re - expected).abs() < EPS, "row {row}: {re}");
    }

    add_prepare(&mut circuit).unwrap();
    let mut amplified = Circuit::with_size("grover-amplified", 3);
    add_prepare(&mut amplified).unwrap();
    add_verify_with_h(&mut amplified).unwrap();
    add_amplify(&mut amplified).unwrap();
    let (a, b) = (
        backend.statevector(&circuit).unwrap(),
        backend.statevector(&amplified).unwrap(),
    );
    for (x, y) in a.amplitudes().iter().zip(b.amplitudes()) {
        assert!((x - y).norm() < EPS);
    }
}

/// Test the Grover marginal: answer 01 with probability 13/16.
#[test]
fn test_grover_probabilities() {
    let mut circuit = Circuit::with_size("grover", 3);
    add_prepare(&mut circuit).unwrap();
    add_verify_with_h(&mut circuit).unwrap();
    add_amplify(&mut circuit).unwrap();

    let probs = SimulatorBackend::new()
        .statevector(&circuit)
        .unwrap()
        .probabilities();
    let mut marginal = [0.0; 4];
    for (row, p) in probs.iter().enumerate() {
        marginal[row & 0b11] += p;
    }
    assert!((marginal[1] - 13.0 / 16.0).abs() < EPS);
    for outcome in [0, 2, 3] {
        assert!((marginal[outcome] - 1.0 / 16.0).abs() < EPS);
    }
}

/// Test the measured Grover run reports two-bit outcomes.
#[test]
fn test_grover_run() {
    let result = seeded_backend(5).run(&grover().unwrap(), 2000).unwrap();
    assert_eq!(result.measured_qubits, [QubitId(0), QubitId(1)]);
    assert_eq!(result.counts.num_qubits(), 2);
    assert_eq!(result.counts.most_frequent().map(|(o, _)| o), Some(0b01));

    let hit_rate = result.counts.probability(0b01);
    assert!((0.75..0.87).contains(&hit_rate), "hit rate {hit_rate}");
}

/// Test every tutorial runs end to end with the same seed twice.
#[test]
fn test_tutorials_reproducible() {
    let backend = seeded_backend(6);
    for tutorial in Tutorial::ALL {
        let circuit = tutorial.build().unwrap();
        let a = backend.run(&circuit, 200).unwrap();
        let b = backend.run(&circuit, 200).unwrap();
        assert_eq!(a.counts, b.counts, "{tutorial}");
        assert_eq!(a.counts.total(), 200);
    }
}
