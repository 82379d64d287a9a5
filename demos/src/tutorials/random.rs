//! Random number circuits.
//!
//! Each circuit ends in a measurement, so running it for many shots turns a
//! prepared distribution over rows into a stream of random bits.

use qrows_ir::{Circuit, IrResult, QubitId};

/// Angle of the RY that leaves one third of the weight in the |1⟩ row.
pub fn third_angle() -> f64 {
    2.0 * (1.0f64 / 3.0).sqrt().asin()
}

/// H on every qubit, then measure: each of the 2^n outcomes is equally likely.
pub fn uniform_random(num_qubits: u32) -> IrResult<Circuit> {
    let mut circuit = Circuit::with_size("uniform", num_qubits);
    for q in 0..num_qubits {
        circuit.h(QubitId(q))?;
    }
    circuit.measure_all()?;
    Ok(circuit)
}

/// Bell pair: outcomes 00 and 11, never 01 or 10.
pub fn bell() -> IrResult<Circuit> {
    let mut circuit = Circuit::with_size("bell", 2);
    circuit
        .h(QubitId(0))?
        .cx(QubitId(0), QubitId(1))?
        .measure_all()?;
    Ok(circuit)
}

/// Three outcomes (0, 1 and 2) with a third of the probability each.
///
/// Qubit 1 takes a third of the weight into |1⟩. Where qubit 1 is |0⟩,
/// qubit 0 is split evenly; where it is |1⟩, the two RY halves around the CX
/// cancel the H so qubit 0 stays |0⟩.
pub fn thirds() -> IrResult<Circuit> {
    let quarter = std::f64::consts::FRAC_PI_4;
    let mut circuit = Circuit::with_size("thirds", 2);
    circuit
        .ry(third_angle(), QubitId(1))?
        .h(QubitId(0))?
        .ry(quarter, QubitId(0))?
        .cx(QubitId(1), QubitId(0))?
        .ry(-quarter, QubitId(0))?
        .measure_all()?;
    Ok(circuit)
}
