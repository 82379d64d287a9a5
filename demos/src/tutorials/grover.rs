//! Grover's search on three qubits.
//!
//! Qubits 0 and 1 hold a candidate answer and qubit 2 is the scratch qubit
//! the verifier writes to. One round of verify plus amplify is enough to
//! find the marked answer 13 times out of 16.

use qrows_ir::{Circuit, IrResult, QubitId};

const ALL: [QubitId; 3] = [QubitId(0), QubitId(1), QubitId(2)];

/// Flip qubit 2 exactly when qubits 0 and 1 read |10⟩ (q0 = 1, q1 = 0).
///
/// Change this to search for a different answer.
pub fn add_verify(circuit: &mut Circuit) -> IrResult<()> {
    circuit
        .x(QubitId(1))?
        .ccx(QubitId(0), QubitId(1), QubitId(2))?
        .x(QubitId(1))?;
    Ok(())
}

/// Wrap `add_verify` in H on qubit 2 so the answer shows up as a negative
/// amplitude instead of a flipped bit.
pub fn add_verify_with_h(circuit: &mut Circuit) -> IrResult<()> {
    circuit.h(QubitId(2))?;
    add_verify(circuit)?;
    circuit.h(QubitId(2))?;
    Ok(())
}

/// Uniform superposition over all eight rows.
pub fn add_prepare(circuit: &mut Circuit) -> IrResult<()> {
    for q in ALL {
        circuit.h(q)?;
    }
    Ok(())
}

/// Reverse the rows of the statevector (row i becomes row 7 - i).
pub fn add_reverse(circuit: &mut Circuit) -> IrResult<()> {
    for q in ALL {
        circuit.x(q)?;
    }
    Ok(())
}

/// Flip the sign of row |111⟩, written as H·CCX·H on qubit 2.
pub fn add_ccz(circuit: &mut Circuit) -> IrResult<()> {
    circuit
        .h(QubitId(2))?
        .ccx(QubitId(0), QubitId(1), QubitId(2))?
        .h(QubitId(2))?;
    Ok(())
}

/// Reflect about the uniform superposition, amplifying negative rows.
pub fn add_amplify(circuit: &mut Circuit) -> IrResult<()> {
    add_prepare(circuit)?;
    add_reverse(circuit)?;
    add_ccz(circuit)?;
    add_reverse(circuit)?;
    add_prepare(circuit)
}

/// The full search: prepare, verify, amplify, then measure qubits 0 and 1.
pub fn grover() -> IrResult<Circuit> {
    let mut circuit = Circuit::with_size("grover", 3);
    add_prepare(&mut circuit)?;
    add_verify_with_h(&mut circuit)?;
    add_amplify(&mut circuit)?;
    circuit.measure_qubits([QubitId(0), QubitId(1)])?;
    Ok(circuit)
}
