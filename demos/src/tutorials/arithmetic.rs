//! Digital arithmetic with quantum gates.
//!
//! Qubits 0..3 hold a 3-bit number, qubit 0 least significant. Because the
//! gates act on every row at once, incrementing a superposition increments
//! each number it contains.

use qrows_ir::{Circuit, IrResult, QubitId};

/// Append a 3-bit increment (modulo 8) on qubits 0, 1 and 2.
///
/// Carries are applied from the top down so each one reads its controls
/// before they change.
pub fn add_increment(circuit: &mut Circuit) -> IrResult<()> {
    circuit
        .ccx(QubitId(0), QubitId(1), QubitId(2))?
        .cx(QubitId(0), QubitId(1))?
        .x(QubitId(0))?;
    Ok(())
}

/// Append X gates that load `value` into an all-zero register.
pub fn add_load(circuit: &mut Circuit, value: usize) -> IrResult<()> {
    for q in 0..circuit.num_qubits() as u32 {
        if value >> q & 1 == 1 {
            circuit.x(QubitId(q))?;
        }
    }
    Ok(())
}

/// Load `start`, increment it `times` times, then measure all three qubits.
pub fn increment(start: usize, times: usize) -> IrResult<Circuit> {
    let mut circuit = Circuit::with_size("increment", 3);
    add_load(&mut circuit, start)?;
    for _ in 0..times {
        add_increment(&mut circuit)?;
    }
    circuit.measure_all()?;
    Ok(circuit)
}
