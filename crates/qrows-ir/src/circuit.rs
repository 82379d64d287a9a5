//! High-level circuit builder API.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};
use crate::gate::StandardGate;
use crate::instruction::{Instruction, InstructionKind};
use crate::qubit::QubitId;

/// A quantum circuit.
///
/// A circuit is an ordered list of instructions over a fixed number of
/// qubits. Building one never simulates anything; a separate run step folds
/// the instructions over an initial state vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    /// Name of the circuit.
    name: String,
    /// Number of qubits.
    num_qubits: u32,
    /// Instructions in application order.
    #[serde(default)]
    instructions: Vec<Instruction>,
}

impl Circuit {
    /// Create a circuit over `num_qubits` qubits.
    pub fn with_size(name: impl Into<String>, num_qubits: u32) -> Self {
        Self {
            name: name.into(),
            num_qubits,
            instructions: vec![],
        }
    }

    /// Append an instruction after validating it against the circuit.
    pub fn push(&mut self, instruction: Instruction) -> IrResult<&mut Self> {
        let measured = self.measured_set();
        self.check_instruction(&instruction, &measured)?;
        self.instructions.push(instruction);
        Ok(self)
    }

    // =========================================================================
    // Gates
    // =========================================================================

    /// Apply Hadamard gate.
    pub fn h(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(StandardGate::H, qubit))
    }

    /// Apply Pauli-X gate.
    pub fn x(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(StandardGate::X, qubit))
    }

    /// Apply Ry rotation gate.
    pub fn ry(&mut self, theta: f64, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::single_qubit_gate(StandardGate::Ry(theta), qubit))
    }

    /// Apply CNOT (CX) gate.
    pub fn cx(&mut self, control: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::gate(StandardGate::CX, [control, target]))
    }

    /// Apply Toffoli (CCX) gate.
    pub fn ccx(&mut self, c1: QubitId, c2: QubitId, target: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::gate(StandardGate::CCX, [c1, c2, target]))
    }

    /// Apply an arbitrary gate from the supported set.
    pub fn gate(
        &mut self,
        gate: StandardGate,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.push(Instruction::gate(gate, qubits))
    }

    // =========================================================================
    // Measurement
    // =========================================================================

    /// Measure a single qubit.
    pub fn measure(&mut self, qubit: QubitId) -> IrResult<&mut Self> {
        self.push(Instruction::measure([qubit]))
    }

    /// Measure a set of qubits. Qubit order determines bit order in results.
    pub fn measure_qubits(
        &mut self,
        qubits: impl IntoIterator<Item = QubitId>,
    ) -> IrResult<&mut Self> {
        self.push(Instruction::measure(qubits))
    }

    /// Measure every qubit.
    pub fn measure_all(&mut self) -> IrResult<&mut Self> {
        let qubits: Vec<_> = (0..self.num_qubits).map(QubitId).collect();
        self.measure_qubits(qubits)
    }

    // =========================================================================
    // Composition and validation
    // =========================================================================

    /// Append every instruction of `other` to this circuit.
    pub fn append(&mut self, other: &Circuit) -> IrResult<&mut Self> {
        if other.num_qubits != self.num_qubits {
            return Err(IrError::WidthMismatch {
                expected: self.num_qubits,
                got: other.num_qubits,
            });
        }
        for instruction in &other.instructions {
            self.push(instruction.clone())?;
        }
        Ok(self)
    }

    /// Re-check every instruction, e.g. after deserialization.
    pub fn validate(&self) -> IrResult<()> {
        let mut measured = FxHashSet::default();
        for instruction in &self.instructions {
            self.check_instruction(instruction, &measured)?;
            if instruction.is_measure() {
                measured.extend(instruction.qubits.iter().copied());
            }
        }
        Ok(())
    }

    fn check_instruction(
        &self,
        instruction: &Instruction,
        measured: &FxHashSet<QubitId>,
    ) -> IrResult<()> {
        let gate_name = instruction.name();

        if let InstructionKind::Gate(gate) = &instruction.kind {
            let expected = gate.num_qubits();
            let got = instruction.qubits.len() as u32;
            if expected != got {
                return Err(IrError::QubitCountMismatch {
                    gate_name: gate_name.to_string(),
                    expected,
                    got,
                });
            }
            if let Some(angle) = gate.angle().filter(|a| !a.is_finite()) {
                return Err(IrError::NonFiniteAngle {
                    gate_name: gate_name.to_string(),
                    angle,
                });
            }
        }

        for &qubit in &instruction.qubits {
            if qubit.0 >= self.num_qubits {
                return Err(IrError::QubitNotFound {
                    qubit,
                    num_qubits: self.num_qubits,
                    gate_name: Some(gate_name.to_string()),
                });
            }
        }

        let mut seen = FxHashSet::default();
        for &qubit in &instruction.qubits {
            if !seen.insert(qubit) {
                return Err(IrError::DuplicateQubit {
                    qubit,
                    gate_name: Some(gate_name.to_string()),
                });
            }
        }

        if !instruction.is_measure() {
            if let Some(&qubit) = instruction.qubits.iter().find(|q| measured.contains(q)) {
                return Err(IrError::GateAfterMeasure {
                    qubit,
                    gate_name: gate_name.to_string(),
                });
            }
        }

        Ok(())
    }

    fn measured_set(&self) -> FxHashSet<QubitId> {
        self.instructions
            .iter()
            .filter(|inst| inst.is_measure())
            .flat_map(|inst| inst.qubits.iter().copied())
            .collect()
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Get the circuit name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits as usize
    }

    /// All instructions in application order.
    pub fn instructions(&self) -> &[Instruction] {
        &self.instructions
    }

    /// Gate instructions only, in application order.
    pub fn gates(&self) -> impl Iterator<Item = &Instruction> {
        self.instructions.iter().filter(|inst| !inst.is_measure())
    }

    /// Number of gate instructions.
    pub fn num_gates(&self) -> usize {
        self.gates().count()
    }

    /// Measured qubits in the order they were first measured.
    ///
    /// Empty when the circuit contains no measurement.
    pub fn measured_qubits(&self) -> Vec<QubitId> {
        let mut seen = FxHashSet::default();
        self.instructions
            .iter()
            .filter(|inst| inst.is_measure())
            .flat_map(|inst| inst.qubits.iter().copied())
            .filter(|q| seen.insert(*q))
            .collect()
    }

    // =========================================================================
    // Serialization
    // =========================================================================

    /// Encode the circuit as pretty-printed JSON.
    pub fn to_json(&self) -> IrResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode and validate a circuit from JSON.
    pub fn from_json(source: &str) -> IrResult<Self> {
        let circuit: Circuit = serde_json::from_str(source)?;
        circuit.validate()?;
        Ok(circuit)
    }
}
