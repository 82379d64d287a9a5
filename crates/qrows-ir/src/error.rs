//! Error types for the IR crate.

use crate::qubit::QubitId;
use thiserror::Error;

/// Errors that can occur while building or validating a circuit.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum IrError {
    /// Qubit not found in circuit.
    #[error("Qubit {qubit} not found in circuit of {num_qubits} qubits{}", format_gate_context(.gate_name))]
    QubitNotFound {
        /// The qubit that was not found.
        qubit: QubitId,
        /// Width of the circuit.
        num_qubits: u32,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Gate requires different number of qubits.
    #[error("Gate '{gate_name}' requires {expected} qubits, got {got}")]
    QubitCountMismatch {
        /// Name of the gate.
        gate_name: String,
        /// Expected number of qubits.
        expected: u32,
        /// Actual number of qubits provided.
        got: u32,
    },

    /// Duplicate qubit in operation.
    #[error("Duplicate qubit {qubit} in operation{}", format_gate_context(.gate_name))]
    DuplicateQubit {
        /// The duplicate qubit.
        qubit: QubitId,
        /// Optional gate name for context.
        gate_name: Option<String>,
    },

    /// Gate name outside the supported set.
    #[error("Unknown gate '{0}' (supported: h, x, ry, cx, ccx)")]
    UnknownGate(String),

    /// A rotation gate was given without its angle.
    #[error("Gate '{0}' requires an angle")]
    MissingAngle(String),

    /// A fixed gate was given an angle.
    #[error("Gate '{0}' does not take an angle")]
    UnexpectedAngle(String),

    /// A rotation angle that is NaN or infinite.
    #[error("Gate '{gate_name}' has non-finite angle {angle}")]
    NonFiniteAngle {
        /// Name of the gate.
        gate_name: String,
        /// The rejected angle.
        angle: f64,
    },

    /// Gate applied to a qubit that has already been measured.
    #[error("Gate '{gate_name}' acts on {qubit}, which was already measured")]
    GateAfterMeasure {
        /// The measured qubit.
        qubit: QubitId,
        /// Name of the offending gate.
        gate_name: String,
    },

    /// Two circuits of different widths were combined.
    #[error("Cannot append a {got}-qubit circuit to a {expected}-qubit circuit")]
    WidthMismatch {
        /// Width of the receiving circuit.
        expected: u32,
        /// Width of the appended circuit.
        got: u32,
    },

    /// JSON encoding or decoding failed.
    #[error("Circuit serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Helper function to format optional gate context.
#[allow(clippy::ref_option)]
fn format_gate_context(gate_name: &Option<String>) -> String {
    match gate_name {
        Some(name) => format!(" (gate: {name})"),
        None => String::new(),
    }
}

/// Result type for IR operations.
pub type IrResult<T> = Result<T, IrError>;
