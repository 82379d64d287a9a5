//! Error types for the simulator crate.

use thiserror::Error;

/// Errors produced by state-vector construction, gate application and sampling.
///
/// A failed gate application leaves the state vector unspecified; rebuild it
/// before reuse.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SimError {
    /// Bad qubit count, wrong operand count, or a qubit used twice in one gate.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A qubit index outside `0..num_qubits`.
    #[error("Qubit {qubit} is out of range for a {num_qubits}-qubit state")]
    OutOfRange {
        /// The offending qubit index.
        qubit: usize,
        /// Number of qubits in the state.
        num_qubits: usize,
    },

    /// Total probability is not 1 within tolerance.
    #[error("State is not normalized: total probability {norm_sqr}")]
    InvalidState {
        /// Sum of squared magnitudes.
        norm_sqr: f64,
    },

    /// Circuit is wider than the simulator allows.
    #[error("Circuit has {num_qubits} qubits but simulator only supports {max_qubits}")]
    CircuitTooLarge {
        /// Width of the circuit.
        num_qubits: usize,
        /// Configured limit.
        max_qubits: u32,
    },

    /// Circuit failed validation.
    #[error("Circuit IR error: {0}")]
    Ir(#[from] qrows_ir::IrError),
}

/// Result type for simulator operations.
pub type SimResult<T> = Result<T, SimError>;
