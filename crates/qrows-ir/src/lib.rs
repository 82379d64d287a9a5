//! qrows Circuit Description
//!
//! This crate provides the data structures for describing the small circuits
//! used throughout the qrows tutorials. A [`Circuit`] is an ordered list of
//! [`Instruction`]s; it can be built, inspected, validated and serialized
//! without ever being simulated.
//!
//! # Core Components
//!
//! - **Qubits**: [`QubitId`] addresses one bit-position of a state-vector row.
//!   Qubit 0 is the least-significant (rightmost) bit, see [`bit_of`].
//! - **Gates**: [`StandardGate`] is the five-gate set (H, X, RY, CX, CCX)
//! - **Instructions**: [`Instruction`] combines a gate with its operands
//! - **Circuit**: [`Circuit`] high-level builder API
//!
//! # Example: Building a Bell Pair
//!
//! ```rust
//! use qrows_ir::{Circuit, QubitId};
//!
//! let mut circuit = Circuit::with_size("bell", 2);
//!
//! // |00⟩ → (|00⟩ + |11⟩)/√2
//! circuit.h(QubitId(0)).unwrap();
//! circuit.cx(QubitId(0), QubitId(1)).unwrap();
//! circuit.measure_all().unwrap();
//!
//! assert_eq!(circuit.num_qubits(), 2);
//! assert_eq!(circuit.num_gates(), 2);
//! ```
//!
//! # Supported Gates
//!
//! | Gate | Qubits | Description |
//! |------|--------|-------------|
//! | `H` | 1 | Hadamard: mixes each conjugate pair of rows evenly |
//! | `X` | 1 | Swaps each conjugate pair of rows |
//! | `Ry` | 1 | Real rotation by an angle |
//! | `CX` | 2 | X restricted to rows where the control is set |
//! | `CCX` | 3 | X restricted to rows where both controls are set |

pub mod circuit;
pub mod error;
pub mod gate;
pub mod instruction;
pub mod qubit;

pub use circuit::Circuit;
pub use error::{IrError, IrResult};
pub use gate::StandardGate;
pub use instruction::{Instruction, InstructionKind};
pub use qubit::{QubitId, bit_of};
