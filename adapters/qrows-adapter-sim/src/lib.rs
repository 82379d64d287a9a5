//! qrows Local Statevector Simulator
//!
//! This crate holds the full 2^n complex amplitudes of an n-qubit register,
//! applies the gates of a [`qrows_ir::Circuit`] to them in place, and samples
//! measurement outcomes from the final state.
//!
//! # Features
//!
//! - **Exact Simulation**: Full statevector representation, qubit 0 is the
//!   least significant bit of a row index
//! - **Gate Set**: H, X, RY(θ), CX and CCX
//! - **Measurement Sampling**: Born-rule sampling with a caller-supplied RNG
//! - **Marginal Counts**: Results restricted to the measured qubits
//!
//! # Performance
//!
//! | Qubits | Memory | Simulation Speed |
//! |--------|--------|------------------|
//! | 10 | ~16 KB | Instant |
//! | 15 | ~512 KB | Fast |
//! | 20 | ~16 MB | Moderate |
//! | 25 | ~512 MB | Slow |
//! | 30 | ~16 GB | Not recommended |
//!
//! # Example
//!
//! ```
//! use qrows_adapter_sim::SimulatorBackend;
//! use qrows_ir::{Circuit, QubitId};
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//!
//! let mut circuit = Circuit::with_size("bell", 2);
//! circuit
//!     .h(QubitId(0))?
//!     .cx(QubitId(0), QubitId(1))?
//!     .measure_all()?;
//!
//! let backend = SimulatorBackend::new();
//! let mut rng = StdRng::seed_from_u64(42);
//! let result = backend.run_with_rng(&circuit, 1000, &mut rng)?;
//!
//! // Expect ~50% |00⟩ and ~50% |11⟩
//! assert_eq!(result.counts.get(0b00) + result.counts.get(0b11), 1000);
//! # Ok::<(), qrows_adapter_sim::SimError>(())
//! ```

mod counts;
mod error;
mod sampler;
mod simulator;
mod statevector;

pub use counts::{Counts, format_outcome};
pub use error::{SimError, SimResult};
pub use sampler::Sampler;
pub use simulator::{ExecutionResult, SimulatorBackend, SimulatorConfig};
pub use statevector::{MAX_QUBITS, NORM_TOLERANCE, Statevector, conjugate_pairs};
