//! Simulator backend implementation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::time::Instant;
use tracing::{debug, instrument};

use qrows_ir::{Circuit, QubitId};

use crate::counts::Counts;
use crate::error::{SimError, SimResult};
use crate::sampler::Sampler;
use crate::statevector::{NORM_TOLERANCE, Statevector};

/// Simulator settings.
///
/// Every field has a default, so a config file only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulatorConfig {
    /// Widest circuit accepted.
    pub max_qubits: u32,
    /// Normalization tolerance used before sampling.
    pub tolerance: f64,
    /// Fixed seed for reproducible runs; fresh entropy when absent.
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            max_qubits: 20,
            tolerance: NORM_TOLERANCE,
            seed: None,
        }
    }
}

/// Result of running a circuit for a number of shots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionResult {
    /// Outcome counts over the measured qubits.
    pub counts: Counts,
    /// Number of shots requested.
    pub shots: u32,
    /// Reported qubits; `measured_qubits[k]` is bit `k` of each outcome.
    pub measured_qubits: Vec<QubitId>,
    /// Wall-clock time of simulation plus sampling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_time_ms: Option<u64>,
}

impl ExecutionResult {
    /// Create a result for `shots` shots.
    pub fn new(counts: Counts, shots: u32, measured_qubits: Vec<QubitId>) -> Self {
        Self {
            counts,
            shots,
            measured_qubits,
            execution_time_ms: None,
        }
    }

    /// Attach the execution time.
    #[must_use]
    pub fn with_execution_time(mut self, ms: u64) -> Self {
        self.execution_time_ms = Some(ms);
        self
    }
}

/// Local simulator backend.
///
/// Folds a circuit's instructions over |0…0⟩ once, then samples the final
/// statevector. Measurements are terminal, so one simulation serves every
/// shot.
#[derive(Debug, Clone)]
pub struct SimulatorBackend {
    /// Backend configuration.
    config: SimulatorConfig,
    /// Shot sampler configured with the backend tolerance.
    sampler: Sampler,
}

impl SimulatorBackend {
    /// Create a new simulator backend with default settings.
    pub fn new() -> Self {
        Self::from_config(SimulatorConfig::default())
    }

    /// Create a simulator with custom max qubits.
    pub fn with_max_qubits(max_qubits: u32) -> Self {
        Self::from_config(SimulatorConfig {
            max_qubits,
            ..SimulatorConfig::default()
        })
    }

    /// Create a simulator from a configuration.
    pub fn from_config(config: SimulatorConfig) -> Self {
        let sampler = Sampler::new().with_tolerance(config.tolerance);
        Self { config, sampler }
    }

    /// The active configuration.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Simulate a circuit and return its final statevector.
    #[instrument(skip_all, fields(circuit = %circuit.name()))]
    pub fn statevector(&self, circuit: &Circuit) -> SimResult<Statevector> {
        if circuit.num_qubits() > self.config.max_qubits as usize {
            return Err(SimError::CircuitTooLarge {
                num_qubits: circuit.num_qubits(),
                max_qubits: self.config.max_qubits,
            });
        }
        circuit.validate()?;

        let mut sv = Statevector::new(circuit.num_qubits())?;
        for inst in circuit.instructions() {
            sv.apply(inst)?;
        }

        debug!(
            "Applied {} gates to {} qubits",
            circuit.num_gates(),
            circuit.num_qubits()
        );
        Ok(sv)
    }

    /// Run a circuit for `shots` shots.
    ///
    /// Uses the configured seed if present, fresh entropy otherwise.
    pub fn run(&self, circuit: &Circuit, shots: u32) -> SimResult<ExecutionResult> {
        let mut rng = match self.config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        self.run_with_rng(circuit, shots, &mut rng)
    }

    /// Run a circuit for `shots` shots drawing from `rng`.
    ///
    /// Counts cover the measured qubits in measurement order, or every qubit
    /// when the circuit has no measurement.
    #[instrument(skip_all, fields(circuit = %circuit.name(), shots))]
    pub fn run_with_rng<R: Rng + ?Sized>(
        &self,
        circuit: &Circuit,
        shots: u32,
        rng: &mut R,
    ) -> SimResult<ExecutionResult> {
        let start = Instant::now();

        let sv = self.statevector(circuit)?;
        let counts = self.sampler.sample_many(&sv, rng, shots)?;

        let measured = circuit.measured_qubits();
        let all: Vec<_> = (0..circuit.num_qubits() as u32).map(QubitId).collect();
        let (counts, measured) = if measured.is_empty() || measured == all {
            (counts, all)
        } else {
            (counts.marginal(&measured)?, measured)
        };

        let elapsed = start.elapsed();
        debug!("Simulation completed in {:?}", elapsed);

        Ok(ExecutionResult::new(counts, shots, measured)
            .with_execution_time(elapsed.as_millis() as u64))
    }
}

impl Default for SimulatorBackend {
    fn default() -> Self {
        Self::new()
    }
}
