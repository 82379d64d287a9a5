//! Born-rule measurement sampling.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::counts::Counts;
use crate::error::{SimError, SimResult};
use crate::statevector::{NORM_TOLERANCE, Statevector};

/// Draws measurement outcomes from a statevector.
///
/// Each shot is an independent experiment on an identically prepared state:
/// sampling never collapses or otherwise mutates the statevector. The random
/// source is always supplied by the caller, so a seeded generator gives
/// reproducible counts.
#[derive(Debug, Clone, Copy)]
pub struct Sampler {
    /// Allowed deviation of the total probability from 1.
    tolerance: f64,
}

impl Default for Sampler {
    fn default() -> Self {
        Self::new()
    }
}

impl Sampler {
    /// Creates a `Sampler` with the default normalization tolerance (1e-6).
    pub fn new() -> Self {
        Self {
            tolerance: NORM_TOLERANCE,
        }
    }

    /// Sets the normalization tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// The normalization tolerance.
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Draws a single outcome.
    ///
    /// Returns the smallest row whose cumulative probability exceeds a uniform
    /// draw in `[0, 1)`.
    ///
    /// # Errors
    ///
    /// `SimError::InvalidState` if the total probability is off by more than
    /// the tolerance.
    pub fn sample_one<R: Rng + ?Sized>(&self, state: &Statevector, rng: &mut R) -> SimResult<usize> {
        let cdf = self.cumulative(state)?;
        Ok(pick(&cdf, rng.r#gen()))
    }

    /// Draws `shots` independent outcomes and tallies them.
    ///
    /// `shots = 0` returns empty counts.
    pub fn sample_many<R: Rng + ?Sized>(
        &self,
        state: &Statevector,
        rng: &mut R,
        shots: u32,
    ) -> SimResult<Counts> {
        // The cumulative table is built once and shared by every shot.
        let cdf = self.cumulative(state)?;

        let mut counts = Counts::new(state.num_qubits());
        for shot in 0..shots {
            counts.record(pick(&cdf, rng.r#gen()));

            if shot > 0 && shot % 10_000 == 0 {
                debug!("Completed {} shots", shot);
            }
        }

        debug!(
            "Sampled {} shots over {} rows, {} distinct outcomes",
            shots,
            state.dim(),
            counts.len()
        );
        Ok(counts)
    }

    /// Draws `shots` outcomes from a generator seeded with `seed`.
    pub fn sample_seeded(&self, state: &Statevector, shots: u32, seed: u64) -> SimResult<Counts> {
        let mut rng = StdRng::seed_from_u64(seed);
        self.sample_many(state, &mut rng, shots)
    }

    /// Pre-calculate the cumulative distribution and check normalization.
    fn cumulative(&self, state: &Statevector) -> SimResult<Vec<f64>> {
        let mut cdf = Vec::with_capacity(state.dim());
        let mut total = 0.0;
        for amp in state.amplitudes() {
            total += amp.norm_sqr();
            cdf.push(total);
        }

        // NaN fails this check.
        if !((total - 1.0).abs() <= self.tolerance) {
            return Err(SimError::InvalidState { norm_sqr: total });
        }
        Ok(cdf)
    }
}

/// Index of the first cumulative value strictly above `roll`.
fn pick(cdf: &[f64], roll: f64) -> usize {
    let idx = cdf.partition_point(|&c| c <= roll);
    if idx < cdf.len() {
        return idx;
    }

    // Rounding left the total slightly below the roll: fall back to the last
    // row that carries any probability.
    (0..cdf.len())
        .rev()
        .find(|&i| {
            let below = if i == 0 { 0.0 } else { cdf[i - 1] };
            cdf[i] > below
        })
        .unwrap_or(cdf.len() - 1)
}
