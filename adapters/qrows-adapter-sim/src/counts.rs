//! Measurement outcome histograms.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use qrows_ir::{QubitId, bit_of};

use crate::error::{SimError, SimResult};

/// Format a row index as a bitstring of `width` bits, qubit 0 rightmost.
pub fn format_outcome(outcome: usize, width: usize) -> String {
    format!("{outcome:0width$b}")
}

/// Observed count per outcome over a number of shots.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counts {
    /// Width of each outcome in bits.
    num_qubits: usize,
    /// Outcome row index to count. Outcomes never observed are absent.
    counts: BTreeMap<usize, u64>,
}

impl Counts {
    /// Create empty counts over `num_qubits`-bit outcomes.
    pub fn new(num_qubits: usize) -> Self {
        Self {
            num_qubits,
            counts: BTreeMap::new(),
        }
    }

    /// Record a single observation.
    pub fn record(&mut self, outcome: usize) {
        self.add(outcome, 1);
    }

    /// Record `count` observations of `outcome`.
    pub fn add(&mut self, outcome: usize, count: u64) {
        if count > 0 {
            *self.counts.entry(outcome).or_insert(0) += count;
        }
    }

    /// Count for one outcome (0 if never observed).
    pub fn get(&self, outcome: usize) -> u64 {
        self.counts.get(&outcome).copied().unwrap_or(0)
    }

    /// Total number of observations.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    /// Number of distinct outcomes observed.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Check if nothing was observed.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Width of each outcome in bits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Observed outcomes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, u64)> + '_ {
        self.counts.iter().map(|(&outcome, &count)| (outcome, count))
    }

    /// Observed frequency of one outcome.
    pub fn probability(&self, outcome: usize) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(outcome) as f64 / total as f64
    }

    /// The most observed outcome; ties go to the smaller row.
    pub fn most_frequent(&self) -> Option<(usize, u64)> {
        self.iter()
            .fold(None, |best, (outcome, count)| match best {
                Some((_, best_count)) if best_count >= count => best,
                _ => Some((outcome, count)),
            })
    }

    /// Bitstring form of one outcome.
    pub fn bitstring(&self, outcome: usize) -> String {
        format_outcome(outcome, self.num_qubits)
    }

    /// `(bitstring, count)` pairs in ascending outcome order.
    pub fn bitstrings(&self) -> Vec<(String, u64)> {
        self.iter()
            .map(|(outcome, count)| (self.bitstring(outcome), count))
            .collect()
    }

    /// Project the counts onto a subset of qubits.
    ///
    /// Qubit `qubits[k]` becomes bit `k` of the projected outcome, so
    /// `marginal(&[QubitId(0), QubitId(1)])` keeps the two rightmost bits.
    pub fn marginal(&self, qubits: &[QubitId]) -> SimResult<Counts> {
        let mut seen = FxHashSet::default();
        for &qubit in qubits {
            if qubit.index() >= self.num_qubits {
                return Err(SimError::OutOfRange {
                    qubit: qubit.index(),
                    num_qubits: self.num_qubits,
                });
            }
            if !seen.insert(qubit) {
                return Err(SimError::InvalidArgument(format!(
                    "qubit {} listed twice in marginal",
                    qubit.0
                )));
            }
        }

        let mut projected = Counts::new(qubits.len());
        for (outcome, count) in self.iter() {
            let row = qubits
                .iter()
                .enumerate()
                .filter(|&(_, &q)| bit_of(outcome, q))
                .fold(0usize, |row, (k, _)| row | (1 << k));
            projected.add(row, count);
        }
        Ok(projected)
    }
}

impl FromIterator<usize> for Counts {
    /// Collect outcomes; the width is the smallest that fits every outcome.
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut counts = Counts::new(1);
        for outcome in iter {
            counts.record(outcome);
        }
        let widest = counts.counts.keys().next_back().copied().unwrap_or(0);
        counts.num_qubits = (usize::BITS - widest.leading_zeros()).max(1) as usize;
        counts
    }
}
