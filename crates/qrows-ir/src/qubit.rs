//! Qubit identifiers and the row-index bit convention.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a qubit within a circuit.
///
/// A qubit names one bit-position of a state-vector row index. Qubit 0 is the
/// least-significant (rightmost) bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QubitId(pub u32);

impl QubitId {
    /// The row-index mask selecting this qubit's bit.
    #[inline]
    pub fn mask(self) -> usize {
        1usize << self.0
    }

    /// The qubit as a plain index.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for QubitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "q{}", self.0)
    }
}

impl From<u32> for QubitId {
    fn from(id: u32) -> Self {
        QubitId(id)
    }
}

/// Value of `qubit` in state-vector row `row`.
///
/// ```rust
/// use qrows_ir::{QubitId, bit_of};
///
/// // Row 6 is 0b110: qubit 0 is clear, qubits 1 and 2 are set.
/// assert!(!bit_of(6, QubitId(0)));
/// assert!(bit_of(6, QubitId(1)));
/// assert!(bit_of(6, QubitId(2)));
/// ```
#[inline]
pub fn bit_of(row: usize, qubit: QubitId) -> bool {
    row & qubit.mask() != 0
}
