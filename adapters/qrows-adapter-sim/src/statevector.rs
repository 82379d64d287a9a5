//! Statevector simulation engine.

use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

use qrows_ir::{Instruction, InstructionKind, QubitId, StandardGate, bit_of};

use crate::counts::format_outcome;
use crate::error::{SimError, SimResult};

/// Largest supported register; 2^30 amplitudes is 16 GiB.
pub const MAX_QUBITS: usize = 30;

/// Tolerance used when checking normalization of user-supplied amplitudes.
pub const NORM_TOLERANCE: f64 = 1e-6;

/// Conjugate pairs `(i0, i1)` for `target`, restricted to rows where every
/// qubit in `controls` is set.
///
/// `i0` has the target bit clear, `i1 = i0` with the target bit set. With no
/// controls there are exactly 2^(n-1) pairs.
pub fn conjugate_pairs(
    num_qubits: usize,
    target: QubitId,
    controls: &[QubitId],
) -> impl Iterator<Item = (usize, usize)> + use<> {
    let ctrl_mask = controls.iter().fold(0usize, |mask, q| mask | q.mask());
    let tgt_mask = target.mask();
    (0..1usize << num_qubits)
        .filter(move |&i| !bit_of(i, target) && i & ctrl_mask == ctrl_mask)
        .map(move |i| (i, i | tgt_mask))
}

/// A statevector representing a quantum state.
#[derive(Debug, Clone, PartialEq)]
pub struct Statevector {
    /// The state amplitudes (2^n complex numbers).
    amplitudes: Vec<Complex64>,
    /// Number of qubits.
    num_qubits: usize,
}

impl Statevector {
    /// Create a new statevector initialized to |0...0⟩.
    pub fn new(num_qubits: usize) -> SimResult<Self> {
        Self::basis(num_qubits, 0)
    }

    /// Create the computational basis state with amplitude 1 at `row`.
    pub fn basis(num_qubits: usize, row: usize) -> SimResult<Self> {
        check_width(num_qubits)?;
        let size = 1usize << num_qubits;
        if row >= size {
            return Err(SimError::InvalidArgument(format!(
                "row {row} does not exist in a {num_qubits}-qubit state"
            )));
        }
        let mut amplitudes = vec![Complex64::new(0.0, 0.0); size];
        amplitudes[row] = Complex64::new(1.0, 0.0);
        Ok(Self {
            amplitudes,
            num_qubits,
        })
    }

    /// Create a statevector from explicit amplitudes.
    ///
    /// The length must be a power of two (at least 2) and the amplitudes must
    /// be normalized.
    pub fn from_amplitudes(amplitudes: Vec<Complex64>) -> SimResult<Self> {
        let len = amplitudes.len();
        if len < 2 || !len.is_power_of_two() {
            return Err(SimError::InvalidArgument(format!(
                "amplitude count {len} is not a power of two >= 2"
            )));
        }
        let num_qubits = len.trailing_zeros() as usize;
        check_width(num_qubits)?;

        let sv = Self {
            amplitudes,
            num_qubits,
        };
        let norm_sqr = sv.norm_sqr();
        if !((norm_sqr - 1.0).abs() <= NORM_TOLERANCE) {
            return Err(SimError::InvalidState { norm_sqr });
        }
        Ok(sv)
    }

    /// Wrap amplitudes without any width or normalization check.
    #[cfg(test)]
    pub(crate) fn from_raw(amplitudes: Vec<Complex64>) -> Self {
        let num_qubits = amplitudes.len().trailing_zeros() as usize;
        Self {
            amplitudes,
            num_qubits,
        }
    }

    /// Get the number of qubits.
    pub fn num_qubits(&self) -> usize {
        self.num_qubits
    }

    /// Number of rows (2^n).
    pub fn dim(&self) -> usize {
        self.amplitudes.len()
    }

    /// All amplitudes, indexed by row.
    pub fn amplitudes(&self) -> &[Complex64] {
        &self.amplitudes
    }

    /// Amplitude of one row.
    pub fn amplitude(&self, row: usize) -> Option<Complex64> {
        self.amplitudes.get(row).copied()
    }

    /// Squared magnitude of every row.
    pub fn probabilities(&self) -> Vec<f64> {
        self.amplitudes.iter().map(Complex64::norm_sqr).collect()
    }

    /// Sum of squared magnitudes; 1.0 for a valid state.
    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(Complex64::norm_sqr).sum()
    }

    /// Real parts of all amplitudes, if every imaginary part is within `tolerance`.
    ///
    /// The five supported gates are real, so states built from |0…0⟩ are real.
    pub fn real_parts(&self, tolerance: f64) -> Option<Vec<f64>> {
        self.amplitudes
            .iter()
            .map(|amp| (amp.im.abs() <= tolerance).then_some(amp.re))
            .collect()
    }

    /// Convert a row index to its bitstring, qubit 0 rightmost.
    pub fn outcome_to_bitstring(&self, outcome: usize) -> String {
        format_outcome(outcome, self.num_qubits)
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Apply an instruction to the statevector.
    ///
    /// Measurements are terminal and leave the amplitudes untouched.
    pub fn apply(&mut self, instruction: &Instruction) -> SimResult<()> {
        match &instruction.kind {
            InstructionKind::Gate(gate) => {
                let qubits: Vec<_> = instruction.qubits.iter().map(|q| q.index()).collect();
                self.apply_gate(gate, &qubits)
            }
            InstructionKind::Measure => Ok(()),
        }
    }

    /// Apply a gate to specific qubits, controls first.
    pub fn apply_gate(&mut self, gate: &StandardGate, qubits: &[usize]) -> SimResult<()> {
        let expected = gate.num_qubits() as usize;
        if qubits.len() != expected {
            return Err(SimError::InvalidArgument(format!(
                "gate '{}' takes {expected} qubits, got {}",
                gate.name(),
                qubits.len()
            )));
        }

        match *gate {
            StandardGate::H => self.apply_h(qubits[0]),
            StandardGate::X => self.apply_x(qubits[0]),
            StandardGate::Ry(theta) => self.apply_ry(qubits[0], theta),
            StandardGate::CX => self.apply_cx(qubits[0], qubits[1]),
            StandardGate::CCX => self.apply_ccx(qubits[0], qubits[1], qubits[2]),
        }
    }

    // =========================================================================
    // Single-qubit gate implementations
    // =========================================================================

    /// Swap the rows of every conjugate pair.
    pub fn apply_x(&mut self, qubit: usize) -> SimResult<()> {
        let target = self.check_qubit(qubit)?;
        self.swap_pairs(target, &[]);
        Ok(())
    }

    /// Replace each pair `(a, b)` with `((a+b)/√2, (a-b)/√2)`.
    pub fn apply_h(&mut self, qubit: usize) -> SimResult<()> {
        let target = self.check_qubit(qubit)?;
        for (i, j) in conjugate_pairs(self.num_qubits, target, &[]) {
            let a = self.amplitudes[i];
            let b = self.amplitudes[j];
            self.amplitudes[i] = FRAC_1_SQRT_2 * (a + b);
            self.amplitudes[j] = FRAC_1_SQRT_2 * (a - b);
        }
        Ok(())
    }

    /// Rotate each pair by `[[cos θ/2, -sin θ/2], [sin θ/2, cos θ/2]]`.
    ///
    /// A fraction sin²(θ/2) of each row's probability moves to its partner.
    /// At θ = π this is a swap with the sign flipped on the bit-0 row.
    pub fn apply_ry(&mut self, qubit: usize, theta: f64) -> SimResult<()> {
        let target = self.check_qubit(qubit)?;
        if !theta.is_finite() {
            return Err(SimError::InvalidArgument(format!(
                "ry angle must be finite, got {theta}"
            )));
        }
        let (s, c) = (theta / 2.0).sin_cos();
        for (i, j) in conjugate_pairs(self.num_qubits, target, &[]) {
            let a = self.amplitudes[i];
            let b = self.amplitudes[j];
            self.amplitudes[i] = c * a - s * b;
            self.amplitudes[j] = s * a + c * b;
        }
        Ok(())
    }

    // =========================================================================
    // Controlled gate implementations
    // =========================================================================

    /// X on `target`, only in rows where `control` is set.
    pub fn apply_cx(&mut self, control: usize, target: usize) -> SimResult<()> {
        let qubits = self.check_operands(&[control, target])?;
        self.swap_pairs(qubits[1], &qubits[..1]);
        Ok(())
    }

    /// X on `target`, only in rows where both controls are set.
    pub fn apply_ccx(&mut self, c1: usize, c2: usize, target: usize) -> SimResult<()> {
        let qubits = self.check_operands(&[c1, c2, target])?;
        self.swap_pairs(qubits[2], &qubits[..2]);
        Ok(())
    }

    fn swap_pairs(&mut self, target: QubitId, controls: &[QubitId]) {
        for (i, j) in conjugate_pairs(self.num_qubits, target, controls) {
            self.amplitudes.swap(i, j);
        }
    }

    // =========================================================================
    // Validation
    // =========================================================================

    fn check_qubit(&self, qubit: usize) -> SimResult<QubitId> {
        if qubit >= self.num_qubits {
            return Err(SimError::OutOfRange {
                qubit,
                num_qubits: self.num_qubits,
            });
        }
        Ok(QubitId(qubit as u32))
    }

    fn check_operands(&self, qubits: &[usize]) -> SimResult<Vec<QubitId>> {
        let checked = qubits
            .iter()
            .map(|&q| self.check_qubit(q))
            .collect::<SimResult<Vec<_>>>()?;
        for (pos, q) in checked.iter().enumerate() {
            if checked[..pos].contains(q) {
                return Err(SimError::InvalidArgument(format!(
                    "qubit {} used more than once in one gate",
                    q.0
                )));
            }
        }
        Ok(checked)
    }
}

fn check_width(num_qubits: usize) -> SimResult<()> {
    if num_qubits == 0 {
        return Err(SimError::InvalidArgument(
            "a state needs at least one qubit".into(),
        ));
    }
    if num_qubits > MAX_QUBITS {
        return Err(SimError::InvalidArgument(format!(
            "{num_qubits} qubits exceeds the limit of {MAX_QUBITS}"
        )));
    }
    Ok(())
}
