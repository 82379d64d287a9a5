//! Quantum gate types.

use serde::{Deserialize, Serialize};

use crate::error::{IrError, IrResult};

/// The gates used by the tutorials.
///
/// Every gate acts on conjugate pairs of state-vector rows: two rows that
/// differ only in the target qubit's bit. Controlled gates restrict the
/// pairs to rows where all control bits are set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StandardGate {
    /// Hadamard gate.
    H,
    /// Pauli-X gate: swaps the two rows of every pair.
    X,
    /// Rotation around the Y axis by the given angle (radians).
    Ry(f64),
    /// Controlled-X (CNOT) gate, operands `[control, target]`.
    CX,
    /// Toffoli gate, operands `[control1, control2, target]`.
    CCX,
}

impl StandardGate {
    /// Build a gate from its lowercase name and optional angle.
    ///
    /// `ry` requires an angle; the other gates reject one.
    pub fn from_name(name: &str, angle: Option<f64>) -> IrResult<Self> {
        let gate = match name.to_lowercase().as_str() {
            "h" => StandardGate::H,
            "x" => StandardGate::X,
            "ry" => {
                let theta = angle.ok_or_else(|| IrError::MissingAngle("ry".into()))?;
                if !theta.is_finite() {
                    return Err(IrError::NonFiniteAngle {
                        gate_name: "ry".into(),
                        angle: theta,
                    });
                }
                return Ok(StandardGate::Ry(theta));
            }
            "cx" | "cnot" => StandardGate::CX,
            "ccx" | "toffoli" => StandardGate::CCX,
            other => return Err(IrError::UnknownGate(other.to_string())),
        };
        if angle.is_some() {
            return Err(IrError::UnexpectedAngle(gate.name().to_string()));
        }
        Ok(gate)
    }

    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            StandardGate::H => "h",
            StandardGate::X => "x",
            StandardGate::Ry(_) => "ry",
            StandardGate::CX => "cx",
            StandardGate::CCX => "ccx",
        }
    }

    /// Get the number of qubits this gate operates on.
    #[inline]
    pub fn num_qubits(&self) -> u32 {
        match self {
            StandardGate::H | StandardGate::X | StandardGate::Ry(_) => 1,
            StandardGate::CX => 2,
            StandardGate::CCX => 3,
        }
    }

    /// The rotation angle, for `Ry`.
    pub fn angle(&self) -> Option<f64> {
        match self {
            StandardGate::Ry(theta) => Some(*theta),
            _ => None,
        }
    }

    /// Number of leading operands that are controls.
    pub fn num_controls(&self) -> u32 {
        self.num_qubits() - 1
    }
}

impl std::fmt::Display for StandardGate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StandardGate::Ry(theta) => write!(f, "ry({theta:.4})"),
            other => write!(f, "{}", other.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_standard_gate_properties() {
        assert_eq!(StandardGate::H.num_qubits(), 1);
        assert_eq!(StandardGate::Ry(PI).num_qubits(), 1);
        assert_eq!(StandardGate::CX.num_qubits(), 2);
        assert_eq!(StandardGate::CCX.num_qubits(), 3);
        assert_eq!(StandardGate::CCX.num_controls(), 2);

        assert_eq!(StandardGate::Ry(0.5).angle(), Some(0.5));
        assert_eq!(StandardGate::X.angle(), None);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(StandardGate::from_name("H", None).unwrap(), StandardGate::H);
        assert_eq!(
            StandardGate::from_name("toffoli", None).unwrap(),
            StandardGate::CCX
        );
        assert_eq!(
            StandardGate::from_name("ry", Some(PI)).unwrap(),
            StandardGate::Ry(PI)
        );

        assert!(matches!(
            StandardGate::from_name("ry", None),
            Err(IrError::MissingAngle(_))
        ));
        assert!(matches!(
            StandardGate::from_name("x", Some(1.0)),
            Err(IrError::UnexpectedAngle(_))
        ));
        assert!(matches!(
            StandardGate::from_name("ccz", None),
            Err(IrError::UnknownGate(name)) if name == "ccz"
        ));
    }

    #[test]
    fn test_from_name_rejects_non_finite_angle() {
        assert!(matches!(
            StandardGate::from_name("ry", Some(f64::NAN)),
            Err(IrError::NonFiniteAngle { .. })
        ));
        assert!(matches!(
            StandardGate::from_name("ry", Some(f64::NEG_INFINITY)),
            Err(IrError::NonFiniteAngle { .. })
        ));
    }

    #[test]
    fn test_gate_display() {
        assert_eq!(StandardGate::CX.to_string(), "cx");
        assert_eq!(StandardGate::Ry(PI / 4.0).to_string(), "ry(0.7854)");
    }
}
