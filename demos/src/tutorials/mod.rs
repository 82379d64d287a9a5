//! Tutorial circuits.
//!
//! Four short lessons, each building a 2-3 qubit circuit:
//!
//! 1. [`uniform_random`]: fair random bits from H gates
//! 2. [`bell`] and [`thirds`]: other distributions from CX and RY
//! 3. [`add_increment`]: classical arithmetic on superpositions
//! 4. [`grover`]: verify plus amplify to find a marked answer

pub mod arithmetic;
pub mod grover;
pub mod random;

use std::fmt;
use std::str::FromStr;

use qrows_ir::{Circuit, IrResult};
use thiserror::Error;
use tracing::debug;

pub use arithmetic::{add_increment, add_load, increment};
pub use grover::{
    add_amplify, add_ccz, add_prepare, add_reverse, add_verify, add_verify_with_h, grover,
};
pub use random::{bell, third_angle, thirds, uniform_random};

/// Error returned when a tutorial name is not recognized.
#[derive(Debug, Clone, Error)]
#[error("unknown tutorial '{0}' (expected uniform, bell, thirds, increment or grover)")]
pub struct UnknownTutorial(pub String);

/// The runnable tutorial circuits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tutorial {
    /// Two fair random bits.
    Uniform,
    /// Entangled pair.
    Bell,
    /// Three outcomes, a third each.
    Thirds,
    /// 2 + 1 + 1 on three qubits.
    Increment,
    /// Three-qubit Grover search.
    Grover,
}

impl Tutorial {
    /// Every tutorial, in lesson order.
    pub const ALL: [Tutorial; 5] = [
        Tutorial::Uniform,
        Tutorial::Bell,
        Tutorial::Thirds,
        Tutorial::Increment,
        Tutorial::Grover,
    ];

    /// Short lowercase name used on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Tutorial::Uniform => "uniform",
            Tutorial::Bell => "bell",
            Tutorial::Thirds => "thirds",
            Tutorial::Increment => "increment",
            Tutorial::Grover => "grover",
        }
    }

    /// One-line description.
    pub fn summary(self) -> &'static str {
        match self {
            Tutorial::Uniform => "H on two qubits: outcomes 00, 01, 10, 11 equally likely",
            Tutorial::Bell => "H then CX: outcomes 00 and 11 only",
            Tutorial::Thirds => "RY, H and CX: outcomes 00, 01, 10 with a third each",
            Tutorial::Increment => "load 2, increment twice: always 100",
            Tutorial::Grover => "search for the answer 01 among four candidates",
        }
    }

    /// Build the tutorial circuit.
    pub fn build(self) -> IrResult<Circuit> {
        let circuit = match self {
            Tutorial::Uniform => uniform_random(2)?,
            Tutorial::Bell => bell()?,
            Tutorial::Thirds => thirds()?,
            Tutorial::Increment => increment(2, 2)?,
            Tutorial::Grover => grover()?,
        };
        debug!(
            "Built tutorial {} with {} gates",
            self.name(),
            circuit.num_gates()
        );
        Ok(circuit)
    }
}

impl fmt::Display for Tutorial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Tutorial {
    type Err = UnknownTutorial;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();
        Tutorial::ALL
            .into_iter()
            .find(|t| t.name() == lower)
            .ok_or_else(|| UnknownTutorial(s.to_string()))
    }
}
