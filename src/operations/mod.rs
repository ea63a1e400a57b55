// src/operations/mod.rs

//! The fixed single-qubit gate library.
//!
//! Gates form a closed set `{NONE, H, X, Y, Z}`. Each one is a 2×2 unitary
//! acting on the column vector `(α, β)ᵗ`, dispatched by `match` to a plain
//! matrix-vector product. `NONE` is the identity and never shows up in a
//! session history.

use crate::core::{AmplitudePair, FRAC_1_SQRT_2, QubitError};
use num_complex::Complex64;
use num_traits::{One, Zero};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Row-major 2×2 complex matrix.
pub type GateMatrix = [[Complex64; 2]; 2];

/// A gate from the fixed library.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gate {
    /// No-op. Selected as `NONE` in the front end.
    Identity,
    /// Hadamard: creates an equal superposition from a basis state.
    H,
    /// Pauli-X: bit flip.
    X,
    /// Pauli-Y: bit and phase flip.
    Y,
    /// Pauli-Z: phase flip.
    Z,
}

impl Gate {
    /// Every selectable gate, in front-end order.
    pub const ALL: [Gate; 5] = [Gate::Identity, Gate::H, Gate::X, Gate::Y, Gate::Z];

    /// Short identifier as typed by the user (`NONE`, `H`, `X`, `Y`, `Z`).
    pub fn symbol(self) -> &'static str {
        match self {
            Gate::Identity => "NONE",
            Gate::H => "H",
            Gate::X => "X",
            Gate::Y => "Y",
            Gate::Z => "Z",
        }
    }

    /// Returns `true` for the no-op gate.
    pub fn is_identity(self) -> bool {
        self == Gate::Identity
    }

    /// The gate's matrix.
    pub fn matrix(self) -> GateMatrix {
        let zero = Complex64::zero();
        let one = Complex64::one();
        let i = Complex64::i();
        match self {
            Gate::Identity => [[one, zero], [zero, one]],
            Gate::H => {
                let s = Complex64::new(FRAC_1_SQRT_2, 0.0);
                [[s, s], [s, -s]]
            }
            Gate::X => [[zero, one], [one, zero]],
            Gate::Y => [[zero, -i], [i, zero]],
            Gate::Z => [[one, zero], [zero, -one]],
        }
    }

    /// Applies the gate to `pair` and returns the resulting state.
    ///
    /// The input is left untouched. All library matrices are unitary, so the
    /// output keeps the input's norm; no renormalization is performed.
    pub fn apply(self, pair: &AmplitudePair) -> AmplitudePair {
        if self.is_identity() {
            return *pair;
        }
        let m = self.matrix();
        let (a, b) = (pair.alpha(), pair.beta());
        AmplitudePair::from_unitary_image(m[0][0] * a + m[0][1] * b, m[1][0] * a + m[1][1] * b)
    }

    /// Descriptive name used in reports, e.g. `Hadamard (H)`.
    pub fn display_name(self) -> &'static str {
        match self {
            Gate::Identity => "Identity (NONE)",
            Gate::H => "Hadamard (H)",
            Gate::X => "Pauli-X (X)",
            Gate::Y => "Pauli-Y (Y)",
            Gate::Z => "Pauli-Z (Z)",
        }
    }

    /// One-line description of what the gate does to a state.
    pub fn effect(self) -> &'static str {
        match self {
            Gate::Identity => "Leaves the state unchanged",
            Gate::H => "Creates superposition",
            Gate::X => "Bit flip (NOT gate)",
            Gate::Y => "Bit and phase flip",
            Gate::Z => "Phase flip",
        }
    }

    /// Matrix reference block for the report.
    pub fn matrix_reference(self) -> String {
        let (first, second, prefix) = match self {
            Gate::Identity => ("[1  0]", "[0  1]", ""),
            Gate::H => ("[1  1]", "[1 -1]", "1/√2 * "),
            Gate::X => ("[0  1]", "[1  0]", ""),
            Gate::Y => ("[0  -i]", "[i   0]", ""),
            Gate::Z => ("[1   0]", "[0  -1]", ""),
        };
        let head = format!("   {}: {}", self.display_name(), prefix);
        let indent = " ".repeat(head.chars().count());
        format!("{}{}\n{}{}\n   Effect: {}", head, first, indent, second, self.effect())
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Gate {
    type Err = QubitError;

    /// Case-insensitive. `NONE`, `I`, `ID` and `IDENTITY` all select the no-op.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "NONE" | "I" | "ID" | "IDENTITY" => Ok(Gate::Identity),
            "H" => Ok(Gate::H),
            "X" => Ok(Gate::X),
            "Y" => Ok(Gate::Y),
            "Z" => Ok(Gate::Z),
            _ => Err(QubitError::UnsupportedGate(s.trim().to_string())),
        }
    }
}
