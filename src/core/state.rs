// src/core/state.rs

use super::constants::qubit_constants::NORM_TOLERANCE;
use super::error::{QubitError, QubitResult};
use num_complex::Complex64;
use num_traits::{One, Zero};
use serde::Serialize;
use std::fmt;

/// A single-qubit state |ψ⟩ = α|0⟩ + β|1⟩.
///
/// Instances are only produced by [`AmplitudePair::normalize`], the basis
/// constructors, or by applying a unitary gate to an existing pair, so
/// `|α|² + |β|² = 1` holds up to floating-point drift. Pairs are never mutated
/// in place; each gate application yields a new value, which keeps the
/// session history immutable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)] // Avoid Eq for floating-point complex numbers
pub struct AmplitudePair {
    alpha: Complex64,
    beta: Complex64,
}

impl AmplitudePair {
    /// Normalizes a raw amplitude pair onto the unit sphere.
    ///
    /// # Arguments
    /// * `alpha` - Raw amplitude of |0⟩.
    /// * `beta` - Raw amplitude of |1⟩.
    ///
    /// # Returns
    /// * `Ok(AmplitudePair)` with `(alpha / norm, beta / norm)`.
    /// * `Err(QubitError::InvalidState)` if both amplitudes are zero or either is not finite.
    pub fn normalize(alpha: Complex64, beta: Complex64) -> QubitResult<Self> {
        if !alpha.is_finite() || !beta.is_finite() {
            return Err(QubitError::InvalidState {
                reason: "amplitudes must be finite".to_string(),
            });
        }
        if alpha.is_zero() && beta.is_zero() {
            return Err(QubitError::InvalidState {
                reason: "Alpha and Beta cannot both be zero.".to_string(),
            });
        }

        // hypot keeps large magnitudes from overflowing to inf
        let norm = alpha.norm().hypot(beta.norm());
        if !norm.is_finite() || norm == 0.0 {
            return Err(QubitError::InvalidState {
                reason: format!("amplitude norm {} cannot be normalized", norm),
            });
        }

        Ok(Self {
            alpha: alpha / norm,
            beta: beta / norm,
        })
    }

    /// The computational basis state |0⟩.
    pub fn zero() -> Self {
        Self { alpha: Complex64::one(), beta: Complex64::zero() }
    }

    /// The computational basis state |1⟩.
    pub fn one() -> Self {
        Self { alpha: Complex64::zero(), beta: Complex64::one() }
    }

    /// Wraps amplitudes produced by a unitary map of an already normalized pair.
    /// No renormalization happens here; accumulated drift is tolerated.
    pub(crate) fn from_unitary_image(alpha: Complex64, beta: Complex64) -> Self {
        Self { alpha, beta }
    }

    /// Amplitude of |0⟩.
    pub fn alpha(&self) -> Complex64 {
        self.alpha
    }

    /// Amplitude of |1⟩.
    pub fn beta(&self) -> Complex64 {
        self.beta
    }

    /// `|α|² + |β|²`, which is 1 up to floating-point drift.
    pub fn norm_sqr(&self) -> f64 {
        self.alpha.norm_sqr() + self.beta.norm_sqr()
    }

    /// Born-rule probabilities `(p0, p1) = (|α|², |β|²)`.
    pub fn probabilities(&self) -> (f64, f64) {
        (self.alpha.norm_sqr(), self.beta.norm_sqr())
    }

    /// Cartesian coordinates of the state on the Bloch sphere.
    ///
    /// `x = 2·Re(ᾱβ)`, `y = 2·Im(ᾱβ)`, `z = |α|² − |β|²`. A global phase on the
    /// pair does not move the point.
    pub fn bloch_vector(&self) -> [f64; 3] {
        let coherence = self.alpha.conj() * self.beta;
        [
            2.0 * coherence.re,
            2.0 * coherence.im,
            self.alpha.norm_sqr() - self.beta.norm_sqr(),
        ]
    }

    /// Component-wise comparison of both amplitudes within `tolerance`.
    pub fn approx_eq(&self, other: &AmplitudePair, tolerance: f64) -> bool {
        (self.alpha - other.alpha).norm() <= tolerance && (self.beta - other.beta).norm() <= tolerance
    }

    /// `true` if the pair is unit-norm within [`NORM_TOLERANCE`].
    pub fn is_normalized(&self) -> bool {
        (self.norm_sqr() - 1.0).abs() <= NORM_TOLERANCE
    }
}

/// Formats an amplitude as `re±imj` with four decimals, e.g. `0.7071+0.0000j`.
pub fn format_complex(c: Complex64) -> String {
    // Adding 0.0 folds a negative zero into +0.0 so "-0.0000" never shows up as "+-0.0000j"
    let re = c.re + 0.0;
    let im = c.im + 0.0;
    format!("{:.4}{}{:.4}j", re, if im >= 0.0 { "+" } else { "" }, im)
}

impl fmt::Display for AmplitudePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}|0⟩ + {}|1⟩", format_complex(self.alpha), format_complex(self.beta))
    }
}
