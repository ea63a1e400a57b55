// src/statistics/mod.rs

//! Comparison of theoretical Born-rule probabilities with sampled frequencies.

use crate::core::AmplitudePair;
use crate::sampling::MeasurementOutcome;
use serde::Serialize;
use std::fmt;

/// Theory versus sampling for one measurement run. Derived on demand, never stored
/// beyond the latest run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatisticsSnapshot {
    /// Theoretical probability of `0`, `|α|²`.
    pub p0_expected: f64,
    /// Theoretical probability of `1`, `|β|²`.
    pub p1_expected: f64,
    /// Sampled frequency of `0`.
    pub p0_measured: f64,
    /// Sampled frequency of `1`.
    pub p1_measured: f64,
    /// `|p0_expected − p0_measured|`.
    pub deviation0: f64,
    /// `|p1_expected − p1_measured|`.
    pub deviation1: f64,
    /// Binomial standard error `√(p0(1−p0)/shots)`.
    pub std_error0: f64,
    /// Binomial standard error `√(p1(1−p1)/shots)`.
    pub std_error1: f64,
}

impl StatisticsSnapshot {
    /// Computes the snapshot for `pair` measured as `outcome` over `shots` shots.
    ///
    /// Pure function of its inputs. `shots` must be positive; the simulator
    /// configuration guarantees that.
    pub fn compute(pair: &AmplitudePair, outcome: &MeasurementOutcome, shots: usize) -> Self {
        let (p0e, p1e) = pair.probabilities();
        let n = shots as f64;
        let p0m = outcome.count0() as f64 / n;
        let p1m = outcome.count1() as f64 / n;

        Self {
            p0_expected: p0e,
            p1_expected: p1e,
            p0_measured: p0m,
            p1_measured: p1m,
            deviation0: (p0e - p0m).abs(),
            deviation1: (p1e - p1m).abs(),
            std_error0: binomial_std_error(p0e, n),
            std_error1: binomial_std_error(p1e, n),
        }
    }

    /// `true` if both deviations lie within `sigmas` standard errors.
    ///
    /// At `p ∈ {0, 1}` the standard error is zero and only an exact match passes.
    pub fn within_sigmas(&self, sigmas: f64) -> bool {
        self.deviation0 <= sigmas * self.std_error0 && self.deviation1 <= sigmas * self.std_error1
    }
}

// Drift can push p a hair outside [0, 1]; clamp so the radicand never goes negative.
fn binomial_std_error(p: f64, shots: f64) -> f64 {
    let p = p.clamp(0.0, 1.0);
    (p * (1.0 - p) / shots).sqrt()
}

impl fmt::Display for StatisticsSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Theoretical")?;
        writeln!(f, "  |0⟩: {:.4}  |1⟩: {:.4}", self.p0_expected, self.p1_expected)?;
        writeln!(f, "Measured")?;
        writeln!(f, "  |0⟩: {:.4}  |1⟩: {:.4}", self.p0_measured, self.p1_measured)?;
        writeln!(f, "Deviation")?;
        writeln!(f, "  |0⟩: {:.4}, |1⟩: {:.4}", self.deviation0, self.deviation1)?;
        writeln!(f, "Uncertainty")?;
        write!(f, "  |0⟩: ±{:.4}, |1⟩: ±{:.4}", self.std_error0, self.std_error1)
    }
}
