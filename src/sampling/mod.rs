// src/sampling/mod.rs

//! Finite-shot measurement of a single qubit in the computational basis.
//!
//! Each shot is an independent Bernoulli trial with `P(1) = |β|²`, so the
//! count of `1` outcomes is a binomial draw. Results carry real sampling
//! noise; they are never the exact theoretical proportions.

use crate::core::AmplitudePair;
use rand::distr::{Distribution, StandardUniform};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Occurrence counts for the two classical outcomes `"0"` and `"1"`.
///
/// `count0 + count1` always equals the shot count of the run that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MeasurementOutcome {
    count0: u64,
    count1: u64,
}

impl MeasurementOutcome {
    /// Builds an outcome from explicit counts.
    pub fn from_counts(count0: u64, count1: u64) -> Self {
        Self { count0, count1 }
    }

    /// Number of shots that measured `0`.
    pub fn count0(&self) -> u64 {
        self.count0
    }

    /// Number of shots that measured `1`.
    pub fn count1(&self) -> u64 {
        self.count1
    }

    /// Count for a classical bit value; `None` for anything other than `"0"`/`"1"`.
    pub fn get(&self, bit: &str) -> Option<u64> {
        match bit {
            "0" => Some(self.count0),
            "1" => Some(self.count1),
            _ => None,
        }
    }

    /// Total shots.
    pub fn shots(&self) -> u64 {
        self.count0 + self.count1
    }

    /// The outcome as a `bit -> count` map.
    pub fn as_map(&self) -> BTreeMap<&'static str, u64> {
        BTreeMap::from([("0", self.count0), ("1", self.count1)])
    }
}

impl fmt::Display for MeasurementOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{'0': {}, '1': {}}}", self.count0, self.count1)
    }
}

/// Draws measurement outcomes for amplitude pairs.
///
/// Owns its random generator. A seeded sampler reproduces the same sequence of
/// outcomes for the same sequence of inputs.
#[derive(Debug, Clone)]
pub struct MeasurementSampler {
    shots: usize,
    rng: StdRng,
}

impl MeasurementSampler {
    /// Creates a sampler seeded from system entropy.
    pub fn new(shots: usize) -> Self {
        Self::with_seed(shots, rand::random())
    }

    /// Creates a deterministic sampler.
    pub fn with_seed(shots: usize, seed: u64) -> Self {
        Self { shots, rng: StdRng::seed_from_u64(seed) }
    }

    /// Shots drawn per call to [`sample`](Self::sample).
    pub fn shots(&self) -> usize {
        self.shots
    }

    /// Measures `pair` `shots` times.
    ///
    /// `p1 = |β|²` is clamped into `[0, 1]` to absorb floating-point drift.
    /// Uniform draws lie in `[0, 1)`, so `p1 = 1` always yields `1` and
    /// `p1 = 0` never does: basis states measure deterministically.
    pub fn sample(&mut self, pair: &AmplitudePair) -> MeasurementOutcome {
        let (_, p1) = pair.probabilities();
        let p1 = p1.clamp(0.0, 1.0);

        let mut count1 = 0u64;
        for _ in 0..self.shots {
            let u: f64 = StandardUniform.sample(&mut self.rng);
            if u < p1 {
                count1 += 1;
            }
        }
        let count0 = self.shots as u64 - count1;

        debug!(shots = self.shots, p1, count0, count1, "sampled measurement outcome");
        MeasurementOutcome { count0, count1 }
    }
}
