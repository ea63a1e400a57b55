// src/simulation/config.rs

use crate::core::{DEFAULT_SHOTS, QubitError, QubitResult};
use serde::{Deserialize, Serialize};

/// Simulator settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulatorConfig {
    /// Shots per measurement run. Defaults to 4096.
    pub shots: usize,
    /// Seed for the measurement sampler. `None` seeds from system entropy.
    pub seed: Option<u64>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self { shots: DEFAULT_SHOTS, seed: None }
    }
}

impl SimulatorConfig {
    /// Sets the shot count.
    pub fn with_shots(mut self, shots: usize) -> Self {
        self.shots = shots;
        self
    }

    /// Makes measurement runs reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Rejects settings the statistics cannot be computed for.
    pub fn validate(&self) -> QubitResult<()> {
        if self.shots == 0 {
            return Err(QubitError::InvalidShots(self.shots));
        }
        Ok(())
    }
}
