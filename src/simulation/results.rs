// src/simulation/results.rs
use crate::core::AmplitudePair;
use crate::sampling::MeasurementOutcome;
use crate::simulation::history::OperationRecord;
use crate::statistics::StatisticsSnapshot;
use serde::Serialize;
use std::fmt;

/// Consistent view of a session right after a request completed: the current
/// state, the full history that led to it, and the latest measurement run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    /// Current state.
    pub state: AmplitudePair,
    /// Ordered log, oldest first; the last entry's state equals `state`.
    pub history: Vec<OperationRecord>,
    /// Counts from the latest measurement run.
    pub outcome: MeasurementOutcome,
    /// Theory versus sampling for that run.
    pub statistics: StatisticsSnapshot,
    /// Shots used for the run.
    pub shots: usize,
}

impl fmt::Display for SessionSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.state.bloch_vector();
        writeln!(f, "State: |ψ⟩ = {}", self.state)?;
        writeln!(f, "Bloch vector: ({:.4}, {:.4}, {:.4})", x, y, z)?;
        writeln!(f, "Counts ({} shots): {}", self.shots, self.outcome)?;
        write!(f, "{}", self.statistics)
    }
}
