// src/simulation/engine.rs
use crate::core::{AmplitudePair, QubitError, QubitResult};
use crate::operations::Gate;
use crate::simulation::history::OperationRecord;
use crate::validation::check_normalization;
use num_complex::Complex64;
use tracing::{debug, info, warn};

/// Lifecycle of the engine. History is non-empty exactly when initialized.
#[derive(Debug, Clone, Default)]
enum EngineState {
    #[default]
    Uninitialized,
    Initialized {
        /// Append-only log; the last entry holds the current state.
        history: Vec<OperationRecord>,
    },
}

/// Owns the current qubit state and the ordered log of how it was reached.
///
/// Requests run to completion one at a time. A new session is built in full
/// before it replaces the old one, and a failed request leaves the engine as
/// it was.
#[derive(Debug, Clone, Default)]
pub struct StateEngine {
    state: EngineState,
}

impl StateEngine {
    /// Creates an engine with no qubit.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` once any `initialize` call has succeeded.
    pub fn is_initialized(&self) -> bool {
        matches!(self.state, EngineState::Initialized { .. })
    }

    /// Starts a fresh session from raw amplitudes.
    ///
    /// Normalizes `(alpha, beta)`, resets the history to a single
    /// initialization record and, unless `initial_gate` is the identity,
    /// applies it and records a second entry.
    ///
    /// # Returns
    /// * `Ok(&AmplitudePair)` - the new current state.
    /// * `Err(QubitError::InvalidState)` if both amplitudes are zero; the
    ///   previous session, if any, is kept.
    pub fn initialize(&mut self, alpha: Complex64, beta: Complex64, initial_gate: Gate) -> QubitResult<&AmplitudePair> {
        let prepared = AmplitudePair::normalize(alpha, beta)?;
        info!(state = %prepared, "initialized qubit");

        let mut history = vec![OperationRecord::initialized(prepared)];
        if !initial_gate.is_identity() {
            history.push(Self::evolve(&prepared, initial_gate));
        }

        self.state = EngineState::Initialized { history };
        self.current()
    }

    /// Applies `gate` to the current state and appends a record.
    ///
    /// # Returns
    /// * `Ok(Some(&AmplitudePair))` - the new current state.
    /// * `Ok(None)` - `gate` was the identity; nothing changed and nothing was recorded.
    /// * `Err(QubitError::NotInitialized)` - no session yet.
    pub fn apply_update(&mut self, gate: Gate) -> QubitResult<Option<&AmplitudePair>> {
        let EngineState::Initialized { history } = &mut self.state else {
            return Err(QubitError::NotInitialized);
        };
        if gate.is_identity() {
            debug!("identity gate requested, state unchanged");
            return Ok(None);
        }

        let current = history.last().map(|r| *r.state()).ok_or(QubitError::NotInitialized)?;
        history.push(Self::evolve(&current, gate));
        self.current().map(Some)
    }

    /// The current state.
    pub fn current(&self) -> QubitResult<&AmplitudePair> {
        self.history()
            .last()
            .map(OperationRecord::state)
            .ok_or(QubitError::NotInitialized)
    }

    /// Read-only view of the session log, oldest first. Empty before initialization.
    pub fn history(&self) -> &[OperationRecord] {
        match &self.state {
            EngineState::Uninitialized => &[],
            EngineState::Initialized { history } => history,
        }
    }

    fn evolve(from: &AmplitudePair, gate: Gate) -> OperationRecord {
        let next = gate.apply(from);
        if let Err(e) = check_normalization(&next, None) {
            // Tolerated: gates are unitary, so this is accumulated rounding only.
            warn!(%gate, error = %e, "state drifted off the unit sphere");
        }
        info!(%gate, state = %next, "applied gate");
        OperationRecord::applied(gate, next)
    }
}
