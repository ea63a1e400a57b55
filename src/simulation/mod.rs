// src/simulation/mod.rs

//! Session orchestration: state evolution, measurement and statistics.
//!
//! [`Simulator`] is the entry point a front end talks to. Every successful
//! `initialize` or non-identity `apply_update` is followed by a fresh
//! measurement run and statistics recomputation before the call returns, so the
//! returned [`SessionSnapshot`] is always consistent with the state it reports.

mod config;
pub(crate) mod engine;
mod history;
mod results;

pub use config::SimulatorConfig;
pub use engine::StateEngine;
pub use history::{OperationKind, OperationRecord};
pub use results::SessionSnapshot;

use crate::circuits::CircuitDiagram;
use crate::core::{AmplitudePair, QubitError, QubitResult, parse_complex};
use crate::operations::Gate;
use crate::report::Report;
use crate::sampling::{MeasurementOutcome, MeasurementSampler};
use crate::statistics::StatisticsSnapshot;
use chrono::Local;
use num_complex::Complex64;
use tracing::{debug, instrument};

/// Latest measurement run, kept alongside the state it was drawn from.
#[derive(Debug, Clone, Copy)]
struct MeasurementRun {
    outcome: MeasurementOutcome,
    statistics: StatisticsSnapshot,
}

/// One interactive single-qubit session.
#[derive(Debug)]
pub struct Simulator {
    config: SimulatorConfig,
    engine: StateEngine,
    sampler: MeasurementSampler,
    latest: Option<MeasurementRun>,
}

impl Default for Simulator {
    fn default() -> Self {
        Self::from_valid_config(SimulatorConfig::default())
    }
}

impl Simulator {
    /// Creates a simulator with 4096 shots and an entropy-seeded sampler.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a simulator from explicit settings.
    ///
    /// # Errors
    /// `QubitError::InvalidShots` if `config.shots` is zero.
    pub fn with_config(config: SimulatorConfig) -> QubitResult<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: SimulatorConfig) -> Self {
        let sampler = match config.seed {
            Some(seed) => MeasurementSampler::with_seed(config.shots, seed),
            None => MeasurementSampler::new(config.shots),
        };
        Self { config, engine: StateEngine::new(), sampler, latest: None }
    }

    /// Active settings.
    pub fn config(&self) -> &SimulatorConfig {
        &self.config
    }

    /// Shots per measurement run.
    pub fn shots(&self) -> usize {
        self.config.shots
    }

    /// `true` once a session exists.
    pub fn is_initialized(&self) -> bool {
        self.engine.is_initialized()
    }

    /// Starts a new session from amplitude text as typed by the user.
    ///
    /// # Arguments
    /// * `alpha` - Amplitude of |0⟩, e.g. `"1"` or `"0.6+0.8j"`.
    /// * `beta` - Amplitude of |1⟩.
    /// * `initial_gate` - Gate applied right after preparation; `Gate::Identity` for none.
    ///
    /// # Returns
    /// * `Ok(SessionSnapshot)` for the new session.
    /// * `Err(QubitError::InputParse)` on malformed text.
    /// * `Err(QubitError::InvalidState)` if both amplitudes are zero.
    ///
    /// On error the previous session is untouched.
    #[instrument(skip(self))]
    pub fn initialize(&mut self, alpha: &str, beta: &str, initial_gate: Gate) -> QubitResult<SessionSnapshot> {
        let alpha = parse_complex(alpha)?;
        let beta = parse_complex(beta)?;
        self.initialize_amplitudes(alpha, beta, initial_gate)
    }

    /// Starts a new session from already-parsed amplitudes.
    #[instrument(skip(self))]
    pub fn initialize_amplitudes(
        &mut self,
        alpha: Complex64,
        beta: Complex64,
        initial_gate: Gate,
    ) -> QubitResult<SessionSnapshot> {
        let state = *self.engine.initialize(alpha, beta, initial_gate)?;
        self.measure(&state);
        self.snapshot()
    }

    /// Applies a gate to the current session.
    ///
    /// `Gate::Identity` changes nothing: no history entry, no new measurement
    /// run; the returned snapshot repeats the current one.
    ///
    /// # Errors
    /// `QubitError::NotInitialized` before the first successful `initialize`.
    #[instrument(skip(self))]
    pub fn apply_update(&mut self, gate: Gate) -> QubitResult<SessionSnapshot> {
        match self.engine.apply_update(gate)?.copied() {
            Some(state) => self.measure(&state),
            None => debug!("no gate applied; keeping previous measurement run"),
        }
        self.snapshot()
    }

    /// Statistics of the latest measurement run.
    pub fn current_statistics(&self) -> QubitResult<StatisticsSnapshot> {
        self.latest().map(|run| run.statistics)
    }

    /// Counts of the latest measurement run.
    pub fn current_outcome(&self) -> QubitResult<MeasurementOutcome> {
        self.latest().map(|run| run.outcome)
    }

    /// Current state.
    pub fn current_state(&self) -> QubitResult<&AmplitudePair> {
        self.engine.current()
    }

    /// Session log, oldest first. Empty before initialization.
    pub fn history(&self) -> &[OperationRecord] {
        self.engine.history()
    }

    /// Full view of the session.
    pub fn snapshot(&self) -> QubitResult<SessionSnapshot> {
        let run = self.latest()?;
        Ok(SessionSnapshot {
            state: *self.engine.current()?,
            history: self.engine.history().to_vec(),
            outcome: run.outcome,
            statistics: run.statistics,
            shots: self.config.shots,
        })
    }

    /// Text report of the session, stamped with the local time.
    pub fn generate_report(&self) -> QubitResult<Report> {
        Report::assemble(self.engine.history(), Local::now().naive_local())
    }

    /// Wire diagram of the prepared circuit followed by measurement.
    pub fn circuit_diagram(&self) -> QubitResult<CircuitDiagram> {
        CircuitDiagram::from_history(self.engine.history())
    }

    fn latest(&self) -> QubitResult<MeasurementRun> {
        self.latest.ok_or(QubitError::NotInitialized)
    }

    fn measure(&mut self, state: &AmplitudePair) {
        let outcome = self.sampler.sample(state);
        let statistics = StatisticsSnapshot::compute(state, &outcome, self.config.shots);
        self.latest = Some(MeasurementRun { outcome, statistics });
    }
}
