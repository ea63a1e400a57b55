// src/lib.rs

//! `qubitlab` - Single-qubit state preparation, gate evolution and measurement statistics
//!
//! A session holds one qubit |ψ⟩ = α|0⟩ + β|1⟩. The user prepares it from two
//! complex amplitudes, evolves it with gates from the fixed set
//! `{NONE, H, X, Y, Z}`, and after every change the qubit is measured a fixed
//! number of times (4096 by default) so the sampled frequencies can be set
//! against the Born-rule probabilities, together with their binomial
//! standard errors.

pub mod core;
pub mod operations;
pub mod sampling;
pub mod statistics;
pub mod simulation;
pub mod circuits;
pub mod report;
pub mod validation;

// Re-export the most common types for easier top-level use
pub use crate::core::{AmplitudePair, QubitError, QubitResult, parse_complex, DEFAULT_SHOTS};
pub use operations::Gate;
pub use sampling::{MeasurementOutcome, MeasurementSampler};
pub use statistics::StatisticsSnapshot;
pub use simulation::{
    OperationKind, OperationRecord, SessionSnapshot, Simulator, SimulatorConfig, StateEngine,
};
pub use circuits::CircuitDiagram;
pub use report::Report;
pub use validation::{check_normalization, norm_drift};

// Example 1: Superposition and its sampling statistics
// Prepares |0⟩, applies a Hadamard while initializing, and compares the
// sampled frequencies against the 50/50 prediction.
/// ```
/// use qubitlab::{Gate, Simulator, SimulatorConfig, QubitError};
///
/// let config = SimulatorConfig::default().with_seed(7);
/// let mut simulator = Simulator::with_config(config)?;
///
/// let snapshot = simulator.initialize("1", "0", Gate::H)?;
/// println!("{}", snapshot);
///
/// let stats = snapshot.statistics;
/// assert!((stats.p0_expected - 0.5).abs() < 1e-9);
/// assert!((stats.p1_expected - 0.5).abs() < 1e-9);
/// assert_eq!(snapshot.outcome.shots(), 4096);
/// // Sampled frequencies scatter around 0.5 by a few standard errors at most
/// assert!(stats.within_sigmas(5.0));
/// # Ok::<(), QubitError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item

// Example 2: Updates, warnings and the session report
// Shows that updates need a prepared qubit, that a bit flip of |0⟩ measures
// deterministically, and how the report reflects the history.
/// ```
/// use qubitlab::{Gate, Simulator, QubitError};
///
/// let mut simulator = Simulator::new();
///
/// // Nothing to update yet: reported as a warning, the session stays usable
/// let err = simulator.apply_update(Gate::X).unwrap_err();
/// assert_eq!(err, QubitError::NotInitialized);
/// assert!(err.is_warning());
///
/// simulator.initialize("1", "0", Gate::Identity)?;
/// let snapshot = simulator.apply_update("X".parse()?)?;
///
/// // |1⟩ has no sampling variance
/// assert_eq!(snapshot.outcome.count0(), 0);
/// assert_eq!(snapshot.outcome.count1(), 4096);
/// assert_eq!(snapshot.statistics.p1_expected, 1.0);
///
/// let report = simulator.generate_report()?.to_string();
/// assert!(report.contains("2. Applied X gate"));
/// assert!(report.contains("Pauli-X (X)"));
/// # Ok::<(), QubitError>(())
/// ```
#[doc(hidden)]
const _: () = (); // Attaches the preceding doc comment block to a hidden item
