// tests/simulation_tests.rs

// Import necessary types from the qubitlab crate
use qubitlab::{
    AmplitudePair, Gate, MeasurementSampler, OperationKind, QubitError, Simulator, SimulatorConfig,
    StatisticsSnapshot,
};

use num_complex::Complex64;
use std::f64::consts::FRAC_1_SQRT_2;

const TEST_TOLERANCE: f64 = 1e-9;

// Helper: simulator with reproducible measurement runs
fn seeded(seed: u64) -> Simulator {
    match Simulator::with_config(SimulatorConfig::default().with_seed(seed)) {
        Ok(sim) => sim,
        Err(e) => panic!("valid config rejected: {}", e),
    }
}

#[test]
fn test_hadamard_from_zero_end_to_end() -> Result<(), QubitError> {
    let mut sim = seeded(1);
    let snapshot = sim.initialize("1", "0", Gate::H)?;

    let expected = AmplitudePair::normalize(Complex64::new(FRAC_1_SQRT_2, 0.0), Complex64::new(FRAC_1_SQRT_2, 0.0))?;
    assert!(snapshot.state.approx_eq(&expected, TEST_TOLERANCE), "state was {}", snapshot.state);
    assert!((snapshot.statistics.p0_expected - 0.5).abs() < TEST_TOLERANCE);
    assert!((snapshot.statistics.p1_expected - 0.5).abs() < TEST_TOLERANCE);
    assert_eq!(snapshot.outcome.count0() + snapshot.outcome.count1(), 4096);
    Ok(())
}

#[test]
fn test_bit_flip_end_to_end() -> Result<(), QubitError> {
    let mut sim = seeded(2);
    sim.initialize("1", "0", Gate::Identity)?;
    let snapshot = sim.apply_update(Gate::X)?;

    assert!(snapshot.state.approx_eq(&AmplitudePair::one(), TEST_TOLERANCE));
    assert_eq!(snapshot.statistics.p0_expected, 0.0);
    assert_eq!(snapshot.statistics.p1_expected, 1.0);
    // No sampling variance at p1 = 1
    assert_eq!(snapshot.outcome.count1(), 4096);
    assert_eq!(snapshot.outcome.count0(), 0);
    assert_eq!(snapshot.statistics.deviation1, 0.0);
    Ok(())
}

#[test]
fn test_normalization_after_initialize() -> Result<(), QubitError> {
    let mut sim = seeded(3);
    for (alpha, beta) in [("3", "4j"), ("1+1j", "-2"), ("1e-6", "0"), ("(0.2-0.1j)", "7.5+3i")] {
        let snapshot = sim.initialize(alpha, beta, Gate::Identity)?;
        assert!((snapshot.state.norm_sqr() - 1.0).abs() < TEST_TOLERANCE, "{} {}", alpha, beta);
    }
    Ok(())
}

#[test]
fn test_zero_state_rejected_and_prior_session_kept() -> Result<(), QubitError> {
    let mut sim = seeded(4);
    let before = sim.initialize("0.6", "0.8", Gate::Y)?;

    let err = sim.initialize("0", "0", Gate::Identity).unwrap_err();
    assert!(matches!(err, QubitError::InvalidState { .. }));
    assert!(!err.is_warning());

    assert_eq!(sim.snapshot()?, before);
    assert_eq!(sim.history().len(), 2);
    Ok(())
}

#[test]
fn test_zero_state_rejected_on_fresh_simulator() {
    let mut sim = seeded(5);
    assert!(matches!(sim.initialize("0", "0j", Gate::Identity), Err(QubitError::InvalidState { .. })));
    assert!(!sim.is_initialized());
}

#[test]
fn test_parse_error_is_distinct_from_invalid_state() {
    let mut sim = seeded(6);
    match sim.initialize("one", "0", Gate::Identity) {
        Err(QubitError::InputParse { input, .. }) => assert_eq!(input, "one"),
        other => panic!("expected InputParse, got {:?}", other),
    }
    assert!(!sim.is_initialized());
}

#[test]
fn test_update_before_initialize() {
    let mut sim = seeded(7);
    let err = sim.apply_update(Gate::H).unwrap_err();
    assert_eq!(err, QubitError::NotInitialized);
    assert!(err.is_warning());
    // Still usable afterwards
    assert!(sim.initialize("1", "0", Gate::Identity).is_ok());
}

#[test]
fn test_none_update_is_idempotent() -> Result<(), QubitError> {
    let mut sim = seeded(8);
    let first = sim.initialize("1", "1j", Gate::H)?;
    for _ in 0..3 {
        let again = sim.apply_update(Gate::Identity)?;
        assert_eq!(again, first);
    }
    assert_eq!(sim.history().len(), 2);
    Ok(())
}

#[test]
fn test_history_labels_and_kinds() -> Result<(), QubitError> {
    let mut sim = seeded(9);
    sim.initialize("1", "0", Gate::H)?;
    sim.apply_update(Gate::Z)?;
    sim.apply_update(Gate::H)?;

    let history = sim.history();
    let kinds: Vec<OperationKind> = history.iter().map(|r| r.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            OperationKind::Initialized,
            OperationKind::Applied(Gate::H),
            OperationKind::Applied(Gate::Z),
            OperationKind::Applied(Gate::H),
        ]
    );
    assert_eq!(
        history[0].label(),
        "Initialized qubit to state: α=(1.0000+0.0000j)|0⟩ + β=(0.0000+0.0000j)|1⟩"
    );
    assert_eq!(history[2].label(), "Applied Z gate");
    // HZH = X
    assert!(sim.current_state()?.approx_eq(&AmplitudePair::one(), TEST_TOLERANCE));
    Ok(())
}

#[test]
fn test_y_twice_restores_amplitudes() -> Result<(), QubitError> {
    let start = AmplitudePair::normalize(Complex64::new(0.3, 0.4), Complex64::new(-0.5, 0.1))?;
    let twice = Gate::Y.apply(&Gate::Y.apply(&start));
    // Y·Y = I exactly, not just up to a global phase
    assert!(twice.approx_eq(&start, TEST_TOLERANCE), "Y·Y gave {}", twice);
    Ok(())
}

#[test]
fn test_statistics_within_four_sigma_over_many_runs() -> Result<(), QubitError> {
    let plus = Gate::H.apply(&AmplitudePair::zero());
    let mut sampler = MeasurementSampler::with_seed(4096, 2718);
    let trials = 200;
    let mut inside = 0;
    for _ in 0..trials {
        let outcome = sampler.sample(&plus);
        let stats = StatisticsSnapshot::compute(&plus, &outcome, 4096);
        if (stats.p1_measured - 0.5).abs() <= 4.0 * stats.std_error1 {
            inside += 1;
        }
    }
    // P(|z| > 4) ≈ 6e-5 per trial
    assert!(inside >= trials - 1, "only {}/{} trials inside 4σ", inside, trials);
    Ok(())
}

#[test]
fn test_mean_frequency_converges() {
    let state = match AmplitudePair::normalize(Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.5)) {
        Ok(s) => s,
        Err(e) => panic!("{}", e),
    };
    let (_, p1) = state.probabilities(); // 0.2
    let mut sampler = MeasurementSampler::with_seed(4096, 31);
    let runs = 50;
    let total: u64 = (0..runs).map(|_| sampler.sample(&state).count1()).sum();
    let mean = total as f64 / (runs as f64 * 4096.0);
    // Standard error of the pooled mean is sqrt(0.16 / 204800) ≈ 8.8e-4
    assert!((mean - p1).abs() < 5e-3, "mean {} vs p1 {}", mean, p1);
}

#[test]
fn test_current_statistics_tracks_latest_run() -> Result<(), QubitError> {
    let mut sim = seeded(10);
    sim.initialize("1", "0", Gate::Identity)?;
    assert_eq!(sim.current_statistics()?.p0_measured, 1.0);
    sim.apply_update(Gate::X)?;
    assert_eq!(sim.current_statistics()?.p1_measured, 1.0);
    assert_eq!(sim.current_outcome()?.count1(), 4096);
    Ok(())
}

#[test]
fn test_report_and_diagram_from_session() -> Result<(), QubitError> {
    let mut sim = seeded(11);
    sim.initialize("1", "0", Gate::H)?;
    sim.apply_update(Gate::H)?;

    let report = sim.generate_report()?;
    assert_eq!(report.gates_applied(), &[Gate::H]);
    assert_eq!(report.evolution().len(), 3);
    let text = report.to_string();
    assert_eq!(text.matches("Hadamard (H)").count(), 1);
    assert!(text.contains("STATE EVOLUTION:"));

    let diagram = sim.circuit_diagram()?.to_string();
    assert!(diagram.starts_with("q: ──ψ₀──────H──────H──────M───"));
    Ok(())
}

#[test]
fn test_snapshot_serializes_to_json() -> Result<(), Box<dyn std::error::Error>> {
    let mut sim = seeded(12);
    let snapshot = sim.initialize("0", "1", Gate::Identity)?;
    let json: serde_json::Value = serde_json::to_value(&snapshot)?;

    assert_eq!(json["shots"], 4096);
    assert_eq!(json["outcome"]["count1"], 4096);
    assert_eq!(json["history"][0]["kind"], "Initialized");
    assert_eq!(json["statistics"]["p1_expected"], 1.0);
    Ok(())
}
