//! Integration tests for the qubitlab CLI

use assert_cmd::Command;
use predicates::prelude::*;

fn qubitlab() -> Command {
    let mut cmd = Command::cargo_bin("qubitlab").unwrap();
    cmd.env_remove("QUBITLAB_SHOTS").env_remove("QUBITLAB_SEED");
    cmd
}

#[test]
fn test_cli_help() {
    qubitlab()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("prepare, evolve and measure a single qubit"));
}

#[test]
fn test_run_bit_flip_table() {
    qubitlab()
        .args(["--seed", "7", "run", "--alpha", "1", "--beta", "0", "--apply", "X"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4096 (100.00%)"))
        .stdout(predicate::str::contains("Theoretical"));
}

#[test]
fn test_run_json_output() {
    let output = qubitlab()
        .args(["run", "-a", "0", "-b", "1", "--format", "json", "--seed", "3", "--shots", "100"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["shots"], 100);
    assert_eq!(json["outcome"]["count1"], 100);
    assert_eq!(json["outcome"]["count0"], 0);
    assert_eq!(json["statistics"]["p1_measured"], 1.0);
}

#[test]
fn test_run_json_with_report_and_diagram_stays_one_document() {
    let output = qubitlab()
        .args(["run", "--gate", "X", "--format", "json", "--report", "--diagram", "--seed", "2"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["outcome"]["count1"], 4096);
    assert_eq!(json["diagram"], "q: ──ψ₀──────X──────M───\nc: ═════════════════╩═══");
    let report = json["report"].as_str().unwrap();
    assert!(report.starts_with("QUANTUM QUBIT SIMULATION REPORT"));
    assert!(report.contains("2. Applied X gate"));
}

#[test]
fn test_run_json_without_extras_has_no_text_fields() {
    let output = qubitlab()
        .args(["run", "--format", "json", "--seed", "4"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert!(json.get("report").is_none());
    assert!(json.get("diagram").is_none());
}

#[test]
fn test_run_with_report_and_diagram() {
    qubitlab()
        .args(["run", "--gate", "h", "--apply", "z", "--report", "--diagram", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("q: ──ψ₀──────H──────Z──────M───"))
        .stdout(predicate::str::contains("QUANTUM QUBIT SIMULATION REPORT"))
        .stdout(predicate::str::contains("3. Applied Z gate"));
}

#[test]
fn test_run_rejects_zero_state() {
    qubitlab()
        .args(["run", "--alpha", "0", "--beta", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid state"));
}

#[test]
fn test_run_rejects_malformed_amplitude() {
    qubitlab()
        .args(["run", "--alpha", "1+", "--beta", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid complex number input '1+'"));
}

#[test]
fn test_run_rejects_unknown_gate() {
    qubitlab()
        .args(["run", "--gate", "T"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported gate"));
}

#[test]
fn test_run_rejects_zero_shots() {
    qubitlab()
        .args(["--shots", "0", "run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("shots must be at least 1"));
}

#[test]
fn test_repl_session() {
    let script = "apply H\ninit 1 0\napply NONE\napply X\nhistory\nbogus\nquit\n";
    qubitlab()
        .args(["--seed", "5", "repl"])
        .write_stdin(script)
        .assert()
        .success()
        .stderr(predicate::str::contains("Warning: No qubit"))
        .stderr(predicate::str::contains("unrecognized command 'bogus'"))
        .stdout(predicate::str::contains("No gate selected; state unchanged."))
        .stdout(predicate::str::contains("2. Applied X gate"))
        .stdout(predicate::str::contains("4096 (100.00%)"));
}

#[test]
fn test_repl_errors_keep_session() {
    let script = "init 0.6 0.8\ninit 0 0\nstats\n";
    qubitlab()
        .args(["--seed", "9", "repl"])
        .write_stdin(script)
        .assert()
        .success()
        .stderr(predicate::str::contains("Error: Invalid state"))
        .stdout(predicate::str::contains("|0⟩: 0.3600  |1⟩: 0.6400"));
}

#[test]
fn test_repl_state_prints_panels() {
    qubitlab()
        .args(["--seed", "6", "repl"])
        .write_stdin("init 0 1\nstate\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bloch vector:").count(2))
        .stdout(predicate::str::contains("1:   4096 (100.00%)").count(2));
}
