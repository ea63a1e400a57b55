//! Shared helpers for CLI commands.

use anyhow::Result;
use clap::ValueEnum;
use console::style;

use qubitlab::{OperationRecord, QubitError, SessionSnapshot, Simulator, SimulatorConfig};

/// How session snapshots are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable panels
    Table,
    /// Pretty-printed JSON
    Json,
}

/// Create a simulator from CLI settings.
pub fn create_simulator(config: SimulatorConfig) -> Result<Simulator> {
    Simulator::with_config(config).map_err(|e| anyhow::anyhow!("Invalid configuration: {e}"))
}

/// Print a session snapshot in the requested format.
pub fn print_snapshot(snapshot: &SessionSnapshot, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(snapshot)
                .map_err(|e| anyhow::anyhow!("JSON serialization failed: {e}"))?;
            println!("{json}");
        }
        OutputFormat::Table => print_panels(snapshot),
    }
    Ok(())
}

/// Print a snapshot as styled panels with histogram bars.
pub fn print_panels(snapshot: &SessionSnapshot) {
    let [x, y, z] = snapshot.state.bloch_vector();
    println!("{} |ψ⟩ = {}", style("State").magenta().bold(), snapshot.state);
    println!("  Bloch vector: ({x:.4}, {y:.4}, {z:.4})");

    println!(
        "\n{} Measurements ({} shots):",
        style("✓").green().bold(),
        snapshot.shots
    );
    let total = snapshot.outcome.shots().max(1) as f64;
    for (bit, count) in snapshot.outcome.as_map() {
        let prob = count as f64 / total * 100.0;
        let bar: String = "█".repeat((prob / 2.0).round() as usize);
        println!(
            "  {}: {:>6} ({:>6.2}%) {}",
            style(bit).cyan(),
            count,
            prob,
            style(bar).green()
        );
    }

    let stats = &snapshot.statistics;
    println!("\n{}", style("Statistics").magenta().bold());
    for (title, line) in [
        ("Theoretical", format!("|0⟩: {:.4}  |1⟩: {:.4}", stats.p0_expected, stats.p1_expected)),
        ("Measured", format!("|0⟩: {:.4}  |1⟩: {:.4}", stats.p0_measured, stats.p1_measured)),
        ("Deviation", format!("|0⟩: {:.4}, |1⟩: {:.4}", stats.deviation0, stats.deviation1)),
        ("Uncertainty", format!("|0⟩: ±{:.4}, |1⟩: ±{:.4}", stats.std_error0, stats.std_error1)),
    ] {
        println!("  {:<12} {}", style(title).cyan(), line);
    }
}

/// Print the numbered operation history.
pub fn print_history(history: &[OperationRecord]) {
    for (i, record) in history.iter().enumerate() {
        println!("{}. {}", i + 1, record);
    }
}

/// Print a library error, as a warning when the front end treats it as one.
pub fn report_error(err: &QubitError) {
    if err.is_warning() {
        eprintln!("{} {}", style("Warning:").yellow().bold(), err);
    } else {
        eprintln!("{} {}", style("Error:").red().bold(), err);
    }
}
