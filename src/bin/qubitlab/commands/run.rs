//! Run command implementation.

use anyhow::Result;
use console::style;

use qubitlab::{Gate, SimulatorConfig};

use super::common::{OutputFormat, create_simulator, print_snapshot};

/// Execute the run command.
#[allow(clippy::too_many_arguments)]
pub fn execute(
    config: SimulatorConfig,
    alpha: &str,
    beta: &str,
    gate: Gate,
    apply: &[Gate],
    format: OutputFormat,
    report: bool,
    diagram: bool,
) -> Result<()> {
    let mut simulator = create_simulator(config)?;

    if format == OutputFormat::Table {
        println!(
            "{} Initializing α={} β={} (gate {})",
            style("→").cyan().bold(),
            style(alpha).green(),
            style(beta).green(),
            style(gate).yellow()
        );
    }

    let mut snapshot = simulator.initialize(alpha, beta, gate)?;
    for &update in apply {
        snapshot = simulator.apply_update(update)?;
    }

    if format == OutputFormat::Json {
        // Extra text goes into the same document so stdout stays valid JSON
        let mut value = serde_json::to_value(&snapshot)
            .map_err(|e| anyhow::anyhow!("JSON serialization failed: {e}"))?;
        if let Some(fields) = value.as_object_mut() {
            if diagram {
                fields.insert("diagram".into(), simulator.circuit_diagram()?.to_string().into());
            }
            if report {
                fields.insert("report".into(), simulator.generate_report()?.to_string().into());
            }
        }
        println!("{}", serde_json::to_string_pretty(&value)?);
        return Ok(());
    }

    print_snapshot(&snapshot, format)?;

    if diagram {
        println!("\n{}", simulator.circuit_diagram()?);
    }
    if report {
        println!("\n{}", simulator.generate_report()?);
    }

    Ok(())
}
