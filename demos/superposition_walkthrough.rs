//! Walkthrough: prepare |0⟩, build a superposition, and watch the sampled
//! statistics track the Born-rule prediction across a few gate updates.

use qubitlab::{Gate, QubitError, Simulator, SimulatorConfig};

fn main() -> Result<(), QubitError> {
    println!("--- qubitlab Example: Superposition Walkthrough ---");

    // Seeded so repeated runs print the same counts
    let mut simulator = Simulator::with_config(SimulatorConfig::default().with_seed(42))?;

    // --- Prepare |0⟩ and apply H in one step ---
    let snapshot = simulator.initialize("1", "0", Gate::H)?;
    println!("\nAfter initialization with H:\n{}", snapshot);
    // H|0⟩ = (|0⟩ + |1⟩)/√2, so each outcome is expected with p = 0.5
    println!(
        "Within 3σ of the prediction: {}",
        snapshot.statistics.within_sigmas(3.0)
    );

    // --- Phase flip: probabilities stay at 0.5, the Bloch vector turns around ---
    let snapshot = simulator.apply_update(Gate::Z)?;
    let [x, y, z] = snapshot.state.bloch_vector();
    println!("\nAfter Z: |ψ⟩ = {}", snapshot.state);
    println!("Bloch vector: ({:.4}, {:.4}, {:.4})", x, y, z);

    // --- H again: HZH = X, so the qubit is now |1⟩ and measures deterministically ---
    let snapshot = simulator.apply_update(Gate::H)?;
    println!("\nAfter second H: counts {}", snapshot.outcome);

    // --- No gate: nothing recorded, no new measurement run ---
    let unchanged = simulator.apply_update(Gate::Identity)?;
    assert_eq!(unchanged, snapshot);

    println!("\nCircuit:\n{}", simulator.circuit_diagram()?);
    println!("\n{}", simulator.generate_report()?);

    Ok(())
}
