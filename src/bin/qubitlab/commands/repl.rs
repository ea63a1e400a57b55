//! Interactive session.
//!
//! Reads one command per line from stdin. Failed commands are reported and the
//! session carries on with its previous state.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use console::style;

use qubitlab::{Gate, QubitError, Simulator, SimulatorConfig};

use super::common::{create_simulator, print_history, print_panels, report_error};

const HELP: &str = "\
Commands:
  init <alpha> <beta> [gate]   prepare a new qubit (gate: NONE, H, X, Y, Z)
  apply <gate>                 apply a gate to the current qubit
  stats                        show the latest measurement statistics
  state                        show the current state and counts
  history                      list operations so far
  diagram                      show the circuit diagram
  report                       show the session report
  help                         show this message
  quit                         leave the session";

/// What the loop should do after a line was handled.
#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Execute the repl command.
pub fn execute(config: SimulatorConfig) -> Result<()> {
    let mut simulator = create_simulator(config)?;
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("{} single-qubit session, type 'help' for commands", style("qubitlab").magenta().bold());
    loop {
        print!("qubit> ");
        io::stdout().flush()?;

        let Some(line) = lines.next().transpose()? else {
            break;
        };
        match handle_line(&mut simulator, &line) {
            Ok(Flow::Quit) => break,
            Ok(Flow::Continue) => {}
            Err(e) => report_error(&e),
        }
    }
    Ok(())
}

fn handle_line(simulator: &mut Simulator, line: &str) -> Result<Flow, QubitError> {
    let words: Vec<&str> = line.split_whitespace().collect();
    match words.as_slice() {
        [] => {}
        ["quit" | "exit"] => return Ok(Flow::Quit),
        ["help"] => println!("{HELP}"),
        ["init", alpha, beta, rest @ ..] if rest.len() <= 1 => {
            let gate = match rest.first() {
                Some(g) => g.parse::<Gate>()?,
                None => Gate::Identity,
            };
            let snapshot = simulator.initialize(alpha, beta, gate)?;
            print_panels(&snapshot);
        }
        ["apply", gate] => {
            let gate: Gate = gate.parse()?;
            if gate.is_identity() && simulator.is_initialized() {
                println!("No gate selected; state unchanged.");
                return Ok(Flow::Continue);
            }
            let snapshot = simulator.apply_update(gate)?;
            print_panels(&snapshot);
        }
        ["stats"] => println!("{}", simulator.current_statistics()?),
        ["state"] => print_panels(&simulator.snapshot()?),
        ["history"] => {
            if !simulator.is_initialized() {
                return Err(QubitError::NotInitialized);
            }
            print_history(simulator.history());
        }
        ["diagram"] => println!("{}", simulator.circuit_diagram()?),
        ["report"] => println!("{}", simulator.generate_report()?),
        _ => eprintln!("{} unrecognized command '{}', type 'help'", style("Error:").red().bold(), line.trim()),
    }
    Ok(Flow::Continue)
}
