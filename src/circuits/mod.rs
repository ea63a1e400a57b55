// src/circuits/mod.rs

//! Text rendering of a session as a one-qubit circuit.
//!
//! The diagram shows the state preparation, every applied gate in order, and
//! the final measurement into a single classical bit:
//!
//! ```text
//! q: ──ψ₀──────H──────X──────M───
//! c: ════════════════════════╩═══
//! ```

use crate::core::{QubitError, QubitResult};
use crate::operations::Gate;
use crate::simulation::OperationRecord;
use std::fmt;

const GATE_WIDTH: usize = 7; // e.g., "───H───"
const H_WIRE: char = '─';
const C_WIRE: char = '═';
const MEASURE_TAP: char = '╩';
const PREPARE_SYMBOL: &str = "ψ₀";
const MEASURE_SYMBOL: &str = "M";

/// The measurement circuit equivalent to a session history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CircuitDiagram {
    gates: Vec<Gate>,
}

impl CircuitDiagram {
    /// Builds the diagram from a session log.
    ///
    /// # Errors
    /// `QubitError::NotInitialized` if `history` is empty.
    pub fn from_history(history: &[OperationRecord]) -> QubitResult<Self> {
        if history.is_empty() {
            return Err(QubitError::NotInitialized);
        }
        Ok(Self {
            gates: history.iter().filter_map(OperationRecord::gate).collect(),
        })
    }

    /// Gates in application order.
    pub fn gates(&self) -> &[Gate] {
        &self.gates
    }

    /// Number of columns: preparation, gates, measurement.
    pub fn depth(&self) -> usize {
        self.gates.len() + 2
    }
}

/// Centers `symbol` in a cell of `GATE_WIDTH` wire characters.
fn format_gate(symbol: &str, wire: char) -> String {
    let slen = symbol.chars().count();
    if slen >= GATE_WIDTH {
        symbol.chars().take(GATE_WIDTH).collect()
    } else {
        let total = GATE_WIDTH - slen;
        let pre = total / 2;
        let post = total - pre;
        format!("{}{}{}", wire.to_string().repeat(pre), symbol, wire.to_string().repeat(post))
    }
}

impl fmt::Display for CircuitDiagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut quantum = String::from("q: ");
        quantum.push_str(&format_gate(PREPARE_SYMBOL, H_WIRE));
        for gate in &self.gates {
            quantum.push_str(&format_gate(gate.symbol(), H_WIRE));
        }
        quantum.push_str(&format_gate(MEASURE_SYMBOL, H_WIRE));

        // Classical wire runs under every column, tapped below the measurement
        let mut classical = String::from("c: ");
        let idle = C_WIRE.to_string().repeat(GATE_WIDTH);
        for _ in 0..self.depth() - 1 {
            classical.push_str(&idle);
        }
        classical.push_str(&format_gate(&MEASURE_TAP.to_string(), C_WIRE));

        writeln!(f, "{}", quantum)?;
        write!(f, "{}", classical)
    }
}
