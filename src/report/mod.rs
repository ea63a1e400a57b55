// src/report/mod.rs

//! Text summary of a session.
//!
//! The report is a pure function of the session log and a timestamp: it lists
//! the operations, the final state and its probabilities, a matrix reference
//! for each distinct gate that was applied, and, when the state changed at
//! least once, a step-by-step evolution table.

use crate::core::{AmplitudePair, QubitError, QubitResult};
use crate::operations::Gate;
use crate::simulation::OperationRecord;
use chrono::NaiveDateTime;
use std::fmt;

const RULE_WIDTH: usize = 40;

/// A generated session report. Render with `Display`.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    generated_at: NaiveDateTime,
    operations: Vec<String>,
    final_state: AmplitudePair,
    gates_applied: Vec<Gate>,
    evolution: Vec<AmplitudePair>,
}

impl Report {
    /// Assembles a report from a session log.
    ///
    /// # Arguments
    /// * `history` - Session log, oldest first.
    /// * `generated_at` - Timestamp printed in the header.
    ///
    /// # Errors
    /// `QubitError::NotInitialized` if `history` is empty.
    pub fn assemble(history: &[OperationRecord], generated_at: NaiveDateTime) -> QubitResult<Self> {
        let final_state = *history.last().ok_or(QubitError::NotInitialized)?.state();

        // Deduplicated by gate identity, in order of first application
        let mut gates_applied: Vec<Gate> = Vec::new();
        for gate in history.iter().filter_map(OperationRecord::gate) {
            if !gates_applied.contains(&gate) {
                gates_applied.push(gate);
            }
        }

        let evolution = if history.len() > 1 {
            history.iter().map(|r| *r.state()).collect()
        } else {
            Vec::new()
        };

        Ok(Self {
            generated_at,
            operations: history.iter().map(|r| r.label().to_string()).collect(),
            final_state,
            gates_applied,
            evolution,
        })
    }

    /// Header timestamp.
    pub fn generated_at(&self) -> NaiveDateTime {
        self.generated_at
    }

    /// Operation labels, oldest first.
    pub fn operations(&self) -> &[String] {
        &self.operations
    }

    /// State after the last operation.
    pub fn final_state(&self) -> &AmplitudePair {
        &self.final_state
    }

    /// Distinct gates, in order of first application.
    pub fn gates_applied(&self) -> &[Gate] {
        &self.gates_applied
    }

    /// Per-step states; empty when the session holds a single state.
    pub fn evolution(&self) -> &[AmplitudePair] {
        &self.evolution
    }
}

fn section(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f, "{}", title)?;
    writeln!(f, "{}", "-".repeat(RULE_WIDTH))
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        section(f, "QUANTUM QUBIT SIMULATION REPORT")?;
        writeln!(f, "Generated: {}", self.generated_at.format("%Y-%m-%d %H:%M:%S"))?;
        writeln!(f)?;

        section(f, "SUMMARY OF OPERATIONS:")?;
        for (i, op) in self.operations.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, op)?;
        }
        writeln!(f)?;

        let (p0, p1) = self.final_state.probabilities();
        section(f, "FINAL QUANTUM STATE:")?;
        writeln!(f, "|ψ⟩ = {}", self.final_state)?;
        writeln!(f)?;
        writeln!(f, "Probability of measuring |0⟩: {:.4}", p0)?;
        writeln!(f, "Probability of measuring |1⟩: {:.4}", p1)?;
        writeln!(f)?;

        section(f, "MATHEMATICAL BACKGROUND:")?;
        writeln!(f, "1. Qubit Representation:")?;
        writeln!(f, "   |ψ⟩ = α|0⟩ + β|1⟩ where |α|² + |β|² = 1")?;
        writeln!(f)?;
        writeln!(f, "2. Quantum Gates Applied:")?;
        if self.gates_applied.is_empty() {
            writeln!(f, "   (none)")?;
            writeln!(f)?;
        }
        for gate in &self.gates_applied {
            writeln!(f, "{}", gate.matrix_reference())?;
            writeln!(f)?;
        }
        writeln!(f, "3. State Transformation:")?;
        writeln!(f, "   |ψ'⟩ = U|ψ⟩ - New amplitudes calculated by matrix multiplication")?;
        writeln!(f)?;
        writeln!(f, "4. Measurement:")?;
        writeln!(f, "   Qubit collapses to |0⟩ with p=|α|² or |1⟩ with p=|β|²")?;

        if !self.evolution.is_empty() {
            writeln!(f)?;
            section(f, "STATE EVOLUTION:")?;
            for (i, state) in self.evolution.iter().enumerate() {
                let (p0, p1) = state.probabilities();
                writeln!(f, "Step {}: |ψ⟩ = {}", i, state)?;
                writeln!(f, "       Probabilities: |0⟩: {:.4}, |1⟩: {:.4}", p0, p1)?;
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
