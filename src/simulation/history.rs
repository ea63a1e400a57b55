// src/simulation/history.rs

use crate::core::{AmplitudePair, format_complex};
use crate::operations::Gate;
use serde::Serialize;
use std::fmt;

/// What produced a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OperationKind {
    /// The session was (re)started from user-supplied amplitudes.
    Initialized,
    /// A non-identity gate was applied to the previous state.
    Applied(Gate),
}

/// One immutable entry of a session's append-only log: a human-readable
/// label and the state that resulted from the step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OperationRecord {
    kind: OperationKind,
    label: String,
    state: AmplitudePair,
}

impl OperationRecord {
    pub(crate) fn initialized(state: AmplitudePair) -> Self {
        let label = format!(
            "Initialized qubit to state: α=({})|0⟩ + β=({})|1⟩",
            format_complex(state.alpha()),
            format_complex(state.beta())
        );
        Self { kind: OperationKind::Initialized, label, state }
    }

    pub(crate) fn applied(gate: Gate, state: AmplitudePair) -> Self {
        Self {
            kind: OperationKind::Applied(gate),
            label: format!("Applied {} gate", gate),
            state,
        }
    }

    /// The kind of step.
    pub fn kind(&self) -> OperationKind {
        self.kind
    }

    /// The gate applied at this step, if any.
    pub fn gate(&self) -> Option<Gate> {
        match self.kind {
            OperationKind::Applied(gate) => Some(gate),
            OperationKind::Initialized => None,
        }
    }

    /// Human-readable description of the step.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// State after the step.
    pub fn state(&self) -> &AmplitudePair {
        &self.state
    }
}

impl fmt::Display for OperationRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}
