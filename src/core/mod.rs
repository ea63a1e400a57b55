// src/core/mod.rs

//! Core data structures and types

pub mod error;
pub mod parse;
pub mod state;

// Re-export public types for convenient access via `qubitlab::core::TypeName`
pub use error::{QubitError, QubitResult};
pub use parse::parse_complex;
pub use state::{AmplitudePair, format_complex};

pub mod constants;
pub use constants::qubit_constants::{DEFAULT_SHOTS, FRAC_1_SQRT_2, NORM_TOLERANCE}; // Re-export
