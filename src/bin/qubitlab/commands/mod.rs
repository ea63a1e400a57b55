//! CLI command implementations.

pub mod common;
pub mod repl;
pub mod run;
