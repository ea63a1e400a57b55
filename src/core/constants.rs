//! Numerical constants shared across the crate.

/// Constants for state handling and measurement.
pub mod qubit_constants {
    /// Shot count used for every measurement run unless configured otherwise.
    pub const DEFAULT_SHOTS: usize = 4096;
    /// Allowed deviation of `|α|² + |β|²` from 1.
    pub const NORM_TOLERANCE: f64 = 1e-9;
    /// 1/√2, the Hadamard normalization factor.
    pub const FRAC_1_SQRT_2: f64 = std::f64::consts::FRAC_1_SQRT_2;
}
