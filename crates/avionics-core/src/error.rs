//! Error types for the avionics derivation engine
//!
//! Only structurally invalid inputs are reported here. Degenerate numeric
//! cases (zero velocity, asin domain overshoot) are recovered locally and
//! never surface as errors.

use thiserror::Error;

/// Avionics errors
#[derive(Debug, Error)]
pub enum AvionicsError {
    #[error("Invalid orientation: quaternion norm {norm} is not within tolerance of 1")]
    InvalidOrientation { norm: f64 },
    #[error("Invalid time step {0}: must be finite and positive")]
    InvalidTimeStep(f64),
    #[error("Invalid dimension: expected {expected}, got {got}")]
    InvalidDimension { expected: usize, got: usize },
    #[error("Non-finite component in {0}")]
    NonFiniteVector(&'static str),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Failed to read configuration: {0}")]
    ConfigIo(#[from] std::io::Error),
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] serde_yaml::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, AvionicsError>;
