//! Engine error types

use thiserror::Error;

/// Reasons the engine rejects a call
///
/// Every variant is a caller contract violation; nothing is retried.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SimulationError {
    #[error("Invalid parameter '{name}': {value} (must be finite and positive)")]
    InvalidParameter { name: String, value: f64 },

    #[error("Non-terminating configuration: about {estimated_steps} steps exceeds limit {max_steps}")]
    NonTerminatingConfiguration { estimated_steps: f64, max_steps: usize },

    #[error("Serialization error: {0}")]
    Serialization(String),
}
