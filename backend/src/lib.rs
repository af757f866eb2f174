//! Project Simulator Core - Rust Engine
//!
//! Discrete-time stock-and-flow simulation of a single project: a work
//! backlog is burned down at a fixed rate until the accomplished work reaches
//! the project definition.
//!
//! # Architecture
//!
//! - **core**: Simulation clock and display rounding
//! - **models**: Domain types (parameters, frames, results, summaries)
//! - **engine**: Fixed-step Euler loop and its error type
//! - **session**: Caller-side run state (in-flight flag, stale results, reset)
//!
//! # Critical Invariants
//!
//! 1. The engine is a pure function of its parameters
//! 2. Values are rounded to 2 decimals when emitted, never while integrating
//! 3. Invalid or non-terminating configurations are rejected before looping

// Module declarations
pub mod core;
pub mod engine;
pub mod models;
pub mod session;

// Re-exports for convenience
pub use crate::core::time::SimulationClock;
pub use engine::{simulate, simulate_with_limits, EngineLimits, SimulationError};
pub use models::{
    frame::Frame,
    parameters::{PartialParameters, SimulationParameters},
    result::{Axis, ChartSeries, SimulationResult},
    summary::{ProjectStatus, RunSummary},
};
pub use session::{Completion, RunId, RunRecord, RunTicket, SessionError, SimulationSession};

// FFI module (when feature enabled)
#[cfg(feature = "pyo3")]
pub mod ffi;

// PyO3 exports (when feature enabled)
#[cfg(feature = "pyo3")]
use pyo3::prelude::*;

#[cfg(feature = "pyo3")]
#[pymodule]
fn project_simulator_core_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<ffi::simulator::PySimulator>()?;
    m.add_function(wrap_pyfunction!(ffi::simulate_py, m)?)?;
    Ok(())
}
