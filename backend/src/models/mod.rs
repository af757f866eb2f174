//! Domain models for the project simulator

pub mod frame;
pub mod parameters;
pub mod result;
pub mod summary;

// Re-exports
pub use frame::Frame;
pub use parameters::{PartialParameters, SimulationParameters};
pub use result::{Axis, ChartSeries, SimulationResult};
pub use summary::{ProjectStatus, RunSummary};
