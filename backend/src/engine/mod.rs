//! Simulation engine
//!
//! Fixed-step explicit Euler integration of a single stock (work
//! accomplished) driven by a single gated flow (work rate).
//!
//! See `euler.rs` for the loop itself.

pub mod error;
pub mod euler;

pub use error::SimulationError;
pub use euler::{
    simulate, simulate_with_limits, EngineLimits, DEFAULT_MAX_STEPS, TAIL_FRAMES,
    TAIL_TRIGGER_MIN_FRAMES,
};
