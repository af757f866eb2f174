//! Euler loop for the project stock-and-flow model
//!
//! ```text
//! while time <= simulationTime:
//!   1. done      = accomplished >= definition
//!   2. flow      = done ? 0 : baseWorkFlow        (hard gate)
//!   3. remaining = max(0, definition - accomplished)
//!   4. emit frame (display-rounded)
//!   5. if !done: accomplished += flow * dt
//!   6. time += dt
//!   7. if done and frames >= 11: emit 5 flat tail frames, stop
//! ```
//!
//! # Critical Invariants
//!
//! - `workRemaining` is never negative
//! - Once a frame is done, every later frame is done
//! - `workFlow` is 0 on done frames and `baseWorkFlow` otherwise
//! - Frame times strictly increase
//!
//! # Example
//!
//! ```rust
//! use project_simulator_core_rs::{simulate, SimulationParameters};
//!
//! let params = SimulationParameters::new(100.0, 10.0, 10.0, 1.0);
//! let result = simulate(&params).unwrap();
//!
//! assert_eq!(result.completion_time(), Some(10.0));
//! assert_eq!(result.last().unwrap().work_accomplished, 100.0);
//! ```

use crate::core::rounding::round_display;
use crate::core::time::SimulationClock;
use crate::engine::error::SimulationError;
use crate::models::frame::Frame;
use crate::models::parameters::SimulationParameters;
use crate::models::result::SimulationResult;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

/// Minimum number of emitted frames before the completion tail may fire
pub const TAIL_TRIGGER_MIN_FRAMES: usize = 11;

/// Number of flat frames appended once the project is done
pub const TAIL_FRAMES: usize = 5;

/// Default bound on loop iterations
pub const DEFAULT_MAX_STEPS: usize = 1_000_000;

/// Guard rails applied before the loop starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EngineLimits {
    /// Largest accepted `floor(simulationTime / dt) + 1`
    pub max_steps: usize,
}

impl Default for EngineLimits {
    fn default() -> Self {
        Self {
            max_steps: DEFAULT_MAX_STEPS,
        }
    }
}

/// Run one simulation with the default [`EngineLimits`]
///
/// # Errors
///
/// - `InvalidParameter` if any field is not finite and positive
/// - `NonTerminatingConfiguration` if the step estimate exceeds the limit
pub fn simulate(params: &SimulationParameters) -> Result<SimulationResult, SimulationError> {
    simulate_with_limits(params, &EngineLimits::default())
}

/// Run one simulation with explicit limits
pub fn simulate_with_limits(
    params: &SimulationParameters,
    limits: &EngineLimits,
) -> Result<SimulationResult, SimulationError> {
    if let Err(e) = params.validate() {
        warn!(error = %e, "rejecting simulation parameters");
        return Err(e);
    }

    let estimated_steps = params.estimated_steps();
    if estimated_steps > limits.max_steps as f64 {
        warn!(estimated_steps, max_steps = limits.max_steps, "rejecting run");
        return Err(SimulationError::NonTerminatingConfiguration {
            estimated_steps,
            max_steps: limits.max_steps,
        });
    }

    let parameters_hash = params.fingerprint()?;
    debug!(
        initial_project_definition = params.initial_project_definition,
        base_work_flow = params.base_work_flow,
        simulation_time = params.simulation_time,
        dt = params.dt,
        "starting simulation"
    );

    let frames = integrate(params, estimated_steps as usize);

    debug!(
        frames = frames.len(),
        completed = frames.last().map(|f| f.project_is_done).unwrap_or(false),
        "simulation finished"
    );

    Ok(SimulationResult::new(*params, parameters_hash, frames))
}

/// The loop proper; parameters are already validated
fn integrate(params: &SimulationParameters, capacity_hint: usize) -> Vec<Frame> {
    let definition = params.initial_project_definition;
    let mut clock = SimulationClock::new(params.dt);
    let mut work_accomplished = 0.0_f64;
    let mut frames = Vec::with_capacity(capacity_hint + TAIL_FRAMES);

    while clock.is_within(params.simulation_time) {
        let project_is_done = work_accomplished >= definition;
        let work_flow = if project_is_done {
            0.0
        } else {
            params.base_work_flow
        };
        let work_remaining = (definition - work_accomplished).max(0.0);

        frames.push(Frame {
            time: round_display(clock.elapsed()),
            work_accomplished: round_display(work_accomplished),
            work_remaining: round_display(work_remaining),
            work_flow: round_display(work_flow),
            project_is_done,
        });

        if !project_is_done {
            work_accomplished += work_flow * clock.dt();
        }

        clock.advance();

        if project_is_done && frames.len() >= TAIL_TRIGGER_MIN_FRAMES {
            trace!(step = clock.steps(), "project done, appending flat tail");
            append_tail(&mut frames, &mut clock, work_accomplished);
            break;
        }
    }

    frames
}

/// Flat frames shown after completion
fn append_tail(frames: &mut Vec<Frame>, clock: &mut SimulationClock, work_accomplished: f64) {
    let work_accomplished = round_display(work_accomplished);
    for _ in 0..TAIL_FRAMES {
        clock.advance();
        frames.push(Frame {
            time: round_display(clock.elapsed()),
            work_accomplished,
            work_remaining: 0.0,
            work_flow: 0.0,
            project_is_done: true,
        });
    }
}
