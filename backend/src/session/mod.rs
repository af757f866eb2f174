//! Simulation session - caller-side run state
//!
//! The engine is a pure function. Everything a front end needs to remember
//! between runs lives here instead: the parameters currently entered, the
//! latest result, and whether a run is in flight.
//!
//! # Critical Invariants
//!
//! - At most one result is held; a new run replaces it wholesale
//! - Only the most recently issued ticket may install a result
//! - `reset` drops the result and restores default parameters
//!
//! # Example
//!
//! ```rust
//! use project_simulator_core_rs::{SimulationParameters, SimulationSession};
//!
//! let mut session = SimulationSession::new();
//! session.set_parameters(SimulationParameters::new(100.0, 10.0, 10.0, 1.0));
//!
//! let summary = session.run().unwrap().summary();
//! assert!(summary.is_complete());
//!
//! session.reset();
//! assert!(session.latest().is_none());
//! assert_eq!(*session.parameters(), SimulationParameters::default());
//! ```

use crate::engine::error::SimulationError;
use crate::engine::euler::{simulate_with_limits, EngineLimits};
use crate::models::parameters::SimulationParameters;
use crate::models::result::SimulationResult;
use crate::models::summary::RunSummary;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

/// Unique identifier of one run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(Uuid);

impl RunId {
    fn generate() -> Self {
        RunId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl fmt::Display for RunId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Errors raised by the session
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SessionError {
    #[error("A simulation run is already in progress")]
    RunInProgress,

    #[error(transparent)]
    Simulation(#[from] SimulationError),
}

/// Handle for a run started with [`SimulationSession::begin_run`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunTicket {
    id: RunId,
    parameters: SimulationParameters,
}

impl RunTicket {
    pub fn id(&self) -> RunId {
        self.id
    }

    /// Parameters captured when the run started
    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }
}

/// Outcome of handing a result back to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// The result is now the session's latest result
    Accepted,
    /// A newer run was started (or the session was reset); result dropped
    Stale,
}

/// A result together with the run that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct RunRecord {
    pub id: RunId,
    pub result: SimulationResult,
}

/// Caller-side state around the engine
#[derive(Debug, Clone)]
pub struct SimulationSession {
    parameters: SimulationParameters,
    limits: EngineLimits,
    latest: Option<RunRecord>,
    /// Most recently issued ticket that has not completed yet
    in_flight: Option<RunId>,
}

impl Default for SimulationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationSession {
    /// New session with default parameters and limits
    pub fn new() -> Self {
        Self::with_limits(EngineLimits::default())
    }

    pub fn with_limits(limits: EngineLimits) -> Self {
        Self {
            parameters: SimulationParameters::default(),
            limits,
            latest: None,
            in_flight: None,
        }
    }

    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }

    /// Replace the entered parameters; the held result is kept
    pub fn set_parameters(&mut self, parameters: SimulationParameters) {
        self.parameters = parameters;
    }

    pub fn limits(&self) -> &EngineLimits {
        &self.limits
    }

    pub fn is_running(&self) -> bool {
        self.in_flight.is_some()
    }

    pub fn latest(&self) -> Option<&RunRecord> {
        self.latest.as_ref()
    }

    pub fn summary(&self) -> Option<RunSummary> {
        self.latest.as_ref().map(|r| r.result.summary())
    }

    /// Whether the held result was produced from the entered parameters
    pub fn is_current(&self) -> bool {
        self.latest
            .as_ref()
            .map(|r| r.result.matches(&self.parameters))
            .unwrap_or(false)
    }

    /// Run the engine synchronously with the entered parameters
    ///
    /// # Errors
    ///
    /// - `RunInProgress` if a ticket from [`Self::begin_run`] is outstanding
    /// - `Simulation` if the engine rejects the parameters; the previously
    ///   held result is left untouched
    pub fn run(&mut self) -> Result<&SimulationResult, SessionError> {
        if self.is_running() {
            return Err(SessionError::RunInProgress);
        }

        let ticket = self.begin_run();
        let outcome = simulate_with_limits(ticket.parameters(), &self.limits);
        match outcome {
            Ok(result) => {
                self.in_flight = None;
                info!(run = %ticket.id, frames = result.len(), "run completed");
                let record = self.latest.insert(RunRecord {
                    id: ticket.id,
                    result,
                });
                Ok(&record.result)
            }
            Err(e) => {
                self.abandon_run(&ticket);
                Err(e.into())
            }
        }
    }

    /// Start a run whose result is computed by the caller
    ///
    /// Issuing a new ticket supersedes any outstanding one.
    pub fn begin_run(&mut self) -> RunTicket {
        let id = RunId::generate();
        if let Some(previous) = self.in_flight.replace(id) {
            debug!(%previous, superseded_by = %id, "superseding in-flight run");
        }
        RunTicket {
            id,
            parameters: self.parameters,
        }
    }

    /// Hand back the result for `ticket`
    pub fn complete_run(&mut self, ticket: &RunTicket, result: SimulationResult) -> Completion {
        if self.in_flight != Some(ticket.id) {
            debug!(run = %ticket.id, "discarding stale result");
            return Completion::Stale;
        }

        self.in_flight = None;
        info!(run = %ticket.id, frames = result.len(), "run completed");
        self.latest = Some(RunRecord {
            id: ticket.id,
            result,
        });
        Completion::Accepted
    }

    /// Give up on `ticket` without installing a result
    pub fn abandon_run(&mut self, ticket: &RunTicket) {
        if self.in_flight == Some(ticket.id) {
            self.in_flight = None;
        }
    }

    /// Drop the held result, forget in-flight runs, restore default parameters
    pub fn reset(&mut self) {
        self.latest = None;
        self.in_flight = None;
        self.parameters = SimulationParameters::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_ids_are_unique() {
        let mut session = SimulationSession::new();
        let a = session.begin_run();
        let b = session.begin_run();
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_abandon_clears_running_flag() {
        let mut session = SimulationSession::new();
        let ticket = session.begin_run();
        assert!(session.is_running());
        session.abandon_run(&ticket);
        assert!(!session.is_running());
    }
}
