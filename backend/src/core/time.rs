//! Time management for the simulation
//!
//! The simulation advances in fixed steps of `dt`. The clock accumulates
//! `elapsed += dt` on every step rather than recomputing `steps * dt`, so the
//! loop bound observes the same accumulated value on every platform.

use serde::{Deserialize, Serialize};

/// Fixed-step simulation clock
///
/// # Example
/// ```
/// use project_simulator_core_rs::SimulationClock;
///
/// let mut clock = SimulationClock::new(0.5);
/// assert_eq!(clock.elapsed(), 0.0);
/// assert_eq!(clock.steps(), 0);
///
/// clock.advance();
/// assert_eq!(clock.elapsed(), 0.5);
/// assert_eq!(clock.steps(), 1);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationClock {
    /// Accumulated simulation time
    elapsed: f64,
    /// Number of steps taken since start
    steps: usize,
    /// Fixed integration step
    dt: f64,
}

impl SimulationClock {
    /// Create a new clock at time zero
    ///
    /// # Arguments
    /// * `dt` - Fixed integration step, must be finite and positive
    ///
    /// # Example
    /// ```
    /// use project_simulator_core_rs::SimulationClock;
    ///
    /// let clock = SimulationClock::new(0.1);
    /// assert_eq!(clock.dt(), 0.1);
    /// ```
    pub fn new(dt: f64) -> Self {
        assert!(dt.is_finite() && dt > 0.0, "dt must be positive");
        Self {
            elapsed: 0.0,
            steps: 0,
            dt,
        }
    }

    /// Advance time by one step
    ///
    /// # Example
    /// ```
    /// use project_simulator_core_rs::SimulationClock;
    ///
    /// let mut clock = SimulationClock::new(1.0);
    /// clock.advance();
    /// clock.advance();
    /// assert_eq!(clock.elapsed(), 2.0);
    /// ```
    pub fn advance(&mut self) {
        self.elapsed += self.dt;
        self.steps += 1;
    }

    /// Accumulated simulation time
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Number of steps taken since start
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Fixed integration step
    pub fn dt(&self) -> f64 {
        self.dt
    }

    /// Check whether the clock is still inside the horizon (inclusive)
    ///
    /// # Example
    /// ```
    /// use project_simulator_core_rs::SimulationClock;
    ///
    /// let mut clock = SimulationClock::new(1.0);
    /// assert!(clock.is_within(1.0));
    /// clock.advance();
    /// assert!(clock.is_within(1.0));
    /// clock.advance();
    /// assert!(!clock.is_within(1.0));
    /// ```
    pub fn is_within(&self, horizon: f64) -> bool {
        self.elapsed <= horizon
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[should_panic(expected = "dt must be positive")]
    fn test_zero_dt_panics() {
        SimulationClock::new(0.0);
    }

    #[test]
    #[should_panic(expected = "dt must be positive")]
    fn test_nan_dt_panics() {
        SimulationClock::new(f64::NAN);
    }
}
