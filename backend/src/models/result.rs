//! Simulation result and the views derived from it
//!
//! A result is built once by the engine and never mutated afterwards. The
//! presentation layer reads it through [`SimulationResult::summary`] and
//! [`SimulationResult::chart_series`].

use crate::models::frame::Frame;
use crate::models::parameters::SimulationParameters;
use crate::models::summary::{ProjectStatus, RunSummary};
use serde::{Deserialize, Serialize};

/// Ordered, non-empty sequence of frames from one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationResult {
    parameters: SimulationParameters,
    parameters_hash: String,
    frames: Vec<Frame>,
}

impl SimulationResult {
    /// Wrap frames produced by the engine
    pub(crate) fn new(
        parameters: SimulationParameters,
        parameters_hash: String,
        frames: Vec<Frame>,
    ) -> Self {
        debug_assert!(!frames.is_empty(), "a result always has at least one frame");
        Self {
            parameters,
            parameters_hash,
            frames,
        }
    }

    /// All frames in chronological order
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Parameters that produced this result
    pub fn parameters(&self) -> &SimulationParameters {
        &self.parameters
    }

    /// SHA256 fingerprint of [`Self::parameters`]
    pub fn parameters_hash(&self) -> &str {
        &self.parameters_hash
    }

    /// Whether this result was produced from `params`
    pub fn matches(&self, params: &SimulationParameters) -> bool {
        params
            .fingerprint()
            .map(|hash| hash == self.parameters_hash)
            .unwrap_or(false)
    }

    /// First frame flagged as done
    pub fn completion_frame(&self) -> Option<&Frame> {
        self.frames.iter().find(|f| f.project_is_done)
    }

    /// Time of the first frame flagged as done
    pub fn completion_time(&self) -> Option<f64> {
        self.completion_frame().map(|f| f.time)
    }

    pub fn first(&self) -> Option<&Frame> {
        self.frames.first()
    }

    pub fn last(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Summary metrics shown next to the chart
    pub fn summary(&self) -> RunSummary {
        let (final_work_accomplished, final_work_remaining, done) = match self.last() {
            Some(f) => (f.work_accomplished, f.work_remaining, f.project_is_done),
            None => (0.0, self.parameters.initial_project_definition, false),
        };

        RunSummary {
            completion_time: self.completion_time(),
            final_work_accomplished,
            final_work_remaining,
            status: if done {
                ProjectStatus::Complete
            } else {
                ProjectStatus::InProgress
            },
        }
    }

    /// Split frames into per-axis series for plotting
    pub fn chart_series(&self) -> ChartSeries {
        let n = self.frames.len();
        let mut series = ChartSeries {
            time: Vec::with_capacity(n),
            work_accomplished: Vec::with_capacity(n),
            work_remaining: Vec::with_capacity(n),
            work_flow: Vec::with_capacity(n),
        };
        for f in &self.frames {
            series.time.push(f.time);
            series.work_accomplished.push(f.work_accomplished);
            series.work_remaining.push(f.work_remaining);
            series.work_flow.push(f.work_flow);
        }
        series
    }

    pub fn into_frames(self) -> Vec<Frame> {
        self.frames
    }
}

/// Which vertical scale a series is drawn against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Axis {
    /// Work stocks (drawings)
    Primary,
    /// Flow rate (drawings per month)
    Secondary,
}

/// Column-oriented view of a result
///
/// `time` is the horizontal axis. Work stocks share the primary scale and the
/// flow rate uses the secondary scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartSeries {
    pub time: Vec<f64>,
    pub work_accomplished: Vec<f64>,
    pub work_remaining: Vec<f64>,
    pub work_flow: Vec<f64>,
}

impl ChartSeries {
    /// Labelled datasets with their axis, in legend order
    pub fn datasets(&self) -> [(&'static str, Axis, &[f64]); 3] {
        [
            ("Work Accomplished", Axis::Primary, self.work_accomplished.as_slice()),
            ("Work Remaining", Axis::Primary, self.work_remaining.as_slice()),
            ("Work Flow Rate", Axis::Secondary, self.work_flow.as_slice()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(time: f64, accomplished: f64, done: bool) -> Frame {
        Frame {
            time,
            work_accomplished: accomplished,
            work_remaining: (10.0 - accomplished).max(0.0),
            work_flow: if done { 0.0 } else { 5.0 },
            project_is_done: done,
        }
    }

    fn result(frames: Vec<Frame>) -> SimulationResult {
        let params = SimulationParameters::new(10.0, 5.0, 3.0, 1.0);
        let hash = params.fingerprint().unwrap();
        SimulationResult::new(params, hash, frames)
    }

    #[test]
    fn test_summary_of_completed_run() {
        let r = result(vec![
            frame(0.0, 0.0, false),
            frame(1.0, 5.0, false),
            frame(2.0, 10.0, true),
            frame(3.0, 10.0, true),
        ]);
        let s = r.summary();
        assert_eq!(s.completion_time, Some(2.0));
        assert_eq!(s.final_work_accomplished, 10.0);
        assert_eq!(s.final_work_remaining, 0.0);
        assert_eq!(s.status, ProjectStatus::Complete);
    }

    #[test]
    fn test_summary_of_open_run() {
        let r = result(vec![frame(0.0, 0.0, false), frame(1.0, 5.0, false)]);
        let s = r.summary();
        assert_eq!(s.completion_time, None);
        assert_eq!(s.final_work_remaining, 5.0);
        assert_eq!(s.status, ProjectStatus::InProgress);
    }

    #[test]
    fn test_chart_series_columns_align() {
        let r = result(vec![frame(0.0, 0.0, false), frame(1.0, 5.0, false)]);
        let series = r.chart_series();
        assert_eq!(series.time, vec![0.0, 1.0]);
        assert_eq!(series.work_remaining, vec![10.0, 5.0]);

        let datasets = series.datasets();
        assert_eq!(datasets[2].0, "Work Flow Rate");
        assert_eq!(datasets[2].1, Axis::Secondary);
        assert_eq!(datasets[2].2, &[5.0, 5.0]);
    }

    #[test]
    fn test_matches_compares_fingerprints() {
        let r = result(vec![frame(0.0, 0.0, false)]);
        assert!(r.matches(&SimulationParameters::new(10.0, 5.0, 3.0, 1.0)));
        assert!(!r.matches(&SimulationParameters::default()));
    }
}
