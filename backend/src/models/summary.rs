//! Summary metrics for a finished run

use serde::{Deserialize, Serialize};
use std::fmt;

/// Completion status of the last frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectStatus {
    Complete,
    InProgress,
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectStatus::Complete => write!(f, "Complete"),
            ProjectStatus::InProgress => write!(f, "In Progress"),
        }
    }
}

/// Metrics derived from a result
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    /// Time of the first done frame, `None` if the project never finished
    pub completion_time: Option<f64>,

    /// `workAccomplished` of the last frame
    pub final_work_accomplished: f64,

    /// `workRemaining` of the last frame
    pub final_work_remaining: f64,

    pub status: ProjectStatus,
}

impl RunSummary {
    pub fn is_complete(&self) -> bool {
        self.status == ProjectStatus::Complete
    }
}
