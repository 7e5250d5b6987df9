//! Run state of an export pipeline

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a single pipeline run
///
/// `Idle -> Running -> Succeeded | Failed`. A failed run is never resumed;
/// executing again starts from the first page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", tag = "state", content = "reason")]
pub enum PipelineState {
    /// No run has started yet
    #[default]
    Idle,
    /// Fetcher and writer are running
    Running,
    /// Every page was fetched and written
    Succeeded,
    /// The run stopped on its first error
    Failed(String),
}

impl PipelineState {
    /// True once the run has reached `Succeeded` or `Failed`
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed(_))
    }
}

impl fmt::Display for PipelineState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Running => write!(f, "running"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed(reason) => write!(f, "failed: {reason}"),
        }
    }
}
