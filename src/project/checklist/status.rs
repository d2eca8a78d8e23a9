//! Per-task status evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Status of one checklist task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// The task was marked as not applicable to the project.
    NotApplicable,
    /// Nothing required by the task has been done.
    NotStarted,
    /// Some, but not all, of the task's requirements are met.
    InProgress,
    /// Every requirement of the task is met.
    Complete,
}

impl TaskStatus {
    /// Maps a task's tally to a status.
    ///
    /// The not-applicable flag wins over any recorded progress.
    #[must_use]
    pub const fn evaluate(not_applicable: bool, requirements: Requirements) -> Self {
        if not_applicable {
            Self::NotApplicable
        } else if requirements.met == 0 {
            Self::NotStarted
        } else if requirements.met == requirements.total {
            Self::Complete
        } else {
            Self::InProgress
        }
    }

    /// Status of a task that only asks for a reference to be chosen.
    #[must_use]
    pub const fn reference<T>(reference: &Option<T>) -> Self {
        Self::evaluate(false, Requirements::new().value(reference))
    }

    /// Returns `true` when the task does not block completion.
    #[must_use]
    pub const fn is_settled(self) -> bool {
        matches!(self, Self::Complete | Self::NotApplicable)
    }

    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotApplicable => "not_applicable",
            Self::NotStarted => "not_started",
            Self::InProgress => "in_progress",
            Self::Complete => "complete",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

/// Tally of a task's requirements and how many of them are met.
///
/// ```
/// use casework::project::checklist::{Requirements, TaskStatus};
///
/// let tally = Requirements::new().step(true).step(false).text(Some("  "));
/// assert_eq!(tally.met(), 1);
/// assert_eq!(TaskStatus::evaluate(false, tally), TaskStatus::InProgress);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Requirements {
    total: usize,
    met: usize,
}

impl Requirements {
    /// Starts an empty tally.
    #[must_use]
    pub const fn new() -> Self {
        Self { total: 0, met: 0 }
    }

    /// Counts a step flag.
    #[must_use]
    pub const fn step(self, done: bool) -> Self {
        Self {
            total: self.total + 1,
            met: self.met + if done { 1 } else { 0 },
        }
    }

    /// Counts a supporting value that must be present.
    #[must_use]
    pub const fn value<T>(self, value: &Option<T>) -> Self {
        self.step(value.is_some())
    }

    /// Counts a supporting text field that must be non-blank.
    #[must_use]
    pub fn text(self, value: Option<&str>) -> Self {
        self.step(value.is_some_and(|text| !text.trim().is_empty()))
    }

    /// Counts the requirements added by `add` only when `condition` holds.
    #[must_use]
    pub fn when(self, condition: bool, add: impl FnOnce(Self) -> Self) -> Self {
        if condition { add(self) } else { self }
    }

    /// Returns the number of requirements counted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Returns the number of requirements met.
    #[must_use]
    pub const fn met(&self) -> usize {
        self.met
    }
}
