//! Completion validation over an assembled checklist.

use super::{TaskIdentifier, TaskListEntry};
use crate::project::domain::{Project, ProjectType};
use chrono::NaiveDate;
use std::fmt;

/// A reason a project cannot be completed yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompletionBlocker {
    /// A task is neither complete nor marked not applicable.
    IncompleteTask {
        /// Task identifier.
        identifier: TaskIdentifier,
        /// Task label.
        label: &'static str,
    },
    /// The conversion or transfer date has not been set.
    SignificantDateMissing(ProjectType),
    /// The conversion or transfer date is still provisional.
    SignificantDateProvisional(ProjectType),
}

impl fmt::Display for CompletionBlocker {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteTask { label, .. } => {
                write!(formatter, "The {label} task must be completed")
            }
            Self::SignificantDateMissing(project_type) => {
                write!(formatter, "The {project_type} date must be set")
            }
            Self::SignificantDateProvisional(project_type) => {
                write!(formatter, "The {project_type} date must be confirmed")
            }
        }
    }
}

/// Outcome of checking whether a project may be completed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompletionValidation {
    blockers: Vec<CompletionBlocker>,
}

impl CompletionValidation {
    /// Checks the checklist entries and the significant date.
    ///
    /// Blockers are ordered: unsettled tasks in checklist order, then a
    /// missing date, then a provisional date. A missing date that is also
    /// flagged provisional yields both date blockers.
    #[must_use]
    pub fn evaluate<'a, I>(
        tasks: I,
        project_type: ProjectType,
        significant_date: Option<NaiveDate>,
        significant_date_provisional: bool,
    ) -> Self
    where
        I: IntoIterator<Item = &'a TaskListEntry>,
    {
        let mut blockers: Vec<CompletionBlocker> = tasks
            .into_iter()
            .filter(|entry| !entry.status.is_settled())
            .map(|entry| CompletionBlocker::IncompleteTask {
                identifier: entry.identifier,
                label: entry.label,
            })
            .collect();
        if significant_date.is_none() {
            blockers.push(CompletionBlocker::SignificantDateMissing(project_type));
        }
        if significant_date_provisional {
            blockers.push(CompletionBlocker::SignificantDateProvisional(project_type));
        }
        Self { blockers }
    }

    /// Checks `tasks` against the date fields of `project`.
    #[must_use]
    pub fn for_project<'a, I>(project: &Project, tasks: I) -> Self
    where
        I: IntoIterator<Item = &'a TaskListEntry>,
    {
        Self::evaluate(
            tasks,
            project.project_type(),
            project.significant_date(),
            project.significant_date_provisional(),
        )
    }

    /// Returns `true` when nothing blocks completion.
    #[must_use]
    pub const fn is_eligible(&self) -> bool {
        self.blockers.is_empty()
    }

    /// Returns the blockers in order.
    #[must_use]
    pub fn blockers(&self) -> &[CompletionBlocker] {
        &self.blockers
    }

    /// Renders the blockers as caseworker-facing messages.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.blockers.iter().map(ToString::to_string).collect()
    }
}
