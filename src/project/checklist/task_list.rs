//! Assembles the ordered checklist for a project.

use super::{
    Applicability, TaskIdentifier, TaskRecord, TaskStatus,
    definition::{CONVERSION_TASKS, TRANSFER_TASKS, TaskContext, TaskDefinition},
};
use crate::project::domain::{KeyContacts, Project, ProjectDomainError, ProjectType};
use serde::Serialize;

/// One row of a project's checklist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaskListEntry {
    /// Stable task identifier.
    pub identifier: TaskIdentifier,
    /// Label shown to caseworkers.
    pub label: &'static str,
    /// Current status.
    pub status: TaskStatus,
    /// Condition that put the task in this project's list.
    pub applicability: Applicability,
}

/// Ordered checklist of the tasks that apply to one project.
///
/// Completion validation and display both read this list, so a task hidden
/// from one is hidden from the other.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskList {
    project_type: ProjectType,
    entries: Vec<TaskListEntry>,
}

impl TaskList {
    /// Builds the checklist for `project` from its record and key contacts.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectDomainError::TaskDataTypeMismatch`] when the record's
    /// shape does not match the project type.
    pub fn for_project(
        project: &Project,
        record: &TaskRecord,
        key_contacts: &KeyContacts,
    ) -> Result<Self, ProjectDomainError> {
        let context = TaskContext {
            project,
            key_contacts,
        };
        let entries = match (project.project_type(), record) {
            (ProjectType::Conversion, TaskRecord::Conversion(data)) => {
                collect(CONVERSION_TASKS, &**data, &context)
            }
            (ProjectType::Transfer, TaskRecord::Transfer(data)) => {
                collect(TRANSFER_TASKS, &**data, &context)
            }
            (expected, _) => {
                return Err(ProjectDomainError::TaskDataTypeMismatch {
                    project_id: project.id(),
                    expected,
                    found: record.project_type(),
                });
            }
        };
        tracing::debug!(
            project_id = %project.id(),
            tasks = entries.len(),
            "assembled task list"
        );
        Ok(Self {
            project_type: project.project_type(),
            entries,
        })
    }

    /// Returns the project type the list was built for.
    #[must_use]
    pub const fn project_type(&self) -> ProjectType {
        self.project_type
    }

    /// Returns the entries in checklist order.
    #[must_use]
    pub fn entries(&self) -> &[TaskListEntry] {
        &self.entries
    }

    /// Returns an iterator over the entries in checklist order.
    pub fn iter(&self) -> std::slice::Iter<'_, TaskListEntry> {
        self.entries.iter()
    }

    /// Returns the entry for `identifier`, if the task applies.
    #[must_use]
    pub fn get(&self, identifier: TaskIdentifier) -> Option<&TaskListEntry> {
        self.entries
            .iter()
            .find(|entry| entry.identifier == identifier)
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a TaskListEntry;
    type IntoIter = std::slice::Iter<'a, TaskListEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

fn collect<T>(
    definitions: &[TaskDefinition<T>],
    data: &T,
    context: &TaskContext<'_>,
) -> Vec<TaskListEntry> {
    definitions
        .iter()
        .filter(|definition| definition.applicability.applies(context.project))
        .map(|definition| TaskListEntry {
            identifier: definition.identifier,
            label: definition.identifier.label(),
            status: (definition.status)(data, context),
            applicability: definition.applicability,
        })
        .collect()
}
