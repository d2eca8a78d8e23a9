//! Atomic write set for one lifecycle transition.

use crate::project::{
    checklist::TaskRecord,
    domain::{DaoRevocation, KeyContacts, Note, Project, ProjectState},
};

/// Changes committed together by [`ProjectRepository::commit`].
///
/// The store applies the project update only while the stored project is
/// still in `expected_state` and at `expected_version`, and writes the
/// checklist record, key contacts, notes and revocation in the same
/// transaction. The committed project carries the next version.
///
/// [`ProjectRepository::commit`]: super::ProjectRepository::commit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectUnitOfWork {
    project: Project,
    expected_state: ProjectState,
    expected_version: u64,
    task_record: Option<TaskRecord>,
    key_contacts: Option<KeyContacts>,
    notes: Vec<Note>,
    revocation: Option<DaoRevocation>,
}

impl ProjectUnitOfWork {
    /// Starts a unit of work for `project`, guarded on `expected_state` and
    /// on the version the project was loaded at.
    #[must_use]
    pub const fn new(mut project: Project, expected_state: ProjectState) -> Self {
        let expected_version = project.version();
        project.advance_version();
        Self {
            project,
            expected_state,
            expected_version,
            task_record: None,
            key_contacts: None,
            notes: Vec::new(),
            revocation: None,
        }
    }

    /// Replaces the project's checklist record.
    #[must_use]
    pub fn with_task_record(mut self, record: TaskRecord) -> Self {
        self.task_record = Some(record);
        self
    }

    /// Replaces the project's key contacts.
    #[must_use]
    pub fn with_key_contacts(mut self, key_contacts: KeyContacts) -> Self {
        self.key_contacts = Some(key_contacts);
        self
    }

    /// Adds an audit note.
    #[must_use]
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Adds audit notes.
    #[must_use]
    pub fn with_notes(mut self, notes: impl IntoIterator<Item = Note>) -> Self {
        self.notes.extend(notes);
        self
    }

    /// Attaches a revocation record.
    #[must_use]
    pub fn with_revocation(mut self, revocation: DaoRevocation) -> Self {
        self.revocation = Some(revocation);
        self
    }

    /// Returns the updated project.
    #[must_use]
    pub const fn project(&self) -> &Project {
        &self.project
    }

    /// Returns the state the stored project must still be in.
    #[must_use]
    pub const fn expected_state(&self) -> ProjectState {
        self.expected_state
    }

    /// Returns the version the stored project must still be at.
    #[must_use]
    pub const fn expected_version(&self) -> u64 {
        self.expected_version
    }

    /// Returns the checklist record to write.
    #[must_use]
    pub const fn task_record(&self) -> Option<&TaskRecord> {
        self.task_record.as_ref()
    }

    /// Returns the key contacts to write.
    #[must_use]
    pub const fn key_contacts(&self) -> Option<&KeyContacts> {
        self.key_contacts.as_ref()
    }

    /// Returns the notes to append.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// Returns the revocation to insert.
    #[must_use]
    pub const fn revocation(&self) -> Option<&DaoRevocation> {
        self.revocation.as_ref()
    }

    /// Consumes the unit and returns the updated project.
    #[must_use]
    pub fn into_project(self) -> Project {
        self.project
    }
}
