//! Repository ports for projects and the records written alongside them.

use super::ProjectUnitOfWork;
use crate::project::{
    checklist::TaskRecord,
    domain::{
        DaoRevocation, KeyContacts, Note, NoteId, Project, ProjectId, ProjectState, TaskDataId,
    },
};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for project repository operations.
pub type ProjectRepositoryResult<T> = Result<T, ProjectRepositoryError>;

/// Project persistence contract.
#[async_trait]
pub trait ProjectRepository: Send + Sync {
    /// Stores a new project with its empty checklist record and key-contact
    /// record.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::DuplicateProject`] when the project
    /// identifier already exists.
    async fn create(
        &self,
        project: &Project,
        record: &TaskRecord,
        key_contacts: &KeyContacts,
    ) -> ProjectRepositoryResult<()>;

    /// Finds a project by identifier.
    ///
    /// Returns `None` when the project does not exist.
    async fn find_by_id(&self, id: ProjectId) -> ProjectRepositoryResult<Option<Project>>;

    /// Atomically applies a lifecycle transition and its side effects.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when the project does not
    /// exist, [`ProjectRepositoryError::StateConflict`] when it is no longer
    /// in the expected state, and [`ProjectRepositoryError::VersionConflict`]
    /// when anything else was committed since it was loaded. Nothing is
    /// written in any of these cases.
    async fn commit(&self, unit: &ProjectUnitOfWork) -> ProjectRepositoryResult<()>;
}

/// Checklist record persistence contract.
#[async_trait]
pub trait TaskDataRepository: Send + Sync {
    /// Finds a checklist record by identifier.
    ///
    /// Returns `None` when the record does not exist.
    async fn find(&self, id: TaskDataId) -> ProjectRepositoryResult<Option<TaskRecord>>;

    /// Replaces a checklist record and advances the owning project's
    /// version, so a commit validated against the old record fails.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::TaskDataNotFound`] when the record
    /// does not exist.
    async fn update(&self, id: TaskDataId, record: &TaskRecord) -> ProjectRepositoryResult<()>;
}

/// Key-contact persistence contract.
#[async_trait]
pub trait KeyContactRepository: Send + Sync {
    /// Finds the key contacts of a project.
    async fn find_by_project_id(
        &self,
        project_id: ProjectId,
    ) -> ProjectRepositoryResult<Option<KeyContacts>>;

    /// Replaces a project's key contacts and advances the project's version.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::KeyContactsNotFound`] when the
    /// project has no key-contact record.
    async fn update(&self, key_contacts: &KeyContacts) -> ProjectRepositoryResult<()>;
}

/// Audit note persistence contract. Notes are never updated or removed.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Appends a note and returns its identifier.
    ///
    /// # Errors
    ///
    /// Returns [`ProjectRepositoryError::NotFound`] when the project does not
    /// exist.
    async fn append(&self, note: &Note) -> ProjectRepositoryResult<NoteId>;

    /// Returns a project's notes, oldest first.
    async fn find_by_project(&self, project_id: ProjectId) -> ProjectRepositoryResult<Vec<Note>>;
}

/// DAO revocation lookup contract.
#[async_trait]
pub trait DaoRevocationRepository: Send + Sync {
    /// Finds the revocation recorded against a project.
    async fn find_by_project(
        &self,
        project_id: ProjectId,
    ) -> ProjectRepositoryResult<Option<DaoRevocation>>;
}

/// Every persistence port a project service needs, served by one store.
pub trait ProjectStore:
    ProjectRepository + TaskDataRepository + KeyContactRepository + NoteRepository + DaoRevocationRepository
{
}

impl<T> ProjectStore for T where
    T: ProjectRepository
        + TaskDataRepository
        + KeyContactRepository
        + NoteRepository
        + DaoRevocationRepository
{
}

/// Errors returned by project repository implementations.
#[derive(Debug, Clone, Error)]
pub enum ProjectRepositoryError {
    /// A project with the same identifier already exists.
    #[error("duplicate project identifier: {0}")]
    DuplicateProject(ProjectId),

    /// The project was not found.
    #[error("project not found: {0}")]
    NotFound(ProjectId),

    /// The checklist record was not found.
    #[error("task data not found: {0}")]
    TaskDataNotFound(TaskDataId),

    /// The project has no key-contact record.
    #[error("key contacts not found for project: {0}")]
    KeyContactsNotFound(ProjectId),

    /// The project left the expected state before the commit landed.
    #[error("project {project_id} is {actual}, expected {expected}")]
    StateConflict {
        /// Project being committed.
        project_id: ProjectId,
        /// State the commit was guarded on.
        expected: ProjectState,
        /// State found in the store.
        actual: ProjectState,
    },

    /// The project, its checklist or its key contacts changed after the
    /// project was loaded.
    #[error("project {project_id} is at version {actual}, expected {expected}")]
    VersionConflict {
        /// Project being committed.
        project_id: ProjectId,
        /// Version the commit was guarded on.
        expected: u64,
        /// Version found in the store.
        actual: u64,
    },

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ProjectRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Returns `true` when retrying the operation against fresh state may
    /// succeed.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::StateConflict { .. } | Self::VersionConflict { .. }
        )
    }
}
